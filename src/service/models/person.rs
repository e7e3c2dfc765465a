use helloworld_core::PersonMessage;

use crate::persistence::Persistable;

#[derive(Clone, Debug, Default, Eq, PartialEq, sqlx::FromRow)]
pub struct Person {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
            email: email.to_owned(),
        }
    }
}

impl Persistable<Person> for Person {
    fn get_id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: i64) -> Person {
        Person {
            id: Some(id),
            ..self
        }
    }
}

impl From<Person> for PersonMessage {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            email: person.email,
        }
    }
}

impl From<PersonMessage> for Person {
    fn from(person: PersonMessage) -> Self {
        Self {
            id: person.id,
            name: person.name,
            email: person.email,
        }
    }
}
