use crate::{models::Person, persistence::PersonPersistence};

/// Name based retrieval and persistence of persons. Every operation forwards
/// to the persistence it was built with; storage errors are returned as-is.
#[derive(Debug)]
pub struct PersonService {
    pub persistence: Box<dyn PersonPersistence>,
}

impl PersonService {
    pub fn new(persistence: Box<dyn PersonPersistence>) -> Self {
        PersonService { persistence }
    }

    #[tracing::instrument(name = "service::person::list", skip(self))]
    pub async fn list(&self) -> anyhow::Result<Vec<Person>> {
        self.persistence.list().await
    }

    #[tracing::instrument(name = "service::person::get_by_name", skip(self))]
    pub async fn get_by_name(&self, name: &str) -> anyhow::Result<Vec<Person>> {
        self.persistence.get_by_name(name).await
    }

    #[tracing::instrument(name = "service::person::get_by_name_ignore_case", skip(self))]
    pub async fn get_by_name_ignore_case(&self, name: &str) -> anyhow::Result<Vec<Person>> {
        self.persistence.get_by_name_ignore_case(name).await
    }

    #[tracing::instrument(name = "service::person::search_by_name", skip(self))]
    pub async fn search_by_name(&self, fragment: &str) -> anyhow::Result<Vec<Person>> {
        self.persistence.search_by_name(fragment).await
    }

    #[tracing::instrument(name = "service::person::upsert", skip(self))]
    pub async fn upsert(&self, person: &Person) -> anyhow::Result<Person> {
        let person = self.persistence.upsert(person).await?;

        tracing::info!("person upserted: {:?}", person);

        Ok(person)
    }
}
