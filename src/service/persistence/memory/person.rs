use async_trait::async_trait;

use super::MemoryPersistence;
use crate::models::Person;
use crate::persistence::PersonPersistence;

#[async_trait]
impl PersonPersistence for MemoryPersistence<Person> {
    async fn get_by_name(&self, name: &str) -> anyhow::Result<Vec<Person>> {
        self.filter(|person| person.name == name)
    }

    async fn get_by_name_ignore_case(&self, name: &str) -> anyhow::Result<Vec<Person>> {
        let name = name.to_lowercase();

        self.filter(|person| person.name.to_lowercase() == name)
    }

    async fn search_by_name(&self, fragment: &str) -> anyhow::Result<Vec<Person>> {
        let fragment = fragment.to_lowercase();

        self.filter(|person| person.name.to_lowercase().contains(&fragment))
    }
}
