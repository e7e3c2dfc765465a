use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::Person;

pub mod memory;
pub mod relational;

/// Storage operations shared by every model.
#[async_trait]
pub trait Persistence<Model>: Debug + Send + Sync {
    /// Inserts `model` when it has no id, assigning a fresh one, otherwise
    /// writes it under its existing id. Returns the stored model.
    async fn upsert(&self, model: &Model) -> anyhow::Result<Model>;

    /// All stored models in ascending id order.
    async fn list(&self) -> anyhow::Result<Vec<Model>>;
}

pub trait Persistable<Model>: Clone + Debug + Send + Sync {
    fn get_id(&self) -> Option<i64>;
    fn with_id(self, id: i64) -> Model;
}

/// Name lookups over stored persons. Results are in ascending id order and
/// case folding is plain lowercasing on both sides.
#[async_trait]
pub trait PersonPersistence: Persistence<Person> {
    async fn get_by_name(&self, name: &str) -> anyhow::Result<Vec<Person>>;
    async fn get_by_name_ignore_case(&self, name: &str) -> anyhow::Result<Vec<Person>>;
    async fn search_by_name(&self, fragment: &str) -> anyhow::Result<Vec<Person>>;
}
