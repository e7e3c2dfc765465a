use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    fmt::Debug,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::persistence::{Persistable, Persistence};

#[derive(Debug)]
struct MemoryStore<Model> {
    models: BTreeMap<i64, Model>,
    /// None once every id up to i64::MAX has been handed out or taken.
    next_id: Option<i64>,
}

#[derive(Debug)]
pub struct MemoryPersistence<Model>
where
    Model: Persistable<Model>,
{
    store: Arc<Mutex<MemoryStore<Model>>>,
}

#[async_trait]
impl<Model> Persistence<Model> for MemoryPersistence<Model>
where
    Model: Persistable<Model> + 'static,
{
    async fn upsert(&self, model: &Model) -> anyhow::Result<Model> {
        let mut locked_store = self.get_store_locked()?;

        let (model_id, model) = match model.get_id() {
            Some(model_id) => {
                // generated ids must never land on an explicitly chosen one
                locked_store.next_id = match (locked_store.next_id, model_id.checked_add(1)) {
                    (Some(next_id), Some(after_model_id)) => Some(next_id.max(after_model_id)),
                    _ => None,
                };
                (model_id, model.clone())
            }
            None => {
                let model_id = locked_store
                    .next_id
                    .ok_or_else(|| anyhow::anyhow!("id space exhausted"))?;

                if locked_store.models.contains_key(&model_id) {
                    return Err(anyhow::anyhow!("generated id {model_id} is already taken"));
                }

                locked_store.next_id = model_id.checked_add(1);
                (model_id, model.clone().with_id(model_id))
            }
        };

        locked_store.models.insert(model_id, model.clone());

        Ok(model)
    }

    async fn list(&self) -> anyhow::Result<Vec<Model>> {
        self.filter(|_| true)
    }
}

impl<Model> Default for MemoryPersistence<Model>
where
    Model: Persistable<Model>,
{
    fn default() -> Self {
        Self {
            store: Arc::new(Mutex::new(MemoryStore {
                models: BTreeMap::new(),
                next_id: Some(1),
            })),
        }
    }
}

impl<Model> MemoryPersistence<Model>
where
    Model: Persistable<Model>,
{
    /// Stored models matching `predicate`, in ascending id order.
    pub fn filter<F>(&self, predicate: F) -> anyhow::Result<Vec<Model>>
    where
        F: Fn(&Model) -> bool,
    {
        let locked_store = self.get_store_locked()?;

        let models = locked_store
            .models
            .values()
            .filter(|model| predicate(model))
            .cloned()
            .collect();

        Ok(models)
    }

    fn get_store_locked(&self) -> anyhow::Result<MutexGuard<MemoryStore<Model>>> {
        match self.store.lock() {
            Ok(locked_store) => Ok(locked_store),
            Err(_) => Err(anyhow::anyhow!("failed to acquire lock")),
        }
    }
}
