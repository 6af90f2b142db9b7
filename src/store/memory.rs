use tokio::sync::RwLock;

use super::{KeyValueStore, Preferences};
use crate::error::Result;

/// In-memory engine. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Preferences>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            data: RwLock::new(preferences),
        }
    }
}

impl KeyValueStore for MemoryStore {
    async fn snapshot(&self) -> Result<Preferences> {
        let data = self.data.read().await;
        Ok(data.clone())
    }

    async fn edit<F>(&self, transform: F) -> Result<()>
    where
        F: FnOnce(&mut Preferences) + Send,
    {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        transform(&mut next);
        *data = next;
        log::debug!("memory store committed {} entries", data.len());
        Ok(())
    }
}
