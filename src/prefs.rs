use crate::error::Result;
use crate::record::{format_record, PersonRecord, RECORD_KEYS};
use crate::store::KeyValueStore;

/// Single-record persistence over a [`KeyValueStore`].
///
/// The store holds at most one record. `save` overwrites all four keys in
/// one transaction and `clear` removes them in one transaction. Store errors
/// are returned unchanged.
pub struct PreferenceRecordStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceRecordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub async fn save(&self, record: &PersonRecord) -> Result<()> {
        let entries = record.entries();
        self.store
            .edit(move |prefs| {
                for (key, value) in entries {
                    prefs.set(key, value);
                }
            })
            .await?;
        log::debug!("saved record id={:?}", record.id);
        Ok(())
    }

    /// Returns the formatted record, or `None` if nothing is stored.
    pub async fn load(&self) -> Result<Option<String>> {
        let prefs = self.store.snapshot().await?;
        Ok(format_record(&prefs))
    }

    pub async fn clear(&self) -> Result<()> {
        self.store
            .edit(|prefs| {
                for key in RECORD_KEYS {
                    prefs.remove(key);
                }
            })
            .await?;
        log::debug!("cleared record");
        Ok(())
    }
}
