pub mod config;
pub mod error;
pub mod prefs;
pub mod record;
pub mod store;

use error::Result;
use prefs::PreferenceRecordStore;
use record::PersonRecord;
use store::KeyValueStore;

pub const STORED_TITLE: &str = "Datos Almacenados";
pub const NOTHING_STORED: &str = "No hay datos almacenados";
pub const SAVED: &str = "Datos guardados";
pub const DELETED: &str = "Datos borrados";

/// One user action against the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Save(PersonRecord),
    Read,
    Delete,
}

impl Command {
    /// Runs the action and returns the message to show the user.
    pub async fn execute<S: KeyValueStore>(&self, records: &PreferenceRecordStore<S>) -> Result<String> {
        Ok(match self {
            Command::Save(record) => {
                records.save(record).await?;
                SAVED.to_string()
            }
            Command::Read => match records.load().await? {
                Some(text) => format!("{}\n{}", STORED_TITLE, text),
                None => NOTHING_STORED.to_string(),
            },
            Command::Delete => {
                records.clear().await?;
                DELETED.to_string()
            }
        })
    }
}
