//! File-backed preference group.
//!
//! A group named `preferencias` in directory `data` lives at
//! `data/preferencias.json` as a flat JSON object of string values. Each
//! commit is written to `preferencias.json.tmp`, synced, then renamed over
//! the target, so a crash mid-commit leaves the previous file intact.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{KeyValueStore, Preferences};
use crate::error::Result;

pub struct FileStore {
    path: PathBuf,
    // Last committed state; `None` until the file is first read.
    cache: Mutex<Option<Preferences>>,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{name}.json")),
            cache: Mutex::new(None),
        }
    }

    /// Creates `dir` if needed and reads the current group state.
    pub async fn open(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        fs::create_dir_all(dir.as_ref()).await?;
        let store = Self::new(dir, name);
        {
            let mut cache = store.cache.lock().await;
            *cache = Some(store.read_disk().await?);
        }
        log::debug!("opened preference group at {}", store.path.display());
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn read_disk(&self) -> Result<Preferences> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Preferences::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_disk(&self, preferences: &Preferences) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(preferences)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        let mut file = fs::File::create(&temp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    async fn snapshot(&self) -> Result<Preferences> {
        let mut cache = self.cache.lock().await;
        match cache.as_ref() {
            Some(preferences) => Ok(preferences.clone()),
            None => {
                let preferences = self.read_disk().await?;
                *cache = Some(preferences.clone());
                Ok(preferences)
            }
        }
    }

    async fn edit<F>(&self, transform: F) -> Result<()>
    where
        F: FnOnce(&mut Preferences) + Send,
    {
        let mut cache = self.cache.lock().await;
        let mut next = match cache.as_ref() {
            Some(preferences) => preferences.clone(),
            None => self.read_disk().await?,
        };
        transform(&mut next);

        if let Err(e) = self.write_disk(&next).await {
            log::warn!("commit to {} failed: {}", self.path.display(), e);
            return Err(e);
        }

        log::debug!("committed {} entries to {}", next.len(), self.path.display());
        *cache = Some(next);
        Ok(())
    }
}
