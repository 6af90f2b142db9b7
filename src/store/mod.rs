use std::future::Future;
use std::sync::Arc;

use crate::error::Result;

pub mod file;
pub mod memory;
pub mod preferences;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use preferences::Preferences;

/// An asynchronous, transactional string map.
///
/// `edit` is all-or-nothing: the transform runs against a private copy of
/// the current state and that copy becomes visible only once the engine has
/// committed it. If the commit fails the previous state is left in place.
pub trait KeyValueStore: Send + Sync {
    /// Reads every key/value pair as of the last committed edit.
    fn snapshot(&self) -> impl Future<Output = Result<Preferences>> + Send;

    /// Applies `transform` and commits the result atomically.
    fn edit<F>(&self, transform: F) -> impl Future<Output = Result<()>> + Send
    where
        F: FnOnce(&mut Preferences) + Send;
}

impl<S: KeyValueStore> KeyValueStore for Arc<S> {
    fn snapshot(&self) -> impl Future<Output = Result<Preferences>> + Send {
        (**self).snapshot()
    }

    fn edit<F>(&self, transform: F) -> impl Future<Output = Result<()>> + Send
    where
        F: FnOnce(&mut Preferences) + Send,
    {
        (**self).edit(transform)
    }
}
