#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use thiserror::Error;
use web_sys::window;

use crate::config;
use crate::form::state::FormState;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read stored form: {0}")]
    Read(String),
    #[error("failed to write stored form: {0}")]
    Write(String),
    #[error("failed to serialize form state: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored form state is malformed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Durable home for the in-progress form.
pub trait FormStorage {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<FormState>, StorageError>;
    fn save(&self, state: &FormState) -> Result<(), StorageError>;
}

pub fn encode(state: &FormState) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(StorageError::Serialize)
}

pub fn decode(raw: &str) -> Result<FormState, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Deserialize)
}

/// Browser `localStorage`, keyed by `config::STORAGE_KEY`.
#[derive(Clone, Debug, Default)]
pub struct LocalFormStorage;

impl LocalFormStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl FormStorage for LocalFormStorage {
    fn load(&self) -> Result<Option<FormState>, StorageError> {
        let raw = self
            .storage()?
            .get_item(config::STORAGE_KEY)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?;
        raw.as_deref().map(decode).transpose()
    }

    fn save(&self, state: &FormState) -> Result<(), StorageError> {
        let raw = encode(state)?;
        self.storage()?
            .set_item(config::STORAGE_KEY, &raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory stand-in holding the same JSON blob localStorage would.
/// Clones share the blob, so a second store can "reload" what the first saved.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryFormStorage {
    blob: Rc<RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryFormStorage {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(raw.to_string()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

#[cfg(test)]
impl FormStorage for MemoryFormStorage {
    fn load(&self) -> Result<Option<FormState>, StorageError> {
        self.blob.borrow().as_deref().map(decode).transpose()
    }

    fn save(&self, state: &FormState) -> Result<(), StorageError> {
        let raw = encode(state)?;
        *self.blob.borrow_mut() = Some(raw);
        Ok(())
    }
}
