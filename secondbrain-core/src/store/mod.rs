//! Synchronous key-value string store.
//!
//! Every page of the dashboard persists its state as JSON text under its own
//! keys. [`Store`] is the port; [`load_json`] and [`save_json`] are the JSON
//! codec at its boundary.

mod file;
pub mod keys;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreResult;

/// A key-value store of strings, persisted across sessions.
pub trait Store {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> CoreResult<()>;
    fn remove(&mut self, key: &str) -> CoreResult<()>;
}

/// Read and decode the value at `key`.
///
/// A missing, empty or malformed value yields `T::default()`.
pub fn load_json<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Store + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return T::default(),
        Err(e) => {
            log::warn!("Could not read '{}' from store: {}", key, e);
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring malformed value at '{}': {}", key, e);
            T::default()
        }
    }
}

/// Encode `value` as JSON and write it at `key`.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> CoreResult<()>
where
    T: Serialize + ?Sized,
    S: Store + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}
