//! localStorage backend for the form snapshot

use legal_toolkit_core::{SnapshotError, SnapshotStore};
use wasm_bindgen::JsValue;

/// Snapshot store keyed by a single localStorage entry
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        window.local_storage()?.ok_or_else(|| "No localStorage".into())
    }
}

impl SnapshotStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        match Self::storage().and_then(|storage| storage.get_item(&self.key)) {
            Ok(saved) => saved,
            Err(err) => {
                web_sys::console::warn_2(&"Failed to read saved state".into(), &err);
                None
            }
        }
    }

    fn save(&mut self, snapshot: &str) -> Result<(), SnapshotError> {
        Self::storage()
            .and_then(|storage| storage.set_item(&self.key, snapshot))
            .map_err(|err| SnapshotError::Storage(describe(&err)))
    }
}

/// Readable text for a thrown JS value (quota errors arrive as DOMException)
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
