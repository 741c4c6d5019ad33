//! Browser `localStorage` backend for the persisted identity.
//!
//! Storage that is missing or throws (private mode, quota) behaves like an
//! empty store on read and reports a `StorageError` on write.

use booking::{IdentityStorage, StorageError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl IdentityStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()
                .ok_or_else(unavailable)?
                .set_item(key, value)
                .map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()
                .ok_or_else(unavailable)?
                .remove_item(key)
                .map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn unavailable() -> StorageError {
    StorageError("localStorage unavailable".to_owned())
}

#[cfg(feature = "csr")]
fn js_error(error: wasm_bindgen::JsValue) -> StorageError {
    StorageError(format!("{error:?}"))
}
