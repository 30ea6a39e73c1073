//! Persistent storage for the sidebar flag.
//!
//! On the web this is `localStorage`. Native targets keep the value in
//! memory for the lifetime of the process.

use shared_types::{AppError, FlagStore};

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static FALLBACK: shared_types::MemoryStore = shared_types::MemoryStore::new();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, AppError> {
    let window =
        web_sys::window().ok_or_else(|| AppError::storage_unavailable("no window object"))?;
    window
        .local_storage()
        .map_err(|err| AppError::storage_unavailable(format!("{err:?}")))?
        .ok_or_else(|| AppError::storage_unavailable("localStorage is disabled"))
}

impl FlagStore for AppStore {
    #[cfg(target_arch = "wasm32")]
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| AppError::storage_unavailable(format!("{err:?}")))
    }

    #[cfg(target_arch = "wasm32")]
    fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| AppError::storage_unavailable(format!("{err:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        FALLBACK.with(|store| store.load(key))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        FALLBACK.with(|store| store.store(key, value))
    }
}
