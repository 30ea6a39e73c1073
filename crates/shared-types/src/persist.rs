//! Mirrors the expanded-section flag into storage and onto the document.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::{AppError, SidebarConfig};

/// String-keyed persistent storage (browser `localStorage` in the app).
pub trait FlagStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError>;
    fn store(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Root presentation context whose named flags drive layout rules
/// (the class list of `<body>` in the app).
pub trait PresentationRoot {
    fn set_flag(&self, name: &str, on: bool);
}

/// In-process store, used off the web and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl FlagStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.get(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Parse a stored flag. Only the exact string `"true"` counts as set.
pub fn parse_expanded(raw: Option<&str>) -> bool {
    matches!(raw, Some("true"))
}

/// Read the expanded-section flag. Never fails: storage faults and
/// unparseable values read as `false`.
pub fn load_expanded(store: &impl FlagStore, config: &SidebarConfig) -> bool {
    match store.load(&config.storage_key) {
        Ok(raw) => parse_expanded(raw.as_deref()),
        Err(err) => {
            tracing::warn!(key = %config.storage_key, error = %err, "sidebar flag unreadable, using default");
            false
        }
    }
}

/// Write `expanded` to storage and reflect it on the presentation root.
pub fn synchronize(
    store: &impl FlagStore,
    root: &impl PresentationRoot,
    config: &SidebarConfig,
    expanded: bool,
) {
    let value = if expanded { "true" } else { "false" };
    if let Err(err) = store.store(&config.storage_key, value) {
        tracing::warn!(key = %config.storage_key, error = %err, "sidebar flag not persisted");
    }
    root.set_flag(&config.expanded_flag, expanded);
    tracing::debug!(expanded, "sidebar section synchronized");
}
