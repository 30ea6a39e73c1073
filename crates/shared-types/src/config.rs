use serde::{Deserialize, Serialize};

use crate::AppError;

/// Sidebar settings.
///
/// Loaded from the `[sidebar]` table of `config.toml`. Every field has a
/// default so that a missing or partial table still yields a working
/// sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SidebarConfig {
    /// Storage key holding `"true"`/`"false"` for the expanded section.
    pub storage_key: String,
    /// Class toggled on `<body>` while the section is expanded.
    pub expanded_flag: String,
    /// DOM id of the sidebar panel.
    pub panel_id: String,
    /// DOM id of the control that opens the panel.
    pub trigger_id: String,
    /// Text shown by version badges.
    pub version_label: String,
    /// Number shown by counter badges.
    pub message_count: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            storage_key: "sidebar-expanded".to_string(),
            expanded_flag: "sidebar-expanded".to_string(),
            panel_id: "sidebar".to_string(),
            trigger_id: "sidebar-trigger".to_string(),
            version_label: "Pro".to_string(),
            message_count: 5,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

impl AppConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(src)?)
    }
}
