pub mod config;
pub mod error;

// Navigation model
pub mod menu;
pub mod menu_tree;
pub mod persist;
pub mod sidebar;

pub use config::*;
pub use error::*;
pub use menu::*;
pub use menu_tree::MENU;
pub use persist::*;
pub use sidebar::*;
