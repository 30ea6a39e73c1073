// Standalone components
pub mod badge;
pub mod breadcrumb;

// Depends on badge styling and shared-types sidebar state
pub mod sidebar;

// Re-exports for convenience
pub use badge::*;
pub use breadcrumb::*;
pub use sidebar::*;
