pub mod components;
pub mod presentation;

pub use components::*;
pub use presentation::{css_token, BodyClassRoot};
