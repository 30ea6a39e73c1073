use dioxus::prelude::*;
use shared_types::PresentationRoot;

/// Presentation root backed by the class list of `<body>`.
///
/// Layout rules elsewhere key off these classes (e.g. `sidebar-expanded`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyClassRoot;

impl PresentationRoot for BodyClassRoot {
    fn set_flag(&self, name: &str, on: bool) {
        document::eval(&toggle_script(name, on));
    }
}

/// Script that adds or removes `name` on `<body>`.
fn toggle_script(name: &str, on: bool) -> String {
    let name = css_token(name);
    let method = if on { "add" } else { "remove" };
    format!(
        r#"
        (function() {{
            var body = document.querySelector('body');
            if (body) {{ body.classList.{method}('{name}'); }}
        }})();
        "#,
    )
}

/// Strip everything but `[A-Za-z0-9_-]` so a token can be spliced into a script.
pub fn css_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}
