use dioxus::prelude::*;
use shared_ui::Breadcrumb;

use crate::routes::{page_title, Route};

/// Shown for any path the menu does not lead to.
#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        Breadcrumb { page_name: page_title(&path).to_string() }

        div { class: "missing-card",
            span { class: "missing-status", "404" }
            p { class: "missing-message",
                "No menu entry leads to "
                code { class: "missing-path", "{path}" }
                "."
            }
            Link { to: Route::Home {}, class: "missing-home", "Go to eCommerce" }
        }
    }
}
