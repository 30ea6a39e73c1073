use dioxus::prelude::*;
use shared_ui::Breadcrumb;

/// Stand-in for template pages that have no content yet.
#[component]
pub fn Placeholder(title: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./placeholder.css") }

        Breadcrumb { page_name: title.clone() }
        div { class: "placeholder-card",
            p { class: "placeholder-message",
                "{title} has no content yet."
            }
        }
    }
}
