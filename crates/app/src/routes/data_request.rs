use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_ui::Breadcrumb;

/// Data Request page: an empty state inviting the first request.
#[component]
pub fn DataRequestPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./data_request.css") }

        Breadcrumb { page_name: "Data Request".to_string() }

        div { class: "data-request-page",
            div { class: "data-request-card",
                div { class: "data-request-plus",
                    Icon::<LdPlus> { icon: LdPlus, width: 24, height: 24 }
                }
                span { class: "data-request-label",
                    "Create new data request"
                }
            }
        }
    }
}
