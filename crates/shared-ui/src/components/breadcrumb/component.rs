use dioxus::prelude::*;

/// Page title with a "Dashboard / {page_name}" trail.
#[component]
pub fn Breadcrumb(page_name: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "breadcrumb",
            h2 { class: "breadcrumb-title", "{page_name}" }
            nav {
                ol { class: "breadcrumb-trail",
                    li {
                        Link { to: "/", class: "breadcrumb-link", "Dashboard /" }
                    }
                    li { class: "breadcrumb-current", "{page_name}" }
                }
            }
        }
    }
}
