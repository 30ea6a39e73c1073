pub mod data_request;
pub mod not_found;
pub mod placeholder;

use crate::components::AppSidebar;
use crate::Shell;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_types::{find_by_path, AppConfig, MENU};
use shared_ui::{SidebarInset, SidebarProvider, SidebarTrigger};

use data_request::DataRequestPage;
use not_found::NotFound;
use placeholder::Placeholder;

/// Application routes.
///
/// Only pages with content of their own get a variant; every other menu
/// path lands on [`Route::MenuPage`] and is resolved against [`MENU`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard/data-request")]
    DataRequest {},
    #[route("/:..segments")]
    MenuPage { segments: Vec<String> },
}

/// Title shown in the top bar for `path`.
pub fn page_title(path: &str) -> &'static str {
    find_by_path(MENU, path)
        .map(|entry| entry.label)
        .unwrap_or("Page Not Found")
}

/// Main app layout with sidebar and top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let shell: Shell = use_context();
    let config: AppConfig = use_context();

    let current_path = route.to_string();
    let title = page_title(&current_path);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { state: shell.sidebar,
            AppSidebar { current_path: current_path.clone() }

            SidebarInset {
                header {
                    class: "topbar",
                    SidebarTrigger { id: config.sidebar.trigger_id.clone(),
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    span {
                        class: "topbar-title",
                        "{title}"
                    }
                }

                div {
                    class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { Placeholder { title: page_title("/").to_string() } }
}

#[component]
fn DataRequest() -> Element {
    DataRequestPage()
}

#[component]
fn MenuPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    match find_by_path(MENU, &path) {
        Some(entry) => rsx! { Placeholder { title: entry.label.to_string() } },
        None => rsx! { NotFound { path } },
    }
}
