use dioxus::prelude::*;
use shared_types::{load_expanded, synchronize, AppConfig, SidebarState};
use shared_ui::BodyClassRoot;

mod components;
mod dismiss;
mod routes;
mod storage;
#[cfg(test)]
mod testing;
use routes::Route;
use storage::AppStore;

/// State owned by the application shell and shared with the layout.
#[derive(Clone, Copy)]
pub struct Shell {
    pub sidebar: Signal<SidebarState>,
}

const CONFIG_TOML: &str = include_str!("../config.toml");

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

/// Parse the embedded config, falling back to defaults.
fn load_config(src: &str) -> AppConfig {
    AppConfig::from_toml_str(src).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config.toml rejected, using defaults");
        AppConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| {
        tracing::info!(platform = client_platform(), "starting dashboard");
        load_config(CONFIG_TOML)
    });

    let sidebar = use_signal(|| SidebarState::restored(load_expanded(&AppStore, &config.sidebar)));
    use_context_provider(|| Shell { sidebar });

    // Mirror the section flag on mount and on every change. Panel toggles
    // do not touch storage.
    let section_expanded = use_memo(move || sidebar().section_expanded);
    let sidebar_config = config.sidebar.clone();
    use_effect(move || {
        synchronize(&AppStore, &BodyClassRoot, &sidebar_config, section_expanded());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
