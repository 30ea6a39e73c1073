//! Server-side rendering of the routed shell for component tests.

use std::rc::Rc;

use dioxus::history::{provide_history_context, MemoryHistory};
use dioxus::prelude::*;
use shared_types::{AppConfig, SidebarState};

use crate::routes::Route;
use crate::Shell;

/// The pieces `App` provides, minus storage and the body-class effect.
#[component]
fn ShellAt(path: String, config: AppConfig, section_expanded: bool) -> Element {
    use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path(&path))));
    use_context_provider(|| config.clone());
    let sidebar = use_signal(|| SidebarState::restored(section_expanded));
    use_context_provider(|| Shell { sidebar });

    rsx! { Router::<Route> {} }
}

/// Render the whole layout with `path` as the current route.
pub fn render_at(path: &str, config: AppConfig, section_expanded: bool) -> String {
    let mut dom = VirtualDom::new_with_props(
        ShellAt,
        ShellAtProps {
            path: path.to_string(),
            config,
            section_expanded,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
