use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use shared_types::{DisclosureState, DisclosureTransition, SidebarState};

// ─── Context ───────────────────────────────────────────────────────────

/// Provides the shell-owned sidebar state to every sidebar part below it.
///
/// The provider never creates state of its own: the application shell
/// owns the signal and decides how it is persisted.
#[component]
pub fn SidebarProvider(state: Signal<SidebarState>, children: Element) -> Element {
    use_context_provider(|| state);
    let current = state();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if current.panel_open { "true" } else { "false" },
            "data-section-expanded": if current.section_expanded { "true" } else { "false" },
            {children}
        }
    }
}

/// Hook to access sidebar state.
pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar panel. Slides in on narrow viewports while open.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_sidebar();
    let is_open = state().panel_open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            {children}
        }
    }
}

/// Header section inside the Sidebar.
#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable content area of the Sidebar.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

// ─── Group components ──────────────────────────────────────────────────

/// A titled section of menu entries.
#[component]
pub fn SidebarGroup(title: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            h3 { class: "sidebar-group-label", "{title}" }
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

/// Navigation menu list inside the sidebar.
#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

/// A single item in a SidebarMenu.
#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Visual body of a top-level entry. Wrap it in a router `Link`.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}

/// Sub-menu container for nested navigation.
#[component]
pub fn SidebarMenuSub(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-sub", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

/// Item within a SidebarMenuSub.
#[component]
pub fn SidebarMenuSubItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new(
        "class",
        "sidebar-menu-sub-item",
        None,
        false,
    )];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Visual body of a sub-entry. Wrap it in a router `Link`.
#[component]
pub fn SidebarMenuSubButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-menu-sub-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}

// ─── Disclosure ────────────────────────────────────────────────────────

/// A collapsible top-level entry.
///
/// Each instance owns its own [`DisclosureState`]; siblings do not affect
/// each other. The first click while the section is collapsed only
/// expands the section.
#[component]
pub fn SidebarDisclosure(
    header: Element,
    #[props(default = false)] active: bool,
    #[props(default = false)] default_open: bool,
    children: Element,
) -> Element {
    let mut sidebar = use_sidebar();
    let mut disclosure = use_signal(|| DisclosureState {
        expanded: default_open,
    });

    let section_expanded = sidebar().section_expanded;
    let visible = disclosure().is_visible(section_expanded);

    rsx! {
        li { class: "sidebar-menu-item sidebar-disclosure",
            button {
                class: "sidebar-menu-button sidebar-disclosure-trigger",
                r#type: "button",
                "data-active": if active { "true" } else { "false" },
                "aria-expanded": if visible { "true" } else { "false" },
                onclick: move |evt| {
                    evt.prevent_default();
                    let mut section = sidebar().section_expanded;
                    let transition = disclosure.write().click(&mut section);
                    match transition {
                        DisclosureTransition::SectionEnabled => {
                            sidebar.write().section_expanded = section;
                            tracing::debug!("sidebar section enabled");
                        }
                        DisclosureTransition::Toggled(expanded) => {
                            tracing::debug!(expanded, "sidebar group toggled");
                        }
                    }
                },
                {header}
                span {
                    class: "sidebar-disclosure-chevron",
                    "data-open": if visible { "true" } else { "false" },
                    Icon::<LdChevronDown> { icon: LdChevronDown, width: 18, height: 18 }
                }
            }
            if visible {
                div { class: "sidebar-disclosure-content",
                    {children}
                }
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Button that opens/closes the sidebar panel.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().panel_open;

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            "aria-expanded": if is_open { "true" } else { "false" },
            onclick: move |_| {
                state.write().toggle_panel();
            },
            ..merged,
            {children}
        }
    }
}

/// The main content area that sits alongside the Sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}
