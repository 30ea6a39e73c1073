use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdArrowLeft, LdCalendar, LdClipboardList, LdFileText, LdFolder, LdInbox, LdLayers,
    LdLayoutDashboard, LdLock, LdMessageSquare, LdReceipt, LdTable, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::{is_active, AppConfig, BadgeKind, Glyph, MenuEntry, MENU};
use shared_ui::{
    Badge, BadgeVariant, Sidebar, SidebarContent, SidebarDisclosure, SidebarGroup, SidebarHeader,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarMenuSub, SidebarMenuSubButton,
    SidebarMenuSubItem, SidebarTrigger,
};

use crate::dismiss::use_document_dismissal;
use crate::routes::Route;
use crate::Shell;

/// The dashboard sidebar, rendered from [`MENU`].
#[component]
pub fn AppSidebar(current_path: String) -> Element {
    let config: AppConfig = use_context();
    let shell: Shell = use_context();

    use_document_dismissal(shell.sidebar, &config.sidebar);

    rsx! {
        Sidebar { id: config.sidebar.panel_id.clone(),
            SidebarHeader {
                Link { to: Route::Home {}, class: "sidebar-logo", "ImprintX" }
                SidebarTrigger { class: "sidebar-trigger sidebar-close",
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 20, height: 18 }
                }
            }

            SidebarContent {
                for group in MENU.iter() {
                    SidebarGroup { key: "{group.title}", title: group.title.to_uppercase(),
                        SidebarMenu {
                            for entry in group.entries.iter() {
                                MenuNode {
                                    key: "{entry.label}",
                                    entry: *entry,
                                    current_path: current_path.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One entry of the tree. Disclosure groups render their children through
/// this same component with `nested` set.
///
/// A group holding the current page starts open.
#[component]
fn MenuNode(entry: MenuEntry, current_path: String, #[props(default)] nested: bool) -> Element {
    let active = is_active(&current_path, &entry);

    if entry.is_collapsible() {
        return rsx! {
            SidebarDisclosure {
                active,
                default_open: entry.contains_path(&current_path),
                header: rsx! { EntryLabel { entry } },
                SidebarMenuSub {
                    for child in entry.children.iter() {
                        MenuNode {
                            key: "{child.path}",
                            entry: *child,
                            current_path: current_path.clone(),
                            nested: true,
                        }
                    }
                }
            }
        };
    }

    if nested {
        rsx! {
            SidebarMenuSubItem {
                Link { to: entry.path,
                    SidebarMenuSubButton { active, "{entry.label}" }
                }
                if let Some(kind) = entry.badge {
                    EntryBadge { kind }
                }
            }
        }
    } else {
        rsx! {
            SidebarMenuItem {
                Link { to: entry.path,
                    SidebarMenuButton { active,
                        EntryLabel { entry }
                    }
                }
            }
        }
    }
}

/// Icon, label and badge of a top-level entry.
#[component]
fn EntryLabel(entry: MenuEntry) -> Element {
    rsx! {
        if let Some(glyph) = entry.icon {
            {glyph_icon(glyph)}
        }
        span { class: "sidebar-entry-label", "{entry.label}" }
        if let Some(kind) = entry.badge {
            EntryBadge { kind }
        }
    }
}

#[component]
fn EntryBadge(kind: BadgeKind) -> Element {
    let config: AppConfig = use_context();

    match kind {
        BadgeKind::Version => rsx! {
            Badge { variant: BadgeVariant::Version, "{config.sidebar.version_label}" }
        },
        BadgeKind::Count => rsx! {
            Badge { variant: BadgeVariant::Count, "{config.sidebar.message_count}" }
        },
    }
}

fn glyph_icon(glyph: Glyph) -> Element {
    match glyph {
        Glyph::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Glyph::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        Glyph::Profile => rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
        Glyph::Task => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        Glyph::Forms => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        Glyph::Tables => rsx! { Icon::<LdTable> { icon: LdTable, width: 18, height: 18 } },
        Glyph::Pages => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        Glyph::Messages => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        Glyph::Inbox => rsx! { Icon::<LdInbox> { icon: LdInbox, width: 18, height: 18 } },
        Glyph::Invoice => rsx! { Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 } },
        Glyph::Chart => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
        Glyph::UiElements => rsx! { Icon::<LdLayers> { icon: LdLayers, width: 18, height: 18 } },
        Glyph::Authentication => rsx! { Icon::<LdLock> { icon: LdLock, width: 18, height: 18 } },
    }
}
