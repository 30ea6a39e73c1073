//! Navigation menu model and the route-active matcher.
//!
//! The whole tree is `'static` data so it can live in a `const` and be
//! walked by a single recursive renderer.

/// Icons used by top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Dashboard,
    Calendar,
    Profile,
    Task,
    Forms,
    Tables,
    Pages,
    Messages,
    Inbox,
    Invoice,
    Chart,
    UiElements,
    Authentication,
}

/// Decorative tag rendered next to an entry's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    /// Small version tag ("Pro").
    Version,
    /// Numeric counter tag.
    Count,
}

/// How an entry decides whether it is highlighted for the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveRule {
    /// Current path equals the entry path.
    Exact,
    /// Current path contains the keyword anywhere.
    Keyword(&'static str),
    /// Current path equals `root`, or contains `keyword` anywhere.
    Umbrella {
        root: &'static str,
        keyword: &'static str,
    },
}

/// One menu entry. Entries with children are disclosure groups and are
/// not navigable themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Option<Glyph>,
    pub children: &'static [MenuEntry],
    pub badge: Option<BadgeKind>,
    pub rule: ActiveRule,
}

/// Path used by disclosure-group headers.
pub const GROUP_PATH: &str = "#";

impl MenuEntry {
    /// A navigable entry matched exactly against the current path.
    pub const fn link(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            icon: None,
            children: &[],
            badge: None,
            rule: ActiveRule::Exact,
        }
    }

    /// A disclosure group highlighted for `root` and any path containing
    /// `keyword`.
    pub const fn group(
        label: &'static str,
        icon: Glyph,
        root: &'static str,
        keyword: &'static str,
        children: &'static [MenuEntry],
    ) -> Self {
        Self {
            label,
            path: GROUP_PATH,
            icon: Some(icon),
            children,
            badge: None,
            rule: ActiveRule::Umbrella { root, keyword },
        }
    }

    pub const fn icon(self, icon: Glyph) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }

    pub const fn badge(self, badge: BadgeKind) -> Self {
        Self {
            badge: Some(badge),
            ..self
        }
    }

    /// Highlight whenever the current path contains `keyword`.
    pub const fn keyword(self, keyword: &'static str) -> Self {
        Self {
            rule: ActiveRule::Keyword(keyword),
            ..self
        }
    }

    pub fn is_collapsible(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this entry or any descendant links to `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        (!self.is_collapsible() && self.path == path)
            || self.children.iter().any(|c| c.contains_path(path))
    }
}

/// A titled section of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

/// Whether `entry` should be highlighted while `current_path` is shown.
///
/// Keyword matching is a plain substring test, so a "task" umbrella also
/// lights up for `/tasks/archive/old-task-names`.
pub fn is_active(current_path: &str, entry: &MenuEntry) -> bool {
    match entry.rule {
        ActiveRule::Exact => current_path == entry.path,
        ActiveRule::Keyword(keyword) => {
            current_path == entry.path || current_path.contains(keyword)
        }
        ActiveRule::Umbrella { root, keyword } => {
            current_path == root || current_path.contains(keyword)
        }
    }
}

/// Every navigable entry of `groups`, depth first, in display order.
pub fn leaves(groups: &'static [MenuGroup]) -> impl Iterator<Item = &'static MenuEntry> {
    fn walk(entry: &'static MenuEntry, out: &mut Vec<&'static MenuEntry>) {
        if entry.is_collapsible() {
            for child in entry.children {
                walk(child, out);
            }
        } else {
            out.push(entry);
        }
    }

    let mut out = Vec::new();
    for group in groups {
        for entry in group.entries {
            walk(entry, &mut out);
        }
    }
    out.into_iter()
}

/// First navigable entry linking to `path`.
pub fn find_by_path(groups: &'static [MenuGroup], path: &str) -> Option<&'static MenuEntry> {
    leaves(groups).find(|e| e.path == path)
}
