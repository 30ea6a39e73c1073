//! Sidebar open/expand state machine and dismissal rules.
//!
//! Everything here is plain data so the rules can be exercised without a
//! DOM. The Dioxus layer feeds document events in as [`DocumentSignal`]s
//! and writes the resulting state back into signals.

use serde::{Deserialize, Serialize};

/// State owned by the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    /// Panel visibility on narrow viewports. Transient.
    pub panel_open: bool,
    /// Master switch for every disclosure group. Persisted.
    pub section_expanded: bool,
}

impl SidebarState {
    /// Fresh state with the persisted section flag restored.
    pub fn restored(section_expanded: bool) -> Self {
        Self {
            panel_open: false,
            section_expanded,
        }
    }

    /// Flip the panel from the trigger control.
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    /// Route a document event through the dismissal rules. Returns whether
    /// the panel was closed.
    pub fn apply(&mut self, signal: &DocumentSignal) -> bool {
        match signal {
            DocumentSignal::PointerDown { hit } => Dismissal::on_pointer_down(self, *hit),
            DocumentSignal::KeyDown { key } => Dismissal::on_key_down(self, key),
        }
    }
}

/// Open/closed state of one collapsible menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisclosureState {
    pub expanded: bool,
}

/// Outcome of clicking a disclosure-group header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureTransition {
    /// The section was collapsed; it is now enabled and the group is
    /// unchanged.
    SectionEnabled,
    /// The group flipped to the contained value.
    Toggled(bool),
}

impl DisclosureState {
    /// Handle a click on the group header.
    ///
    /// While the section is collapsed the first click only enables it; no
    /// group opens until a later click.
    pub fn click(&mut self, section_expanded: &mut bool) -> DisclosureTransition {
        if !*section_expanded {
            *section_expanded = true;
            return DisclosureTransition::SectionEnabled;
        }
        self.expanded = !self.expanded;
        DisclosureTransition::Toggled(self.expanded)
    }

    /// Whether the group's sub-entries are shown. The section switch wins
    /// over the group's own flag.
    pub fn is_visible(&self, section_expanded: bool) -> bool {
        section_expanded && self.expanded
    }
}

/// Where a pointer-down landed relative to the two guarded regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitTest {
    pub in_panel: bool,
    pub in_trigger: bool,
}

impl HitTest {
    pub fn outside(&self) -> bool {
        !self.in_panel && !self.in_trigger
    }
}

/// Event report posted from the document listeners.
///
/// `hit` is `None` when the panel or the trigger is not attached to the
/// document yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentSignal {
    PointerDown { hit: Option<HitTest> },
    KeyDown { key: String },
}

/// Rules for closing the panel from outside the sidebar.
pub struct Dismissal;

impl Dismissal {
    /// Close when the press landed outside both the panel and the trigger.
    pub fn on_pointer_down(state: &mut SidebarState, hit: Option<HitTest>) -> bool {
        let Some(hit) = hit else {
            return false;
        };
        if !state.panel_open || !hit.outside() {
            return false;
        }
        state.panel_open = false;
        true
    }

    /// Close on Escape.
    pub fn on_key_down(state: &mut SidebarState, key: &str) -> bool {
        if !state.panel_open || !is_escape(key) {
            return false;
        }
        state.panel_open = false;
        true
    }
}

fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
