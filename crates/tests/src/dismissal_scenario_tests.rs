use pretty_assertions::assert_eq;
use shared_types::{Dismissal, DocumentSignal, SidebarState};

use crate::common::*;

fn press(hit: shared_types::HitTest) -> DocumentSignal {
    DocumentSignal::PointerDown { hit: Some(hit) }
}

fn key(name: &str) -> DocumentSignal {
    DocumentSignal::KeyDown {
        key: name.to_string(),
    }
}

#[test]
fn trigger_inside_outside_escape() {
    let mut state = SidebarState::restored(false);
    assert!(!state.panel_open);

    // The trigger's own click handler opens the panel; the document
    // listener sees the same press inside the trigger and ignores it.
    state.toggle_panel();
    assert!(!state.apply(&press(INSIDE_TRIGGER)));
    assert!(state.panel_open);

    assert!(!state.apply(&press(INSIDE_PANEL)));
    assert!(state.panel_open);

    assert!(state.apply(&press(OUTSIDE)));
    assert!(!state.panel_open);

    state.toggle_panel();
    assert!(state.apply(&key("Escape")));
    assert!(!state.panel_open);
}

#[test]
fn repeated_dismissal_is_idempotent() {
    let mut state = SidebarState {
        panel_open: true,
        section_expanded: true,
    };
    assert!(state.apply(&press(OUTSIDE)));
    assert!(!state.apply(&press(OUTSIDE)));
    assert!(!state.apply(&key("Escape")));
    assert_eq!(
        state,
        SidebarState {
            panel_open: false,
            section_expanded: true,
        }
    );
}

#[test]
fn non_escape_keys_never_close() {
    let mut state = SidebarState::default();
    state.toggle_panel();
    for name in ["Enter", " ", "ArrowDown", "e", "Shift"] {
        assert!(!Dismissal::on_key_down(&mut state, name));
    }
    assert!(state.panel_open);
}

#[test]
fn detached_regions_never_close() {
    let mut state = SidebarState::default();
    state.toggle_panel();
    assert!(!state.apply(&DocumentSignal::PointerDown { hit: None }));
    assert!(state.panel_open);
}

#[test]
fn trigger_toggles_back_closed() {
    let mut state = SidebarState::default();
    state.toggle_panel();
    state.toggle_panel();
    assert!(!state.panel_open);
}
