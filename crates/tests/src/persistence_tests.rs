use pretty_assertions::assert_eq;
use shared_types::{
    load_expanded, synchronize, DisclosureState, FlagStore, MemoryStore, SidebarConfig,
    SidebarState,
};

use crate::common::RecordingRoot;

#[test]
fn fresh_storage_starts_collapsed_and_writes_false_on_mount() {
    let store = MemoryStore::new();
    let root = RecordingRoot::default();
    let config = SidebarConfig::default();

    let state = SidebarState::restored(load_expanded(&store, &config));
    assert!(!state.section_expanded);

    synchronize(&store, &root, &config, state.section_expanded);
    assert_eq!(store.get(&config.storage_key).as_deref(), Some("false"));
    assert!(!root.has(&config.expanded_flag));
}

#[test]
fn expanded_section_survives_a_new_instance() {
    let store = MemoryStore::new();
    let root = RecordingRoot::default();
    let config = SidebarConfig::default();

    let mut first = SidebarState::restored(load_expanded(&store, &config));
    DisclosureState::default().click(&mut first.section_expanded);
    synchronize(&store, &root, &config, first.section_expanded);
    assert!(root.has("sidebar-expanded"));

    let second = SidebarState::restored(load_expanded(&store, &config));
    assert!(second.section_expanded);
    assert!(!second.panel_open);
}

#[test]
fn garbage_in_storage_reads_false() {
    let store = MemoryStore::new();
    let config = SidebarConfig::default();
    for raw in ["yes", "1", "True", "null", ""] {
        store.store(&config.storage_key, raw).unwrap();
        assert!(!load_expanded(&store, &config), "{raw:?} read as expanded");
    }
}

#[test]
fn collapsing_removes_the_body_flag() {
    let store = MemoryStore::new();
    let root = RecordingRoot::default();
    let config = SidebarConfig::default();

    synchronize(&store, &root, &config, true);
    synchronize(&store, &root, &config, false);
    assert!(!root.has(&config.expanded_flag));
    assert!(!load_expanded(&store, &config));
}
