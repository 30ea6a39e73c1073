use pretty_assertions::assert_eq;
use shared_types::{find_by_path, is_active, leaves, ActiveRule, MenuEntry, MENU};

fn top_level(label: &str) -> &'static MenuEntry {
    MENU.iter()
        .flat_map(|g| g.entries.iter())
        .find(|e| e.label == label)
        .unwrap_or_else(|| panic!("no entry {label}"))
}

/// Top-level entries highlighted for `path`.
fn highlighted(path: &str) -> Vec<&'static str> {
    MENU.iter()
        .flat_map(|g| g.entries.iter())
        .filter(|e| is_active(path, e))
        .map(|e| e.label)
        .collect()
}

// ── Leaves ──────────────────────────────────────────────────────────

#[test]
fn every_leaf_is_active_on_its_own_path() {
    for leaf in leaves(MENU) {
        assert!(is_active(leaf.path, leaf), "{} not active on itself", leaf.label);
    }
}

#[test]
fn sub_entries_are_inactive_on_sibling_paths() {
    let dashboard = top_level("Dashboard");
    let analytics = find_by_path(MENU, "/dashboard/analytics").unwrap();
    for sibling in dashboard.children {
        if sibling.path != analytics.path {
            assert!(!is_active(sibling.path, analytics));
        }
    }
}

// ── Umbrellas ───────────────────────────────────────────────────────

#[test]
fn root_path_highlights_only_dashboard() {
    assert_eq!(highlighted("/"), vec!["Dashboard"]);
}

#[test]
fn data_request_highlights_dashboard() {
    assert_eq!(highlighted("/dashboard/data-request"), vec!["Dashboard"]);
}

#[test]
fn umbrella_roots_match_exactly() {
    for (label, root) in [
        ("Task", "/task"),
        ("Forms", "/forms"),
        ("Pages", "/pages"),
        ("UI Elements", "/ui"),
        ("Authentication", "/auth"),
    ] {
        let entry = top_level(label);
        assert!(matches!(entry.rule, ActiveRule::Umbrella { .. }));
        assert!(is_active(root, entry), "{label} inactive on {root}");
    }
}

#[test]
fn keyword_matching_stays_coarse() {
    let task = top_level("Task");
    assert!(is_active("/tasks/archive/old-task-names", task));
    // "ui" is a substring of "build"; the loose rule lights UI Elements.
    assert!(is_active("/reports/build", top_level("UI Elements")));
}

#[test]
fn settings_page_does_not_highlight_pages_group() {
    assert_eq!(highlighted("/settings"), Vec::<&str>::new());
}

#[test]
fn support_entries_follow_their_own_paths() {
    assert_eq!(highlighted("/messages"), vec!["Messages"]);
    assert_eq!(highlighted("/inbox"), vec!["Inbox"]);
    assert_eq!(highlighted("/invoice"), vec!["Invoice"]);
    // Every support entry is keyed on "chart" as well.
    assert_eq!(
        highlighted("/chart"),
        vec!["Messages", "Inbox", "Invoice", "Chart"]
    );
}
