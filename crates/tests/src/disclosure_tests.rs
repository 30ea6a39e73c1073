use pretty_assertions::assert_eq;
use shared_types::{DisclosureState, DisclosureTransition, SidebarState, MENU};

/// One disclosure state per collapsible entry, in display order.
fn fresh_groups() -> Vec<(&'static str, DisclosureState)> {
    MENU.iter()
        .flat_map(|g| g.entries.iter())
        .filter(|e| e.is_collapsible())
        .map(|e| (e.label, DisclosureState::default()))
        .collect()
}

#[test]
fn menu_has_six_disclosure_groups() {
    let labels: Vec<_> = fresh_groups().into_iter().map(|(l, _)| l).collect();
    assert_eq!(
        labels,
        vec!["Dashboard", "Task", "Forms", "Pages", "UI Elements", "Authentication"]
    );
}

#[test]
fn first_click_on_any_group_only_wakes_the_section() {
    for index in 0..fresh_groups().len() {
        let mut state = SidebarState::restored(false);
        let mut groups = fresh_groups();

        let transition = groups[index].1.click(&mut state.section_expanded);

        assert_eq!(transition, DisclosureTransition::SectionEnabled);
        assert!(state.section_expanded);
        assert!(groups.iter().all(|(_, g)| !g.expanded));
    }
}

#[test]
fn second_click_opens_a_different_group() {
    let mut state = SidebarState::restored(false);
    let mut groups = fresh_groups();

    groups[1].1.click(&mut state.section_expanded);
    let transition = groups[2].1.click(&mut state.section_expanded);

    assert_eq!(transition, DisclosureTransition::Toggled(true));
    let open: Vec<_> = groups
        .iter()
        .filter(|(_, g)| g.expanded)
        .map(|(l, _)| *l)
        .collect();
    assert_eq!(open, vec!["Forms"]);
}

#[test]
fn restored_section_opens_on_first_click() {
    let mut state = SidebarState::restored(true);
    let mut groups = fresh_groups();
    assert_eq!(
        groups[0].1.click(&mut state.section_expanded),
        DisclosureTransition::Toggled(true)
    );
    assert!(groups[0].1.is_visible(state.section_expanded));
}

#[test]
fn collapsing_the_section_hides_every_open_group() {
    let mut state = SidebarState::restored(true);
    let mut groups = fresh_groups();
    for (_, group) in groups.iter_mut() {
        group.click(&mut state.section_expanded);
    }
    assert!(groups.iter().all(|(_, g)| g.is_visible(true)));

    state.section_expanded = false;
    assert!(groups
        .iter()
        .all(|(_, g)| g.expanded && !g.is_visible(state.section_expanded)));
}
