use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn default_is_single_mode_with_nothing_open() {
    let group = ToggleGroup::default();
    assert_eq!(group.mode(), ToggleMode::Single);
    assert_eq!(group.panel_count(), 0);
    assert!(group.open_indices().is_empty());
}

#[test]
fn new_drops_out_of_range_and_duplicate_seeds() {
    let group = ToggleGroup::new(ToggleMode::Multiple, 3, &[2, 5, 0, 2]);
    assert_eq!(group.open_indices(), &[2, 0]);
}

#[test]
fn new_single_mode_keeps_only_first_valid_seed() {
    let group = ToggleGroup::new(ToggleMode::Single, 3, &[7, 1, 2]);
    assert_eq!(group.open_indices(), &[1]);
}

// =============================================================
// Multiple mode
// =============================================================

#[test]
fn multiple_mode_scenario_toggle_zero_two_zero_leaves_two() {
    let mut group = ToggleGroup::new(ToggleMode::Multiple, 3, &[]);
    group.toggle(0);
    group.toggle(2);
    group.toggle(0);
    assert_eq!(group.open_indices(), &[2]);
    assert!(!group.is_open(0));
    assert!(!group.is_open(1));
    assert!(group.is_open(2));
}

#[test]
fn multiple_mode_open_set_matches_odd_toggle_counts() {
    let sequence = [0, 3, 1, 3, 4, 0, 0, 2, 4, 4, 1, 3];
    let mut group = ToggleGroup::new(ToggleMode::Multiple, 5, &[]);
    let mut counts = [0_usize; 5];
    for &index in &sequence {
        group.toggle(index);
        counts[index] += 1;
    }
    for (index, count) in counts.iter().enumerate() {
        assert_eq!(group.is_open(index), count % 2 == 1, "index {index}");
    }
}

#[test]
fn multiple_mode_preserves_order_of_remaining_members() {
    let mut group = ToggleGroup::new(ToggleMode::Multiple, 4, &[3, 1, 2]);
    group.toggle(1);
    assert_eq!(group.open_indices(), &[3, 2]);
    group.toggle(0);
    assert_eq!(group.open_indices(), &[3, 2, 0]);
}

// =============================================================
// Single mode
// =============================================================

#[test]
fn single_mode_retoggle_closes_open_panel() {
    let mut group = ToggleGroup::new(ToggleMode::Single, 3, &[]);
    group.toggle(1);
    group.toggle(1);
    assert!(group.open_indices().is_empty());
}

#[test]
fn single_mode_opening_other_panel_closes_previous() {
    let mut group = ToggleGroup::new(ToggleMode::Single, 3, &[]);
    group.toggle(1);
    group.toggle(2);
    assert_eq!(group.open_indices(), &[2]);
}

#[test]
fn single_mode_never_exceeds_one_open_panel() {
    let mut group = ToggleGroup::new(ToggleMode::Single, 4, &[0]);
    for index in [1, 1, 3, 0, 2, 2, 2, 3] {
        let was_only_open = group.open_indices() == [index];
        group.toggle(index);
        assert!(group.open_indices().len() <= 1);
        if was_only_open {
            assert!(group.open_indices().is_empty());
        }
    }
}

// =============================================================
// Out-of-range input
// =============================================================

#[test]
fn toggle_out_of_range_is_noop() {
    let mut group = ToggleGroup::new(ToggleMode::Multiple, 2, &[0]);
    assert!(!group.toggle(2));
    assert_eq!(group.open_indices(), &[0]);

    let mut single = ToggleGroup::new(ToggleMode::Single, 2, &[1]);
    assert!(!single.toggle(9));
    assert_eq!(single.open_indices(), &[1]);
}

#[test]
fn is_open_out_of_range_is_false() {
    let group = ToggleGroup::new(ToggleMode::Multiple, 2, &[0, 1]);
    assert!(!group.is_open(2));
    assert!(!group.is_open(usize::MAX));
}

#[test]
fn toggle_reports_change_for_valid_index() {
    let mut group = ToggleGroup::new(ToggleMode::Single, 1, &[]);
    assert!(group.toggle(0));
    assert!(group.toggle(0));
}
