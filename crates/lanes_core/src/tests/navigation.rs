//! Selection movement and clamping tests.

use crate::action::Action;
use crate::list::ItemList;

fn three_items() -> ItemList {
    ItemList::new(["foo", "bar", "baz"])
}

#[test]
fn test_new_selects_first_item() {
    let list = three_items();
    assert_eq!(list.selected(), 0);
    assert_eq!(list.selected_item().unwrap().content(), "foo");
}

#[test]
fn test_next_moves_selection_down() {
    let mut list = three_items();
    list.apply(Action::NextItem);
    assert_eq!(list.selected(), 1);
    assert_eq!(list.selected_item().unwrap().content(), "bar");
}

#[test]
fn test_previous_moves_selection_up() {
    let mut list = three_items();
    list.apply(Action::NextItem);
    list.apply(Action::NextItem);
    list.apply(Action::PreviousItem);
    assert_eq!(list.selected(), 1);
}

#[test]
fn test_next_clamps_at_last_item() {
    let mut list = three_items();
    for _ in 0..10 {
        list.apply(Action::NextItem);
    }
    assert_eq!(list.selected(), 2);

    // Once clamped, further presses are no-ops.
    list.apply(Action::NextItem);
    assert_eq!(list.selected(), 2);
}

#[test]
fn test_previous_clamps_at_first_item() {
    let mut list = three_items();
    for _ in 0..10 {
        list.apply(Action::PreviousItem);
    }
    assert_eq!(list.selected(), 0);
}

#[test]
fn test_selection_stays_in_bounds_for_any_sequence() {
    let mut list = three_items();
    let sequence = [
        Action::NextItem,
        Action::NextItem,
        Action::NextItem,
        Action::PreviousItem,
        Action::NextItem,
        Action::PreviousItem,
        Action::PreviousItem,
        Action::PreviousItem,
        Action::NextItem,
    ];

    for action in sequence {
        list.apply(action);
        assert!(list.selected() < list.len());
    }
}

#[test]
fn test_panel_actions_are_ignored_by_lists() {
    let mut list = three_items();
    list.apply(Action::NextItem);

    list.apply(Action::NextPanel);
    list.apply(Action::PreviousPanel);

    assert_eq!(list.selected(), 1);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_empty_list_navigation_is_a_noop() {
    let mut list = ItemList::new(Vec::<String>::new());
    list.apply(Action::NextItem);
    list.apply(Action::PreviousItem);
    assert_eq!(list.selected(), 0);
    assert!(list.selected_item().is_none());
}
