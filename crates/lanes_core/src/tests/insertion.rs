//! Placeholder insertion tests.

use crate::action::Action;
use crate::list::{ItemList, PLACEHOLDER_APPENDED, PLACEHOLDER_PREPENDED};

#[test]
fn test_append_inserts_below_and_selects_new_item() {
    let mut list = ItemList::new(["foo", "bar", "baz"]);
    list.apply(Action::NextItem);
    assert_eq!(list.selected(), 1);

    list.apply(Action::AppendItem);

    assert_eq!(list.len(), 4);
    assert_eq!(list.selected(), 2);
    assert_eq!(list.items()[2].content(), PLACEHOLDER_APPENDED);
    // Neighbors are undisturbed.
    assert_eq!(list.items()[1].content(), "bar");
    assert_eq!(list.items()[3].content(), "baz");
}

#[test]
fn test_append_at_last_item_extends_the_list() {
    let mut list = ItemList::new(["foo", "bar"]);
    list.apply(Action::NextItem);
    list.apply(Action::AppendItem);

    assert_eq!(list.len(), 3);
    assert_eq!(list.selected(), 2);
    assert_eq!(list.items()[2].content(), PLACEHOLDER_APPENDED);
}

#[test]
fn test_prepend_keeps_old_item_selected() {
    let mut list = ItemList::new(["foo", "bar", "baz"]);
    list.apply(Action::NextItem);

    list.apply(Action::PrependItem);

    assert_eq!(list.len(), 4);
    // The new item takes the old slot; "bar" shifted right and is still
    // the selection.
    assert_eq!(list.items()[1].content(), PLACEHOLDER_PREPENDED);
    assert_eq!(list.selected(), 2);
    assert_eq!(list.selected_item().unwrap().content(), "bar");
}

#[test]
fn test_prepend_at_first_item() {
    let mut list = ItemList::new(["foo", "bar"]);
    list.apply(Action::PrependItem);

    assert_eq!(list.len(), 3);
    assert_eq!(list.items()[0].content(), PLACEHOLDER_PREPENDED);
    assert_eq!(list.selected(), 1);
    assert_eq!(list.selected_item().unwrap().content(), "foo");
}

#[test]
fn test_insertion_only_ever_grows_the_list() {
    let mut list = ItemList::new(["foo"]);
    for i in 0..8 {
        let action = if i % 2 == 0 {
            Action::AppendItem
        } else {
            Action::PrependItem
        };
        let before = list.len();
        list.apply(action);
        assert_eq!(list.len(), before + 1);
        assert!(list.selected() < list.len());
    }
}

#[test]
fn test_insertion_into_empty_list() {
    let mut list = ItemList::new(Vec::<String>::new());
    list.apply(Action::AppendItem);
    assert_eq!(list.len(), 1);
    assert_eq!(list.selected(), 0);

    let mut list = ItemList::new(Vec::<String>::new());
    list.apply(Action::PrependItem);
    assert_eq!(list.len(), 1);
    assert_eq!(list.selected(), 0);
}
