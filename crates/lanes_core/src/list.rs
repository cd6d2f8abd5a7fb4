//! Items and the selectable item list.

use crate::action::Action;

/// Content of items created by [`Action::AppendItem`].
pub const PLACEHOLDER_APPENDED: &str = "appended";

/// Content of items created by [`Action::PrependItem`].
pub const PLACEHOLDER_PREPENDED: &str = "prepended";

/// A single line of text content.
///
/// Items have no identity beyond their position in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    content: String,
}

impl Item {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An ordered list of items with a clamped selection index.
///
/// Lists only grow: there is no removal operation, so a list constructed
/// with at least one seed item is never empty and `selected` stays within
/// `0..len`.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Item>,
    selected: usize,
}

impl ItemList {
    /// Create a list seeded with the given contents, selecting the first item.
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: contents.into_iter().map(|c| Item::new(c)).collect(),
            selected: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the currently selected item.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    /// Apply an action. Actions not addressed to item lists are ignored.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::NextItem => {
                if !self.items.is_empty() {
                    self.selected = (self.selected + 1).min(self.items.len() - 1);
                }
            }
            Action::PreviousItem => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::AppendItem => {
                let at = (self.selected + 1).min(self.items.len());
                self.items.insert(at, Item::new(PLACEHOLDER_APPENDED));
                self.selected = at;
            }
            Action::PrependItem => {
                // The old current item shifts right by one and stays selected.
                let at = self.selected.min(self.items.len());
                self.items.insert(at, Item::new(PLACEHOLDER_PREPENDED));
                self.selected = (at + 1).min(self.items.len() - 1);
            }
            _ => {}
        }
    }
}
