//! Panels and the panel group.

use crate::action::Action;
use crate::list::ItemList;

/// How the panel group routes item-level actions.
///
/// Panel navigation is always handled by the group itself; this only
/// concerns the remaining actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Only the focused panel's list receives item-level actions.
    #[default]
    ActiveOnly,
    /// Every panel's list receives item-level actions.
    Broadcast,
}

/// A single vertical column holding one item list.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    list: ItemList,
}

impl Panel {
    pub fn new(list: ItemList) -> Self {
        Self { list }
    }

    pub fn list(&self) -> &ItemList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ItemList {
        &mut self.list
    }
}

/// The full set of panels plus the index of the focused one.
///
/// The panel count is fixed after construction.
#[derive(Debug, Clone, Default)]
pub struct PanelGroup {
    panels: Vec<Panel>,
    selected: usize,
    dispatch: DispatchPolicy,
}

impl PanelGroup {
    /// Build a group from one seed list per panel, focusing the first panel.
    pub fn new<I>(seeds: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Into<String>,
    {
        Self::with_dispatch(seeds, DispatchPolicy::default())
    }

    /// Same as [`PanelGroup::new`] with an explicit dispatch policy.
    pub fn with_dispatch<I>(seeds: I, dispatch: DispatchPolicy) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Into<String>,
    {
        Self {
            panels: seeds
                .into_iter()
                .map(|seed| Panel::new(ItemList::new(seed)))
                .collect(),
            selected: 0,
            dispatch,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Index of the currently focused panel.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.get(self.selected)
    }

    pub fn dispatch(&self) -> DispatchPolicy {
        self.dispatch
    }

    /// Apply an action: panel navigation is handled here, everything else is
    /// routed to item lists per the dispatch policy.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::NextPanel => {
                if !self.panels.is_empty() {
                    self.selected = (self.selected + 1).min(self.panels.len() - 1);
                }
            }
            Action::PreviousPanel => {
                self.selected = self.selected.saturating_sub(1);
            }
            _ => match self.dispatch {
                DispatchPolicy::ActiveOnly => {
                    if let Some(panel) = self.panels.get_mut(self.selected) {
                        panel.list_mut().apply(action);
                    }
                }
                DispatchPolicy::Broadcast => {
                    for panel in &mut self.panels {
                        panel.list_mut().apply(action);
                    }
                }
            },
        }
    }
}
