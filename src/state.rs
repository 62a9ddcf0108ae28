use std::rc::Rc;

use yew::prelude::*;

use crate::sections::{RevealSet, Section};

/// Everything on the page that changes after mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub active: Section,
    pub menu_open: bool,
    pub revealed: RevealSet,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// Burger button clicked.
    ToggleMenu,
    /// Nav link clicked: highlight the target right away and close the menu.
    Navigate(Section),
    /// Tracker found the section under the nav bar.
    Observe(Section),
    /// Blocks that entered the viewport.
    Reveal(RevealSet),
}

impl PageState {
    pub fn apply(&self, action: PageAction) -> PageState {
        let mut next = self.clone();
        match action {
            PageAction::ToggleMenu => next.menu_open = !self.menu_open,
            PageAction::Navigate(section) => {
                next.active = section;
                next.menu_open = false;
            }
            PageAction::Observe(section) => next.active = section,
            PageAction::Reveal(seen) => next.revealed = self.revealed.union(seen),
        }
        next
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
