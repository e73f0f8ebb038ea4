use std::rc::Rc;

use yew::prelude::*;

/// Single-open, collapsible accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            AccordionState { open: None }
        } else {
            AccordionState { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

impl Reducible for AccordionState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        Rc::new(self.toggle(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_item_closes_the_first() {
        let state = AccordionState::default().toggle(0).toggle(3);
        assert!(!state.is_open(0));
        assert!(state.is_open(3));
    }

    #[test]
    fn toggling_open_item_collapses_it() {
        let state = AccordionState::default().toggle(2).toggle(2);
        assert_eq!(state.open, None);
    }
}
