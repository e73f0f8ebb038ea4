use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::NodeRef;

use crate::error::SetupError;

/// A fixed list of rendered items that animate together. Each item exposes
/// its own `NodeRef`; the group only reports ready once every slot is
/// attached to the document.
#[derive(Clone, PartialEq)]
pub struct TrackedGroup {
    name: &'static str,
    refs: Rc<Vec<NodeRef>>,
}

impl TrackedGroup {
    pub fn new(name: &'static str, len: usize) -> Self {
        Self {
            name,
            refs: Rc::new((0..len).map(|_| NodeRef::default()).collect()),
        }
    }

    pub fn node(&self, index: usize) -> NodeRef {
        self.refs.get(index).cloned().unwrap_or_default()
    }

    pub fn attached(&self) -> Result<Vec<HtmlElement>, SetupError> {
        collect_attached(self.name, self.refs.iter().map(|r| r.cast::<HtmlElement>()))
    }
}

/// Unwraps every slot, or reports the group as detached if any slot (or the
/// whole group) is missing.
pub fn collect_attached<T>(
    group: &'static str,
    items: impl IntoIterator<Item = Option<T>>,
) -> Result<Vec<T>, SetupError> {
    let collected: Option<Vec<T>> = items.into_iter().collect();
    match collected {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(SetupError::Detached { group }),
    }
}

/// Resolves a single element reference.
pub fn attached(group: &'static str, node: &NodeRef) -> Result<HtmlElement, SetupError> {
    node.cast::<HtmlElement>().ok_or(SetupError::Detached { group })
}

/// Direct element children of `parent`, e.g. a heading block's title and
/// subtitle that reveal as one staggered group.
pub fn children_of(group: &'static str, parent: &Element) -> Result<Vec<HtmlElement>, SetupError> {
    let children = parent.children();
    collect_attached(
        group,
        (0..children.length()).map(|i| children.item(i).and_then(|el| el.dyn_into::<HtmlElement>().ok())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_attached_items_are_returned_in_order() {
        let items = collect_attached("cards", vec![Some(1), Some(2), Some(3)]);
        assert_eq!(items, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn one_missing_item_detaches_the_group() {
        let items = collect_attached("cards", vec![Some(1), None, Some(3)]);
        assert_eq!(items, Err(SetupError::Detached { group: "cards" }));
    }

    #[test]
    fn empty_group_is_not_ready() {
        let items = collect_attached::<u8>("cards", Vec::new());
        assert_eq!(items, Err(SetupError::Detached { group: "cards" }));
    }

    #[test]
    fn group_hands_out_one_ref_per_slot() {
        let group = TrackedGroup::new("cards", 4);
        assert_ne!(group.node(0), group.node(3));
        assert_eq!(group.attached(), Err(SetupError::Detached { group: "cards" }));
    }
}
