use std::rc::Rc;

use yew::prelude::*;

use crate::content::GalleryImage;

/// At most one enlarged image is shown at a time.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(&'static GalleryImage),
}

pub enum LightboxAction {
    Open(&'static GalleryImage),
    Close,
    /// A key pressed anywhere on the page.
    Key(String),
}

impl LightboxState {
    pub fn next(self, action: LightboxAction) -> LightboxState {
        match action {
            LightboxAction::Open(image) => LightboxState::Open(image),
            LightboxAction::Close => LightboxState::Closed,
            LightboxAction::Key(key) if key == "Escape" => LightboxState::Closed,
            LightboxAction::Key(_) => self,
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GALLERY_IMAGES;

    #[test]
    fn last_open_wins() {
        let state = LightboxState::Closed
            .next(LightboxAction::Open(&GALLERY_IMAGES[0]))
            .next(LightboxAction::Open(&GALLERY_IMAGES[1]));
        assert_eq!(state, LightboxState::Open(&GALLERY_IMAGES[1]));
    }

    #[test]
    fn close_and_escape_both_close() {
        let open = LightboxState::Open(&GALLERY_IMAGES[2]);
        assert_eq!(open.next(LightboxAction::Close), LightboxState::Closed);
        assert_eq!(
            open.next(LightboxAction::Key("Escape".to_string())),
            LightboxState::Closed
        );
    }

    #[test]
    fn other_keys_leave_lightbox_open() {
        let open = LightboxState::Open(&GALLERY_IMAGES[2]);
        assert_eq!(open.next(LightboxAction::Key("Enter".to_string())), open);
    }

    #[test]
    fn escape_while_closed_is_a_no_op() {
        let state = Rc::new(LightboxState::Closed);
        let next = state.clone().reduce(LightboxAction::Key("Escape".to_string()));
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(*next, LightboxState::Closed);
    }

    #[test]
    fn close_dispatches_once_per_click() {
        let open = Rc::new(LightboxState::Open(&GALLERY_IMAGES[0]));
        let closed = open.reduce(LightboxAction::Close);
        assert_eq!(*closed, LightboxState::Closed);
        let again = closed.clone().reduce(LightboxAction::Close);
        assert!(Rc::ptr_eq(&closed, &again));
    }
}
