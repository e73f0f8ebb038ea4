use std::rc::Rc;

use yew::prelude::*;

use crate::config::{DESKTOP_BREAKPOINT, HEADER_SCROLL_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Opaque,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            HeaderStyle::Opaque
        } else {
            HeaderStyle::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "transparent",
            HeaderStyle::Opaque => "opaque",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub header: HeaderStyle,
    pub drawer_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            header: HeaderStyle::Transparent,
            drawer_open: false,
        }
    }
}

pub enum NavAction {
    Scrolled(f64),
    Resized(f64),
    ToggleDrawer,
    CloseDrawer,
}

impl NavState {
    pub fn next(self, action: NavAction) -> NavState {
        match action {
            NavAction::Scrolled(y) => NavState {
                header: HeaderStyle::for_scroll(y),
                ..self
            },
            NavAction::Resized(width) if width >= DESKTOP_BREAKPOINT => NavState {
                drawer_open: false,
                ..self
            },
            NavAction::Resized(_) => self,
            NavAction::ToggleDrawer => NavState {
                drawer_open: !self.drawer_open,
                ..self
            },
            NavAction::CloseDrawer => NavState {
                drawer_open: false,
                ..self
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
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

    #[test]
    fn header_turns_opaque_past_threshold() {
        assert_eq!(HeaderStyle::for_scroll(0.0), HeaderStyle::Transparent);
        assert_eq!(HeaderStyle::for_scroll(10.0), HeaderStyle::Transparent);
        assert_eq!(HeaderStyle::for_scroll(11.0), HeaderStyle::Opaque);

        let state = NavState::default().next(NavAction::Scrolled(11.0));
        assert_eq!(state.header, HeaderStyle::Opaque);
        let state = state.next(NavAction::Scrolled(0.0));
        assert_eq!(state.header, HeaderStyle::Transparent);
    }

    #[test]
    fn desktop_resize_force_closes_drawer() {
        let open = NavState::default().next(NavAction::ToggleDrawer);
        assert!(open.drawer_open);
        assert!(open.next(NavAction::Resized(800.0)).drawer_open);
        assert!(!open.next(NavAction::Resized(1024.0)).drawer_open);
        assert!(!open.next(NavAction::Resized(1920.0)).drawer_open);
    }

    #[test]
    fn toggle_and_close() {
        let state = NavState::default();
        let open = state.next(NavAction::ToggleDrawer);
        assert!(!open.next(NavAction::ToggleDrawer).drawer_open);
        assert!(!open.next(NavAction::CloseDrawer).drawer_open);
        assert!(!state.next(NavAction::CloseDrawer).drawer_open);
    }

    #[test]
    fn scrolling_does_not_touch_the_drawer() {
        let open = NavState::default().next(NavAction::ToggleDrawer);
        assert!(open.next(NavAction::Scrolled(500.0)).drawer_open);
    }
}
