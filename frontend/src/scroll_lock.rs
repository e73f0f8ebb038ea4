use log::debug;

/// Something whose overflow style controls page scrolling.
pub trait OverflowTarget {
    fn set_overflow(&self, value: &str);
}

/// The document body.
#[derive(Default)]
pub struct BodyOverflow;

impl OverflowTarget for BodyOverflow {
    fn set_overflow(&self, value: &str) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.style().set_property("overflow", value);
        }
    }
}

/// Page scroll stays disabled for as long as this guard lives.
pub struct ScrollLock<T: OverflowTarget = BodyOverflow> {
    target: T,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        debug!("Page scroll locked");
        target.set_overflow("hidden");
        Self { target }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        debug!("Page scroll unlocked");
        self.target.set_overflow("auto");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl OverflowTarget for Recorder {
        fn set_overflow(&self, value: &str) {
            self.0.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn lock_hides_overflow_until_dropped() {
        let recorder = Recorder::default();
        let lock = ScrollLock::acquire(recorder.clone());
        assert_eq!(*recorder.0.borrow(), vec!["hidden"]);
        drop(lock);
        assert_eq!(*recorder.0.borrow(), vec!["hidden", "auto"]);
    }

    #[test]
    fn lock_is_released_when_owner_unwinds() {
        let recorder = Recorder::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _lock = ScrollLock::acquire(recorder.clone());
            panic!("navigated away");
        }));
        assert!(result.is_err());
        assert_eq!(recorder.0.borrow().last().map(String::as_str), Some("auto"));
    }

    #[test]
    fn optional_lock_follows_open_state() {
        let recorder = Recorder::default();
        let mut held: Option<ScrollLock<Recorder>> = None;
        for open in [true, true, false, true, false] {
            if open && held.is_none() {
                held = Some(ScrollLock::acquire(recorder.clone()));
            } else if !open {
                held = None;
            }
        }
        assert!(held.is_none());
        assert_eq!(*recorder.0.borrow(), vec!["hidden", "auto", "hidden", "auto"]);
    }
}
