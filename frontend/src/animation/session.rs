use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use yew::prelude::*;

use crate::error::SetupError;

/// Anything an animation session can own and later tear down: scroll
/// triggers, running tweens, counters, applied poses.
pub trait Disposable {
    fn dispose(&mut self);
}

struct SessionInner {
    label: &'static str,
    handles: Vec<Box<dyn Disposable>>,
    disposed: bool,
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        for handle in self.handles.iter_mut() {
            handle.dispose();
        }
    }
}

/// Bundles every trigger and tween a component registers so they can be
/// released with one call on unmount or when the animation parameters change.
#[derive(Clone)]
pub struct AnimationSession {
    inner: Rc<RefCell<SessionInner>>,
}

impl AnimationSession {
    pub fn new(label: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                label,
                handles: Vec::new(),
                disposed: false,
            })),
        }
    }

    /// Takes ownership of `handle`. Registering on a disposed session
    /// disposes the handle straight away.
    pub fn register<D: Disposable + 'static>(&self, handle: D) {
        let mut handle: Box<dyn Disposable> = Box::new(handle);
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            drop(inner);
            handle.dispose();
            return;
        }
        inner.handles.push(handle);
    }

    pub fn dispose(&self) {
        let (label, handles) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            (inner.label, std::mem::take(&mut inner.handles))
        };
        debug!("Disposing {} animation session ({} handles)", label, handles.len());
        // handles are disposed outside the borrow: dropping a trigger drops
        // its callback, which may hold a weak reference back to this session
        for mut handle in handles {
            handle.dispose();
        }
    }

    /// Handle for callbacks that outlive the setup call. Holding the session
    /// strongly from inside one of its own triggers would form a cycle.
    pub fn downgrade(&self) -> WeakSession {
        WeakSession {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

#[derive(Clone)]
pub struct WeakSession {
    inner: Weak<RefCell<SessionInner>>,
}

impl WeakSession {
    /// Registers on the session if it is still alive, otherwise disposes.
    pub fn register<D: Disposable + 'static>(&self, handle: D) {
        match self.inner.upgrade() {
            Some(inner) => AnimationSession { inner }.register(handle),
            None => {
                let mut handle = handle;
                handle.dispose();
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| !inner.borrow().disposed)
            .unwrap_or(false)
    }
}

/// Runs `setup` against a fresh session whenever `deps` change. The session
/// is disposed when `deps` change again or the component unmounts. A failed
/// setup is logged and leaves the content static.
#[hook]
pub fn use_animation_session<D, F>(label: &'static str, deps: D, setup: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&AnimationSession, &D) -> Result<(), SetupError> + 'static,
{
    use_effect_with_deps(
        move |deps| {
            let session = AnimationSession::new(label);
            if let Err(err) = setup(&session, deps) {
                warn!("{} section not ready for animation: {}", label, err);
                session.dispose();
            }
            move || session.dispose()
        },
        deps,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Probe(Rc<Cell<u32>>);

    impl Disposable for Probe {
        fn dispose(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn probe() -> (Probe, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        (Probe(count.clone()), count)
    }

    #[test]
    fn dispose_releases_every_handle_once() {
        let session = AnimationSession::new("test");
        let (a, a_count) = probe();
        let (b, b_count) = probe();
        session.register(a);
        session.register(b);
        assert_eq!(a_count.get(), 0);

        session.dispose();
        session.dispose();
        drop(session);

        assert_eq!(a_count.get(), 1);
        assert_eq!(b_count.get(), 1);
    }

    #[test]
    fn late_registration_is_disposed_immediately() {
        let session = AnimationSession::new("test");
        session.dispose();
        let (late, count) = probe();
        session.register(late);
        assert_eq!(count.get(), 1);

        drop(session);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn weak_handle_registers_while_session_lives() {
        let session = AnimationSession::new("test");
        let weak = session.downgrade();
        assert!(weak.is_live());
        let (tween, count) = probe();
        weak.register(tween);
        assert_eq!(count.get(), 0);

        session.dispose();
        assert!(!weak.is_live());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn weak_handle_disposes_after_session_dropped() {
        let session = AnimationSession::new("test");
        let weak = session.downgrade();
        drop(session);
        let (tween, count) = probe();
        weak.register(tween);
        assert_eq!(count.get(), 1);
        assert!(!weak.is_live());
    }

    #[test]
    fn dropping_last_clone_disposes_outstanding_handles() {
        let (handle, count) = probe();
        {
            let session = AnimationSession::new("test");
            let clone = session.clone();
            clone.register(handle);
        }
        assert_eq!(count.get(), 1);
    }
}
