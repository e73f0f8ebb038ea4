use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::session::Disposable;
use crate::error::SetupError;

/// Where the trigger element's top edge must reach before the trigger fires,
/// as a percentage of viewport height measured from the top ("top 85%").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerStart {
    viewport_pct: u8,
}

impl TriggerStart {
    pub fn top(viewport_pct: u8) -> Self {
        Self {
            viewport_pct: viewport_pct.min(100),
        }
    }

    pub fn viewport_pct(&self) -> u8 {
        self.viewport_pct
    }

    /// Root margin that shrinks the viewport's bottom edge up to the start
    /// line, so an intersection means the element has crossed it.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", 100 - self.viewport_pct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerLatch {
    Armed,
    Fired,
    Killed,
}

impl TriggerLatch {
    /// Moves an armed latch to fired. Returns whether the callback should run.
    pub fn fire(&mut self) -> bool {
        if *self == TriggerLatch::Armed {
            *self = TriggerLatch::Fired;
            true
        } else {
            false
        }
    }

    pub fn kill(&mut self) {
        *self = TriggerLatch::Killed;
    }
}

/// One-shot scroll trigger. Runs its callback the first time the element
/// crosses the start line (or is already past it) and then stops observing.
pub struct ScrollTrigger {
    observer: IntersectionObserver,
    latch: Rc<Cell<TriggerLatch>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollTrigger {
    pub fn create<F>(element: &Element, start: TriggerStart, on_enter: F) -> Result<Self, SetupError>
    where
        F: FnOnce() + 'static,
    {
        let latch = Rc::new(Cell::new(TriggerLatch::Armed));
        let mut on_enter = Some(on_enter);

        let callback = {
            let latch = latch.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let crossed = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| {
                            // an element scrolled entirely above the viewport
                            // is past the start line too
                            entry.is_intersecting() || entry.bounding_client_rect().bottom() < 0.0
                        })
                        .unwrap_or(false)
                });
                if !crossed {
                    return;
                }
                let mut state = latch.get();
                if state.fire() {
                    latch.set(state);
                    observer.disconnect();
                    debug!("Scroll trigger fired at top {}%", start.viewport_pct());
                    if let Some(on_enter) = on_enter.take() {
                        on_enter();
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&start.root_margin());
        options.set_threshold(&JsValue::from_f64(0.0));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            latch,
            _callback: callback,
        })
    }
}

/// The parts of an observer a trigger needs when shutting down.
trait Observation {
    fn discard_pending(&self);
    fn stop(&self);
}

impl Observation for IntersectionObserver {
    fn discard_pending(&self) {
        let _ = self.take_records();
    }

    fn stop(&self) {
        self.disconnect();
    }
}

/// Kills the latch and drops entries queued for this frame before
/// disconnecting, so the callback is never invoked once the trigger is gone.
fn shut_down(latch: &Cell<TriggerLatch>, observer: &impl Observation) {
    let mut state = latch.get();
    state.kill();
    latch.set(state);
    observer.discard_pending();
    observer.stop();
}

impl Disposable for ScrollTrigger {
    fn dispose(&mut self) {
        shut_down(&self.latch, &self.observer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<&'static str>>);

    impl Observation for Recorder {
        fn discard_pending(&self) {
            self.0.borrow_mut().push("discard");
        }

        fn stop(&self) {
            self.0.borrow_mut().push("stop");
        }
    }

    #[test]
    fn shut_down_discards_queued_entries_before_disconnecting() {
        let latch = Cell::new(TriggerLatch::Armed);
        let observer = Recorder::default();
        shut_down(&latch, &observer);
        assert_eq!(*observer.0.borrow(), vec!["discard", "stop"]);
        assert_eq!(latch.get(), TriggerLatch::Killed);
    }

    #[test]
    fn shut_down_after_firing_still_kills_the_latch() {
        let latch = Cell::new(TriggerLatch::Fired);
        let observer = Recorder::default();
        shut_down(&latch, &observer);
        let mut state = latch.get();
        assert!(!state.fire());
        assert_eq!(state, TriggerLatch::Killed);
    }

    #[test]
    fn root_margin_pulls_bottom_edge_up_to_start_line() {
        assert_eq!(TriggerStart::top(85).root_margin(), "0px 0px -15% 0px");
        assert_eq!(TriggerStart::top(70).root_margin(), "0px 0px -30% 0px");
        assert_eq!(TriggerStart::top(100).root_margin(), "0px 0px -0% 0px");
    }

    #[test]
    fn start_is_capped_at_full_viewport() {
        assert_eq!(TriggerStart::top(140).viewport_pct(), 100);
    }

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = TriggerLatch::Armed;
        assert!(latch.fire());
        assert_eq!(latch, TriggerLatch::Fired);
        // scrolling back out and in again does not replay
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn killed_latch_never_fires() {
        let mut latch = TriggerLatch::Armed;
        latch.kill();
        assert!(!latch.fire());
        assert_eq!(latch, TriggerLatch::Killed);
    }
}
