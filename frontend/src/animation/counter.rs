use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::HtmlElement;

use super::easing::Ease;
use super::session::Disposable;
use crate::config;

/// Display suffix of an animated statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterSuffix {
    /// "5,000+", grouped with thousands separators.
    Plus,
    /// "100%"
    Percent,
    /// "15k+"
    KPlus,
}

impl CounterSuffix {
    /// Rounds `value` to the nearest integer and renders it with the suffix.
    pub fn format(self, value: f64) -> String {
        let rounded = value.max(0.0).round() as u64;
        match self {
            CounterSuffix::Plus => format!("{}+", group_thousands(rounded)),
            CounterSuffix::Percent => format!("{}%", rounded),
            CounterSuffix::KPlus => format!("{}k+", rounded),
        }
    }
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Count-up from zero to `target`. Times are in seconds from when the
/// counter's trigger fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTween {
    pub target: u32,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl CounterTween {
    pub fn value_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.target as f64;
        }
        let progress = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        self.ease.apply(progress) * self.target as f64
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Running counter; disposing stops the frame interval.
pub struct CounterHandle {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl Disposable for CounterHandle {
    fn dispose(&mut self) {
        if let Some(interval) = self.interval.borrow_mut().take() {
            drop(interval);
        }
    }
}

/// Starts writing the counter's formatted value into `element` every frame
/// until it reaches its target.
pub fn start(element: HtmlElement, suffix: CounterSuffix, tween: CounterTween) -> CounterHandle {
    let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let started_at = js_sys::Date::now();

    element.set_text_content(Some(&suffix.format(0.0)));

    let interval = {
        let interval_handle = interval_handle.clone();
        Interval::new(config::COUNTER_FRAME_MS, move || {
            let elapsed = (js_sys::Date::now() - started_at) / 1000.0;
            element.set_text_content(Some(&suffix.format(tween.value_at(elapsed))));
            if tween.is_finished(elapsed) {
                // Stop ticking once the target is on screen
                interval_handle.borrow_mut().take();
            }
        })
    };
    *interval_handle.borrow_mut() = Some(interval);

    CounterHandle {
        interval: interval_handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(target: u32) -> CounterTween {
        CounterTween {
            target,
            duration: 2.5,
            delay: 0.2,
            ease: Ease::Power1InOut,
        }
    }

    #[test]
    fn final_values_match_their_suffix_rules() {
        for (target, suffix, expected) in [
            (5000, CounterSuffix::Plus, "5,000+"),
            (100, CounterSuffix::Percent, "100%"),
            (15, CounterSuffix::KPlus, "15k+"),
        ] {
            let tween = tween(target);
            let end = tween.delay + tween.duration;
            assert_eq!(suffix.format(tween.value_at(end)), expected);
        }
    }

    #[test]
    fn intermediate_values_round_to_nearest() {
        assert_eq!(CounterSuffix::Plus.format(1234.5), "1,235+");
        assert_eq!(CounterSuffix::Percent.format(49.4), "49%");
        assert_eq!(CounterSuffix::KPlus.format(0.6), "1k+");
    }

    #[test]
    fn counter_holds_at_zero_during_delay() {
        let tween = tween(5000);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(0.19), 0.0);
        assert!(!tween.is_finished(1.0));
        assert!(tween.is_finished(2.7));
    }

    #[test]
    fn counter_never_overshoots_target() {
        let tween = tween(100);
        assert_eq!(tween.value_at(60.0), 100.0);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
