use web_sys::HtmlElement;

use super::easing::Ease;
use super::session::Disposable;

/// Visual state a tween moves elements between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0 };
    pub const HIDDEN: Pose = Pose { opacity: 0.0, x: 0.0, y: 0.0 };

    pub fn hidden_x(x: f64) -> Self {
        Pose { x, ..Pose::HIDDEN }
    }

    pub fn hidden_y(y: f64) -> Self {
        Pose { y, ..Pose::HIDDEN }
    }

    pub fn transform_css(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }

    fn apply(&self, element: &HtmlElement) {
        let style = element.style();
        let _ = style.set_property("opacity", &self.opacity.to_string());
        let _ = style.set_property("transform", &self.transform_css());
    }
}

/// Timing of a tween across a group of elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration: f64,
    pub delay: f64,
    pub stagger: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::Power2Out,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Start offset of the `index`-th element of the group.
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    pub fn transition_css(&self, index: usize) -> String {
        let delay = self.delay_for(index);
        format!(
            "opacity {d:.3}s {e} {l:.3}s, transform {d:.3}s {e} {l:.3}s",
            d = self.duration,
            e = self.ease.css(),
            l = delay,
        )
    }
}

/// Inline pose applied by [`set`]. Disposing clears the inline properties so
/// the element falls back to its stylesheet (visible) state.
pub struct PoseHandle {
    elements: Vec<HtmlElement>,
}

impl Disposable for PoseHandle {
    fn dispose(&mut self) {
        for element in self.elements.drain(..) {
            let style = element.style();
            let _ = style.remove_property("transition");
            let _ = style.remove_property("opacity");
            let _ = style.remove_property("transform");
        }
    }
}

/// Transition started by [`animate_to`]. Disposing drops the transition so
/// the element jumps to the target pose instead of finishing the tween.
pub struct TweenHandle {
    elements: Vec<HtmlElement>,
}

impl Disposable for TweenHandle {
    fn dispose(&mut self) {
        for element in self.elements.drain(..) {
            let _ = element.style().remove_property("transition");
        }
    }
}

/// Applies `pose` immediately with transitions disabled.
pub fn set(elements: &[HtmlElement], pose: Pose) -> PoseHandle {
    for element in elements {
        let _ = element.style().set_property("transition", "none");
        pose.apply(element);
    }
    PoseHandle {
        elements: elements.to_vec(),
    }
}

/// Transitions `elements` to `pose`, staggering each by `tween.stagger`.
pub fn animate_to(elements: &[HtmlElement], pose: Pose, tween: Tween) -> TweenHandle {
    for (index, element) in elements.iter().enumerate() {
        // flush the current pose so the browser has a starting point
        let _ = element.offset_width();
        let _ = element
            .style()
            .set_property("transition", &tween.transition_css(index));
        pose.apply(element);
    }
    TweenHandle {
        elements: elements.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_offsets_each_element() {
        let tween = Tween::new(0.6).delay(0.1).stagger(0.15);
        assert!((tween.delay_for(0) - 0.1).abs() < 1e-9);
        assert!((tween.delay_for(2) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn transition_css_carries_duration_easing_and_delay() {
        let tween = Tween::new(0.8).stagger(0.1).ease(Ease::Power1Out);
        let bezier = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
        assert_eq!(
            tween.transition_css(3),
            format!("opacity 0.800s {b} 0.300s, transform 0.800s {b} 0.300s", b = bezier)
        );
    }

    #[test]
    fn hidden_poses_are_transparent_and_offset() {
        let pose = Pose::hidden_y(50.0);
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(pose.transform_css(), "translate3d(0px, 50px, 0)");
        assert_eq!(Pose::hidden_x(-20.0).transform_css(), "translate3d(-20px, 0px, 0)");
        assert_eq!(Pose::VISIBLE.transform_css(), "translate3d(0px, 0px, 0)");
    }
}
