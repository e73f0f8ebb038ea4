use web_sys::{Element, HtmlElement};

use super::session::AnimationSession;
use super::trigger::{ScrollTrigger, TriggerStart};
use super::tween::{self, Pose, Tween};
use crate::error::SetupError;

/// One group of elements revealed by a trigger: hidden at `from` until the
/// trigger fires, then tweened to [`Pose::VISIBLE`].
pub struct RevealStep {
    pub targets: Vec<HtmlElement>,
    pub from: Pose,
    pub tween: Tween,
}

impl RevealStep {
    pub fn new(targets: Vec<HtmlElement>, from: Pose, tween: Tween) -> Self {
        Self { targets, from, tween }
    }
}

/// Hides every step's targets now and registers a one-shot trigger on
/// `trigger` that plays all steps. Everything is owned by `session`.
pub fn reveal_on_scroll(
    session: &AnimationSession,
    trigger: &Element,
    start: TriggerStart,
    steps: Vec<RevealStep>,
) -> Result<(), SetupError> {
    for step in &steps {
        session.register(tween::set(&step.targets, step.from));
    }

    let weak = session.downgrade();
    let trigger = ScrollTrigger::create(trigger, start, move || {
        if !weak.is_live() {
            return;
        }
        for step in &steps {
            weak.register(tween::animate_to(&step.targets, Pose::VISIBLE, step.tween));
        }
    })?;
    session.register(trigger);
    Ok(())
}
