/// Easing curves used by the site's tweens. Each curve has a scalar form for
/// frame-driven animations (counters) and a CSS form for transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Power1Out,
    Power1InOut,
    Power2Out,
    /// Overshoots slightly before settling.
    BackOut,
}

const BACK_OVERSHOOT: f64 = 1.2;

impl Ease {
    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::BackOut => {
                let s = BACK_OVERSHOOT;
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Ease::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::Power1InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.4, 0.64, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2Out,
        Ease::BackOut,
    ];

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", ease);
        }
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
    }

    #[test]
    fn power_curves_are_monotonic() {
        for ease in [Ease::Power1Out, Ease::Power1InOut, Ease::Power2Out] {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = ease.apply(step as f64 / 100.0);
                assert!(value >= last, "{:?} decreased at step {}", ease, step);
                last = value;
            }
        }
    }

    #[test]
    fn in_out_is_symmetric_around_midpoint() {
        assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-9);
        let a = Ease::Power1InOut.apply(0.25);
        let b = Ease::Power1InOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|step| Ease::BackOut.apply(step as f64 / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }
}
