use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{DESKTOP_BREAKPOINT, LARGE_DESKTOP_BREAKPOINT, TABLET_BREAKPOINT};

/// Width class used to pick animation offsets and timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportBucket {
    Mobile,
    Tablet,
    Desktop,
    LargeDesktop,
}

impl ViewportBucket {
    pub fn from_width(width: f64) -> Self {
        if width < TABLET_BREAKPOINT {
            ViewportBucket::Mobile
        } else if width < DESKTOP_BREAKPOINT {
            ViewportBucket::Tablet
        } else if width < LARGE_DESKTOP_BREAKPOINT {
            ViewportBucket::Desktop
        } else {
            ViewportBucket::LargeDesktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportBucket::Mobile
    }

    /// Picks the value for this bucket.
    pub fn pick<T>(self, mobile: T, tablet: T, desktop: T, large: T) -> T {
        match self {
            ViewportBucket::Mobile => mobile,
            ViewportBucket::Tablet => tablet,
            ViewportBucket::Desktop => desktop,
            ViewportBucket::LargeDesktop => large,
        }
    }
}

/// Current viewport bucket. Components only re-run their animation setup when
/// the bucket changes, not on every resize.
#[hook]
pub fn use_viewport_bucket() -> ViewportBucket {
    let (width, _height) = use_window_size();
    ViewportBucket::from_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_buckets_at_breakpoints() {
        assert_eq!(ViewportBucket::from_width(0.0), ViewportBucket::Mobile);
        assert_eq!(ViewportBucket::from_width(767.0), ViewportBucket::Mobile);
        assert_eq!(ViewportBucket::from_width(768.0), ViewportBucket::Tablet);
        assert_eq!(ViewportBucket::from_width(1023.0), ViewportBucket::Tablet);
        assert_eq!(ViewportBucket::from_width(1024.0), ViewportBucket::Desktop);
        assert_eq!(ViewportBucket::from_width(1439.0), ViewportBucket::Desktop);
        assert_eq!(ViewportBucket::from_width(1440.0), ViewportBucket::LargeDesktop);
    }

    #[test]
    fn pick_selects_the_matching_value() {
        let offsets = |b: ViewportBucket| b.pick(-20, -30, -50, -60);
        assert_eq!(offsets(ViewportBucket::Mobile), -20);
        assert_eq!(offsets(ViewportBucket::Tablet), -30);
        assert_eq!(offsets(ViewportBucket::Desktop), -50);
        assert_eq!(offsets(ViewportBucket::LargeDesktop), -60);
    }
}
