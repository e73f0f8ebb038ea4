/// Lays out tween start times the way a sequenced timeline does: each step
/// starts where the previous one ended, shifted by an optional offset
/// (negative offsets overlap the previous step).
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    cursor: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step lasting `span` seconds and returns its start time.
    pub fn add(&mut self, span: f64, offset: f64) -> f64 {
        let start = (self.cursor + offset).max(0.0);
        self.cursor = self.cursor.max(start + span);
        start
    }
}

/// Length of a staggered group: the last element starts `stagger * (n - 1)`
/// after the first and then runs for `duration`.
pub fn group_span(count: usize, duration: f64, stagger: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    duration + stagger * (count - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_run_back_to_back_without_offset() {
        let mut tl = Timeline::new();
        assert_eq!(tl.add(1.0, 0.0), 0.0);
        assert_eq!(tl.add(0.5, 0.0), 1.0);
        assert_eq!(tl.add(0.2, 0.0), 1.5);
    }

    #[test]
    fn negative_offset_overlaps_previous_step() {
        // logo 1s, links overlap by 0.5s, button overlaps the links by 0.5s
        let mut tl = Timeline::new();
        tl.add(1.0, 0.0);
        let links = tl.add(group_span(7, 0.8, 0.1), -0.5);
        assert!((links - 0.5).abs() < 1e-9);
        let button = tl.add(0.8, -0.5);
        assert!((button - 1.4).abs() < 1e-9);
    }

    #[test]
    fn start_never_goes_negative() {
        let mut tl = Timeline::new();
        assert_eq!(tl.add(0.3, -1.0), 0.0);
    }

    #[test]
    fn empty_group_has_no_span() {
        assert_eq!(group_span(0, 0.8, 0.1), 0.0);
        assert!((group_span(4, 0.6, 0.2) - 1.2).abs() < 1e-9);
    }
}
