//! One-shot count-up animation for the stats band.
//!
//! A `CountUp` interpolates from a start to an end integer over a fixed
//! wall-clock duration with an ease-out curve, rounding each sample for
//! display. It runs at most once: arming while running or finished is a no-op.

use super::ease::{ease_out_cubic, lerp};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pending,
    Running { started_at: f64 },
    Done,
}

#[derive(Debug, Clone)]
pub struct CountUp {
    start: i64,
    end: i64,
    duration_ms: f64,
    phase: Phase,
}

impl CountUp {
    pub fn new(start: i64, end: i64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            phase: Phase::Pending,
        }
    }

    /// Begins the animation at `now_ms`. Only the first arm has any effect.
    pub fn arm(&mut self, now_ms: f64) {
        if let Phase::Pending = self.phase {
            self.phase = Phase::Running { started_at: now_ms };
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// The displayed value at `now_ms`.
    ///
    /// Unarmed counters report the start value; finished counters are pinned
    /// exactly to the end value so float rounding can never leave the display
    /// one unit short.
    pub fn sample(&mut self, now_ms: f64) -> i64 {
        match self.phase {
            Phase::Pending => self.start,
            Phase::Done => self.end,
            Phase::Running { started_at } => {
                let elapsed = (now_ms - started_at).max(0.0);
                if elapsed >= self.duration_ms || self.duration_ms <= 0.0 {
                    self.phase = Phase::Done;
                    return self.end;
                }
                let t = ease_out_cubic(elapsed / self.duration_ms);
                lerp(self.start as f64, self.end as f64, t).round() as i64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_holds_start_value() {
        let mut c = CountUp::new(7, 500, 2500.0);
        assert_eq!(c.sample(0.0), 7);
        assert_eq!(c.sample(10_000.0), 7);
        assert!(!c.is_running());
    }

    #[test]
    fn finishes_exactly_on_end_value() {
        for (start, end) in [(0, 150), (0, 10_000), (3, 3), (5, 9999)] {
            let mut c = CountUp::new(start, end, 2500.0);
            c.arm(100.0);
            c.sample(1300.0);
            assert_eq!(c.sample(100.0 + 2500.0), end);
            assert!(c.is_done());
        }
    }

    #[test]
    fn samples_are_monotonic_and_bounded() {
        let mut c = CountUp::new(0, 500, 2500.0);
        c.arm(0.0);
        let mut prev = 0;
        let mut ms = 0.0;
        while ms <= 3000.0 {
            let v = c.sample(ms);
            assert!(v >= prev, "decreased at {ms} ms: {prev} -> {v}");
            assert!((0..=500).contains(&v));
            prev = v;
            ms += 16.0;
        }
        assert_eq!(prev, 500);
    }

    #[test]
    fn descending_range_is_monotonic_downward() {
        let mut c = CountUp::new(100, 25, 2500.0);
        c.arm(0.0);
        let mut prev = 100;
        let mut ms = 0.0;
        while ms <= 2600.0 {
            let v = c.sample(ms);
            assert!(v <= prev);
            assert!((25..=100).contains(&v));
            prev = v;
            ms += 16.0;
        }
        assert_eq!(prev, 25);
    }

    #[test]
    fn rearming_after_completion_does_not_restart() {
        let mut c = CountUp::new(0, 150, 2500.0);
        c.arm(0.0);
        assert_eq!(c.sample(5000.0), 150);
        c.arm(6000.0);
        assert_eq!(c.sample(6016.0), 150);
        assert!(c.is_done());
    }

    #[test]
    fn arming_while_running_keeps_the_original_clock() {
        let mut c = CountUp::new(0, 1000, 2500.0);
        c.arm(0.0);
        let midway = c.sample(1250.0);
        c.arm(1250.0);
        // A restart would drop the value back toward zero.
        assert!(c.sample(1266.0) >= midway);
    }

    #[test]
    fn clock_going_backwards_clamps_to_start() {
        let mut c = CountUp::new(10, 20, 2500.0);
        c.arm(1000.0);
        assert_eq!(c.sample(500.0), 10);
    }
}
