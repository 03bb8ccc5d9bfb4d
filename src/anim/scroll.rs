//! Scroll progress: raw fraction plus a spring smoother for display.

/// Fraction of the total scrollable distance consumed, clamped to `[0, 1]`.
///
/// A page with no scrollable overflow (`max <= 0`) reports 0.
pub fn scroll_fraction(offset: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (offset / max).clamp(0.0, 1.0)
}

/// Damped spring following a moving target, stepped once per frame.
///
/// The displayed scroll fraction runs through this so it eases toward the raw
/// value instead of jumping with each scroll event.
#[derive(Debug, Clone)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    position: f64,
    velocity: f64,
    target: f64,
}

/// Below this distance and speed the spring snaps onto its target.
const REST_DELTA: f64 = 0.001;

/// Step cap so a long frame (tab in background) cannot destabilize the
/// integration.
const MAX_STEP_SECONDS: f64 = 0.05;

impl Spring {
    /// A spring that settles as fast as possible without oscillating
    /// (damping = 2√stiffness).
    pub fn critically_damped(initial: f64, stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * stiffness.sqrt(),
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_DELTA
    }

    /// Advances the spring by `dt_seconds` (semi-implicit Euler) and returns
    /// the new position.
    pub fn step(&mut self, dt_seconds: f64) -> f64 {
        let dt = dt_seconds.clamp(0.0, MAX_STEP_SECONDS);
        let accel = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn zero_scroll_range_reports_zero() {
        assert_eq!(scroll_fraction(0.0, 0.0), 0.0);
        assert_eq!(scroll_fraction(500.0, 0.0), 0.0);
        assert_eq!(scroll_fraction(500.0, -1.0), 0.0);
    }

    #[test]
    fn raw_fraction_is_proportional() {
        assert_eq!(scroll_fraction(250.0, 1000.0), 0.25);
        assert_eq!(scroll_fraction(0.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(1000.0, 1000.0), 1.0);
    }

    #[test]
    fn raw_fraction_clamps_overscroll() {
        // Rubber-band overscroll can report offsets outside the range.
        assert_eq!(scroll_fraction(-30.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(1200.0, 1000.0), 1.0);
    }

    #[test]
    fn spring_converges_onto_its_target() {
        let mut s = Spring::critically_damped(0.0, 100.0);
        s.set_target(0.8);
        for _ in 0..600 {
            s.step(FRAME);
        }
        assert!(s.is_settled());
        assert_eq!(s.position(), 0.8);
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot() {
        let mut s = Spring::critically_damped(0.0, 100.0);
        s.set_target(1.0);
        for _ in 0..600 {
            let p = s.step(FRAME);
            assert!(p <= 1.0 + 1e-3, "overshot to {p}");
        }
    }

    #[test]
    fn spring_lags_rather_than_jumping() {
        let mut s = Spring::critically_damped(0.0, 100.0);
        s.set_target(1.0);
        let first = s.step(FRAME);
        assert!(first > 0.0);
        assert!(first < 0.5);
    }

    #[test]
    fn retargeting_midway_redirects_the_motion() {
        let mut s = Spring::critically_damped(0.0, 100.0);
        s.set_target(1.0);
        for _ in 0..10 {
            s.step(FRAME);
        }
        s.set_target(0.0);
        for _ in 0..600 {
            s.step(FRAME);
        }
        assert_eq!(s.position(), 0.0);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut s = Spring::critically_damped(0.0, 100.0);
        s.set_target(1.0);
        // A 2 s frame must behave like the capped step, not explode.
        let p = s.step(2.0);
        assert!(p.is_finite());
        assert!((0.0..=1.0).contains(&p));
    }
}
