//! Easing curves for the presentational animations.

/// Ease-out cubic: fast early progress, decelerating toward the target.
///
/// `t` is clamped to `[0, 1]` before evaluation.
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_out_clamps_out_of_range_input() {
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn ease_out_leads_linear_progress() {
        // Rapid early progress: the curve stays above the identity line.
        for i in 1..10 {
            let t = f64::from(i) / 10.0;
            assert!(ease_out_cubic(t) > t, "t = {t}");
        }
    }

    #[test]
    fn ease_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out_cubic(f64::from(i) / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(10.0, 0.0, 0.25), 7.5);
    }
}
