//! One-shot reveal-on-view latch.
//!
//! A `RevealLatch` flips to `true` the first time the observed box intersects
//! the viewport (shrunk by `margin` on both edges) and never flips back, no
//! matter where the page scrolls afterwards.

#[derive(Debug, Clone)]
pub struct RevealLatch {
    margin: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            revealed: false,
        }
    }

    /// Feeds one observation of the box (viewport-relative top/bottom edges)
    /// and returns the latched state.
    pub fn observe(&mut self, rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
        if !self.revealed {
            let in_view =
                rect_bottom > self.margin && rect_top < viewport_height - self.margin;
            if in_view {
                self.revealed = true;
            }
        }
        self.revealed
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_when_box_is_in_view_at_first_observation() {
        let mut latch = RevealLatch::new(0.0);
        assert!(latch.observe(100.0, 400.0, 800.0));
        assert!(latch.revealed());
    }

    #[test]
    fn stays_false_while_below_the_fold() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(900.0, 1200.0, 800.0));
        assert!(!latch.observe(810.0, 1110.0, 800.0));
        assert!(!latch.revealed());
    }

    #[test]
    fn never_resets_once_latched() {
        let mut latch = RevealLatch::new(0.0);
        assert!(latch.observe(100.0, 400.0, 800.0));
        // Scrolled far past the box in both directions.
        assert!(latch.observe(-2000.0, -1700.0, 800.0));
        assert!(latch.observe(5000.0, 5300.0, 800.0));
    }

    #[test]
    fn margin_shrinks_the_trigger_zone() {
        let mut latch = RevealLatch::new(50.0);
        // Bottom edge pokes 40 px into the viewport: inside the margin band.
        assert!(!latch.observe(760.0, 1060.0, 800.0));
        // 60 px in: past the margin.
        assert!(latch.observe(740.0, 1040.0, 800.0));
    }

    #[test]
    fn box_above_the_viewport_does_not_trigger() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(-500.0, -100.0, 800.0));
    }
}
