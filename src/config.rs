//! Fixed timings and thresholds for the page animations.

/// Wall-clock length of a stat count-up.
pub const COUNT_UP_DURATION_MS: f64 = 2500.0;

/// How long the loading splash stays up before the site renders.
pub const LOADING_SPLASH_MS: u32 = 3000;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS_MS: u32 = 5000;

/// Default viewport inset for reveal triggers; a section counts as visible
/// only once it is this far inside the viewport edge.
pub const REVEAL_MARGIN_PX: f64 = 50.0;

/// Scroll offset past which the navbar switches to its solid background.
pub const NAV_SCROLLED_AFTER_PX: f64 = 20.0;

/// Stiffness of the scroll-progress smoothing spring (critically damped).
pub const SCROLL_SPRING_STIFFNESS: f64 = 100.0;
