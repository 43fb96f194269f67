//! Gesture thresholds, resolved to pixels once per display density.

use fulldrag_foundation::gesture_constants::{
    COMMIT_DISTANCE, FLING_VELOCITY, SWIPE_SLOP, TOUCH_SLOP,
};
use fulldrag_graphics::{Density, Dp};

/// Setting this variable turns on per-event decision logging.
pub const DEBUG_ENV_VAR: &str = "FULLDRAG_DEBUG";

/// Pixel thresholds for one container. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerGestureConfig {
    touch_slop: f32,
    swipe_slop: f32,
    distance_threshold: f32,
    x_velocity_threshold: f32,
    log_events: bool,
}

impl DrawerGestureConfig {
    pub fn new(density: Density) -> Self {
        Self {
            touch_slop: density.dips_to_pixels(TOUCH_SLOP),
            swipe_slop: density.dips_to_pixels(SWIPE_SLOP),
            distance_threshold: density.dips_to_pixels(COMMIT_DISTANCE),
            x_velocity_threshold: density.dips_to_pixels(FLING_VELOCITY),
            log_events: false,
        }
    }

    /// Same as [`new`](Self::new), with event logging enabled when
    /// `FULLDRAG_DEBUG` is set.
    pub fn from_env(density: Density) -> Self {
        Self::new(density).with_event_logging(std::env::var_os(DEBUG_ENV_VAR).is_some())
    }

    /// Overrides the touch slop with a platform-reported value in pixels.
    pub fn with_touch_slop(mut self, pixels: f32) -> Self {
        self.touch_slop = pixels.max(0.0);
        self
    }

    pub fn with_swipe_slop(mut self, pixels: f32) -> Self {
        self.swipe_slop = pixels.max(0.0);
        self
    }

    pub fn with_distance_threshold(mut self, pixels: f32) -> Self {
        self.distance_threshold = pixels.max(0.0);
        self
    }

    /// Pixels per second.
    pub fn with_x_velocity_threshold(mut self, pixels_per_second: f32) -> Self {
        self.x_velocity_threshold = pixels_per_second.max(0.0);
        self
    }

    pub fn with_touch_slop_dp(self, dp: Dp, density: Density) -> Self {
        self.with_touch_slop(density.dips_to_pixels(dp))
    }

    pub fn with_event_logging(mut self, enabled: bool) -> Self {
        self.log_events = enabled;
        self
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn swipe_slop(&self) -> f32 {
        self.swipe_slop
    }

    pub fn distance_threshold(&self) -> f32 {
        self.distance_threshold
    }

    pub fn x_velocity_threshold(&self) -> f32 {
        self.x_velocity_threshold
    }

    pub fn logs_events(&self) -> bool {
        self.log_events
    }
}

impl Default for DrawerGestureConfig {
    fn default() -> Self {
        Self::new(Density::BASELINE)
    }
}
