//! Default gesture thresholds in density-independent pixels.
//!
//! These are converted to pixels once, when a drawer gesture config is built
//! for a display density.

use fulldrag_graphics::Dp;

/// Movement below this distance is treated as tap jitter. Matches the usual
/// platform touch slop.
pub const TOUCH_SLOP: Dp = Dp(8.0);

/// Horizontal travel required before the panel starts following the pointer.
/// The same amount is subtracted from the live offset so the panel does not
/// jump when dragging begins.
pub const SWIPE_SLOP: Dp = Dp(8.0);

/// Release beyond this horizontal distance opens the panel unless a fling
/// says otherwise.
pub const COMMIT_DISTANCE: Dp = Dp(80.0);

/// Horizontal release speed, per second, above which the fling direction
/// decides the outcome.
pub const FLING_VELOCITY: Dp = Dp(150.0);
