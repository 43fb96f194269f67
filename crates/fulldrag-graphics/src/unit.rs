//! Unit types: Dp, Density, and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

/// Pixel density of the hosting display (physical pixels per dp).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(f32);

impl Density {
    /// Baseline density (160 dpi).
    pub const BASELINE: Density = Density(1.0);

    /// Creates a density scale; non-finite or non-positive values fall back to
    /// the baseline.
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            Self::BASELINE
        }
    }

    pub fn scale(&self) -> f32 {
        self.0
    }

    /// Converts dp to whole pixels, rounding half up.
    pub fn dips_to_pixels(&self, dp: Dp) -> f32 {
        (dp.to_px(self.0) + 0.5).trunc()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}
