//! Pure geometry and unit math for fulldrag
//!
//! Points and rectangles used for hit testing the content subtree, plus the
//! density-independent units the gesture thresholds are declared in.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect};
    pub use crate::unit::{Density, Dp};
}
