//! Foundation elements for fulldrag: pointer input, velocity tracking and the
//! content-subtree drag capability.

pub mod content;
pub mod gesture_constants;
pub mod input;
pub mod velocity_tracker;

pub use content::{would_consume_horizontal_drag, ContentNode};
pub use input::{PointerDispatcher, PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::HorizontalVelocityTracker;

pub mod prelude {
    pub use crate::content::{would_consume_horizontal_drag, ContentNode};
    pub use crate::gesture_constants::*;
    pub use crate::input::prelude::*;
    pub use crate::velocity_tracker::HorizontalVelocityTracker;
    pub use fulldrag_graphics::prelude::*;
}
