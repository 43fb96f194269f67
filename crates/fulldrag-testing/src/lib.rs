//! Testing utilities for fulldrag
//!
//! - [`FakeDrawerLayout`]: an in-memory drawer host that settles instantly
//!   and records every request it receives.
//! - [`FakeView`]: a content tree node with optional horizontal scrolling.
//! - [`GestureRobot`]: scripts timed pointer gestures and replays them
//!   through a container.

pub mod drawer_layout;
pub mod robot;
pub mod view;

pub use drawer_layout::{DrawerRequest, FakeDrawerLayout, PlainParent, RecordingListener};
pub use robot::{DispatchRecord, GestureRobot};
pub use view::FakeView;

pub mod prelude {
    pub use crate::drawer_layout::{DrawerRequest, FakeDrawerLayout, PlainParent, RecordingListener};
    pub use crate::robot::{DispatchRecord, GestureRobot};
    pub use crate::view::FakeView;
}
