//! Full-surface drag gestures for side drawers.
//!
//! [`FullDraggableContainer`] sits between a raw pointer stream and a drawer
//! host. It lets a horizontal drag that starts anywhere on the content open or
//! close a side drawer, while leaving taps, vertical scrolls and drags that
//! nested content can consume untouched.
//!
//! The work is split in two:
//! - [`GestureClassifier`] watches `Move` events and decides when to claim the
//!   stream from descendant content.
//! - [`DragStateMachine`] follows a claimed drag, pushes live offsets to the
//!   host and commits open or close on release.

mod classifier;
mod config;
mod container;
mod drag;
mod error;
mod gesture;
mod host;
mod listeners;
mod side;

#[cfg(test)]
mod test_support;

pub use classifier::{GestureClassifier, InterceptDecision};
pub use config::{DrawerGestureConfig, DEBUG_ENV_VAR};
pub use container::FullDraggableContainer;
pub use drag::{Commit, DragStateMachine, DragUpdate};
pub use error::AttachError;
pub use gesture::{ActiveDrag, GestureState, Outcome};
pub use host::{
    drag_eligible_side, has_unlocked_drawer, open_drawer_side, DrawerCapabilities, DrawerHandle,
    DrawerHost, DrawerState, LockMode, ViewParent,
};
pub use listeners::{DrawerListener, DrawerListeners, ListenerId};
pub use side::{DrawerGravity, LayoutDirection, PanelSide};

pub mod prelude {
    pub use crate::config::DrawerGestureConfig;
    pub use crate::container::FullDraggableContainer;
    pub use crate::error::AttachError;
    pub use crate::host::{DrawerCapabilities, DrawerHandle, DrawerHost, DrawerState, LockMode, ViewParent};
    pub use crate::listeners::{DrawerListener, DrawerListeners};
    pub use crate::side::{DrawerGravity, LayoutDirection, PanelSide};
}
