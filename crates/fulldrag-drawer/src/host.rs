//! The drawer host contract.
//!
//! A host is the drawer layout that owns the side panels: it renders them at a
//! slide offset, animates them open or closed and keeps the listener list.
//! The container only talks to it through [`DrawerHost`].

use crate::side::PanelSide;
use std::rc::Rc;

/// Opaque reference to a drawer view inside its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawerHandle(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockMode {
    #[default]
    Unlocked,
    LockedClosed,
    LockedOpen,
}

impl LockMode {
    pub fn is_unlocked(self) -> bool {
        self == LockMode::Unlocked
    }
}

/// Drawer motion state reported to listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerState {
    Idle,
    Dragging,
    Settling,
}

/// Capabilities a host advertises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DrawerCapabilities(u32);

impl DrawerCapabilities {
    pub const NONE: Self = Self(0);
    /// Host can place a drawer at an arbitrary slide offset.
    pub const LIVE_OFFSET: Self = Self(1 << 0);
    /// Host forwards drag-state notifications to its listeners.
    pub const DRAG_LISTENERS: Self = Self(1 << 1);
    /// Everything the container needs.
    pub const REQUIRED: Self = Self(Self::LIVE_OFFSET.0 | Self::DRAG_LISTENERS.0);

    pub const fn empty() -> Self {
        Self::NONE
    }

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

pub trait DrawerHost {
    fn capabilities(&self) -> DrawerCapabilities;

    /// True if the drawer on `side` is fully open.
    fn is_drawer_open(&self, side: PanelSide) -> bool;

    fn drawer_lock_mode(&self, side: PanelSide) -> LockMode;

    fn find_drawer(&self, side: PanelSide) -> Option<DrawerHandle>;

    fn drawer_width(&self, drawer: DrawerHandle) -> f32;

    /// Places the drawer at `slide_offset` of its width and makes it visible.
    /// The offset can exceed 1.0 during a long drag; the host clamps.
    fn move_drawer_to_offset(&self, drawer: DrawerHandle, slide_offset: f32);

    fn open_drawer(&self, side: PanelSide, animate: bool);

    fn close_drawer(&self, side: PanelSide, animate: bool);

    /// Forwards `state` to every registered drawer listener, newest first.
    fn dispatch_drawer_state(&self, state: DrawerState);

    /// Requests a redraw after a live offset change.
    fn invalidate(&self) {}
}

/// The parent a container gets attached to.
pub trait ViewParent {
    fn as_drawer_host(&self) -> Option<Rc<dyn DrawerHost>> {
        None
    }
}

/// A side is drag-eligible when it is unlocked and actually has a drawer.
pub fn has_unlocked_drawer(host: &dyn DrawerHost, side: PanelSide) -> bool {
    host.drawer_lock_mode(side).is_unlocked() && host.find_drawer(side).is_some()
}

/// The side a horizontal displacement would drag, if that side is eligible.
pub fn drag_eligible_side(host: &dyn DrawerHost, diff_x: f32) -> Option<PanelSide> {
    PanelSide::from_displacement(diff_x).filter(|side| has_unlocked_drawer(host, *side))
}

/// The open drawer, if any. Left wins when both report open.
pub fn open_drawer_side(host: &dyn DrawerHost) -> Option<PanelSide> {
    PanelSide::ALL
        .into_iter()
        .find(|side| host.is_drawer_open(*side))
}
