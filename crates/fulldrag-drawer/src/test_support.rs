use crate::host::{DrawerCapabilities, DrawerHandle, DrawerHost, DrawerState, LockMode};
use crate::side::PanelSide;
use std::cell::{Cell, RefCell};

#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Offset(PanelSide, f32),
    Open(PanelSide),
    Close(PanelSide),
    State(DrawerState),
}

/// Host with one optional drawer per side, recording every mutation.
pub struct MockHost {
    pub left: Cell<Option<LockMode>>,
    pub right: Cell<Option<LockMode>>,
    pub open: Cell<Option<PanelSide>>,
    pub width: f32,
    pub calls: RefCell<Vec<HostCall>>,
}

impl MockHost {
    pub fn with_left() -> Self {
        Self {
            left: Cell::new(Some(LockMode::Unlocked)),
            right: Cell::new(None),
            open: Cell::new(None),
            width: 300.0,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_both() -> Self {
        let host = Self::with_left();
        host.right.set(Some(LockMode::Unlocked));
        host
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    fn side_of(drawer: DrawerHandle) -> PanelSide {
        if drawer.0 == 0 {
            PanelSide::Left
        } else {
            PanelSide::Right
        }
    }
}

impl DrawerHost for MockHost {
    fn capabilities(&self) -> DrawerCapabilities {
        DrawerCapabilities::REQUIRED
    }

    fn is_drawer_open(&self, side: PanelSide) -> bool {
        self.open.get() == Some(side)
    }

    fn drawer_lock_mode(&self, side: PanelSide) -> LockMode {
        match side {
            PanelSide::Left => self.left.get().unwrap_or_default(),
            PanelSide::Right => self.right.get().unwrap_or_default(),
        }
    }

    fn find_drawer(&self, side: PanelSide) -> Option<DrawerHandle> {
        match side {
            PanelSide::Left => self.left.get().map(|_| DrawerHandle(0)),
            PanelSide::Right => self.right.get().map(|_| DrawerHandle(1)),
        }
    }

    fn drawer_width(&self, _drawer: DrawerHandle) -> f32 {
        self.width
    }

    fn move_drawer_to_offset(&self, drawer: DrawerHandle, slide_offset: f32) {
        self.calls
            .borrow_mut()
            .push(HostCall::Offset(Self::side_of(drawer), slide_offset));
    }

    fn open_drawer(&self, side: PanelSide, _animate: bool) {
        self.calls.borrow_mut().push(HostCall::Open(side));
    }

    fn close_drawer(&self, side: PanelSide, _animate: bool) {
        self.calls.borrow_mut().push(HostCall::Close(side));
    }

    fn dispatch_drawer_state(&self, state: DrawerState) {
        self.calls.borrow_mut().push(HostCall::State(state));
    }
}
