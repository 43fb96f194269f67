//! Drawer listener registry.
//!
//! Hosts embed a [`DrawerListeners`] and forward their notifications through
//! it. Listeners are invoked newest first, and a snapshot is taken before
//! dispatch so a listener may add or remove listeners from its callback.

use crate::host::DrawerState;
use crate::side::PanelSide;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub trait DrawerListener {
    fn on_drawer_slide(&self, _side: PanelSide, _slide_offset: f32) {}

    fn on_drawer_opened(&self, _side: PanelSide) {}

    fn on_drawer_closed(&self, _side: PanelSide) {}

    fn on_drawer_state_changed(&self, _state: DrawerState) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ListenerSnapshot = SmallVec<[Rc<dyn DrawerListener>; 4]>;

#[derive(Default)]
pub struct DrawerListeners {
    next_id: Cell<u64>,
    entries: RefCell<SmallVec<[(ListenerId, Rc<dyn DrawerListener>); 4]>>,
}

impl DrawerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Rc<dyn DrawerListener>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn dispatch_state_changed(&self, state: DrawerState) {
        for listener in self.snapshot_newest_first() {
            listener.on_drawer_state_changed(state);
        }
    }

    pub fn dispatch_slide(&self, side: PanelSide, slide_offset: f32) {
        for listener in self.snapshot_newest_first() {
            listener.on_drawer_slide(side, slide_offset);
        }
    }

    pub fn dispatch_opened(&self, side: PanelSide) {
        for listener in self.snapshot_newest_first() {
            listener.on_drawer_opened(side);
        }
    }

    pub fn dispatch_closed(&self, side: PanelSide) {
        for listener in self.snapshot_newest_first() {
            listener.on_drawer_closed(side);
        }
    }

    fn snapshot_newest_first(&self) -> ListenerSnapshot {
        self.entries
            .borrow()
            .iter()
            .rev()
            .map(|(_, listener)| listener.clone())
            .collect()
    }
}
