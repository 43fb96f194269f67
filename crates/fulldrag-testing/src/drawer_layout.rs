//! In-memory drawer host.

use fulldrag_drawer::{
    DrawerCapabilities, DrawerGravity, DrawerHandle, DrawerHost, DrawerListener, DrawerListeners,
    DrawerState, LayoutDirection, ListenerId, LockMode, PanelSide, ViewParent,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A request the host received from the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerRequest {
    Offset { side: PanelSide, slide_offset: f32 },
    Open { side: PanelSide, animate: bool },
    Close { side: PanelSide, animate: bool },
}

struct FakeDrawer {
    gravity: DrawerGravity,
    width: f32,
    lock_mode: Cell<LockMode>,
    slide_offset: Cell<f32>,
    visible: Cell<bool>,
}

struct FakeDrawerLayoutInner {
    direction: LayoutDirection,
    capabilities: Cell<DrawerCapabilities>,
    drawers: RefCell<Vec<Option<FakeDrawer>>>,
    listeners: DrawerListeners,
    requests: RefCell<Vec<DrawerRequest>>,
    invalidations: Cell<usize>,
}

/// Drawer layout that settles instantly: `open_drawer` and `close_drawer`
/// jump straight to the end state and notify listeners the way an animated
/// settle would.
///
/// Cloning yields another handle to the same layout.
#[derive(Clone)]
pub struct FakeDrawerLayout {
    inner: Rc<FakeDrawerLayoutInner>,
}

impl Default for FakeDrawerLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDrawerLayout {
    pub fn new() -> Self {
        Self::with_layout_direction(LayoutDirection::Ltr)
    }

    pub fn with_layout_direction(direction: LayoutDirection) -> Self {
        Self {
            inner: Rc::new(FakeDrawerLayoutInner {
                direction,
                capabilities: Cell::new(DrawerCapabilities::REQUIRED),
                drawers: RefCell::new(Vec::new()),
                listeners: DrawerListeners::new(),
                requests: RefCell::new(Vec::new()),
                invalidations: Cell::new(0),
            }),
        }
    }

    /// Adds a drawer declared with `gravity`. Later drawers never shadow an
    /// earlier one on the same side.
    pub fn add_drawer(&self, gravity: DrawerGravity, width: f32) -> DrawerHandle {
        let mut drawers = self.inner.drawers.borrow_mut();
        drawers.push(Some(FakeDrawer {
            gravity,
            width,
            lock_mode: Cell::new(LockMode::Unlocked),
            slide_offset: Cell::new(0.0),
            visible: Cell::new(false),
        }));
        DrawerHandle(drawers.len() - 1)
    }

    pub fn remove_drawer(&self, side: PanelSide) {
        if let Some(handle) = self.find_drawer(side) {
            self.inner.drawers.borrow_mut()[handle.0] = None;
        }
    }

    pub fn set_lock_mode(&self, side: PanelSide, mode: LockMode) {
        self.with_drawer(side, |drawer| drawer.lock_mode.set(mode));
    }

    pub fn set_capabilities(&self, capabilities: DrawerCapabilities) {
        self.inner.capabilities.set(capabilities);
    }

    /// Puts a drawer in its open state without recording a request.
    pub fn force_open(&self, side: PanelSide) {
        self.with_drawer(side, |drawer| {
            drawer.slide_offset.set(1.0);
            drawer.visible.set(true);
        });
    }

    pub fn add_drawer_listener(&self, listener: Rc<dyn DrawerListener>) -> ListenerId {
        self.inner.listeners.add(listener)
    }

    pub fn remove_drawer_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.remove(id)
    }

    pub fn requests(&self) -> Vec<DrawerRequest> {
        self.inner.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.inner.requests.borrow_mut().clear();
    }

    /// Open and close requests only, in order.
    pub fn commits(&self) -> Vec<DrawerRequest> {
        self.requests()
            .into_iter()
            .filter(|request| !matches!(request, DrawerRequest::Offset { .. }))
            .collect()
    }

    pub fn last_offset(&self, side: PanelSide) -> Option<f32> {
        self.requests().into_iter().rev().find_map(|request| match request {
            DrawerRequest::Offset {
                side: offset_side,
                slide_offset,
            } if offset_side == side => Some(slide_offset),
            _ => None,
        })
    }

    pub fn slide_offset(&self, side: PanelSide) -> Option<f32> {
        self.read_drawer(side, |drawer| drawer.slide_offset.get())
    }

    pub fn is_drawer_visible(&self, side: PanelSide) -> bool {
        self.read_drawer(side, |drawer| drawer.visible.get())
            .unwrap_or(false)
    }

    pub fn invalidation_count(&self) -> usize {
        self.inner.invalidations.get()
    }

    fn record(&self, request: DrawerRequest) {
        self.inner.requests.borrow_mut().push(request);
    }

    fn read_drawer<R>(&self, side: PanelSide, f: impl FnOnce(&FakeDrawer) -> R) -> Option<R> {
        let handle = self.find_drawer(side)?;
        let drawers = self.inner.drawers.borrow();
        drawers[handle.0].as_ref().map(f)
    }

    fn with_drawer(&self, side: PanelSide, f: impl FnOnce(&FakeDrawer)) {
        self.read_drawer(side, f);
    }

    fn side_of(&self, handle: DrawerHandle) -> Option<PanelSide> {
        let drawers = self.inner.drawers.borrow();
        drawers
            .get(handle.0)
            .and_then(|drawer| drawer.as_ref())
            .map(|drawer| drawer.gravity.resolve(self.inner.direction))
    }

    fn settle(&self, side: PanelSide, open: bool, animate: bool) {
        let changed = self
            .read_drawer(side, |drawer| {
                let target = if open { 1.0 } else { 0.0 };
                let changed = drawer.slide_offset.get() != target;
                drawer.slide_offset.set(target);
                drawer.visible.set(open);
                changed
            })
            .unwrap_or(false);

        let listeners = &self.inner.listeners;
        if animate {
            listeners.dispatch_state_changed(DrawerState::Settling);
        }
        if changed || animate {
            if open {
                listeners.dispatch_opened(side);
            } else {
                listeners.dispatch_closed(side);
            }
        }
        listeners.dispatch_state_changed(DrawerState::Idle);
    }
}

impl DrawerHost for FakeDrawerLayout {
    fn capabilities(&self) -> DrawerCapabilities {
        self.inner.capabilities.get()
    }

    fn is_drawer_open(&self, side: PanelSide) -> bool {
        self.slide_offset(side)
            .map(|offset| offset >= 1.0)
            .unwrap_or(false)
    }

    fn drawer_lock_mode(&self, side: PanelSide) -> LockMode {
        self.read_drawer(side, |drawer| drawer.lock_mode.get())
            .unwrap_or_default()
    }

    fn find_drawer(&self, side: PanelSide) -> Option<DrawerHandle> {
        let drawers = self.inner.drawers.borrow();
        drawers
            .iter()
            .position(|drawer| {
                drawer
                    .as_ref()
                    .is_some_and(|drawer| drawer.gravity.resolve(self.inner.direction) == side)
            })
            .map(DrawerHandle)
    }

    fn drawer_width(&self, drawer: DrawerHandle) -> f32 {
        let drawers = self.inner.drawers.borrow();
        drawers
            .get(drawer.0)
            .and_then(|drawer| drawer.as_ref())
            .map(|drawer| drawer.width)
            .unwrap_or(0.0)
    }

    fn move_drawer_to_offset(&self, drawer: DrawerHandle, slide_offset: f32) {
        let Some(side) = self.side_of(drawer) else {
            return;
        };
        self.record(DrawerRequest::Offset { side, slide_offset });
        let clamped = slide_offset.clamp(0.0, 1.0);
        self.with_drawer(side, |drawer| {
            drawer.slide_offset.set(clamped);
            drawer.visible.set(true);
        });
        self.inner.listeners.dispatch_slide(side, clamped);
    }

    fn open_drawer(&self, side: PanelSide, animate: bool) {
        self.record(DrawerRequest::Open { side, animate });
        self.settle(side, true, animate);
    }

    fn close_drawer(&self, side: PanelSide, animate: bool) {
        self.record(DrawerRequest::Close { side, animate });
        self.settle(side, false, animate);
    }

    fn dispatch_drawer_state(&self, state: DrawerState) {
        self.inner.listeners.dispatch_state_changed(state);
    }

    fn invalidate(&self) {
        self.inner.invalidations.set(self.inner.invalidations.get() + 1);
    }
}

impl ViewParent for FakeDrawerLayout {
    fn as_drawer_host(&self) -> Option<Rc<dyn DrawerHost>> {
        Some(Rc::new(self.clone()))
    }
}

/// A parent that is not a drawer host.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainParent;

impl ViewParent for PlainParent {}

/// Listener that keeps a readable log of every callback.
#[derive(Default)]
pub struct RecordingListener {
    name: String,
    events: RefCell<Vec<String>>,
}

impl RecordingListener {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            events: RefCell::new(Vec::new()),
        })
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Events without slide notifications.
    pub fn milestones(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|event| !event.starts_with("slide"))
            .collect()
    }

    fn push(&self, event: String) {
        log::trace!("[{}] {}", self.name, event);
        self.events.borrow_mut().push(event);
    }
}

impl DrawerListener for RecordingListener {
    fn on_drawer_slide(&self, side: PanelSide, slide_offset: f32) {
        self.push(format!("slide({side:?}, {slide_offset:.3})"));
    }

    fn on_drawer_opened(&self, side: PanelSide) {
        self.push(format!("opened({side:?})"));
    }

    fn on_drawer_closed(&self, side: PanelSide) {
        self.push(format!("closed({side:?})"));
    }

    fn on_drawer_state_changed(&self, state: DrawerState) {
        self.push(format!("state({state:?})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_drawer_resolves_by_layout_direction() {
        let ltr = FakeDrawerLayout::new();
        ltr.add_drawer(DrawerGravity::Start, 200.0);
        assert!(ltr.find_drawer(PanelSide::Left).is_some());

        let rtl = FakeDrawerLayout::with_layout_direction(LayoutDirection::Rtl);
        rtl.add_drawer(DrawerGravity::Start, 200.0);
        assert!(rtl.find_drawer(PanelSide::Left).is_none());
        assert!(rtl.find_drawer(PanelSide::Right).is_some());
    }

    #[test]
    fn offsets_are_clamped_and_recorded_raw() {
        let layout = FakeDrawerLayout::new();
        let handle = layout.add_drawer(DrawerGravity::Left, 200.0);

        layout.move_drawer_to_offset(handle, 1.4);
        assert_eq!(layout.last_offset(PanelSide::Left), Some(1.4));
        assert_eq!(layout.slide_offset(PanelSide::Left), Some(1.0));
        assert!(layout.is_drawer_open(PanelSide::Left));
        assert!(layout.is_drawer_visible(PanelSide::Left));
    }

    #[test]
    fn closing_a_closed_drawer_without_animation_only_reports_idle() {
        let layout = FakeDrawerLayout::new();
        layout.add_drawer(DrawerGravity::Left, 200.0);
        let listener = RecordingListener::new("l");
        layout.add_drawer_listener(listener.clone());

        layout.close_drawer(PanelSide::Left, false);
        assert_eq!(listener.events(), vec!["state(Idle)"]);

        layout.open_drawer(PanelSide::Left, true);
        assert_eq!(
            listener.events()[1..],
            ["state(Settling)", "opened(Left)", "state(Idle)"]
        );
    }

    #[test]
    fn removed_listener_stops_receiving() {
        let layout = FakeDrawerLayout::new();
        layout.add_drawer(DrawerGravity::Left, 200.0);
        let listener = RecordingListener::new("l");
        let id = layout.add_drawer_listener(listener.clone());

        assert!(layout.remove_drawer_listener(id));
        assert!(!layout.remove_drawer_listener(id));
        layout.open_drawer(PanelSide::Left, true);
        assert!(listener.events().is_empty());
    }

    #[test]
    fn removed_drawer_is_not_found() {
        let layout = FakeDrawerLayout::new();
        layout.add_drawer(DrawerGravity::Left, 200.0);
        layout.remove_drawer(PanelSide::Left);
        assert!(layout.find_drawer(PanelSide::Left).is_none());
        assert_eq!(layout.drawer_lock_mode(PanelSide::Left), LockMode::Unlocked);
    }
}
