//! Content tree fake.

use fulldrag_foundation::ContentNode;
use fulldrag_graphics::{Point, Rect};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct HorizontalScroll {
    offset: Cell<f32>,
    max: f32,
}

/// A content node with fixed bounds and optional horizontal scrolling.
pub struct FakeView {
    name: &'static str,
    bounds: Rect,
    visible: Cell<bool>,
    scroll: Cell<Point>,
    horizontal: Option<HorizontalScroll>,
    children: Vec<Rc<dyn ContentNode>>,
}

impl FakeView {
    pub fn new(name: &'static str, bounds: Rect) -> Self {
        Self {
            name,
            bounds,
            visible: Cell::new(true),
            scroll: Cell::new(Point::ZERO),
            horizontal: None,
            children: Vec::new(),
        }
    }

    /// A pager showing `current` of `pages` pages, each as wide as `bounds`.
    pub fn pager(name: &'static str, bounds: Rect, pages: usize, current: usize) -> Self {
        let max = bounds.width * pages.saturating_sub(1) as f32;
        let offset = (bounds.width * current as f32).min(max);
        Self::new(name, bounds).horizontally_scrollable(offset, max)
    }

    /// Content that scrolls horizontally between 0 and `max`.
    pub fn horizontally_scrollable(mut self, offset: f32, max: f32) -> Self {
        self.horizontal = Some(HorizontalScroll {
            offset: Cell::new(offset.clamp(0.0, max)),
            max,
        });
        self
    }

    pub fn with_child(mut self, child: Rc<dyn ContentNode>) -> Self {
        self.children.push(child);
        self
    }

    pub fn scrolled_to(self, offset: Point) -> Self {
        self.scroll.set(offset);
        self
    }

    pub fn hidden(self) -> Self {
        self.visible.set(false);
        self
    }

    pub fn into_rc(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Moves the horizontal scroll position; ignored for non-scrollable views.
    pub fn set_scroll_x(&self, offset: f32) {
        if let Some(horizontal) = &self.horizontal {
            horizontal.offset.set(offset.clamp(0.0, horizontal.max));
        }
    }
}

impl ContentNode for FakeView {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn scroll_offset(&self) -> Point {
        self.scroll.get()
    }

    fn children(&self) -> &[Rc<dyn ContentNode>] {
        &self.children
    }

    fn can_scroll_horizontally(&self, direction: f32) -> bool {
        let Some(horizontal) = &self.horizontal else {
            return false;
        };
        let offset = horizontal.offset.get();
        let can_scroll = if direction < 0.0 {
            offset > 0.0
        } else {
            offset < horizontal.max
        };
        log::trace!(
            "{} at {:.0}/{:.0} can scroll {}: {}",
            self.name,
            offset,
            horizontal.max,
            direction,
            can_scroll
        );
        can_scroll
    }
}
