//! Content-subtree drag capability.
//!
//! A full-surface drawer gesture must never steal a horizontal drag from
//! nested content that can still scroll in that direction (pagers, carousels,
//! horizontally scrolling lists). Every container-like node answers "can I
//! scroll further horizontally", and the query below walks the subtree under
//! the pointer to find the first node that says yes.

use fulldrag_graphics::{Point, Rect};
use std::rc::Rc;

/// A node of the content tree hosted inside the drag container.
pub trait ContentNode {
    /// Bounds in the parent's content coordinate space.
    fn bounds(&self) -> Rect;

    fn is_visible(&self) -> bool {
        true
    }

    /// How far this node has scrolled its own content. Children bounds are
    /// expressed in unscrolled content space.
    fn scroll_offset(&self) -> Point {
        Point::ZERO
    }

    /// Children in draw order; the last child is drawn on top.
    fn children(&self) -> &[Rc<dyn ContentNode>] {
        &[]
    }

    /// Whether this node can scroll its content horizontally in `direction`.
    /// Negative values check scrolling toward the left edge, positive values
    /// toward the right edge.
    fn can_scroll_horizontally(&self, _direction: f32) -> bool {
        false
    }
}

/// Returns true if the content under `point` would consume a horizontal
/// pointer movement of `dx` pixels.
///
/// `content` is the single child of the drag container and `point` is in the
/// container's space. The content is hit tested against its bounds like any
/// other child, so a scrollable content root is asked as well as its
/// descendants, topmost first.
pub fn would_consume_horizontal_drag(content: &dyn ContentNode, point: Point, dx: f32) -> bool {
    let bounds = content.bounds();
    let consumed = content.is_visible()
        && bounds.contains(point)
        && can_nested_node_scroll(content, true, dx, bounds.to_local(point));
    if consumed {
        log::trace!(
            "content under ({:.1}, {:.1}) consumes dx={:.1}",
            point.x,
            point.y,
            dx
        );
    }
    consumed
}

fn can_nested_node_scroll(node: &dyn ContentNode, check_self: bool, dx: f32, point: Point) -> bool {
    let content_point = point + node.scroll_offset();

    for child in node.children().iter().rev() {
        if !child.is_visible() {
            continue;
        }
        let bounds: Rect = child.bounds();
        if bounds.contains(content_point)
            && can_nested_node_scroll(child.as_ref(), true, dx, bounds.to_local(content_point))
        {
            return true;
        }
    }

    // A finger moving right drags content toward its left edge.
    check_self && node.can_scroll_horizontally(-dx)
}
