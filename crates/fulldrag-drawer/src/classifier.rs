//! Deciding when a pointer stream becomes a drawer drag.

use crate::config::DrawerGestureConfig;
use crate::gesture::GestureState;
use crate::host::{drag_eligible_side, DrawerHost};
use crate::side::PanelSide;
use fulldrag_foundation::{would_consume_horizontal_drag, ContentNode};
use fulldrag_graphics::Point;

/// Result of classifying one `Move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterceptDecision {
    /// Content under the pointer can scroll by this delta and keeps the stream.
    ContentConsumes,
    /// Still within touch slop of the press point.
    WithinSlop,
    /// The drag is at least as vertical as it is horizontal.
    MostlyVertical,
    /// No unlocked drawer on the side this drag would pull in.
    NoDrawer,
    Claim(PanelSide),
}

impl InterceptDecision {
    pub fn intercepts(self) -> bool {
        matches!(self, InterceptDecision::Claim(_))
    }
}

/// Claims a stream once it is clearly a horizontal drag toward an available
/// drawer and nothing underneath wants it.
///
/// `Down` never claims: a `Move` has to be observed first, so a tap can never
/// be mistaken for a drag.
#[derive(Clone, Copy, Debug)]
pub struct GestureClassifier {
    touch_slop: f32,
}

impl GestureClassifier {
    pub fn new(config: &DrawerGestureConfig) -> Self {
        Self {
            touch_slop: config.touch_slop(),
        }
    }

    pub fn classify_move(
        &self,
        gesture: &mut GestureState,
        position: Point,
        content: Option<&dyn ContentNode>,
        host: &dyn DrawerHost,
    ) -> InterceptDecision {
        let dx = position.x - gesture.last_position().x;
        gesture.set_last_position(position);

        if let Some(content) = content {
            if would_consume_horizontal_drag(content, position, dx) {
                return InterceptDecision::ContentConsumes;
            }
        }

        let diff_x = gesture.diff_x(position);
        let abs_diff_x = diff_x.abs();
        if abs_diff_x <= self.touch_slop {
            return InterceptDecision::WithinSlop;
        }
        if abs_diff_x <= gesture.diff_y(position).abs() {
            return InterceptDecision::MostlyVertical;
        }

        match drag_eligible_side(host, diff_x) {
            Some(side) => {
                gesture.set_claimed_side(side);
                InterceptDecision::Claim(side)
            }
            None => InterceptDecision::NoDrawer,
        }
    }
}
