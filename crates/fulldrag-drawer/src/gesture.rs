//! Per-gesture state.
//!
//! A [`GestureState`] is created on `Down` and dropped on `Up`/`Cancel`, so
//! nothing from one gesture can leak into the next.

use crate::side::PanelSide;
use fulldrag_graphics::Point;

/// What a release will do if no decisive fling overrides it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    Open,
    #[default]
    Close,
}

/// A drag that has taken control of a drawer. Its side never changes for the
/// rest of the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    pub side: PanelSide,
    pub pending_outcome: Outcome,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    initial_position: Point,
    last_position: Point,
    claimed_side: Option<PanelSide>,
    drag: Option<ActiveDrag>,
}

impl GestureState {
    pub fn new(down: Point) -> Self {
        Self {
            initial_position: down,
            last_position: down,
            claimed_side: None,
            drag: None,
        }
    }

    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    pub fn last_position(&self) -> Point {
        self.last_position
    }

    /// The side the stream was claimed for, once claimed.
    pub fn claimed_side(&self) -> Option<PanelSide> {
        self.claimed_side
    }

    /// Side a drag follows: the active drag's, else the claimed one.
    pub fn drag_side(&self) -> Option<PanelSide> {
        self.active_side().or(self.claimed_side)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn active_drag(&self) -> Option<ActiveDrag> {
        self.drag
    }

    pub fn active_side(&self) -> Option<PanelSide> {
        self.drag.map(|drag| drag.side)
    }

    pub fn pending_outcome(&self) -> Outcome {
        self.drag.map(|drag| drag.pending_outcome).unwrap_or_default()
    }

    pub fn diff_x(&self, position: Point) -> f32 {
        position.x - self.initial_position.x
    }

    pub fn diff_y(&self, position: Point) -> f32 {
        position.y - self.initial_position.y
    }

    pub(crate) fn set_last_position(&mut self, position: Point) {
        self.last_position = position;
    }

    pub(crate) fn set_claimed_side(&mut self, side: PanelSide) {
        self.claimed_side = Some(side);
    }

    pub(crate) fn set_drag(&mut self, drag: ActiveDrag) {
        self.drag = Some(drag);
    }
}
