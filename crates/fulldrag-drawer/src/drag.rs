//! Following a claimed drag and committing it on release.
//!
//! ```text
//! Idle --Move past swipe slop, or any Move while a drawer is open--> Dragging
//! Dragging --Up/Cancel--> Committing(Open | Close) --> Idle
//! ```
//!
//! `Cancel` commits exactly like `Up`, fling included.

use crate::config::DrawerGestureConfig;
use crate::gesture::{ActiveDrag, GestureState, Outcome};
use crate::host::{has_unlocked_drawer, open_drawer_side, DrawerHost, DrawerState};
use crate::side::PanelSide;
use fulldrag_foundation::{HorizontalVelocityTracker, PointerEvent};

/// What a `Move` did to the drawer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// Nothing happened for this event; the stream stays claimed.
    Inert,
    /// Claimed, but not yet past the swipe slop.
    BelowSlop,
    /// A drawer is already open; the drag follows it without moving it.
    Reentrant { side: PanelSide, started: bool },
    /// The drawer was moved to `offset_px` pixels of travel.
    Dragged {
        side: PanelSide,
        offset_px: f32,
        started: bool,
    },
}

/// Decision taken on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Commit {
    pub side: PanelSide,
    pub outcome: Outcome,
    /// Release velocity in px/s, 0.0 if it could not be measured.
    pub x_velocity: f32,
}

pub struct DragStateMachine {
    swipe_slop: f32,
    distance_threshold: f32,
    x_velocity_threshold: f32,
    velocity: Option<HorizontalVelocityTracker>,
}

impl DragStateMachine {
    pub fn new(config: &DrawerGestureConfig) -> Self {
        Self {
            swipe_slop: config.swipe_slop(),
            distance_threshold: config.distance_threshold(),
            x_velocity_threshold: config.x_velocity_threshold(),
            velocity: None,
        }
    }

    /// True when no velocity samples are held.
    pub fn is_idle(&self) -> bool {
        self.velocity.is_none()
    }

    pub fn on_move(
        &mut self,
        gesture: &mut GestureState,
        event: &PointerEvent,
        host: &dyn DrawerHost,
    ) -> DragUpdate {
        let was_dragging = gesture.is_dragging();

        if let Some(open_side) = open_drawer_side(host) {
            let side = gesture.active_side().unwrap_or(open_side);
            if !was_dragging {
                gesture.set_drag(ActiveDrag {
                    side,
                    pending_outcome: Outcome::Close,
                });
                log::debug!("drag started on open {:?} drawer", side);
                host.dispatch_drawer_state(DrawerState::Dragging);
            }
            self.track(event);
            return DragUpdate::Reentrant {
                side,
                started: !was_dragging,
            };
        }

        let diff_x = gesture.diff_x(event.position);
        let side = match gesture.drag_side() {
            Some(side) => side,
            None => match PanelSide::from_displacement(diff_x) {
                Some(side) => side,
                None => return DragUpdate::Inert,
            },
        };
        if !has_unlocked_drawer(host, side) {
            return DragUpdate::Inert;
        }

        let progress = side.opening_progress(diff_x);
        if !was_dragging && progress <= self.swipe_slop {
            return DragUpdate::BelowSlop;
        }

        self.track(event);
        let pending_outcome = if progress > self.distance_threshold {
            Outcome::Open
        } else {
            Outcome::Close
        };
        gesture.set_drag(ActiveDrag {
            side,
            pending_outcome,
        });

        let offset_px = (progress - self.swipe_slop).max(0.0);
        offset_drawer(host, side, offset_px);

        if !was_dragging {
            log::debug!("drag started on {:?} drawer", side);
            host.dispatch_drawer_state(DrawerState::Dragging);
        }

        DragUpdate::Dragged {
            side,
            offset_px,
            started: !was_dragging,
        }
    }

    /// Ends the gesture. Issues at most one open or close request, and none
    /// when the drag never started or its drawer has disappeared.
    pub fn on_release(&mut self, gesture: &GestureState, host: &dyn DrawerHost) -> Option<Commit> {
        let tracker = self.velocity.take();
        let drag = gesture.active_drag()?;

        let x_velocity = tracker.map(|tracker| tracker.x_velocity()).unwrap_or(0.0);
        let outcome = self
            .fling_outcome(drag.side, x_velocity)
            .unwrap_or(drag.pending_outcome);

        if host.find_drawer(drag.side).is_none() {
            log::warn!("{:?} drawer vanished before release, ignoring", drag.side);
            return None;
        }

        log::debug!(
            "release {:?} drawer: {:?} (velocity {:.0} px/s, pending {:?})",
            drag.side,
            outcome,
            x_velocity,
            drag.pending_outcome
        );
        match outcome {
            Outcome::Open => host.open_drawer(drag.side, true),
            Outcome::Close => host.close_drawer(drag.side, true),
        }

        Some(Commit {
            side: drag.side,
            outcome,
            x_velocity,
        })
    }

    pub fn reset(&mut self) {
        self.velocity = None;
    }

    fn track(&mut self, event: &PointerEvent) {
        self.velocity
            .get_or_insert_with(HorizontalVelocityTracker::new)
            .add_sample(event.uptime_ms, event.position);
    }

    /// A fast enough release decides by direction alone: toward the drawer's
    /// opening direction opens it, away closes it.
    fn fling_outcome(&self, side: PanelSide, x_velocity: f32) -> Option<Outcome> {
        let toward = if x_velocity > self.x_velocity_threshold {
            PanelSide::Left
        } else if x_velocity < -self.x_velocity_threshold {
            PanelSide::Right
        } else {
            return None;
        };
        Some(if side == toward {
            Outcome::Open
        } else {
            Outcome::Close
        })
    }
}

fn offset_drawer(host: &dyn DrawerHost, side: PanelSide, offset_px: f32) {
    let Some(drawer) = host.find_drawer(side) else {
        return;
    };
    let width = host.drawer_width(drawer);
    if width <= 0.0 {
        log::warn!("{:?} drawer has no width, skipping offset", side);
        return;
    }
    host.move_drawer_to_offset(drawer, offset_px / width);
    host.invalidate();
}
