//! Scripted pointer gestures.

use fulldrag_drawer::FullDraggableContainer;
use fulldrag_foundation::{PointerDispatcher, PointerEvent, PointerEventKind};
use fulldrag_graphics::Point;

/// Default time between generated events, roughly one 60 Hz frame.
pub const DEFAULT_FRAME_MS: i64 = 16;

/// Outcome of dispatching one scripted event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DispatchRecord {
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_ms: i64,
    pub consumed: bool,
}

/// Queues timed pointer events and replays them through a container.
///
/// ```ignore
/// let mut robot = GestureRobot::new();
/// robot.press(0.0, 0.0).move_to(100.0, 0.0).release();
/// let records = robot.run(&mut container);
/// ```
pub struct GestureRobot {
    dispatcher: PointerDispatcher,
    clock_ms: i64,
    frame_ms: i64,
    position: Point,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    pub fn new() -> Self {
        Self {
            dispatcher: PointerDispatcher::new(),
            clock_ms: 0,
            frame_ms: DEFAULT_FRAME_MS,
            position: Point::ZERO,
        }
    }

    /// Time between consecutive generated events; controls drag speed.
    pub fn with_frame_interval(mut self, frame_ms: i64) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    pub fn set_frame_interval(&mut self, frame_ms: i64) -> &mut Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    pub fn clock_ms(&self) -> i64 {
        self.clock_ms
    }

    pub fn press(&mut self, x: f32, y: f32) -> &mut Self {
        self.position = Point::new(x, y);
        self.enqueue(PointerEventKind::Down);
        self
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.clock_ms += self.frame_ms;
        self.position = Point::new(x, y);
        self.enqueue(PointerEventKind::Move);
        self
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        let target = self.position + Point::new(dx, dy);
        self.move_to(target.x, target.y)
    }

    /// Moves to `(x, y)` in `steps` evenly spaced events.
    pub fn drag_to(&mut self, x: f32, y: f32, steps: usize) -> &mut Self {
        let start = self.position;
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(start.x + (x - start.x) * t, start.y + (y - start.y) * t);
        }
        self
    }

    pub fn pause(&mut self, ms: i64) -> &mut Self {
        self.clock_ms += ms.max(0);
        self
    }

    pub fn release(&mut self) -> &mut Self {
        self.clock_ms += self.frame_ms;
        self.enqueue(PointerEventKind::Up);
        self
    }

    pub fn cancel(&mut self) -> &mut Self {
        self.clock_ms += self.frame_ms;
        self.enqueue(PointerEventKind::Cancel);
        self
    }

    /// Dispatches everything queued so far, in order.
    pub fn run(&mut self, container: &mut FullDraggableContainer) -> Vec<DispatchRecord> {
        let mut records = Vec::with_capacity(self.dispatcher.len());
        self.dispatcher.drain(|_, event| {
            container.dispatch(&event);
            records.push(DispatchRecord {
                kind: event.kind,
                position: event.position,
                uptime_ms: event.uptime_ms,
                consumed: event.is_consumed(),
            });
        });
        records
    }

    fn enqueue(&mut self, kind: PointerEventKind) {
        self.dispatcher
            .push(PointerEvent::new(kind, self.position, self.clock_ms));
    }
}
