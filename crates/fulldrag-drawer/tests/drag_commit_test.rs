//! Live drag offsets and the open/close decision on release.

use fulldrag_drawer::{
    DrawerGravity, DrawerListener, DrawerState, FullDraggableContainer, Outcome, PanelSide,
    ViewParent,
};
use fulldrag_foundation::PointerEvent;
use fulldrag_testing::{DrawerRequest, FakeDrawerLayout, GestureRobot, RecordingListener};
use std::cell::RefCell;
use std::rc::Rc;

const DRAWER_WIDTH: f32 = 300.0;

fn setup() -> (FakeDrawerLayout, FullDraggableContainer) {
    let layout = FakeDrawerLayout::new();
    layout.add_drawer(DrawerGravity::Left, DRAWER_WIDTH);
    layout.add_drawer(DrawerGravity::Right, DRAWER_WIDTH);
    let mut container = FullDraggableContainer::default();
    let parent: &dyn ViewParent = &layout;
    container.attach(Some(parent)).expect("attach to drawer layout");
    (layout, container)
}

fn open(side: PanelSide) -> DrawerRequest {
    DrawerRequest::Open {
        side,
        animate: true,
    }
}

fn close(side: PanelSide) -> DrawerRequest {
    DrawerRequest::Close {
        side,
        animate: true,
    }
}

#[test]
fn drag_pushes_live_offset_minus_swipe_slop() {
    let (layout, mut container) = setup();
    let swipe_slop = container.config().swipe_slop();

    let mut robot = GestureRobot::new();
    robot.press(0.0, 0.0).move_to(100.0, 0.0).move_to(120.0, 0.0);
    robot.run(&mut container);

    let offset = layout.last_offset(PanelSide::Left).expect("live offset");
    let expected = (120.0 - swipe_slop) / DRAWER_WIDTH;
    assert!((offset - expected).abs() < 1e-6, "offset {offset}, expected {expected}");
    assert!(layout.is_drawer_visible(PanelSide::Left));
    assert!(layout.invalidation_count() >= 1);

    let gesture = container.gesture().expect("gesture in progress");
    assert!(gesture.is_dragging());
    assert_eq!(gesture.active_side(), Some(PanelSide::Left));
    assert_eq!(gesture.pending_outcome(), Outcome::Open);
}

#[test]
fn short_slow_release_closes() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    // Claim, then creep to 30px at ~62 px/s.
    robot
        .press(0.0, 0.0)
        .move_to(10.0, 0.0)
        .drag_to(30.0, 0.0, 20)
        .release();
    let records = robot.run(&mut container);

    assert!(records.last().map(|r| r.consumed).unwrap_or(false));
    assert_eq!(layout.commits(), vec![close(PanelSide::Left)]);
    assert!(container.is_idle());
}

#[test]
fn short_fast_release_opens() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new().with_frame_interval(10);
    // 10px every 10ms = 1000 px/s, well over the fling threshold.
    robot
        .press(0.0, 0.0)
        .move_to(10.0, 0.0)
        .move_to(20.0, 0.0)
        .move_to(30.0, 0.0)
        .release();
    robot.run(&mut container);

    assert_eq!(layout.commits(), vec![open(PanelSide::Left)]);
    assert_eq!(layout.slide_offset(PanelSide::Left), Some(1.0));
}

#[test]
fn long_slow_release_opens() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    robot
        .press(0.0, 0.0)
        .move_to(10.0, 0.0)
        .drag_to(120.0, 0.0, 6)
        .pause(200)
        .move_to(120.0, 0.0)
        .move_to(120.0, 0.0)
        .release();
    robot.run(&mut container);

    assert_eq!(layout.commits(), vec![open(PanelSide::Left)]);
}

#[test]
fn fling_back_overrides_long_distance() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new().with_frame_interval(10);
    robot
        .press(0.0, 0.0)
        .move_to(20.0, 0.0)
        .move_to(200.0, 0.0)
        .move_to(170.0, 0.0)
        .move_to(140.0, 0.0)
        .move_to(110.0, 0.0)
        .release();
    robot.run(&mut container);

    // 110px is past the distance threshold, but the release flings left.
    assert_eq!(layout.commits(), vec![close(PanelSide::Left)]);
}

#[test]
fn right_drawer_opens_with_leftward_drag() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    robot
        .press(390.0, 300.0)
        .move_to(370.0, 300.0)
        .drag_to(250.0, 305.0, 10)
        .release();
    robot.run(&mut container);

    let offset = layout.last_offset(PanelSide::Right).expect("live offset");
    assert!((offset - (140.0 - 8.0) / DRAWER_WIDTH).abs() < 1e-4);
    assert!(layout.last_offset(PanelSide::Left).is_none());
    assert_eq!(layout.commits(), vec![open(PanelSide::Right)]);
}

#[test]
fn cancel_commits_like_up_including_fling() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new().with_frame_interval(10);
    robot
        .press(0.0, 0.0)
        .move_to(10.0, 0.0)
        .move_to(20.0, 0.0)
        .move_to(30.0, 0.0)
        .cancel();
    let records = robot.run(&mut container);

    assert!(records.last().map(|r| r.consumed).unwrap_or(false));
    assert_eq!(layout.commits(), vec![open(PanelSide::Left)]);
    assert!(container.is_idle());
}

#[test]
fn claimed_but_never_dragged_release_is_absorbed() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    robot.press(0.0, 0.0).move_to(10.0, 0.0).release();
    let records = robot.run(&mut container);

    assert!(records[1].consumed);
    assert!(records[2].consumed);
    assert!(layout.requests().is_empty());
    assert!(container.is_idle());
}

#[test]
fn every_dragged_gesture_commits_exactly_once() {
    let (layout, mut container) = setup();
    let cases: [(f32, i64, usize); 6] = [
        (30.0, 16, 20),
        (30.0, 5, 2),
        (90.0, 16, 80),
        (150.0, 8, 5),
        (-60.0, 16, 60),
        (-200.0, 10, 4),
    ];

    for (distance, frame_ms, steps) in cases {
        layout.clear_requests();
        let start = if distance > 0.0 { 0.0 } else { 399.0 };
        let mut robot = GestureRobot::new().with_frame_interval(frame_ms);
        robot
            .press(start, 100.0)
            .move_to(start + distance.signum() * 10.0, 100.0)
            .drag_to(start + distance, 100.0, steps)
            .release();
        robot.run(&mut container);

        let commits = layout.commits();
        assert_eq!(commits.len(), 1, "distance {distance}: {commits:?}");
        assert!(container.is_idle(), "state leaked after distance {distance}");
        assert!(container.gesture().is_none());

        // Settle back so the next case starts with both drawers closed.
        for side in PanelSide::ALL {
            use fulldrag_drawer::DrawerHost;
            layout.close_drawer(side, false);
        }
    }
}

#[test]
fn open_drawer_starts_close_drag_without_swipe_slop() {
    let (layout, mut container) = setup();
    layout.force_open(PanelSide::Left);
    let listener = RecordingListener::new("listener");
    layout.add_drawer_listener(listener.clone());

    // Nothing below accepted the press, so the host feeds the container directly.
    let down = PointerEvent::down(200.0, 400.0, 0);
    assert!(!container.on_intercept_touch_event(&down));
    assert!(container.on_touch_event(&down));
    assert!(container.on_touch_event(&PointerEvent::moved(198.0, 400.0, 16)));

    let gesture = container.gesture().expect("gesture in progress");
    assert!(gesture.is_dragging());
    assert_eq!(gesture.active_side(), Some(PanelSide::Left));
    assert!(layout.last_offset(PanelSide::Left).is_none());

    assert!(container.on_touch_event(&PointerEvent::up(198.0, 400.0, 200)));
    assert_eq!(layout.commits(), vec![close(PanelSide::Left)]);
    assert_eq!(
        listener.milestones(),
        vec!["state(Dragging)", "state(Settling)", "closed(Left)", "state(Idle)"]
    );
}

#[test]
fn dragging_state_is_announced_once_per_gesture() {
    let (layout, mut container) = setup();
    let listener = RecordingListener::new("listener");
    layout.add_drawer_listener(listener.clone());

    let mut robot = GestureRobot::new();
    robot
        .press(0.0, 0.0)
        .move_to(20.0, 0.0)
        .drag_to(200.0, 0.0, 12)
        .pause(100)
        .move_to(200.0, 0.0)
        .release();
    robot.run(&mut container);

    assert_eq!(
        listener.milestones(),
        vec!["state(Dragging)", "state(Settling)", "opened(Left)", "state(Idle)"]
    );
    let slides = listener
        .events()
        .iter()
        .filter(|event| event.starts_with("slide"))
        .count();
    assert_eq!(slides, 13);
}

struct Ordered {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl DrawerListener for Ordered {
    fn on_drawer_state_changed(&self, state: DrawerState) {
        if state == DrawerState::Dragging {
            self.log.borrow_mut().push(self.name);
        }
    }
}

#[test]
fn drag_notification_reaches_newest_listener_first() {
    let (layout, mut container) = setup();
    let log = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second", "third"] {
        layout.add_drawer_listener(Rc::new(Ordered {
            name,
            log: log.clone(),
        }));
    }

    let mut robot = GestureRobot::new();
    robot.press(0.0, 0.0).move_to(20.0, 0.0).move_to(40.0, 0.0).release();
    robot.run(&mut container);

    assert_eq!(*log.borrow(), vec!["third", "second", "first"]);
}

#[test]
fn drawer_removed_mid_drag_is_not_committed() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    robot.press(0.0, 0.0).move_to(20.0, 0.0).move_to(150.0, 0.0);
    robot.run(&mut container);
    layout.remove_drawer(PanelSide::Left);

    let mut robot = GestureRobot::new();
    robot.move_to(160.0, 0.0).release();
    let records = robot.run(&mut container);

    assert!(records.iter().all(|record| record.consumed));
    assert!(layout.commits().is_empty());
    assert!(container.is_idle());
}

#[test]
fn new_press_discards_a_gesture_that_never_ended() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    robot.press(0.0, 0.0).move_to(20.0, 0.0).move_to(150.0, 0.0);
    robot.run(&mut container);
    assert!(container.gesture().is_some_and(|g| g.is_dragging()));

    // A Down while claimed goes to the drag handler and starts over.
    assert!(container.dispatch(&PointerEvent::down(50.0, 50.0, 1_000)));
    let gesture = container.gesture().expect("fresh gesture");
    assert!(!gesture.is_dragging());
    assert_eq!(gesture.initial_position().x, 50.0);
    assert!(!container.is_intercepting());
    assert!(layout.commits().is_empty());
}

#[test]
fn stream_claimed_for_left_never_drives_right_drawer() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    robot
        .press(100.0, 0.0)
        .move_to(130.0, 0.0)
        .move_to(60.0, 0.0)
        .move_to(20.0, 0.0)
        .release();
    let records = robot.run(&mut container);

    assert!(records[1..].iter().all(|record| record.consumed));
    assert!(layout.requests().is_empty());
    assert!(container.is_idle());
}

#[test]
fn claimed_side_drags_once_finger_returns_past_slop() {
    let (layout, mut container) = setup();

    let mut robot = GestureRobot::new();
    robot
        .press(100.0, 0.0)
        .move_to(130.0, 0.0)
        .move_to(60.0, 0.0)
        .move_to(160.0, 0.0);
    robot.run(&mut container);

    let gesture = container.gesture().expect("gesture in progress");
    assert_eq!(gesture.active_side(), Some(PanelSide::Left));
    assert_eq!(
        layout.requests(),
        vec![DrawerRequest::Offset {
            side: PanelSide::Left,
            slide_offset: 52.0 / DRAWER_WIDTH,
        }]
    );
}
