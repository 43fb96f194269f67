//! Drawer demo
//!
//! Builds a small screen (a pager on top, an event list below, a start
//! drawer) and replays a handful of gestures through the full draggable
//! container, printing what the drawer listener saw after each one.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run -p drawer-demo
//! ```

use anyhow::{bail, Context, Result};
use fulldrag_drawer::{DrawerGravity, DrawerHost, FullDraggableContainer, PanelSide, ViewParent};
use fulldrag_foundation::PointerEvent;
use fulldrag_graphics::{Density, Rect};
use fulldrag_testing::{FakeDrawerLayout, FakeView, GestureRobot, RecordingListener};
use std::rc::Rc;

const SCREEN: Rect = Rect::new(0.0, 0.0, 1080.0, 2160.0);
const DENSITY: f32 = 2.75;

struct Scenario {
    name: &'static str,
    script: fn(&mut GestureRobot),
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "tap on the list",
            script: |robot| {
                robot.press(540.0, 1500.0).pause(80).release();
            },
        },
        Scenario {
            name: "swipe the pager on its second page",
            script: |robot| {
                robot.press(200.0, 400.0).drag_to(800.0, 410.0, 12).release();
            },
        },
        Scenario {
            name: "slow short drag on the list",
            script: |robot| {
                robot
                    .press(100.0, 1500.0)
                    .move_to(140.0, 1500.0)
                    .drag_to(180.0, 1500.0, 40)
                    .release();
            },
        },
        Scenario {
            name: "quick flick on the list",
            script: |robot| {
                robot
                    .set_frame_interval(8)
                    .press(100.0, 1500.0)
                    .move_to(140.0, 1500.0)
                    .move_to(180.0, 1500.0)
                    .move_to(220.0, 1500.0)
                    .release();
            },
        },
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Full Draggable Drawer Demo ===");
    println!("Drag anywhere outside the pager to pull the start drawer.");
    println!();

    let layout = FakeDrawerLayout::new();
    layout.add_drawer(DrawerGravity::Start, 840.0);
    let listener = RecordingListener::new("demo");
    layout.add_drawer_listener(listener.clone());

    let pager = FakeView::pager("pager", Rect::new(0.0, 0.0, SCREEN.width, 800.0), 3, 1).into_rc();
    let list = FakeView::new("events", Rect::new(0.0, 800.0, SCREEN.width, 1360.0)).into_rc();
    let content = FakeView::new("root", SCREEN)
        .with_child(pager)
        .with_child(list)
        .into_rc();

    let mut container = FullDraggableContainer::with_density(Density::new(DENSITY));
    let parent: &dyn ViewParent = &layout;
    container
        .attach(Some(parent))
        .context("attaching the container to the drawer layout")?;
    container.set_content(content);
    log::info!("thresholds: {:?}", container.config());

    let mut seen = 0;
    for scenario in scenarios() {
        let mut robot = GestureRobot::new();
        (scenario.script)(&mut robot);
        let records = robot.run(&mut container);
        let claimed = records.iter().filter(|record| record.consumed).count();

        println!("--- {} ---", scenario.name);
        println!("  events: {}, taken by drawer: {}", records.len(), claimed);
        let events = listener.milestones();
        for event in &events[seen..] {
            println!("  {event}");
        }
        seen = events.len();
        println!(
            "  drawer {}",
            if layout.is_drawer_open(PanelSide::Left) {
                "open"
            } else {
                "closed"
            }
        );

        if !container.is_idle() {
            bail!("gesture state leaked after '{}'", scenario.name);
        }
    }

    // The open drawer covers the content, so nothing below takes the press
    // and the layout hands the stream straight to the container.
    println!("--- tap the scrim ---");
    let down = PointerEvent::down(900.0, 1500.0, 0);
    container.on_intercept_touch_event(&down);
    container.on_touch_event(&down);
    container.on_touch_event(&PointerEvent::moved(896.0, 1500.0, 16));
    container.on_touch_event(&PointerEvent::up(896.0, 1500.0, 120));
    for event in &listener.milestones()[seen..] {
        println!("  {event}");
    }
    if layout.is_drawer_open(PanelSide::Left) {
        bail!("drawer still open after tapping the scrim");
    }

    print_summary(&layout, &listener);
    Ok(())
}

fn print_summary(layout: &FakeDrawerLayout, listener: &Rc<RecordingListener>) {
    println!();
    println!(
        "{} listener callbacks, {} open/close requests",
        listener.events().len(),
        layout.commits().len()
    );
}
