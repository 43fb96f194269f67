//! The container that makes its whole surface a drawer drag handle.

use crate::classifier::{GestureClassifier, InterceptDecision};
use crate::config::DrawerGestureConfig;
use crate::drag::{DragStateMachine, DragUpdate};
use crate::error::AttachError;
use crate::gesture::GestureState;
use crate::host::{DrawerCapabilities, DrawerHost, ViewParent};
use fulldrag_foundation::{ContentNode, PointerEvent, PointerEventKind};
use fulldrag_graphics::{Density, Point};
use std::rc::Rc;

/// Sits directly inside a drawer host and wraps the main content.
///
/// Events reach it through [`dispatch`](Self::dispatch), or through the two
/// lower-level hooks when the host runs its own intercept protocol:
/// [`on_intercept_touch_event`](Self::on_intercept_touch_event) for every
/// event while descendants still own the stream, and
/// [`on_touch_event`](Self::on_touch_event) once the stream is claimed or when
/// no descendant accepted the `Down`.
pub struct FullDraggableContainer {
    config: DrawerGestureConfig,
    classifier: GestureClassifier,
    drag: DragStateMachine,
    host: Option<Rc<dyn DrawerHost>>,
    content: Option<Rc<dyn ContentNode>>,
    gesture: Option<GestureState>,
    intercepting: bool,
}

impl FullDraggableContainer {
    pub fn new(config: DrawerGestureConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(&config),
            drag: DragStateMachine::new(&config),
            config,
            host: None,
            content: None,
            gesture: None,
            intercepting: false,
        }
    }

    pub fn with_density(density: Density) -> Self {
        Self::new(DrawerGestureConfig::from_env(density))
    }

    /// Binds the container to its parent drawer host.
    ///
    /// Fails if the parent is missing, is not a drawer host, or cannot place
    /// drawers at a live offset and notify drag listeners.
    pub fn attach(&mut self, parent: Option<&dyn ViewParent>) -> Result<(), AttachError> {
        let host = parent
            .and_then(|parent| parent.as_drawer_host())
            .ok_or(AttachError::NotInDrawerLayout)?;

        let capabilities = host.capabilities();
        if !capabilities.contains(DrawerCapabilities::LIVE_OFFSET) {
            return Err(AttachError::MissingCapability {
                capability: "live drawer offsets",
            });
        }
        if !capabilities.contains(DrawerCapabilities::DRAG_LISTENERS) {
            return Err(AttachError::MissingCapability {
                capability: "drag state listeners",
            });
        }

        self.reset();
        self.host = Some(host);
        log::debug!("full draggable container attached");
        Ok(())
    }

    pub fn detach(&mut self) {
        self.reset();
        self.host = None;
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// Root of the content hosted inside this container. Its children are
    /// asked whether they want horizontal drags.
    pub fn set_content(&mut self, content: Rc<dyn ContentNode>) {
        self.content = Some(content);
    }

    pub fn clear_content(&mut self) {
        self.content = None;
    }

    pub fn config(&self) -> &DrawerGestureConfig {
        &self.config
    }

    /// State of the gesture in progress, if any.
    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    pub fn is_intercepting(&self) -> bool {
        self.intercepting
    }

    /// True when no gesture state is held.
    pub fn is_idle(&self) -> bool {
        self.gesture.is_none() && !self.intercepting && self.drag.is_idle()
    }

    /// Routes one event and marks it consumed if the container took it.
    ///
    /// The event that triggers the claim is not replayed to the drag state
    /// machine; dragging starts with the next `Move`.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        let handled = if self.intercepting {
            self.on_touch_event(event)
        } else {
            self.on_intercept_touch_event(event)
        };
        if handled {
            event.consume();
        }
        handled
    }

    /// Returns true when the container claims the stream from its content.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        let Some(host) = self.host.clone() else {
            return false;
        };

        match event.kind {
            PointerEventKind::Down => {
                self.begin_gesture(event.position);
                false
            }
            PointerEventKind::Move => {
                let content = self.content.clone();
                let Some(gesture) = self.gesture.as_mut() else {
                    log::warn!("move without a preceding down, ignoring");
                    return false;
                };
                let decision = self.classifier.classify_move(
                    gesture,
                    event.position,
                    content.as_deref(),
                    host.as_ref(),
                );
                self.log_decision(event, &decision);
                if let InterceptDecision::Claim(side) = decision {
                    log::debug!("claimed pointer stream for {:?} drawer", side);
                    self.intercepting = true;
                }
                self.intercepting
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if !self.intercepting {
                    // Content kept the whole gesture.
                    self.reset();
                }
                false
            }
        }
    }

    /// Drives the drawer. Once the container handles a stream it keeps
    /// consuming it until `Up`/`Cancel`, even for events that change nothing.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        let Some(host) = self.host.clone() else {
            return false;
        };

        match event.kind {
            PointerEventKind::Down => {
                self.begin_gesture(event.position);
            }
            PointerEventKind::Move => {
                let Some(gesture) = self.gesture.as_mut() else {
                    log::warn!("move without a preceding down, absorbing");
                    return true;
                };
                let update = self.drag.on_move(gesture, event, host.as_ref());
                if self.config.logs_events() {
                    log::debug!("{:?} at {:?} -> {:?}", event.kind, event.position, update);
                } else if let DragUpdate::Dragged { offset_px, .. } = update {
                    log::trace!("drawer offset {:.1}px", offset_px);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                match self.gesture.take() {
                    Some(gesture) => {
                        self.drag.on_release(&gesture, host.as_ref());
                    }
                    None => log::warn!("{:?} without a preceding down, absorbing", event.kind),
                }
                self.reset();
            }
        }
        true
    }

    fn begin_gesture(&mut self, position: Point) {
        self.reset();
        self.gesture = Some(GestureState::new(position));
    }

    fn reset(&mut self) {
        self.gesture = None;
        self.intercepting = false;
        self.drag.reset();
    }

    fn log_decision(&self, event: &PointerEvent, decision: &InterceptDecision) {
        if self.config.logs_events() {
            log::debug!("{:?} at {:?} -> {:?}", event.kind, event.position, decision);
        } else {
            log::trace!("intercept decision {:?}", decision);
        }
    }
}

impl Default for FullDraggableContainer {
    fn default() -> Self {
        Self::new(DrawerGestureConfig::default())
    }
}
