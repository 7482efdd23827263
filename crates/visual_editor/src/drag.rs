//! Drag/drop placement
//!
//! The controller is a two-state machine. `drag_start` captures a palette
//! component and attaches the four drop-surface listeners; `drag_end` detaches
//! them and clears the session on every exit path. A drop in between appends
//! one block at the pointer position relative to the surface origin and
//! consumes the session.

use std::fmt;
use std::sync::Arc;

use crate::binder::ModelBinder;
use crate::model::{BlockData, ModelValue, Point};
use crate::registry::ComponentDescriptor;

/// Listeners a drop surface carries while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragListener {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragListener {
    pub const ALL: [DragListener; 4] = [
        DragListener::Enter,
        DragListener::Over,
        DragListener::Leave,
        DragListener::Drop,
    ];
}

/// Cursor affordance carried on the event's transfer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// A drag event as delivered to the drop surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragEvent {
    /// Pointer position relative to the drop surface's top-left corner
    pub offset: Point,
    pub drop_effect: DropEffect,
    default_prevented: bool,
}

impl DragEvent {
    pub fn at(offset: Point) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Tell the host not to apply its default handling (rejecting the drag).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Where the controller attaches and detaches its listeners.
pub trait DropSurface {
    fn attach(&mut self, listener: DragListener);
    fn detach(&mut self, listener: DragListener);
}

/// The component captured by an active drag.
pub struct DragSession<R> {
    component: Arc<ComponentDescriptor<R>>,
}

impl<R> DragSession<R> {
    pub fn component(&self) -> &Arc<ComponentDescriptor<R>> {
        &self.component
    }

    pub fn key(&self) -> &str {
        &self.component.key
    }
}

pub enum DragState<R> {
    Idle,
    Dragging(DragSession<R>),
}

impl<R> DragState<R> {
    pub fn session(&self) -> Option<&DragSession<R>> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }
}

impl<R> fmt::Debug for DragState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragState::Idle => f.write_str("Idle"),
            DragState::Dragging(session) => f.debug_tuple("Dragging").field(&session.key()).finish(),
        }
    }
}

pub struct DragDropController<R> {
    state: DragState<R>,
    listeners_attached: bool,
}

impl<R> DragDropController<R> {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            listeners_attached: false,
        }
    }

    pub fn state(&self) -> &DragState<R> {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Begin dragging `component` over `surface`.
    ///
    /// A second start without an intervening end swaps the captured component
    /// but leaves the existing listeners in place.
    pub fn drag_start(&mut self, component: Arc<ComponentDescriptor<R>>, surface: &mut dyn DropSurface) {
        if !self.listeners_attached {
            for listener in DragListener::ALL {
                surface.attach(listener);
            }
            self.listeners_attached = true;
        } else {
            tracing::debug!(key = %component.key, "drag start while already dragging, listeners kept");
        }

        tracing::debug!(key = %component.key, "drag started");
        self.state = DragState::Dragging(DragSession { component });
    }

    pub fn drag_enter(&mut self, event: &mut DragEvent) {
        event.drop_effect = DropEffect::Move;
    }

    /// Must prevent the default, otherwise the host never delivers the drop.
    pub fn drag_over(&mut self, event: &mut DragEvent) {
        event.prevent_default();
    }

    pub fn drag_leave(&mut self, event: &mut DragEvent) {
        event.drop_effect = DropEffect::None;
    }

    /// Append a block for the captured component at the event's offset.
    ///
    /// The drop consumes the session, so the controller is `Idle` afterwards
    /// while the listeners stay attached until `drag_end`.
    ///
    /// Returns the appended block, or `None` when there is no session or no
    /// model to write into.
    pub fn drop(&mut self, event: &DragEvent, binder: &mut ModelBinder<ModelValue>) -> Option<BlockData> {
        let DragState::Dragging(session) = std::mem::replace(&mut self.state, DragState::Idle) else {
            tracing::debug!("drop without an active drag ignored");
            return None;
        };

        let Some(model) = binder.value() else {
            tracing::debug!(key = %session.key(), "drop with no model ignored");
            return None;
        };

        let block = BlockData::dropped(session.key(), event.offset);
        let next = model.with_block(block.clone());
        tracing::debug!(
            key = %block.component_key,
            left = block.left,
            top = block.top,
            blocks = next.blocks().len(),
            "block dropped"
        );
        binder.set(next);
        Some(block)
    }

    /// Route one surface event to its handler.
    pub fn dispatch(
        &mut self,
        listener: DragListener,
        event: &mut DragEvent,
        binder: &mut ModelBinder<ModelValue>,
    ) -> Option<BlockData> {
        match listener {
            DragListener::Enter => self.drag_enter(event),
            DragListener::Over => self.drag_over(event),
            DragListener::Leave => self.drag_leave(event),
            DragListener::Drop => return self.drop(event, binder),
        }
        None
    }

    /// Finish the drag, dropped or cancelled.
    pub fn drag_end(&mut self, surface: &mut dyn DropSurface) {
        if self.listeners_attached {
            for listener in DragListener::ALL {
                surface.detach(listener);
            }
            self.listeners_attached = false;
        }

        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(session) => tracing::debug!(key = %session.key(), "drag ended"),
            DragState::Idle => tracing::debug!("drag ended"),
        }
    }
}

impl<R> Default for DragDropController<R> {
    fn default() -> Self {
        Self::new()
    }
}
