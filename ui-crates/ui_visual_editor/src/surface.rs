use std::collections::HashSet;

use gpui::{Bounds, Pixels, Point};
use visual_editor::{DragEvent, DragListener, DropEffect, DropSurface};

/// The canvas container as a drop surface.
///
/// gpui installs handlers declaratively on every render, so "attached" here
/// means the container renders with the matching drag handlers. Enter and
/// leave are derived from drag-move positions against the container bounds.
#[derive(Debug, Default)]
pub struct CanvasDropSurface {
    attached: HashSet<DragListener>,
    /// Container bounds in window coordinates, captured during prepaint
    bounds: Option<Bounds<Pixels>>,
    hovered: bool,
    /// Set when the last over event prevented the default rejection
    accepting: bool,
    drop_effect: DropEffect,
}

impl CanvasDropSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self, listener: DragListener) -> bool {
        self.attached.contains(&listener)
    }

    /// Whether any pointer-tracking listener is installed.
    pub fn tracks_pointer(&self) -> bool {
        [DragListener::Enter, DragListener::Over, DragListener::Leave]
            .iter()
            .any(|l| self.is_attached(*l))
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    /// Window position converted to the container's own coordinates.
    pub fn offset_of(&self, position: Point<Pixels>) -> Option<visual_editor::Point> {
        let bounds = self.bounds?;
        Some(visual_editor::Point::new(
            (position.x - bounds.origin.x).as_f32(),
            (position.y - bounds.origin.y).as_f32(),
        ))
    }

    /// Listener events produced by the pointer moving while a drag is active.
    pub fn pointer_moved(&mut self, inside: bool) -> Vec<DragListener> {
        let events = match (self.hovered, inside) {
            (false, true) => vec![DragListener::Enter, DragListener::Over],
            (true, true) => vec![DragListener::Over],
            (true, false) => vec![DragListener::Leave],
            (false, false) => Vec::new(),
        };
        self.hovered = inside;
        events
            .into_iter()
            .filter(|l| self.is_attached(*l))
            .collect()
    }

    /// Record what a handler did to the event.
    pub fn apply(&mut self, listener: DragListener, event: &DragEvent) {
        self.drop_effect = event.drop_effect;
        match listener {
            DragListener::Over => self.accepting = event.is_default_prevented(),
            DragListener::Leave => self.accepting = false,
            DragListener::Enter | DragListener::Drop => {}
        }
    }

    /// Event pre-filled with the surface's current transfer state.
    pub fn event_at(&self, offset: visual_editor::Point) -> DragEvent {
        let mut event = DragEvent::at(offset);
        event.drop_effect = self.drop_effect;
        event
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn drop_effect(&self) -> DropEffect {
        self.drop_effect
    }
}

impl DropSurface for CanvasDropSurface {
    fn attach(&mut self, listener: DragListener) {
        self.attached.insert(listener);
    }

    fn detach(&mut self, listener: DragListener) {
        self.attached.remove(&listener);
        if self.attached.is_empty() {
            self.hovered = false;
            self.accepting = false;
            self.drop_effect = DropEffect::None;
        }
    }
}
