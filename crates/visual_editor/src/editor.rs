//! Editor facade
//!
//! Hosts hold one [`VisualEditor`] and route palette drags, surface events and
//! block measurements through it.

use std::sync::Arc;

use crate::binder::ModelBinder;
use crate::drag::{DragDropController, DragEvent, DragListener, DropSurface};
use crate::errors::{EditorError, Result};
use crate::model::{BlockData, ModelValue, Size};
use crate::registry::{ComponentDescriptor, ComponentRegistry};

/// One palette menu entry.
pub struct PaletteEntry<R> {
    pub key: String,
    pub label: String,
    pub preview: R,
}

/// Headless visual editor
///
/// Ties the model binder, the component registry and the drag/drop controller
/// together. Hosts forward their toolkit events here and render from
/// [`VisualEditor::palette`], [`VisualEditor::blocks`] and
/// [`VisualEditor::render_block`].
pub struct VisualEditor<R> {
    binder: ModelBinder<ModelValue>,
    registry: ComponentRegistry<R>,
    controller: DragDropController<R>,
}

impl<R> VisualEditor<R> {
    pub fn new(registry: ComponentRegistry<R>, binder: ModelBinder<ModelValue>) -> Self {
        Self {
            binder,
            registry,
            controller: DragDropController::new(),
        }
    }

    pub fn registry(&self) -> &ComponentRegistry<R> {
        &self.registry
    }

    pub fn controller(&self) -> &DragDropController<R> {
        &self.controller
    }

    pub fn binder(&self) -> &ModelBinder<ModelValue> {
        &self.binder
    }

    /// Current model, reconciled with the owner.
    pub fn model(&mut self) -> Option<&ModelValue> {
        self.binder.value()
    }

    /// Container extent, zero when there is no model.
    pub fn container_size(&mut self) -> Size {
        self.model().map(|m| m.container.size()).unwrap_or_default()
    }

    /// Snapshot of the block list, empty when there is no model.
    pub fn blocks(&mut self) -> Vec<BlockData> {
        self.model().map(|m| m.blocks().to_vec()).unwrap_or_default()
    }

    pub fn palette(&self) -> Vec<PaletteEntry<R>> {
        self.registry
            .components()
            .iter()
            .map(|component| PaletteEntry {
                key: component.key.clone(),
                label: component.label.clone(),
                preview: component.preview(),
            })
            .collect()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Start dragging the palette component registered under `key`.
    pub fn begin_drag(&mut self, key: &str, surface: &mut dyn DropSurface) -> Result<()> {
        let component = self.registry.get(key)?.clone();
        self.controller.drag_start(component, surface);
        Ok(())
    }

    /// Deliver one drop-surface event. Returns the block a drop appended.
    pub fn handle(&mut self, listener: DragListener, event: &mut DragEvent) -> Option<BlockData> {
        self.controller.dispatch(listener, event, &mut self.binder)
    }

    pub fn end_drag(&mut self, surface: &mut dyn DropSurface) {
        self.controller.drag_end(surface);
    }

    /// Report the realized size of the block at `index` after layout.
    ///
    /// Centers a freshly dropped block once and writes the result back. Later
    /// reports for the same block change nothing.
    pub fn block_mounted(&mut self, index: usize, measured: Size) -> Result<bool> {
        let Some(model) = self.binder.value() else {
            return Ok(false);
        };

        let len = model.blocks().len();
        let mut block = model
            .blocks()
            .get(index)
            .cloned()
            .ok_or(EditorError::BlockOutOfRange { index, len })?;

        if !block.adjust_to_measured(measured) {
            return Ok(false);
        }

        tracing::debug!(
            index,
            width = measured.width,
            height = measured.height,
            left = block.left,
            top = block.top,
            "block centered on drop point"
        );
        let next = model
            .with_block_replaced(index, block)
            .ok_or(EditorError::BlockOutOfRange { index, len })?;
        self.binder.set(next);
        Ok(true)
    }

    /// Component that renders the block at `index`.
    pub fn component_for(&mut self, index: usize) -> Result<Arc<ComponentDescriptor<R>>> {
        let blocks = self.blocks();
        let block = blocks.get(index).ok_or(EditorError::BlockOutOfRange {
            index,
            len: blocks.len(),
        })?;
        Ok(self.registry.get(&block.component_key)?.clone())
    }

    /// Live render of the block at `index`.
    pub fn render_block(&mut self, index: usize) -> Result<R> {
        self.component_for(index).map(|component| component.render())
    }
}
