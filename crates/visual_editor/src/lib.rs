//! Visual Editor Core
//!
//! Toolkit-agnostic heart of the drag-and-drop page editor:
//! - Model types for the canvas and its positioned blocks
//! - Two-way binding with a consumer-owned model
//! - Component registry backing the palette
//! - Drag/drop placement state machine
//! - Mount-time centering of dropped blocks
//!
//! `R` throughout is the host toolkit's element type.

mod binder;
mod drag;
mod editor;
mod errors;
mod model;
mod mount;
mod registry;

pub use binder::ModelBinder;
pub use drag::{DragDropController, DragEvent, DragListener, DragSession, DragState, DropEffect, DropSurface};
pub use editor::{PaletteEntry, VisualEditor};
pub use errors::{EditorError, Result};
pub use model::{BlockData, Container, ModelValue, Point, Size};
pub use registry::{ComponentDescriptor, ComponentRegistry, RenderFn};
