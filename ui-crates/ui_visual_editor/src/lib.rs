pub mod block;
pub mod editor;
pub mod palette;
pub mod style;
pub mod surface;

pub use editor::{ModelChanged, VisualEditorView};
pub use palette::DraggedComponent;
pub use surface::CanvasDropSurface;
pub use visual_editor::{ComponentRegistry, ModelValue};

/// Registry whose components render gpui elements.
pub type ElementRegistry = visual_editor::ComponentRegistry<gpui::AnyElement>;
