use std::sync::Arc;

use gpui::{prelude::*, *};
use parking_lot::RwLock;
use ui_visual_editor::{ModelChanged, VisualEditorView};
use visual_editor::ModelValue;

use crate::demo;

/// Window root: owns the page model and hosts the editor over it.
pub struct Workbench {
    model: Arc<RwLock<ModelValue>>,
    editor: Entity<VisualEditorView>,
    _subscription: Subscription,
}

impl Workbench {
    pub fn new(model: ModelValue, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let model = Arc::new(RwLock::new(model));

        let read = model.clone();
        let write = model.clone();
        let editor = cx.new(|cx| {
            VisualEditorView::new(
                demo::registry(),
                move || Some(read.read().clone()),
                move |next: &ModelValue| *write.write() = next.clone(),
                cx,
            )
        });

        let subscription = cx.subscribe(&editor, |this: &mut Self, _editor, event: &ModelChanged, cx| {
            this.on_model_changed(&event.0);
            cx.notify();
        });

        Self {
            model,
            editor,
            _subscription: subscription,
        }
    }

    fn on_model_changed(&self, model: &ModelValue) {
        // Events are delivered after the editor's update, so the owned model
        // may already be ahead of this one.
        tracing::info!(
            blocks = model.blocks().len(),
            owned_blocks = self.model.read().blocks().len(),
            "page model updated"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            match model.to_json_pretty() {
                Ok(json) => tracing::trace!(%json, "page model"),
                Err(err) => tracing::warn!(%err, "page model not serializable"),
            }
        }
    }
}

impl Render for Workbench {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().size_full().child(self.editor.clone())
    }
}
