use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gpui::{prelude::*, *};
use visual_editor::{
    ComponentRegistry, DragListener, DropEffect, ModelBinder, ModelValue, VisualEditor,
};

use crate::block::{block_element, missing_component};
use crate::palette::{menu_item, DraggedComponent};
use crate::style;
use crate::surface::CanvasDropSurface;

/// Emitted every time the editor writes a new model value.
#[derive(Clone, Debug)]
pub struct ModelChanged(pub ModelValue);

/// Drag-and-drop page editor view
pub struct VisualEditorView {
    editor: VisualEditor<AnyElement>,
    surface: CanvasDropSurface,
    /// Binder writes not yet emitted as `ModelChanged`
    pending: Rc<RefCell<Vec<ModelValue>>>,
    /// Missing keys already logged, so the render loop reports each once
    reported_missing: HashSet<String>,
    focus_handle: FocusHandle,
}

impl VisualEditorView {
    /// Create the editor over a consumer-owned model.
    ///
    /// `read` is consulted on every render; `write` receives each new model
    /// the editor produces, before `ModelChanged` is emitted.
    pub fn new(
        registry: ComponentRegistry<AnyElement>,
        read: impl Fn() -> Option<ModelValue> + 'static,
        mut write: impl FnMut(&ModelValue) + 'static,
        cx: &mut Context<Self>,
    ) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = pending.clone();
        let binder = ModelBinder::new(read, move |model: &ModelValue| {
            write(model);
            queue.borrow_mut().push(model.clone());
        });

        Self {
            editor: VisualEditor::new(registry, binder),
            surface: CanvasDropSurface::new(),
            pending,
            reported_missing: HashSet::new(),
            focus_handle: cx.focus_handle(),
        }
    }

    fn flush_changes(&mut self, cx: &mut Context<Self>) {
        let changes: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        if changes.is_empty() {
            return;
        }
        for model in changes {
            cx.emit(ModelChanged(model));
        }
        cx.notify();
    }

    fn begin_drag(&mut self, key: &str, cx: &mut Context<Self>) {
        if let Err(err) = self.editor.begin_drag(key, &mut self.surface) {
            tracing::error!(%err, "cannot start drag");
            return;
        }
        cx.notify();
    }

    fn end_drag(&mut self, cx: &mut Context<Self>) {
        // Listeners outlive the session when a drop consumed it
        if !self.editor.controller().listeners_attached() {
            return;
        }
        self.editor.end_drag(&mut self.surface);
        cx.notify();
    }

    fn on_container_drag_move(
        &mut self,
        event: &DragMoveEvent<DraggedComponent>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let position = event.event.position;
        let inside = event.bounds.contains(&position);
        let effect = self.surface.drop_effect();

        let offset = self.surface.offset_of(position).unwrap_or_default();
        for listener in self.surface.pointer_moved(inside) {
            let mut drag_event = self.surface.event_at(offset);
            self.editor.handle(listener, &mut drag_event);
            self.surface.apply(listener, &drag_event);
        }

        if self.surface.drop_effect() != effect {
            cx.notify();
        }
    }

    fn on_container_drop(
        &mut self,
        drag: &DraggedComponent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.surface.is_accepting() {
            tracing::debug!(key = %drag.key, "drop rejected, drag-over was not accepted");
            return;
        }
        let Some(offset) = self.surface.offset_of(window.mouse_position()) else {
            tracing::warn!(key = %drag.key, "drop before the container was laid out");
            return;
        };

        let mut event = self.surface.event_at(offset);
        if let Some(block) = self.editor.handle(DragListener::Drop, &mut event) {
            tracing::info!(
                key = %block.component_key,
                left = block.left,
                top = block.top,
                "block added"
            );
        }
        self.flush_changes(cx);
    }

    fn on_block_measured(&mut self, index: usize, measured: visual_editor::Size, cx: &mut Context<Self>) {
        match self.editor.block_mounted(index, measured) {
            Ok(true) => self.flush_changes(cx),
            Ok(false) => {}
            Err(err) => tracing::warn!(%err, "block measurement discarded"),
        }
    }

    fn render_menu(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity().clone();

        div()
            .id("visual-editor-menu")
            .flex()
            .flex_col()
            .gap_4()
            .w(style::MENU_WIDTH)
            .h_full()
            .p_5()
            .bg(style::panel())
            .border_r_1()
            .border_color(style::border())
            .overflow_y_scroll()
            .children(self.editor.palette().into_iter().map(|entry| {
                let view = view.clone();
                menu_item(entry, move |drag, cx| {
                    let key = drag.key.clone();
                    view.update(cx, |this, cx| this.begin_drag(&key, cx));
                })
            }))
    }

    fn render_header(&self) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_center()
            .h(style::HEADER_HEIGHT)
            .w_full()
            .bg(style::panel())
            .border_b_1()
            .border_color(style::border())
            .text_color(style::muted_foreground())
            .child("visual-editor-menu")
    }

    fn render_operator(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .w(style::OPERATOR_WIDTH)
            .h_full()
            .p_5()
            .bg(style::panel())
            .border_l_1()
            .border_color(style::border())
            .text_color(style::muted_foreground())
            .child("visual-editor-operator")
    }

    fn render_container(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity().clone();
        let size = self.editor.container_size();
        let blocks = self.editor.blocks();
        let drop_allowed = self.surface.drop_effect() == DropEffect::Move;

        let children: Vec<AnyElement> = blocks
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let content = match self.editor.registry().get(&block.component_key) {
                    Ok(component) => component.render(),
                    Err(err) => {
                        if self.reported_missing.insert(block.component_key.clone()) {
                            tracing::error!(%err, index, "block cannot be rendered");
                        }
                        missing_component(&block.component_key)
                    }
                };
                let view = view.clone();
                block_element(index, block, content, move |index, measured, cx| {
                    view.update(cx, |this, cx| this.on_block_measured(index, measured, cx));
                })
                .into_any_element()
            })
            .collect();

        let bounds_view = view.clone();
        div()
            .id("visual-editor-container")
            .relative()
            .flex_shrink_0()
            .w(px(size.width))
            .h(px(size.height))
            .bg(style::panel())
            .border_1()
            .border_color(if drop_allowed {
                style::drop_allowed()
            } else {
                style::border()
            })
            // Same containing block as the blocks, so offsets map to left/top
            .child(
                canvas(
                    move |bounds, _window, cx| {
                        bounds_view.update(cx, |this, _| this.surface.set_bounds(bounds));
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .top_0()
                .left_0()
                .size_full(),
            )
            .when(self.surface.tracks_pointer(), |this| {
                this.on_drag_move(cx.listener(Self::on_container_drag_move))
            })
            .when(self.surface.is_attached(DragListener::Over), |this| {
                this.drag_over::<DraggedComponent>(|this, _, _, _| {
                    this.border_color(style::drop_allowed())
                })
            })
            .when(self.surface.is_attached(DragListener::Drop), |this| {
                this.on_drop(cx.listener(Self::on_container_drop))
            })
            .children(children)
    }
}

impl Render for VisualEditorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("visual-editor")
            .track_focus(&self.focus_handle)
            .flex()
            .flex_row()
            .size_full()
            .bg(style::background())
            .text_color(style::foreground())
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _: &MouseUpEvent, _window, cx| this.end_drag(cx)),
            )
            .child(self.render_menu(cx))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .h_full()
                    .min_w_0()
                    .child(self.render_header())
                    .child(
                        div()
                            .id("visual-editor-body")
                            .flex_1()
                            .overflow_scroll()
                            .p_8()
                            .child(
                                div()
                                    .flex()
                                    .justify_center()
                                    .child(self.render_container(cx)),
                            ),
                    ),
            )
            .child(self.render_operator())
    }
}

impl Focusable for VisualEditorView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl EventEmitter<ModelChanged> for VisualEditorView {}
