use gpui::{prelude::*, *};
use visual_editor::PaletteEntry;

use crate::style;

/// Drag payload for a palette component
#[derive(Clone, Debug)]
pub struct DraggedComponent {
    pub key: SharedString,
    pub label: SharedString,
}

impl Render for DraggedComponent {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("dragged-component")
            .cursor_grab()
            .px_3()
            .py_1()
            .bg(style::panel())
            .border_1()
            .border_color(style::drop_allowed())
            .rounded(px(4.0))
            .opacity(0.8)
            .shadow_md()
            .text_sm()
            .text_color(style::foreground())
            .child(self.label.clone())
    }
}

/// One palette menu item: label over the component preview, draggable.
///
/// `on_start` runs when gpui begins the drag, before the preview view exists.
pub fn menu_item(
    entry: PaletteEntry<AnyElement>,
    on_start: impl Fn(&DraggedComponent, &mut App) + 'static,
) -> impl IntoElement {
    let dragged = DraggedComponent {
        key: entry.key.clone().into(),
        label: entry.label.clone().into(),
    };

    div()
        .id(SharedString::from(format!("visual-editor-menu-item-{}", entry.key)))
        .relative()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .w_full()
        .min_h(px(80.0))
        .p_3()
        .pt_6()
        .bg(style::panel())
        .border_1()
        .border_color(style::border())
        .rounded(px(4.0))
        .cursor_grab()
        .child(
            div()
                .absolute()
                .top_0()
                .left_0()
                .px_2()
                .py_0p5()
                .bg(style::drop_allowed())
                .rounded(px(4.0))
                .text_xs()
                .text_color(style::panel())
                .child(entry.label),
        )
        .child(entry.preview)
        .on_drag(dragged, move |drag, _position, _window, cx| {
            let preview = DraggedComponent::clone(&drag);
            on_start(&preview, cx);
            cx.new(|_| preview)
        })
}
