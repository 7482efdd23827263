use gpui::{prelude::*, *};
use visual_editor::{BlockData, Size};

use crate::style;

/// A positioned block on the canvas.
///
/// While the block still carries `adjust_position`, a zero-cost canvas layer
/// reports the block's laid-out size after prepaint through `on_measured`.
pub fn block_element(
    index: usize,
    block: &BlockData,
    content: AnyElement,
    on_measured: impl Fn(usize, Size, &mut App) + 'static,
) -> impl IntoElement {
    div()
        .absolute()
        .left(px(block.left))
        .top(px(block.top))
        .child(content)
        .when(block.adjust_position, |this| {
            this.child(
                canvas(
                    move |bounds, _window, cx| {
                        let measured = Size::new(
                            bounds.size.width.as_f32(),
                            bounds.size.height.as_f32(),
                        );
                        on_measured(index, measured, cx);
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .top_0()
                .left_0()
                .size_full(),
            )
        })
}

/// Stand-in for a block whose component key is not registered.
pub fn missing_component(key: &str) -> AnyElement {
    div()
        .px_3()
        .py_2()
        .border_1()
        .border_color(style::error())
        .rounded(px(4.0))
        .bg(style::panel())
        .text_sm()
        .text_color(style::error())
        .child(format!("Component not registered: {key}"))
        .into_any_element()
}
