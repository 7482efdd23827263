//! Components offered by the demo palette

use gpui::{prelude::*, *};
use ui_visual_editor::ElementRegistry;

fn text(content: &'static str) -> AnyElement {
    div()
        .text_sm()
        .text_color(hsla(0.0, 0.0, 0.2, 1.0))
        .child(content)
        .into_any_element()
}

fn button(label: &'static str) -> AnyElement {
    div()
        .px_4()
        .py_1p5()
        .rounded(px(4.0))
        .bg(hsla(0.58, 0.75, 0.55, 1.0))
        .text_sm()
        .text_color(hsla(0.0, 0.0, 1.0, 1.0))
        .child(label)
        .into_any_element()
}

fn input(placeholder: &'static str) -> AnyElement {
    div()
        .w(px(180.0))
        .px_2()
        .py_1()
        .rounded(px(4.0))
        .border_1()
        .border_color(hsla(0.0, 0.0, 0.8, 1.0))
        .bg(hsla(0.0, 0.0, 1.0, 1.0))
        .text_sm()
        .text_color(hsla(0.0, 0.0, 0.6, 1.0))
        .child(placeholder)
        .into_any_element()
}

pub fn registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();
    registry
        .register("text", "Text", || text("Preview text"), || text("Rendered text"))
        .register("button", "Button", || button("Preview button"), || button("Rendered button"))
        .register("input", "Input", || input("Preview input"), || input("Rendered input"));
    registry
}
