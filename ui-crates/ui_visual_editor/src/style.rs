use gpui::{hsla, px, Hsla, Pixels};

pub const MENU_WIDTH: Pixels = px(275.0);
pub const OPERATOR_WIDTH: Pixels = px(275.0);
pub const HEADER_HEIGHT: Pixels = px(60.0);

pub fn background() -> Hsla {
    hsla(0.0, 0.0, 0.96, 1.0)
}

pub fn panel() -> Hsla {
    hsla(0.0, 0.0, 1.0, 1.0)
}

pub fn border() -> Hsla {
    hsla(0.0, 0.0, 0.86, 1.0)
}

pub fn foreground() -> Hsla {
    hsla(0.0, 0.0, 0.2, 1.0)
}

pub fn muted_foreground() -> Hsla {
    hsla(0.0, 0.0, 0.55, 1.0)
}

/// Drop surface border while a drag may move onto it
pub fn drop_allowed() -> Hsla {
    hsla(0.58, 0.75, 0.55, 1.0)
}

pub fn error() -> Hsla {
    hsla(0.0, 0.8, 0.5, 1.0)
}
