pub use self::{board_display::*, stats_display::*};

mod board_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(66, 66, 66);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};
    use taskfall_engine::ShapeKind;

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::DARK_GRAY, color::BLACK);
    pub const HELP: Style = fg_bg(color::GRAY, color::BLACK);
    pub const BANNER: Style = fg_bg(color::WHITE, color::RED);

    pub const I_BLOCK: Style = bg_only(color::RED);
    pub const O_BLOCK: Style = bg_only(color::BLUE);
    pub const T_BLOCK: Style = bg_only(color::GREEN);
    pub const S_BLOCK: Style = bg_only(color::YELLOW);
    pub const Z_BLOCK: Style = bg_only(color::MAGENTA);
    pub const J_BLOCK: Style = bg_only(color::CYAN);
    pub const L_BLOCK: Style = bg_only(color::GRAY);

    /// Maps a shape kind to its cell style (the catalog's color tag).
    #[must_use]
    pub const fn shape_style(kind: ShapeKind) -> Style {
        match kind {
            ShapeKind::I => I_BLOCK,
            ShapeKind::O => O_BLOCK,
            ShapeKind::T => T_BLOCK,
            ShapeKind::S => S_BLOCK,
            ShapeKind::Z => Z_BLOCK,
            ShapeKind::J => J_BLOCK,
            ShapeKind::L => L_BLOCK,
        }
    }
}
