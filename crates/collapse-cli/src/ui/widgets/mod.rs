pub use self::{grid_display::*, tile_display::*};

mod grid_display;
mod tile_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const BLUE: Color = Color::Rgb(63, 127, 255);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const CURSOR: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const FRAME: Style = fg_bg(color::GRAY, color::BLACK);

    pub const VALUE_1: Style = fg_bg(color::BLACK, color::CYAN);
    pub const VALUE_2: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const VALUE_3: Style = fg_bg(color::BLACK, color::ORANGE);
    pub const VALUE_4: Style = fg_bg(color::WHITE, color::BLUE);
    pub const VALUE_5: Style = fg_bg(color::BLACK, color::MAGENTA);
    pub const TERMINAL: Style = fg_bg(color::WHITE, color::GRAY);
}
