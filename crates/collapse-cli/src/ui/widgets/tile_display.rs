use collapse_engine::{Tile, identify_pentomino};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// One tile rendered as a colored cell.
///
/// Terminal tiles show their completed shape's pentomino letter while the
/// shape overlay is toggled on, and a plain marker otherwise.
#[derive(Debug)]
pub struct TileDisplay {
    style: Style,
    label: String,
}

impl TileDisplay {
    pub fn new(style: Style, label: impl Into<String>) -> Self {
        Self {
            style,
            label: label.into(),
        }
    }

    pub fn from_tile(tile: &Tile) -> Self {
        if tile.is_terminal() {
            let label = if tile.shows_shape() {
                tile.shape()
                    .and_then(identify_pentomino)
                    .map_or_else(|| "#".to_string(), |letter| letter.to_string())
            } else {
                tile.value().to_string()
            };
            return Self::new(style::TERMINAL, label);
        }

        let style = match tile.value() {
            1 => style::VALUE_1,
            2 => style::VALUE_2,
            3 => style::VALUE_3,
            4 => style::VALUE_4,
            _ => style::VALUE_5,
        };
        Self::new(style, tile.value().to_string())
    }
}

impl Widget for TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the labeled cells
        Paragraph::new(self.label.as_str())
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
