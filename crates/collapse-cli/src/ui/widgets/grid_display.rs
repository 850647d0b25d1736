use collapse_engine::Grid;
use ratatui::{
    prelude::{Buffer, Rect},
    widgets::{Block, Widget},
};

use crate::ui::widgets::{TileDisplay, style};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// The whole board, one bordered cell per tile, with the cursor cell
/// highlighted. Row 0 of the grid is the bottom of a column, so rows are
/// rendered bottom-up.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    cursor: Option<(usize, usize)>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid, cursor: Option<(usize, usize)>) -> Self {
        Self { grid, cursor }
    }

    pub fn width(grid: &Grid) -> u16 {
        u16::try_from(grid.width())
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_WIDTH)
    }

    pub fn height(grid: &Grid) -> u16 {
        u16::try_from(grid.height())
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_HEIGHT)
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        for col in 0..self.grid.width() {
            for row in 0..self.grid.height() {
                let Some(tile) = self.grid.tile(col, row) else {
                    continue;
                };
                let screen_row = self.grid.height() - 1 - row;
                let x_offset = u16::try_from(col)
                    .unwrap_or(u16::MAX)
                    .saturating_mul(CELL_WIDTH);
                let y_offset = u16::try_from(screen_row)
                    .unwrap_or(u16::MAX)
                    .saturating_mul(CELL_HEIGHT);
                let cell = Rect::new(
                    area.x.saturating_add(x_offset),
                    area.y.saturating_add(y_offset),
                    CELL_WIDTH,
                    CELL_HEIGHT,
                );
                let cell = cell.intersection(area);
                if cell.is_empty() {
                    continue;
                }

                let border_style = if self.cursor == Some((col, row)) {
                    style::CURSOR
                } else {
                    style::FRAME
                };
                let block = Block::bordered().border_style(border_style);
                let inner = block.inner(cell);
                block.render(cell, buf);
                TileDisplay::from_tile(tile).render(inner, buf);
            }
        }
    }
}
