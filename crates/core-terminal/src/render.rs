//! Differential cell-grid renderer: the same front/back grid diff the
//! original source's `t_render` does, but emitting the literal ANSI
//! sequences named in spec.md §6 directly instead of a typed drawing API.

use std::io::{self, Write};

/// One of the four highlight styles spec.md §6 names, or `Normal` for
/// unstyled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    CursorHighlight,
    InfoLine,
    LineHighlight,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Style::Normal => "\x1b[0m",
            Style::CursorHighlight => "\x1b[90;107m",
            Style::InfoLine => "\x1b[30;47m",
            Style::LineHighlight => "\x1b[48;5;240m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    symbol: char,
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self { symbol: ' ', style: Style::Normal }
    }
}

/// A fixed `rows x cols` grid, double-buffered so `flush` only emits the
/// cells that changed since the last frame.
pub struct Renderer {
    cols: usize,
    rows: usize,
    front: Vec<Cell>,
    back: Vec<Cell>,
}

pub fn cursor_position(x: usize, y: usize) -> String {
    format!("\x1b[{};{}H", y + 1, x + 1)
}

pub fn clear_screen() -> &'static str {
    "\x1b[1;1H\x1b[2J"
}

pub fn hide_cursor() -> &'static str {
    "\x1b[?25l"
}

pub fn show_cursor() -> &'static str {
    "\x1b[?25h"
}

impl Renderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            front: vec![Cell::default(); cols * rows],
            back: vec![Cell::default(); cols * rows],
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.front = vec![Cell::default(); cols * rows];
        self.back = vec![Cell::default(); cols * rows];
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Clear the back buffer to blanks before a fresh frame is drawn into it.
    pub fn clear_back(&mut self) {
        self.back.fill(Cell::default());
    }

    /// Write one symbol into the back buffer at `(x, y)`. Out-of-bounds
    /// writes are dropped; callers never need to clip to the viewport
    /// themselves.
    pub fn put(&mut self, x: usize, y: usize, symbol: char, style: Style) {
        if x >= self.cols || y >= self.rows {
            return;
        }
        let idx = self.index(x, y);
        self.back[idx] = Cell { symbol, style };
    }

    /// Diff `back` against `front`, emit ANSI for changed cells only, move
    /// the cursor to `(cursor_x, cursor_y)`, then swap buffers for the
    /// next frame.
    pub fn flush(&mut self, writer: &mut impl Write, cursor_x: usize, cursor_y: usize) -> io::Result<()> {
        let mut out = String::new();
        let mut last_style = None;
        for y in 0..self.rows {
            for x in 0..self.cols {
                let idx = self.index(x, y);
                if self.front[idx] == self.back[idx] {
                    continue;
                }
                out.push_str(&cursor_position(x, y));
                let cell = self.back[idx];
                if last_style != Some(cell.style) {
                    out.push_str(cell.style.sgr());
                    last_style = Some(cell.style);
                }
                out.push(cell.symbol);
            }
        }
        out.push_str(&cursor_position(cursor_x, cursor_y));
        writer.write_all(out.as_bytes())?;
        writer.flush()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_identical_frame_emits_no_cell_writes() {
        let mut renderer = Renderer::new(4, 2);
        renderer.put(0, 0, 'a', Style::Normal);
        let mut out = Vec::new();
        renderer.flush(&mut out, 0, 0).unwrap();

        renderer.clear_back();
        renderer.put(0, 0, 'a', Style::Normal);
        let mut out2 = Vec::new();
        renderer.flush(&mut out2, 0, 0).unwrap();

        // Only the trailing cursor-position sequence should remain.
        assert_eq!(out2, cursor_position(0, 0).into_bytes());
    }

    #[test]
    fn changed_cell_is_repainted() {
        let mut renderer = Renderer::new(4, 2);
        renderer.put(1, 1, 'x', Style::Normal);
        let mut out = Vec::new();
        renderer.flush(&mut out, 0, 0).unwrap();

        renderer.clear_back();
        renderer.put(1, 1, 'y', Style::Normal);
        let mut out2 = Vec::new();
        renderer.flush(&mut out2, 0, 0).unwrap();

        let text = String::from_utf8(out2).unwrap();
        assert!(text.contains(&cursor_position(1, 1)));
        assert!(text.contains('y'));
    }

    #[test]
    fn out_of_bounds_put_is_dropped() {
        let mut renderer = Renderer::new(2, 2);
        renderer.put(5, 5, 'z', Style::Normal);
        let mut out = Vec::new();
        renderer.flush(&mut out, 0, 0).unwrap();
        assert_eq!(out, cursor_position(0, 0).into_bytes());
    }
}
