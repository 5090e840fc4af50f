//! A `Window`: a buffer reference, cursor, viewport offsets, and the three
//! `Rect`s (source, gutter/status, info line) it renders into.

use core_nav::Cursor;
use core_text::TextModel;

use crate::buffer::BufferId;
use crate::rect::{Point, Rect};

#[derive(Debug)]
pub struct Window {
    pub buffer: BufferId,
    pub cursor: Cursor,
    pub x_offset: usize,
    pub y_offset: usize,
    pub source: Rect,
    pub gutter: Rect,
    pub info: Rect,
}

impl Window {
    /// A window over `buffer`, cursor at the buffer head, both offsets 0
    /// (per `spec.md` §4.7's window-creation rule).
    pub fn new(buffer: BufferId, model: &TextModel, layout: Rect) -> Self {
        let source = Rect::child(
            &layout,
            Point::new(6, 0),
            Point::new(layout.cols(), layout.rows().saturating_sub(1)),
        );
        let gutter = Rect::child(
            &layout,
            Point::new(0, 0),
            Point::new(6, layout.rows().saturating_sub(1)),
        );
        let info = Rect::child(
            &layout,
            Point::new(0, layout.rows().saturating_sub(1)),
            Point::new(layout.cols(), layout.rows()),
        );
        Self {
            buffer,
            cursor: Cursor::at_head(model),
            x_offset: 0,
            y_offset: 0,
            source,
            gutter,
            info,
        }
    }

    fn view_rows(&self) -> usize {
        self.source.rows() as usize
    }

    /// Scroll the viewport up by `n` lines, holding the absolute cursor
    /// line fixed by moving the cursor's screen `y` down by the same
    /// delta (spec.md §4.3).
    pub fn offset_up(&mut self, n: usize) {
        let target = self.y_offset.saturating_sub(n);
        let delta = self.y_offset - target;
        self.y_offset = target;
        self.cursor.pos.y += delta as i64;
    }

    /// Scroll the viewport down by `n` lines, clamped so the last visible
    /// line never scrolls past `total_lines`.
    pub fn offset_down(&mut self, n: usize, total_lines: usize) {
        let max_offset = total_lines.saturating_sub(self.view_rows());
        let target = (self.y_offset + n).min(max_offset);
        let delta = target.saturating_sub(self.y_offset);
        self.y_offset = target;
        self.cursor.pos.y -= delta as i64;
    }

    /// Pull the cursor's screen `y` back into `[0, view_rows)` by adjusting
    /// `y_offset`, the mandatory last step of every `MoveCursor`.
    pub fn viewport_sync(&mut self, total_lines: usize) {
        let view_rows = self.view_rows() as i64;
        if self.cursor.pos.y < 0 {
            self.offset_up((-self.cursor.pos.y) as usize);
        }
        if self.cursor.pos.y >= view_rows {
            self.offset_down((self.cursor.pos.y - view_rows + 1) as usize, total_lines);
        }
    }
}
