//! Drawing primitives.
//!
//! Every primitive shares the same preamble: apply the translation, clip
//! against the current clip rectangle (discarding entirely or trimming the
//! edges), then write span-by-span over the unmasked runs of the target
//! range. Text primitives report the full column width of their input even
//! when clipping discards the draw, so callers can advance a cursor by what
//! *would* have been drawn.

use std::fmt::{self, Write as _};
use std::rc::Rc;

use core_geometry::Rect;

use crate::{CellState, RenderBuffer, trace_op};

impl RenderBuffer {
    /// Translate and clip a `cols`-wide horizontal range at `(line, col)`.
    ///
    /// Returns grid coordinates plus the number of columns trimmed off the
    /// left edge (the text-offset adjustment), or `None` when nothing of the
    /// range survives.
    pub(crate) fn xlate_and_clip(
        &self,
        line: i32,
        col: i32,
        cols: i32,
    ) -> Option<(usize, usize, usize, usize)> {
        let line = line + self.xlate_line;
        let mut col = col + self.xlate_col;
        let mut cols = cols;

        let clip = &self.clip;
        if clip.lines == 0 {
            return None;
        }
        if line < clip.top || line >= clip.bottom() || col >= clip.right() {
            return None;
        }

        let mut start_offs = 0;
        if col < clip.left {
            cols -= clip.left - col;
            start_offs = (clip.left - col) as usize;
            col = clip.left;
        }
        if cols <= 0 {
            return None;
        }
        if cols > clip.right() - col {
            cols = clip.right() - col;
        }

        Some((line as usize, col as usize, cols as usize, start_offs))
    }

    /// Write `text` as one or more TEXT spans. Returns the full column width
    /// of `text` regardless of clipping.
    pub(crate) fn put_string(&mut self, line: i32, col: i32, text: &Rc<str>) -> usize {
        let width = core_text::string_width(text);
        let Some((line, col, cols, offs)) = self.xlate_and_clip(line, col, width as i32) else {
            return width;
        };

        let pen = self.pen.clone();
        for (col, len, offs) in self.unmasked_runs(line, col, cols, offs) {
            self.make_span(line, col, len);
            self.cells[line][col].state = CellState::Text {
                cols: len,
                pen: pen.clone(),
                text: text.clone(),
                offs,
            };
        }
        width
    }

    pub(crate) fn put_skip(&mut self, line: i32, col: i32, cols: i32) {
        let Some((line, col, cols, _)) = self.xlate_and_clip(line, col, cols) else {
            return;
        };
        for (col, len, _) in self.unmasked_runs(line, col, cols, 0) {
            self.make_span(line, col, len);
            self.cells[line][col].state = CellState::Skip { cols: len };
        }
    }

    pub(crate) fn put_erase(&mut self, line: i32, col: i32, cols: i32) {
        let Some((line, col, cols, _)) = self.xlate_and_clip(line, col, cols) else {
            return;
        };
        let pen = self.pen.clone();
        for (col, len, _) in self.unmasked_runs(line, col, cols, 0) {
            self.make_span(line, col, len);
            self.cells[line][col].state = CellState::Erase {
                cols: len,
                pen: pen.clone(),
            };
        }
    }

    pub(crate) fn put_char(&mut self, line: i32, col: i32, ch: char) {
        let Some((line, col, _, _)) = self.xlate_and_clip(line, col, 1) else {
            return;
        };
        if self.cells[line][col].is_masked() {
            return;
        }
        self.make_span(line, col, 1);
        self.cells[line][col].state = CellState::Char {
            pen: self.pen.clone(),
            ch,
        };
    }

    // ---- absolute forms ----

    /// Draw `text` at an absolute position; returns its column width.
    pub fn text_at(&mut self, line: i32, col: i32, text: &str) -> usize {
        let cols = self.put_string(line, col, &Rc::from(text));
        trace_op!(self, "Text ({}..{},{})", col, col + cols as i32, line);
        cols
    }

    /// As [`text_at`](Self::text_at), but draw at most `limit` bytes,
    /// rounded down to a `char` boundary.
    pub fn textn_at(&mut self, line: i32, col: i32, text: &str, limit: usize) -> usize {
        self.text_at(line, col, clamp_to_boundary(text, limit))
    }

    /// Format directly into the buffer:
    /// `rb.textf_at(0, 0, format_args!("{n} items"))`.
    pub fn textf_at(&mut self, line: i32, col: i32, args: fmt::Arguments) -> usize {
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        let _ = scratch.write_fmt(args);
        let cols = self.text_at(line, col, &scratch);
        self.scratch = scratch;
        cols
    }

    pub fn skip_at(&mut self, line: i32, col: i32, cols: i32) {
        trace_op!(self, "Skip ({}..{},{})", col, col + cols, line);
        self.put_skip(line, col, cols);
    }

    pub fn erase_at(&mut self, line: i32, col: i32, cols: i32) {
        trace_op!(self, "Erase ({}..{},{})", col, col + cols, line);
        self.put_erase(line, col, cols);
    }

    pub fn char_at(&mut self, line: i32, col: i32, ch: char) {
        trace_op!(self, "Char ({}..{},{})", col, col + 1, line);
        self.put_char(line, col, ch);
    }

    pub fn skip_rect(&mut self, rect: &Rect) {
        trace_op!(
            self,
            "Skip [({},{})..({},{})]",
            rect.left,
            rect.top,
            rect.right(),
            rect.bottom()
        );
        for line in rect.top..rect.bottom() {
            self.put_skip(line, rect.left, rect.cols);
        }
    }

    pub fn erase_rect(&mut self, rect: &Rect) {
        trace_op!(
            self,
            "Erase [({},{})..({},{})]",
            rect.left,
            rect.top,
            rect.right(),
            rect.bottom()
        );
        for line in rect.top..rect.bottom() {
            self.put_erase(line, rect.left, rect.cols);
        }
    }

    /// Erase every line under the current pen.
    pub fn clear(&mut self) {
        trace_op!(self, "Clear");
        for line in 0..self.lines {
            self.put_erase(line as i32, 0, self.cols as i32);
        }
    }

    // ---- cursor-relative forms ----

    /// Draw at the virtual cursor and advance it. `None` without a cursor.
    pub fn text(&mut self, text: &str) -> Option<usize> {
        let (line, col) = self.cursor?;
        let cols = self.put_string(line, col, &Rc::from(text));
        trace_op!(
            self,
            "Text ({}..{},{}) +{}",
            col,
            col + cols as i32,
            line,
            cols
        );
        self.cursor = Some((line, col + cols as i32));
        Some(cols)
    }

    pub fn textn(&mut self, text: &str, limit: usize) -> Option<usize> {
        self.text(clamp_to_boundary(text, limit))
    }

    pub fn textf(&mut self, args: fmt::Arguments) -> Option<usize> {
        self.cursor?;
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        let _ = scratch.write_fmt(args);
        let cols = self.text(&scratch);
        self.scratch = scratch;
        cols
    }

    pub fn skip(&mut self, cols: i32) {
        let Some((line, col)) = self.cursor else {
            return;
        };
        trace_op!(self, "Skip ({}..{},{}) +{}", col, col + cols, line, cols);
        self.put_skip(line, col, cols);
        self.cursor = Some((line, col + cols));
    }

    /// Skip forward to `to_col` (no-op when the cursor is already past it),
    /// then park the cursor there.
    pub fn skip_to(&mut self, to_col: i32) {
        let Some((line, col)) = self.cursor else {
            return;
        };
        trace_op!(self, "Skip ({}..{},{}) +{}", col, to_col, line, to_col - col);
        if col < to_col {
            self.put_skip(line, col, to_col - col);
        }
        self.cursor = Some((line, to_col));
    }

    pub fn erase(&mut self, cols: i32) {
        let Some((line, col)) = self.cursor else {
            return;
        };
        trace_op!(self, "Erase ({}..{},{}) +{}", col, col + cols, line, cols);
        self.put_erase(line, col, cols);
        self.cursor = Some((line, col + cols));
    }

    pub fn erase_to(&mut self, to_col: i32) {
        let Some((line, col)) = self.cursor else {
            return;
        };
        trace_op!(
            self,
            "Erase ({}..{},{}) +{}",
            col,
            to_col,
            line,
            to_col - col
        );
        if col < to_col {
            self.put_erase(line, col, to_col - col);
        }
        self.cursor = Some((line, to_col));
    }

    /// Draw one codepoint at the cursor and advance one column.
    pub fn char(&mut self, ch: char) {
        let Some((line, col)) = self.cursor else {
            return;
        };
        trace_op!(self, "Char ({}..{},{}) +1", col, col + 1, line);
        self.put_char(line, col, ch);
        self.cursor = Some((line, col + 1));
    }
}

/// Largest prefix of `text` no longer than `limit` bytes that ends on a
/// `char` boundary.
fn clamp_to_boundary(text: &str, limit: usize) -> &str {
    let mut limit = limit.min(text.len());
    while !text.is_char_boundary(limit) {
        limit -= 1;
    }
    &text[..limit]
}
