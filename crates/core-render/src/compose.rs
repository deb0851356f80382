//! Copying between and within buffers.
//!
//! Copies re-draw the source spans through the ordinary primitives, so the
//! destination honours the current translation, clip and masks, and span
//! structure is rebuilt rather than transplanted. In-place copies pick the
//! iteration direction that reads each source cell before overwriting it:
//! bottom-up when moving down, right-to-left when moving right on the same
//! line.

use std::rc::Rc;

use core_geometry::Rect;

use crate::{CellState, RenderBuffer};

impl RenderBuffer {
    /// Re-draw `src`'s contents (both rectangles in untranslated buffer
    /// coordinates, equal sizes) into `dst` within the same buffer,
    /// including skip spans.
    pub fn copyrect(&mut self, dst: &Rect, src: &Rect) {
        self.copy_within(dst, src, true);
    }

    /// As [`copyrect`](Self::copyrect), then skip over whatever part of the
    /// source rectangle the destination does not cover, leaving the moved
    /// region's origin untouched by flush.
    pub fn moverect(&mut self, dst: &Rect, src: &Rect) {
        self.copy_within(dst, src, true);

        let shadow = Rect::new(dst.top, dst.left, src.lines, src.cols);
        for rect in src.subtract(&shadow) {
            self.skip_rect(&rect);
        }
    }

    /// Re-draw every non-skip span of `src` into this buffer.
    pub fn blit(&mut self, src: &RenderBuffer) {
        for line in 0..src.lines {
            let mut col = 0;
            while col < src.cols {
                let state = src.cells[line][col].state.clone();
                debug_assert!(!state.is_cont(), "line walk must land on heads");
                let cols = state.cols();
                self.emit_copied(&state, 0, cols, line as i32, col as i32, false);
                col += cols;
            }
        }
    }

    fn copy_within(&mut self, dst: &Rect, src: &Rect, copy_skip: bool) {
        if src.lines == 0 || src.cols == 0 {
            return;
        }

        let lineoffs = dst.top - src.top;
        let coloffs = dst.left - src.left;
        if lineoffs == 0 && coloffs == 0 {
            return;
        }

        let top = src.top.max(0);
        let bottom = src.bottom().min(self.lines as i32);
        let left = src.left.max(0);
        let right = src.right().min(self.cols as i32);
        if top >= bottom || left >= right {
            return;
        }
        let (top, bottom) = (top as usize, bottom as usize);
        let (left, right) = (left as usize, right as usize);

        // Copying down must read lines bottom-up; copying right on the same
        // lines must read columns right-to-left.
        let upwards = lineoffs > 0;
        let leftwards = lineoffs == 0 && coloffs > 0;

        let mut line_order: Vec<usize> = (top..bottom).collect();
        if upwards {
            line_order.reverse();
        }

        for line in line_order {
            if leftwards {
                let mut col = right - 1;
                loop {
                    let (head_col, state, offset) = match self.cells[line][col].state {
                        CellState::Cont { startcol } => {
                            let head_col = startcol.max(left);
                            (
                                head_col,
                                self.cells[line][startcol].state.clone(),
                                head_col - startcol,
                            )
                        }
                        ref state => (col, state.clone(), 0),
                    };
                    let span_end = head_col - offset + state.cols();
                    let vis = span_end.min(right) - head_col;

                    self.emit_copied(
                        &state,
                        offset,
                        vis,
                        line as i32 + lineoffs,
                        head_col as i32 + coloffs,
                        copy_skip,
                    );

                    if head_col <= left {
                        break;
                    }
                    col = head_col - 1;
                }
            } else {
                let mut col = left;
                while col < right {
                    let (state, offset) = match self.cells[line][col].state {
                        CellState::Cont { startcol } => {
                            (self.cells[line][startcol].state.clone(), col - startcol)
                        }
                        ref state => (state.clone(), 0),
                    };
                    let span_end = col - offset + state.cols();
                    let vis = span_end.min(right) - col;

                    self.emit_copied(
                        &state,
                        offset,
                        vis,
                        line as i32 + lineoffs,
                        col as i32 + coloffs,
                        copy_skip,
                    );

                    col += vis;
                }
            }
        }
    }

    /// Emit one visible span slice at a destination position, under the
    /// span's own pen composed over the current one.
    fn emit_copied(
        &mut self,
        state: &CellState,
        offset: usize,
        cols: usize,
        line: i32,
        col: i32,
        copy_skip: bool,
    ) {
        let pen = match state {
            CellState::Skip { .. } => {
                if copy_skip {
                    self.put_skip(line, col, cols as i32);
                }
                return;
            }
            CellState::Cont { .. } => unreachable!("copy source resolved to a continuation"),
            CellState::Text { pen, .. }
            | CellState::Erase { pen, .. }
            | CellState::Line { pen, .. }
            | CellState::Char { pen, .. } => (**pen).clone(),
        };

        self.save_pen();
        self.set_pen(&pen);

        match state {
            CellState::Text { text, offs, .. } => {
                let range = core_text::byte_range_of_columns(text, offs + offset, cols);
                if range.start == 0 && range.end == text.len() {
                    // The slice is the whole string: share it instead of
                    // reallocating.
                    self.put_string(line, col, text);
                } else {
                    self.put_string(line, col, &Rc::from(&text[range]));
                }
            }
            CellState::Erase { .. } => self.put_erase(line, col, cols as i32),
            CellState::Line { mask, .. } => self.line_cell(line, col, *mask),
            CellState::Char { ch, .. } => self.put_char(line, col, *ch),
            CellState::Skip { .. } | CellState::Cont { .. } => unreachable!(),
        }

        self.restore();
    }
}
