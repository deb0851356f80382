//! Flushing the grid to a terminal driver.
//!
//! One top-to-bottom walk per line, tracking where the physical cursor is
//! (`phycol`, −1 for unknown) so `goto` is only issued when the cursor is
//! not already in place. Skip spans emit nothing. Adjacent line cells with
//! value-equal pens batch into a single print. The buffer resets afterwards,
//! ready for the next frame.

use anyhow::Result;
use core_terminal::{MoveEnd, TerminalDriver};

use crate::linechars::line_glyph;
use crate::{CellState, RenderBuffer, trace_op};

impl RenderBuffer {
    /// Emit the buffer's contents as terminal commands, then reset it.
    /// Cells never drawn to are left untouched on the terminal.
    pub fn flush_to_term(&mut self, term: &mut dyn TerminalDriver) -> Result<()> {
        trace_op!(self, "Flush to term");

        let mut scratch = std::mem::take(&mut self.scratch);
        let result = self.flush_lines(term, &mut scratch);
        self.scratch = scratch;

        result?;
        self.reset();
        Ok(())
    }

    fn flush_lines(&self, term: &mut dyn TerminalDriver, scratch: &mut String) -> Result<()> {
        for line in 0..self.lines {
            // Column the terminal cursor is physically at; -1 when unknown.
            let mut phycol: i32 = -1;

            let mut col = 0;
            while col < self.cols {
                let cell = &self.cells[line][col];

                if let CellState::Skip { cols } = cell.state {
                    col += cols;
                    continue;
                }

                if phycol < col as i32 {
                    term.goto(line, col)?;
                }
                phycol = col as i32;

                match &cell.state {
                    CellState::Text {
                        cols, pen, text, offs,
                    } => {
                        let range = core_text::byte_range_of_columns(text, *offs, *cols);
                        term.set_pen(pen)?;
                        term.print(&text[range])?;
                        phycol += *cols as i32;
                        col += cols;
                    }
                    CellState::Erase { cols, pen } => {
                        // The cursor only needs to land after the erase when
                        // more output follows on this line.
                        let move_end = col + cols < self.cols
                            && !self.cells[line][col + cols].state.is_skip();

                        term.set_pen(pen)?;
                        term.erase_cols(
                            *cols,
                            if move_end { MoveEnd::Yes } else { MoveEnd::Maybe },
                        )?;

                        if move_end {
                            phycol += *cols as i32;
                        } else {
                            phycol = -1;
                        }
                        col += cols;
                    }
                    CellState::Line { pen, mask } => {
                        // Batch a run of line cells sharing a value-equal pen
                        // into one print.
                        scratch.clear();
                        scratch.push(line_glyph(*mask));
                        col += 1;
                        phycol += 1;

                        while col < self.cols {
                            let CellState::Line {
                                pen: next_pen,
                                mask: next_mask,
                            } = &self.cells[line][col].state
                            else {
                                break;
                            };
                            if **next_pen != **pen {
                                break;
                            }
                            scratch.push(line_glyph(*next_mask));
                            col += 1;
                            phycol += 1;
                        }

                        term.set_pen(pen)?;
                        term.print(scratch)?;
                    }
                    CellState::Char { pen, ch } => {
                        scratch.clear();
                        scratch.push(*ch);
                        term.set_pen(pen)?;
                        term.print(scratch)?;
                        phycol += 1;
                        col += 1;
                    }
                    CellState::Skip { .. } | CellState::Cont { .. } => {
                        unreachable!("span walk must land on non-skip heads")
                    }
                }
            }
        }
        Ok(())
    }
}
