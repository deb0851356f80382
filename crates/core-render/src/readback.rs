//! Cell and span inspection.
//!
//! Read-back goes through the same translate-and-clip preamble as drawing:
//! positions outside the clip return `None`. A position inside a span
//! resolves through the head, so callers may ask about any column.

use core_pen::Pen;

use crate::linechars::line_glyph;
use crate::{Cell, CellState, LineStyle, RenderBuffer};

/// Decoded line-drawing strokes of one cell, one style per direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineMask {
    pub north: Option<LineStyle>,
    pub east: Option<LineStyle>,
    pub south: Option<LineStyle>,
    pub west: Option<LineStyle>,
}

/// Everything there is to know about one span.
#[derive(Clone, Debug)]
pub struct SpanInfo {
    /// Columns the span covers from the queried position to its end.
    pub n_columns: usize,
    /// False for skip spans, which draw nothing.
    pub is_active: bool,
    /// The span's pen; `None` for skip spans.
    pub pen: Option<Pen>,
    /// The text the span would draw (empty for skip/erase).
    pub text: String,
}

impl RenderBuffer {
    /// Resolve a position to its span head plus the column offset into the
    /// span. `None` when the position is clipped out.
    fn span_at(&self, line: i32, col: i32) -> Option<(&Cell, usize)> {
        let (line, col, _, _) = self.xlate_and_clip(line, col, 1)?;
        let cell = &self.cells[line][col];
        match cell.state {
            CellState::Cont { startcol } => Some((&self.cells[line][startcol], col - startcol)),
            _ => Some((cell, 0)),
        }
    }

    fn span_text(state: &CellState, offset: usize, one_grapheme: bool) -> String {
        match state {
            CellState::Skip { .. } | CellState::Erase { .. } => String::new(),
            CellState::Text {
                cols, text, offs, ..
            } => {
                if one_grapheme {
                    core_text::grapheme_at_column(text, offs + offset)
                        .unwrap_or("")
                        .to_string()
                } else {
                    let range =
                        core_text::byte_range_of_columns(text, offs + offset, cols - offset);
                    text[range].to_string()
                }
            }
            CellState::Line { mask, .. } => line_glyph(*mask).to_string(),
            CellState::Char { ch, .. } => ch.to_string(),
            CellState::Cont { .. } => unreachable!("span head cannot be a continuation"),
        }
    }

    /// Whether the cell would draw anything on flush. `None` out of clip.
    pub fn get_cell_active(&self, line: i32, col: i32) -> Option<bool> {
        let (cell, _) = self.span_at(line, col)?;
        Some(!cell.state.is_skip())
    }

    /// The one grapheme (or line glyph, or codepoint) beginning at this
    /// column; empty for skip/erase cells. `None` out of clip.
    pub fn get_cell_text(&self, line: i32, col: i32) -> Option<String> {
        let (cell, offset) = self.span_at(line, col)?;
        Some(Self::span_text(&cell.state, offset, true))
    }

    /// The cell's line-drawing strokes; all-`None` for anything that is not
    /// a line cell.
    pub fn get_cell_linemask(&self, line: i32, col: i32) -> LineMask {
        use crate::lines::{EAST_SHIFT, NORTH_SHIFT, SOUTH_SHIFT, WEST_SHIFT};

        match self.span_at(line, col) {
            Some((cell, _)) => match cell.state {
                CellState::Line { mask, .. } => LineMask {
                    north: LineStyle::from_bits((mask >> NORTH_SHIFT) & 0x03),
                    east: LineStyle::from_bits((mask >> EAST_SHIFT) & 0x03),
                    south: LineStyle::from_bits((mask >> SOUTH_SHIFT) & 0x03),
                    west: LineStyle::from_bits((mask >> WEST_SHIFT) & 0x03),
                },
                _ => LineMask::default(),
            },
            None => LineMask::default(),
        }
    }

    /// The span's pen; `None` for skip spans or out of clip.
    pub fn get_cell_pen(&self, line: i32, col: i32) -> Option<&Pen> {
        let (cell, _) = self.span_at(line, col)?;
        cell.state.pen().map(|pen| pen.as_ref())
    }

    /// Full information about the span covering `(line, startcol)`.
    pub fn get_span(&self, line: i32, startcol: i32) -> Option<SpanInfo> {
        let (cell, offset) = self.span_at(line, startcol)?;
        let n_columns = cell.state.cols() - offset;

        if cell.state.is_skip() {
            return Some(SpanInfo {
                n_columns,
                is_active: false,
                pen: None,
                text: String::new(),
            });
        }

        Some(SpanInfo {
            n_columns,
            is_active: true,
            pen: cell.state.pen().map(|pen| (**pen).clone()),
            text: Self::span_text(&cell.state, offset, false),
        })
    }
}
