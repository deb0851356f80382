//! Line drawing.
//!
//! Lines are painted cell-by-cell: each cell accumulates up to four strokes,
//! two style bits per compass direction, so crossings compose naturally.
//! Drawing a vertical line through a horizontal one leaves a junction cell
//! carrying all four directions. The glyph is only chosen at flush time.

use bitflags::bitflags;

use crate::{CellState, RenderBuffer, trace_op};

/// Stroke style for one direction of a line cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LineStyle {
    Single = 1,
    Double = 2,
    Thick = 3,
}

impl LineStyle {
    pub(crate) fn from_bits(bits: u8) -> Option<LineStyle> {
        match bits {
            1 => Some(LineStyle::Single),
            2 => Some(LineStyle::Double),
            3 => Some(LineStyle::Thick),
            _ => None,
        }
    }
}

bitflags! {
    /// Whether a line's end cells get the stroke pointing outward.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct LineCaps: u8 {
        const START = 0b01;
        const END = 0b10;
        const BOTH = 0b11;
    }
}

pub(crate) const NORTH_SHIFT: u8 = 0;
pub(crate) const EAST_SHIFT: u8 = 2;
pub(crate) const SOUTH_SHIFT: u8 = 4;
pub(crate) const WEST_SHIFT: u8 = 6;

impl RenderBuffer {
    /// OR `bits` into the line mask at one cell, converting the cell to a
    /// line cell first if needed. An existing line cell keeps its mask but
    /// adopts the current pen when the pens differ.
    pub(crate) fn line_cell(&mut self, line: i32, col: i32, bits: u8) {
        let Some((line, col, _, _)) = self.xlate_and_clip(line, col, 1) else {
            return;
        };
        if self.cells[line][col].is_masked() {
            return;
        }

        if !matches!(self.cells[line][col].state, CellState::Line { .. }) {
            self.make_span(line, col, 1);
            self.cells[line][col].state = CellState::Line {
                pen: self.pen.clone(),
                mask: 0,
            };
        } else if let CellState::Line { pen, .. } = &mut self.cells[line][col].state
            && **pen != *self.pen
        {
            *pen = self.pen.clone();
        }

        if let CellState::Line { mask, .. } = &mut self.cells[line][col].state {
            *mask |= bits;
        }
    }

    /// Horizontal line on `line` from `startcol` to `endcol` inclusive.
    pub fn hline_at(
        &mut self,
        line: i32,
        startcol: i32,
        endcol: i32,
        style: LineStyle,
        caps: LineCaps,
    ) {
        trace_op!(self, "HLine ({}..{},{})", startcol, endcol, line);

        let east = (style as u8) << EAST_SHIFT;
        let west = (style as u8) << WEST_SHIFT;

        self.line_cell(
            line,
            startcol,
            east | if caps.contains(LineCaps::START) { west } else { 0 },
        );
        for col in startcol + 1..endcol {
            self.line_cell(line, col, east | west);
        }
        self.line_cell(
            line,
            endcol,
            west | if caps.contains(LineCaps::END) { east } else { 0 },
        );
    }

    /// Vertical line on `col` from `startline` to `endline` inclusive.
    pub fn vline_at(
        &mut self,
        startline: i32,
        endline: i32,
        col: i32,
        style: LineStyle,
        caps: LineCaps,
    ) {
        trace_op!(self, "VLine ({},{}..{})", col, startline, endline);

        let north = (style as u8) << NORTH_SHIFT;
        let south = (style as u8) << SOUTH_SHIFT;

        self.line_cell(
            startline,
            col,
            south | if caps.contains(LineCaps::START) { north } else { 0 },
        );
        for line in startline + 1..endline {
            self.line_cell(line, col, south | north);
        }
        self.line_cell(
            endline,
            col,
            north | if caps.contains(LineCaps::END) { south } else { 0 },
        );
    }
}
