//! Terminal driver abstraction and crossterm implementation.
//!
//! The render buffer reduces its grid to four drawing operations; this crate
//! owns that contract. `XtermDriver` is the production implementation
//! (queued crossterm commands over any writer), `RecordingDriver` captures
//! the op stream for tests.

use anyhow::Result;
use core_pen::Pen;

pub mod capabilities;
pub mod recording;
pub mod xterm;

pub use capabilities::TerminalCapabilities;
pub use recording::{RecordingDriver, TermOp};
pub use xterm::XtermDriver;

/// Whether the cursor logically advances past an erased region.
///
/// `Maybe` lets the driver pick whichever realization is cheapest; the caller
/// promises not to rely on the cursor position afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEnd {
    Yes,
    No,
    Maybe,
}

/// The drawing operations a render buffer flush emits.
///
/// Implementations may buffer internally; `goto` coordinates are 0-based.
pub trait TerminalDriver {
    /// Move the cursor to an absolute (line, column) position.
    fn goto(&mut self, line: usize, col: usize) -> Result<()>;

    /// Install an attribute set for subsequent output. Implementations may
    /// compute deltas against the previously installed pen.
    fn set_pen(&mut self, pen: &Pen) -> Result<()>;

    /// Emit text at the cursor.
    fn print(&mut self, text: &str) -> Result<()>;

    /// Erase `cols` columns at the cursor, under the installed pen's
    /// background.
    fn erase_cols(&mut self, cols: usize, move_end: MoveEnd) -> Result<()>;
}
