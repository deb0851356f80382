//! Crossterm-backed xterm-style driver.
//!
//! Commands are queued on the underlying writer and reach the terminal only
//! on [`XtermDriver::flush`], so one buffer flush becomes one `write` burst.
//!
//! Erase handling follows xterm quirks: ECH does not repaint reverse-video
//! cells, so a pen with reverse set forces the space-fill path regardless of
//! capability.

use std::io::Write;

use anyhow::Result;
use core_pen::Pen;
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveTo},
    queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::{MoveEnd, TerminalCapabilities, TerminalDriver};

pub struct XtermDriver<W: Write> {
    out: W,
    caps: TerminalCapabilities,
    /// Last pen installed, if any; `set_pen` is a no-op when unchanged.
    pen: Option<Pen>,
}

impl<W: Write> XtermDriver<W> {
    pub fn new(out: W) -> Self {
        Self::with_capabilities(out, TerminalCapabilities::detect())
    }

    pub fn with_capabilities(out: W, caps: TerminalCapabilities) -> Self {
        Self {
            out,
            caps,
            pen: None,
        }
    }

    /// Push all queued commands to the terminal.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn pen_has_reverse(&self) -> bool {
        self.pen
            .as_ref()
            .is_some_and(|pen| pen.reverse == Some(true))
    }
}

impl<W: Write> TerminalDriver for XtermDriver<W> {
    fn goto(&mut self, line: usize, col: usize) -> Result<()> {
        queue!(self.out, MoveTo(col as u16, line as u16))?;
        Ok(())
    }

    fn set_pen(&mut self, pen: &Pen) -> Result<()> {
        if self.pen.as_ref() == Some(pen) {
            return Ok(());
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        if let Some(fg) = pen.fg {
            queue!(self.out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = pen.bg {
            queue!(self.out, SetBackgroundColor(bg))?;
        }
        if pen.bold == Some(true) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if pen.italic == Some(true) {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if pen.underline == Some(true) {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if pen.reverse == Some(true) {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        if pen.strike == Some(true) {
            queue!(self.out, SetAttribute(Attribute::CrossedOut))?;
        }
        if pen.blink == Some(true) {
            queue!(self.out, SetAttribute(Attribute::SlowBlink))?;
        }

        self.pen = Some(pen.clone());
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn erase_cols(&mut self, cols: usize, move_end: MoveEnd) -> Result<()> {
        if cols == 0 {
            return Ok(());
        }

        if self.caps.supports_erase_chars && !self.pen_has_reverse() {
            queue!(self.out, Print(format_args!("\x1b[{cols}X")))?;
            if move_end == MoveEnd::Yes {
                queue!(self.out, MoveRight(cols as u16))?;
            }
        } else {
            for _ in 0..cols {
                queue!(self.out, Print(' '))?;
            }
            if move_end == MoveEnd::No {
                queue!(self.out, MoveLeft(cols as u16))?;
            }
        }
        Ok(())
    }
}
