//! Drawing state: translation, clip, masks, pen, virtual cursor, and the
//! save/restore stack.
//!
//! Two frame flavors exist: `save` captures the full drawing state,
//! `save_pen` captures only the pen. Restore always hands the frame's pen
//! back and clears any masks planted at a depth deeper than the one being
//! returned to: a mask's lifetime is the frame that created it.

use std::rc::Rc;

use core_geometry::Rect;
use core_pen::Pen;

use crate::{Cell, RenderBuffer, trace_op};

pub(crate) struct Frame {
    cursor: Option<(i32, i32)>,
    xlate: (i32, i32),
    clip: Rect,
    pub(crate) pen: Rc<Pen>,
    pen_only: bool,
}

impl RenderBuffer {
    pub fn save(&mut self) {
        trace_op!(self, "+-Save");
        self.stack.push(Frame {
            cursor: self.cursor,
            xlate: (self.xlate_line, self.xlate_col),
            clip: self.clip,
            pen: self.pen.clone(),
            pen_only: false,
        });
        self.depth += 1;
    }

    pub fn save_pen(&mut self) {
        trace_op!(self, "+-Savepen");
        self.stack.push(Frame {
            cursor: None,
            xlate: (0, 0),
            clip: Rect::default(),
            pen: self.pen.clone(),
            pen_only: true,
        });
        self.depth += 1;
    }

    /// Pop the top frame, restoring what it captured. A restore with an
    /// empty stack is a no-op.
    pub fn restore(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        if !frame.pen_only {
            self.cursor = frame.cursor;
            (self.xlate_line, self.xlate_col) = frame.xlate;
            self.clip = frame.clip;
        }
        self.pen = frame.pen;
        self.depth -= 1;

        // Masks planted inside the popped frame evaporate with it.
        // TODO: remember mask extents per frame to avoid the full sweep.
        for row in &mut self.cells {
            for cell in row {
                if cell.maskdepth.is_some_and(|d| d > self.depth) {
                    cell.maskdepth = None;
                }
            }
        }

        trace_op!(self, "+-Restore");
    }

    /// Return the buffer to its freshly-constructed state: all-skip grid,
    /// no translation, full clip, default pen, empty stack, cursor unset.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            let cols = row.len();
            for cell in row.iter_mut() {
                *cell = Cell::cont(0);
            }
            if cols > 0 {
                row[0] = Cell::head_skip(cols);
            }
        }

        self.cursor = None;
        self.xlate_line = 0;
        self.xlate_col = 0;
        self.clip = Rect::new(0, 0, self.lines as i32, self.cols as i32);
        self.pen = Rc::new(Pen::new());
        self.stack.clear();
        self.depth = 0;
    }

    pub fn translate(&mut self, downward: i32, rightward: i32) {
        trace_op!(self, "Translate ({:+},{:+})", rightward, downward);
        self.xlate_line += downward;
        self.xlate_col += rightward;
    }

    /// Intersect the clip with `rect` (given in pre-translation coordinates).
    /// An empty intersection suppresses all drawing until restored.
    pub fn clip(&mut self, rect: &Rect) {
        trace_op!(
            self,
            "Clip [({},{})..({},{})]",
            rect.left,
            rect.top,
            rect.right(),
            rect.bottom()
        );
        let translated = rect.translated(self.xlate_line, self.xlate_col);
        match self.clip.intersect(&translated) {
            Some(r) => self.clip = r,
            None => self.clip.lines = 0,
        }
    }

    /// Punch a masking hole: cells inside it ignore drawing until the
    /// current stack frame pops (or `reset`).
    pub fn mask(&mut self, rect: &Rect) {
        trace_op!(
            self,
            "Mask [({},{})..({},{})]",
            rect.left,
            rect.top,
            rect.right(),
            rect.bottom()
        );

        let mut hole = rect.translated(self.xlate_line, self.xlate_col);
        if hole.top < 0 {
            hole.lines += hole.top;
            hole.top = 0;
        }
        if hole.left < 0 {
            hole.cols += hole.left;
            hole.left = 0;
        }

        for line in hole.top..hole.bottom().min(self.lines as i32) {
            for col in hole.left..hole.right().min(self.cols as i32) {
                let cell = &mut self.cells[line as usize][col as usize];
                if cell.maskdepth.is_none() {
                    cell.maskdepth = Some(self.depth);
                }
            }
        }
    }

    /// Install `pen` composed over the stack-top frame's pen: the argument's
    /// set attributes win, the frame supplies whatever the argument leaves
    /// absent.
    pub fn set_pen(&mut self, pen: &Pen) {
        let composed = match self.stack.last() {
            Some(frame) => pen.overlay(&frame.pen),
            None => pen.clone(),
        };
        self.pen = Rc::new(composed);
    }

    /// The pen currently in effect.
    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn goto(&mut self, line: i32, col: i32) {
        self.cursor = Some((line, col));
    }

    pub fn ungoto(&mut self) {
        self.cursor = None;
    }

    pub fn has_cursor_pos(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor_pos(&self) -> Option<(i32, i32)> {
        self.cursor
    }
}
