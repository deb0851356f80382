//! Graphics attribute sets ("pens").
//!
//! A pen is a bag of optional attributes: every field is either explicitly
//! set or absent. Absence matters: composing pens fills absent fields from
//! an underlay, and the terminal driver only emits SGR codes for what is set.
//!
//! Pens are value-comparable and immutable in practice: the render buffer
//! shares them behind `Rc` and composition always builds a new pen.

pub use crossterm::style::Color;

/// An attribute set for drawn cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pen {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub reverse: Option<bool>,
    pub strike: Option<bool>,
    pub blink: Option<bool>,
}

impl Pen {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no attribute is set.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Compose `self` over `under`: attributes set on `self` win, anything
    /// `self` leaves absent is taken from `under`.
    pub fn overlay(&self, under: &Pen) -> Pen {
        Pen {
            fg: self.fg.or(under.fg),
            bg: self.bg.or(under.bg),
            bold: self.bold.or(under.bold),
            italic: self.italic.or(under.italic),
            underline: self.underline.or(under.underline),
            reverse: self.reverse.or(under.reverse),
            strike: self.strike.or(under.strike),
            blink: self.blink.or(under.blink),
        }
    }

    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn with_bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    pub fn with_italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    pub fn with_underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    pub fn with_reverse(mut self, on: bool) -> Self {
        self.reverse = Some(on);
        self
    }

    pub fn with_strike(mut self, on: bool) -> Self {
        self.strike = Some(on);
        self
    }

    pub fn with_blink(mut self, on: bool) -> Self {
        self.blink = Some(on);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pen_has_nothing_set() {
        let pen = Pen::new();
        assert!(pen.is_default());
        assert_eq!(pen.fg, None);
        assert_eq!(pen.bold, None);
    }

    #[test]
    fn builder_sets_are_value_equal() {
        let a = Pen::new().with_fg(Color::Red).with_bold(true);
        let b = Pen::new().with_bold(true).with_fg(Color::Red);
        assert_eq!(a, b);
        assert!(!a.is_default());
    }

    #[test]
    fn overlay_prefers_self() {
        let over = Pen::new().with_fg(Color::Red);
        let under = Pen::new().with_fg(Color::Blue).with_bg(Color::Green);
        let merged = over.overlay(&under);
        assert_eq!(merged.fg, Some(Color::Red));
        assert_eq!(merged.bg, Some(Color::Green));
    }

    #[test]
    fn overlay_keeps_explicit_off() {
        // An explicit `false` is set, so it must not be replaced by the
        // underlay's `true`.
        let over = Pen::new().with_bold(false);
        let under = Pen::new().with_bold(true);
        assert_eq!(over.overlay(&under).bold, Some(false));
    }

    #[test]
    fn overlay_on_empty_is_identity() {
        let pen = Pen::new().with_underline(true).with_bg(Color::Black);
        assert_eq!(pen.overlay(&Pen::new()), pen);
        assert_eq!(Pen::new().overlay(&pen), pen);
    }
}
