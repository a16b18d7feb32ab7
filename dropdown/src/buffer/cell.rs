use crate::types::{Rgb, TextStyle};

/// One terminal cell: a character and how it is painted.
///
/// A wide character sits in its own cell followed by continuation cells,
/// which carry only a background and are skipped when printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

/// A cleared cell: black on the white sheet surface.
pub const BLANK: Cell = Cell {
    char: ' ',
    fg: Rgb::BLACK,
    bg: Rgb::WHITE,
    style: TextStyle::new(),
    wide_continuation: false,
};

impl Default for Cell {
    fn default() -> Self {
        BLANK
    }
}

impl Cell {
    pub const fn new(char: char) -> Self {
        Self { char, ..BLANK }
    }

    /// An empty cell painted with `bg`.
    pub const fn fill(bg: Rgb) -> Self {
        Self { bg, ..BLANK }
    }

    /// The trailing half of a wide character.
    pub const fn continuation(bg: Rgb) -> Self {
        Self {
            bg,
            wide_continuation: true,
            ..BLANK
        }
    }

    pub const fn with_fg(self, fg: Rgb) -> Self {
        Self { fg, ..self }
    }

    pub const fn with_bg(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn with_style(self, style: TextStyle) -> Self {
        Self { style, ..self }
    }
}
