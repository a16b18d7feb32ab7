//! Selection indicator glyphs.
//!
//! The circle artwork itself belongs to an asset collaborator. The dropdown
//! only decides which glyph a row shows and at what size; a [`GlyphSource`]
//! turns that request into something drawable.

/// Which indicator a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Filled circle for an active row.
    SelectedCircle,
    /// Empty circle for an inactive row.
    Circle,
}

impl Glyph {
    pub fn for_active(active: bool) -> Self {
        if active {
            Glyph::SelectedCircle
        } else {
            Glyph::Circle
        }
    }
}

/// Requested glyph dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSize {
    pub width: u16,
    pub height: u16,
}

impl GlyphSize {
    pub const fn square(edge: u16) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }
}

/// A glyph placed in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRef {
    pub glyph: Glyph,
    pub size: GlyphSize,
}

/// Supplies drawable glyphs.
pub trait GlyphSource {
    /// Character drawn for `glyph` when scaled to `size`.
    fn symbol(&self, glyph: Glyph, size: GlyphSize) -> char;
}

/// Unicode circles, one cell wide regardless of the requested size.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolGlyphs;

impl GlyphSource for SymbolGlyphs {
    fn symbol(&self, glyph: Glyph, _size: GlyphSize) -> char {
        match glyph {
            Glyph::SelectedCircle => '●',
            Glyph::Circle => '○',
        }
    }
}
