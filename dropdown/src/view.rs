//! Pure descriptions of what the dropdown shows.
//!
//! Nothing here draws. Views are rebuilt from state after every change and
//! compared or drawn by whoever holds them; equal state yields equal views.

use crate::glyph::{Glyph, GlyphRef, GlyphSize};
use crate::option::DropdownOption;
use crate::theme;
use crate::types::{Border, Color, Style};

/// Drawn at the right of the trigger.
pub const CHEVRON: char = '▾';
/// Drawn at the right of a selected row when ticks are enabled.
pub const CHECKMARK: char = '✓';

/// The always-visible part of the dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerView {
    /// Caption drawn above the trigger box.
    pub caption: Option<String>,
    pub text: String,
    /// `text` is the placeholder rather than a selection.
    pub is_placeholder: bool,
    pub chevron: char,
    pub focused: bool,
    pub container_style: Style,
    pub text_style: Style,
}

/// Base look of the trigger box before host overrides.
pub fn trigger_container_style() -> Style {
    Style::new()
        .background(Color::var(theme::SURFACE))
        .border(Border::Rounded)
        .border_color(Color::var(theme::TRIGGER_BORDER))
}

/// Base look of the trigger text before host overrides.
pub fn trigger_text_style(is_placeholder: bool) -> Style {
    let color = if is_placeholder {
        theme::PLACEHOLDER
    } else {
        theme::TEXT
    };
    Style::new().foreground(Color::var(color))
}

/// Row switches derived from the dropdown's props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowConfig {
    pub circle_selected: bool,
    pub tick_selected: bool,
    pub glyph_size: GlyphSize,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            circle_selected: false,
            tick_selected: false,
            glyph_size: GlyphSize::square(20),
        }
    }
}

/// One option row as it should appear.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Position of the option in the host's list.
    pub index: usize,
    pub label: String,
    pub active: bool,
    /// Circle indicator at the left, if enabled.
    pub glyph: Option<GlyphRef>,
    /// Badge text, already wrapped in parentheses.
    pub badge: Option<String>,
    pub checkmark: bool,
    /// The pointer is held down on this row.
    pub pressed: bool,
    /// The keyboard cursor is on this row.
    pub highlighted: bool,
    pub label_style: Style,
}

impl RowView {
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Row background: pressed wins over the cursor, otherwise the sheet
    /// surface shows through.
    pub fn background(&self) -> Color {
        if self.pressed {
            Color::var(theme::PRESSED)
        } else if self.highlighted {
            Color::var(theme::CURSOR)
        } else {
            Color::var(theme::SURFACE)
        }
    }
}

/// Compose the row for `option`.
///
/// The glyph variant, checkmark and label emphasis all follow `active`;
/// the glyph and checkmark only appear when `config` enables them.
pub fn row_view(option: &DropdownOption, index: usize, active: bool, config: &RowConfig) -> RowView {
    let glyph = config.circle_selected.then_some(GlyphRef {
        glyph: Glyph::for_active(active),
        size: config.glyph_size,
    });

    let mut label_style = Style::new().foreground(Color::var(theme::TEXT));
    if active {
        label_style = label_style.bold();
    }

    RowView {
        index,
        label: option.label.clone(),
        active,
        glyph,
        badge: option.badge.as_ref().map(|b| format!("({})", b)),
        checkmark: active && config.tick_selected,
        pressed: false,
        highlighted: false,
        label_style,
    }
}

/// The open overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetView {
    pub width: u16,
    pub header: Option<String>,
    pub title: Option<String>,
    /// Rows inside the scroll window, in list order.
    pub rows: Vec<RowView>,
    /// Index of the first row in the window.
    pub first_row: usize,
    pub total_rows: usize,
    /// Rules are drawn between rows.
    pub separators: bool,
    /// Text of the close control, present only when it is shown.
    pub close_label: Option<String>,
}

impl SheetView {
    pub fn has_rows_above(&self) -> bool {
        self.first_row > 0
    }

    pub fn has_rows_below(&self) -> bool {
        self.first_row + self.rows.len() < self.total_rows
    }
}
