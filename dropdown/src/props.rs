//! Host-facing configuration of a dropdown.

use std::fmt;
use std::sync::Arc;

use crate::option::DropdownOption;
use crate::selection::{SelectValue, Selection};
use crate::types::Style;

/// Callback receiving every value the dropdown proposes.
pub type OnSelect = Arc<dyn Fn(&SelectValue) + Send + Sync>;

/// Sizing constants for the sheet, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Upper bound on sheet width.
    pub max_sheet_width: u16,
    /// Horizontal space kept free around the sheet, summed over both sides.
    pub viewport_margin: u16,
    /// Upper bound on sheet height.
    pub max_sheet_height: u16,
    /// Vertical space kept free around the sheet, summed over both sides.
    pub vertical_margin: u16,
    /// Requested edge length of the circle glyphs.
    pub glyph_size: u16,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            max_sheet_width: 300,
            viewport_margin: 40,
            max_sheet_height: 400,
            vertical_margin: 4,
            glyph_size: 20,
        }
    }
}

impl Metrics {
    /// Sheet width for a viewport `viewport_width` cells wide.
    pub fn sheet_width(&self, viewport_width: u16) -> u16 {
        self.max_sheet_width
            .min(viewport_width.saturating_sub(self.viewport_margin))
    }

    /// Tallest the sheet may grow in a viewport `viewport_height` rows high.
    pub fn sheet_height_limit(&self, viewport_height: u16) -> u16 {
        self.max_sheet_height
            .min(viewport_height.saturating_sub(self.vertical_margin))
    }
}

/// Everything a host passes to a dropdown.
///
/// Built with chained setters; every field is optional and defaults to the
/// permissive choice (no label, no rows, no callback, single mode).
///
/// # Example
///
/// ```
/// use dropdown::{DropdownOption, DropdownProps};
///
/// let props = DropdownProps::new()
///     .label("City")
///     .placeholder("Choose")
///     .options(["Istanbul", "Ankara"])
///     .circle_selected(true)
///     .tick_selected(true);
///
/// assert_eq!(props.options.len(), 2);
/// assert!(!props.multiple);
/// ```
#[derive(Clone, Default)]
pub struct DropdownProps {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub options: Vec<DropdownOption>,
    pub on_select: Option<OnSelect>,
    pub header: Option<String>,
    pub circle_selected: bool,
    pub constant_placeholder: bool,
    pub tick_selected: bool,
    pub multiple: bool,
    pub show_button: bool,
    /// Draw a rule between option rows.
    pub row_separators: bool,
    pub button_style: Option<Style>,
    pub text_style: Option<Style>,
    /// Host-owned selection. `None` lets the dropdown own it.
    pub selected: Option<Selection>,
    pub close_label: Option<String>,
    pub metrics: Metrics,
}

impl DropdownProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caption above the trigger, repeated as the sheet title.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<DropdownOption>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_select(mut self, f: impl Fn(&SelectValue) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(f));
        self
    }

    /// Banner text at the top of the sheet.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn circle_selected(mut self, on: bool) -> Self {
        self.circle_selected = on;
        self
    }

    /// Keep the placeholder on the trigger whatever is selected.
    pub fn constant_placeholder(mut self, on: bool) -> Self {
        self.constant_placeholder = on;
        self
    }

    pub fn tick_selected(mut self, on: bool) -> Self {
        self.tick_selected = on;
        self
    }

    pub fn multiple(mut self, on: bool) -> Self {
        self.multiple = on;
        self
    }

    /// Show a close control at the bottom of the sheet.
    pub fn show_button(mut self, on: bool) -> Self {
        self.show_button = on;
        self
    }

    /// Draw a hairline between rows. Each rule takes a full line, so fewer
    /// rows fit in the sheet.
    pub fn row_separators(mut self, on: bool) -> Self {
        self.row_separators = on;
        self
    }

    /// Style merged onto the trigger container.
    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = Some(style);
        self
    }

    /// Style merged onto the trigger text.
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = Some(style);
        self
    }

    /// Make the selection host-owned. `Selection::Single(None)` leaves it
    /// with the dropdown.
    pub fn selected(mut self, selected: Selection) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn close_label(mut self, label: impl Into<String>) -> Self {
        self.close_label = Some(label.into());
        self
    }

    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Whether the host owns the selection. An empty single value does
    /// not count.
    pub fn is_controlled(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|s| *s != Selection::Single(None))
    }
}

impl fmt::Debug for DropdownProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownProps")
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("options", &self.options)
            .field("on_select", &self.on_select.as_ref().map(|_| "<callback>"))
            .field("header", &self.header)
            .field("circle_selected", &self.circle_selected)
            .field("constant_placeholder", &self.constant_placeholder)
            .field("tick_selected", &self.tick_selected)
            .field("multiple", &self.multiple)
            .field("show_button", &self.show_button)
            .field("row_separators", &self.row_separators)
            .field("button_style", &self.button_style)
            .field("text_style", &self.text_style)
            .field("selected", &self.selected)
            .field("close_label", &self.close_label)
            .field("metrics", &self.metrics)
            .finish()
    }
}
