//! The dropdown control: open/closed state, selection ownership, and the
//! views derived from them.

use crate::event::EventResult;
use crate::glyph::GlyphSize;
use crate::hit::Target;
use crate::layout::{Viewport, rows_fitting, sheet_chrome_height};
use crate::props::DropdownProps;
use crate::selection::{SelectValue, Selection, SelectionSource};
use crate::view::{self, CHEVRON, RowConfig, SheetView, TriggerView};

/// Sheet size fixed when the sheet opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SheetGeometry {
    width: u16,
    height_limit: u16,
    visible_rows: usize,
}

/// A selectable-list control.
///
/// The dropdown is closed until its trigger is pressed. While open it shows
/// a sheet of option rows; pressing a row proposes a new selection through
/// the `on_select` callback. In single mode the sheet then closes, in
/// multiple mode it stays open for further picks.
///
/// When the host supplies `selected` the selection is host-owned: the
/// dropdown reports the next value but keeps showing the host's value until
/// the host passes a new one through [`Dropdown::set_selected`] or
/// [`Dropdown::set_props`].
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use dropdown::{Dropdown, DropdownProps, SelectValue, Viewport};
///
/// let picked = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&picked);
///
/// let mut dropdown = Dropdown::new(
///     DropdownProps::new()
///         .placeholder("Choose")
///         .options(["A", "B"])
///         .on_select(move |value| sink.lock().unwrap().push(value.clone())),
/// );
///
/// dropdown.press_trigger(Viewport::new(80, 24));
/// dropdown.press_option(1);
///
/// assert!(!dropdown.is_open());
/// assert_eq!(dropdown.display_text(), "B");
/// assert_eq!(*picked.lock().unwrap(), vec![SelectValue::Single("B".into())]);
/// ```
#[derive(Debug)]
pub struct Dropdown {
    props: DropdownProps,
    open: bool,
    /// Selection used when the host does not supply one.
    internal: Selection,
    geometry: SheetGeometry,
    /// Keyboard cursor, an option index.
    cursor: usize,
    /// First visible row.
    scroll: usize,
    /// Target under a pointer press that has not been released yet.
    press_target: Option<Target>,
}

impl Dropdown {
    pub fn new(props: DropdownProps) -> Self {
        let props = normalize(props);
        let internal = Selection::empty(props.multiple);
        Self {
            props,
            open: false,
            internal,
            geometry: SheetGeometry::default(),
            cursor: 0,
            scroll: 0,
            press_target: None,
        }
    }

    pub fn props(&self) -> &DropdownProps {
        &self.props
    }

    /// Replace the host configuration, as on a host re-render.
    ///
    /// Open state and the dropdown-owned selection survive; the latter is
    /// reshaped if the mode changed.
    pub fn set_props(&mut self, props: DropdownProps) {
        let props = normalize(props);
        if props.multiple != self.props.multiple {
            let internal = std::mem::replace(&mut self.internal, Selection::empty(props.multiple));
            self.internal = internal.coerce(props.multiple);
        }
        self.props = props;

        if self.open {
            self.cursor = self.cursor.min(self.last_index());
            self.geometry.visible_rows = self.visible_rows_for(self.geometry.height_limit);
            self.scroll_cursor_into_view();
        }
    }

    /// Hand the selection to the host (`Some`) or back to the dropdown
    /// (`None`).
    pub fn set_selected(&mut self, selected: Option<Selection>) {
        self.props.selected = host_selection(selected, self.props.multiple);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_controlled(&self) -> bool {
        self.props.is_controlled()
    }

    /// The selection currently in force, whoever owns it.
    pub fn selection(&self) -> &Selection {
        self.props.selected.as_ref().unwrap_or(&self.internal)
    }

    fn source(&mut self) -> SelectionSource<'_> {
        match self.props.selected.as_ref() {
            Some(value) => SelectionSource::Controlled(value),
            None => SelectionSource::Uncontrolled(&mut self.internal),
        }
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.selection().contains(label)
    }

    /// Text on the trigger.
    pub fn display_text(&self) -> String {
        let placeholder = || self.props.placeholder.clone().unwrap_or_default();
        if self.props.constant_placeholder {
            return placeholder();
        }
        self.selection().display().unwrap_or_else(placeholder)
    }

    /// Whether the trigger currently shows the placeholder.
    pub fn shows_placeholder(&self) -> bool {
        self.props.constant_placeholder || self.selection().display().is_none()
    }

    pub fn sheet_width(&self) -> u16 {
        self.geometry.width
    }

    pub fn visible_rows(&self) -> usize {
        self.geometry.visible_rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Row the pointer is held down on, if any.
    pub fn pressed_row(&self) -> Option<usize> {
        match self.press_target {
            Some(Target::Row(index)) => Some(index),
            _ => None,
        }
    }

    pub(crate) fn press_target(&self) -> Option<Target> {
        self.press_target
    }

    pub(crate) fn set_press_target(&mut self, target: Option<Target>) {
        self.press_target = target;
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    /// Open the sheet, sizing it for `viewport`.
    pub fn press_trigger(&mut self, viewport: Viewport) -> EventResult {
        if self.open {
            return EventResult::Ignored;
        }

        self.open = true;
        self.measure(viewport);
        self.cursor = self
            .props
            .options
            .iter()
            .position(|o| self.selection().contains(&o.label))
            .unwrap_or(0);
        self.scroll = 0;
        self.scroll_cursor_into_view();
        self.press_target = None;

        log::debug!(
            "Dropdown open: width={} visible_rows={} options={}",
            self.geometry.width,
            self.geometry.visible_rows,
            self.props.options.len()
        );
        EventResult::Consumed
    }

    /// Close from a press outside the sheet.
    pub fn press_backdrop(&mut self) -> EventResult {
        self.close("backdrop")
    }

    /// Close from the close control. Ignored when the control is not shown.
    pub fn press_close_button(&mut self) -> EventResult {
        if !self.props.show_button {
            return EventResult::Ignored;
        }
        self.close("close button")
    }

    /// Close on a system request such as Escape or a platform back action.
    pub fn request_close(&mut self) -> EventResult {
        self.close("close request")
    }

    fn close(&mut self, reason: &str) -> EventResult {
        if !self.open {
            return EventResult::Ignored;
        }
        self.open = false;
        self.press_target = None;
        log::debug!("Dropdown closed by {}", reason);
        EventResult::Consumed
    }

    /// Re-measure the sheet for a new viewport while it is open.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.open {
            self.measure(viewport);
            self.scroll_cursor_into_view();
        }
    }

    fn measure(&mut self, viewport: Viewport) {
        let metrics = self.props.metrics;
        let limit = metrics.sheet_height_limit(viewport.height);
        self.geometry = SheetGeometry {
            width: metrics.sheet_width(viewport.width),
            height_limit: limit,
            visible_rows: self.visible_rows_for(limit),
        };
    }

    fn visible_rows_for(&self, height_limit: u16) -> usize {
        let chrome = sheet_chrome_height(
            self.props.header.is_some(),
            self.props.label.is_some(),
            self.props.show_button,
        );
        let room = height_limit.saturating_sub(chrome);
        rows_fitting(room, self.props.row_separators)
            .max(1)
            .min(self.props.options.len())
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Press the row for option `index`.
    ///
    /// Ignored while closed or when `index` is out of range. Otherwise the
    /// callback receives the next value; the dropdown stores it only if it
    /// owns the selection, and closes in single mode.
    pub fn press_option(&mut self, index: usize) -> EventResult {
        if !self.open {
            return EventResult::Ignored;
        }
        let Some(option) = self.props.options.get(index) else {
            log::debug!("Dropdown press on missing option {}", index);
            return EventResult::Ignored;
        };

        let label = option.label.clone();
        let multiple = self.props.multiple;
        let on_select = self.props.on_select.clone();

        let source = self.source();
        let controlled = source.is_controlled();
        let next = source.current().pressed(&label);
        source.commit(&next);

        log::debug!(
            "Dropdown select '{}' controlled={} -> {:?}",
            label,
            controlled,
            next
        );

        self.cursor = index;
        if let Some(callback) = on_select {
            callback(&next);
        }
        if !multiple {
            self.close("selection");
        }
        EventResult::Consumed
    }

    /// Value the next press of option `index` would report, without
    /// pressing it.
    pub fn preview_press(&self, index: usize) -> Option<SelectValue> {
        let option = self.props.options.get(index)?;
        Some(self.selection().pressed(&option.label))
    }

    // -------------------------------------------------------------------------
    // Cursor and scrolling (while open)
    // -------------------------------------------------------------------------

    fn last_index(&self) -> usize {
        self.props.options.len().saturating_sub(1)
    }

    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.last_index());
        self.scroll_cursor_into_view();
    }

    pub fn cursor_up(&mut self) {
        self.set_cursor(self.cursor.saturating_sub(1));
    }

    pub fn cursor_down(&mut self) {
        self.set_cursor(self.cursor.saturating_add(1));
    }

    pub fn cursor_page_up(&mut self) {
        let page = self.geometry.visible_rows.max(1);
        self.set_cursor(self.cursor.saturating_sub(page));
    }

    pub fn cursor_page_down(&mut self) {
        let page = self.geometry.visible_rows.max(1);
        self.set_cursor(self.cursor.saturating_add(page));
    }

    pub fn cursor_home(&mut self) {
        self.set_cursor(0);
    }

    pub fn cursor_end(&mut self) {
        self.set_cursor(self.last_index());
    }

    /// Press the row under the keyboard cursor.
    pub fn activate_cursor(&mut self) -> EventResult {
        self.press_option(self.cursor)
    }

    /// Scroll the list by `delta` rows, keeping the window inside the list.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    fn max_scroll(&self) -> usize {
        self.props
            .options
            .len()
            .saturating_sub(self.geometry.visible_rows)
    }

    fn scroll_cursor_into_view(&mut self) {
        let visible = self.geometry.visible_rows.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + visible {
            self.scroll = self.cursor + 1 - visible;
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// The trigger as it should look now.
    pub fn trigger_view(&self, focused: bool) -> TriggerView {
        let is_placeholder = self.shows_placeholder();

        let mut container_style = view::trigger_container_style();
        if let Some(over) = &self.props.button_style {
            container_style = container_style.merge(over);
        }

        let mut text_style = view::trigger_text_style(is_placeholder);
        if let Some(over) = &self.props.text_style {
            text_style = text_style.merge(over);
        }

        TriggerView {
            caption: self.props.label.clone(),
            text: self.display_text(),
            is_placeholder,
            chevron: CHEVRON,
            focused,
            container_style,
            text_style,
        }
    }

    /// The sheet, or `None` while closed.
    pub fn sheet_view(&self) -> Option<SheetView> {
        if !self.open {
            return None;
        }

        let config = RowConfig {
            circle_selected: self.props.circle_selected,
            tick_selected: self.props.tick_selected,
            glyph_size: GlyphSize::square(self.props.metrics.glyph_size),
        };
        let selection = self.selection();
        let pressed = self.pressed_row();

        let rows = self
            .props
            .options
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(self.geometry.visible_rows)
            .map(|(i, option)| {
                view::row_view(option, i, selection.contains(&option.label), &config)
                    .pressed(pressed == Some(i))
                    .highlighted(i == self.cursor)
            })
            .collect();

        Some(SheetView {
            width: self.geometry.width,
            header: self.props.header.clone(),
            title: self.props.label.clone(),
            rows,
            first_row: self.scroll,
            total_rows: self.props.options.len(),
            separators: self.props.row_separators,
            close_label: self.props.show_button.then(|| {
                self.props
                    .close_label
                    .clone()
                    .unwrap_or_else(|| "Close".to_string())
            }),
        })
    }
}

/// Reshape a host-supplied selection to the configured mode.
fn normalize(mut props: DropdownProps) -> DropdownProps {
    props.selected = host_selection(props.selected.take(), props.multiple);
    props
}

/// An empty single value means the host has no value, and the dropdown
/// owns the selection. An empty set is still a host value.
fn host_selection(selected: Option<Selection>, multiple: bool) -> Option<Selection> {
    match selected? {
        Selection::Single(None) => None,
        value => match coerce_controlled(value, multiple) {
            Selection::Single(None) => None,
            value => Some(value),
        },
    }
}

fn coerce_controlled(selected: Selection, multiple: bool) -> Selection {
    if selected.is_multiple() != multiple {
        log::warn!(
            "controlled selection {:?} does not match multiple={}, coercing",
            selected,
            multiple
        );
        return selected.coerce(multiple);
    }
    match selected {
        // Host sets may carry repeats; the set invariant holds from here on
        Selection::Multiple(set) => Selection::multiple(set),
        single => single,
    }
}
