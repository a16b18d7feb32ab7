//! Routing terminal input to dropdown operations.

use crate::dropdown::Dropdown;
use crate::event::{Event, EventResult, Key, MouseButton};
use crate::hit::{Target, hit_test_sheet, hit_test_trigger};
use crate::layout::{Rect, Viewport, sheet_layout, trigger_layout};

impl Dropdown {
    /// Handle one event for a dropdown whose trigger sits at the top of
    /// `anchor`.
    ///
    /// Key events are assumed to be routed here only when this dropdown has
    /// focus. While the sheet is open it is modal: every pointer event is
    /// consumed.
    pub fn handle_event(&mut self, event: &Event, anchor: Rect, viewport: Viewport) -> EventResult {
        match *event {
            Event::Key { key, modifiers } => {
                if modifiers.ctrl || modifiers.alt {
                    return EventResult::Ignored;
                }
                self.handle_key(key, viewport)
            }
            Event::Press {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let target = self.target_at(x, y, anchor, viewport);
                self.set_press_target(target);
                if self.is_open() || target.is_some() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Release {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let pressed = self.press_target();
                self.set_press_target(None);
                let released = self.target_at(x, y, anchor, viewport);
                match (pressed, released) {
                    (Some(down), Some(up)) if down == up => self.activate(up, viewport),
                    _ if self.is_open() => EventResult::Consumed,
                    _ => EventResult::Ignored,
                }
            }
            Event::Press { .. } | Event::Release { .. } => {
                if self.is_open() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Scroll { delta_y, .. } => {
                if !self.is_open() {
                    return EventResult::Ignored;
                }
                self.scroll_by(isize::from(delta_y));
                EventResult::Consumed
            }
            Event::Resize { width, height } => {
                self.resize(Viewport::new(width, height));
                EventResult::Ignored
            }
        }
    }

    /// Keyboard handling for the focused dropdown.
    pub fn handle_key(&mut self, key: Key, viewport: Viewport) -> EventResult {
        if !self.is_open() {
            // Closed state - open on Enter, Space, or Down
            return match key {
                Key::Enter | Key::Char(' ') | Key::Down => self.press_trigger(viewport),
                _ => EventResult::Ignored,
            };
        }

        match key {
            Key::Up => self.cursor_up(),
            Key::Down => self.cursor_down(),
            Key::PageUp => self.cursor_page_up(),
            Key::PageDown => self.cursor_page_down(),
            Key::Home => self.cursor_home(),
            Key::End => self.cursor_end(),
            Key::Enter | Key::Char(' ') => {
                self.activate_cursor();
            }
            Key::Escape => {
                self.request_close();
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    /// What lies under a point right now: sheet regions while open, the
    /// trigger box while closed.
    pub fn target_at(&self, x: u16, y: u16, anchor: Rect, viewport: Viewport) -> Option<Target> {
        match self.sheet_view() {
            Some(sheet) => Some(hit_test_sheet(&sheet_layout(&sheet, viewport), x, y)),
            None => hit_test_trigger(&trigger_layout(&self.trigger_view(false), anchor), x, y),
        }
    }

    fn activate(&mut self, target: Target, viewport: Viewport) -> EventResult {
        match target {
            Target::Trigger => self.press_trigger(viewport),
            Target::Row(index) => self.press_option(index),
            Target::CloseButton => self.press_close_button(),
            Target::Backdrop => self.press_backdrop(),
            Target::Sheet => EventResult::Consumed,
        }
    }
}
