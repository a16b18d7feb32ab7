use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event,
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::error::Result;
use crate::event::Event;
use crate::layout::Viewport;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode, alternate-screen terminal with mouse capture.
///
/// Frames are drawn into a buffer and only the cells that changed since the
/// previous frame are written out.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("Terminal opened {}x{}", width, height);

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            // Mismatched dimensions force a full first paint
            previous_buffer: Buffer::new(0, 0),
        })
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    /// `None` blocks until at least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<Event>> {
        let mut raw = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };

        if has_event {
            raw.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                raw.push(event::read()?);
            }
        }

        Ok(raw.into_iter().filter_map(Event::from_crossterm).collect())
    }

    /// Draw a frame. `paint` receives a cleared buffer sized to the terminal.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("Terminal resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(0, 0);
        }

        self.current_buffer.reset();
        paint(&mut self.current_buffer);

        self.flush_diff()?;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        if self.current_buffer.width() != width || self.current_buffer.height() != height {
            self.current_buffer = Buffer::new(width, height);
        }
        Ok(())
    }

    fn flush_diff(&mut self) -> Result<()> {
        let full = self.current_buffer.size() != self.previous_buffer.size();
        let changed = self.current_buffer.changes_since(&self.previous_buffer);

        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        // Reset to known state at start
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        if full {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        for (x, y, cell) in changed {
            // The wide char already occupies this space
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style != last_style {
                // Reset, then reapply colors and attributes
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
