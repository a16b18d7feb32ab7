//! Drawing dropdown views into a cell buffer.

use crate::buffer::{Buffer, Cell};
use crate::dropdown::Dropdown;
use crate::glyph::GlyphSource;
use crate::layout::{Rect, SheetLayout, TriggerLayout, Viewport, sheet_layout, trigger_layout};
use crate::text::{center_offset, char_width, display_width, truncate_to_width};
use crate::theme::{self, BACKDROP_DIM, ColorContext, Theme};
use crate::types::{Border, Color, Rgb, TextStyle};
use crate::view::{CHECKMARK, RowView, SheetView, TriggerView};

/// Theme and glyph collaborators used while drawing.
pub struct RenderContext<'a> {
    pub colors: ColorContext<'a>,
    pub glyphs: &'a dyn GlyphSource,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a dyn Theme, glyphs: &'a dyn GlyphSource) -> Self {
        Self {
            colors: ColorContext::new(theme),
            glyphs,
        }
    }

    fn named(&self, name: &str, fallback: Rgb) -> Rgb {
        self.colors.resolve_or(Some(&Color::var(name)), fallback)
    }
}

/// Draw the trigger of `dropdown` at the top of `anchor`.
pub fn draw_trigger(
    dropdown: &Dropdown,
    anchor: Rect,
    focused: bool,
    buf: &mut Buffer,
    cx: &RenderContext<'_>,
) {
    let view = dropdown.trigger_view(focused);
    let layout = trigger_layout(&view, anchor);
    render_trigger(&view, &layout, buf, cx);
}

/// Draw the sheet of `dropdown` over everything already in `buf`, if it is
/// open. Call after the rest of the screen is drawn.
pub fn draw_sheet(dropdown: &Dropdown, viewport: Viewport, buf: &mut Buffer, cx: &RenderContext<'_>) {
    if let Some(view) = dropdown.sheet_view() {
        let layout = sheet_layout(&view, viewport);
        render_sheet(&view, &layout, buf, cx);
    }
}

pub fn render_trigger(
    view: &TriggerView,
    layout: &TriggerLayout,
    buf: &mut Buffer,
    cx: &RenderContext<'_>,
) {
    if let (Some(caption), Some(rect)) = (&view.caption, layout.caption) {
        let fg = cx.named(theme::CAPTION, Rgb::BLACK);
        draw_text(buf, rect.x, rect.y, rect.width, caption, fg, None, TextStyle::new());
    }

    let container = &view.container_style;
    let bg = cx
        .colors
        .resolve_or(container.background.as_ref(), Rgb::WHITE);
    fill_rect(buf, layout.trigger, bg);

    let border_fg = if view.focused {
        cx.named(theme::FOCUS, Rgb::BLACK)
    } else {
        cx.colors
            .resolve_or(container.border_color.as_ref(), Rgb::BLACK)
    };
    draw_border(
        buf,
        layout.trigger,
        container.border.unwrap_or(Border::Rounded),
        border_fg,
    );

    let text_style = &view.text_style;
    let fg = cx
        .colors
        .resolve_or(text_style.foreground.as_ref(), Rgb::BLACK);
    let text_bg = cx.colors.resolve_or(text_style.background.as_ref(), bg);
    let text = truncate_to_width(&view.text, usize::from(layout.text.width));
    draw_text(
        buf,
        layout.text.x,
        layout.text.y,
        layout.text.width,
        &text,
        fg,
        Some(text_bg),
        text_style.text_style,
    );

    let chevron_fg = cx.named(theme::TEXT, Rgb::BLACK);
    let (x, y) = layout.chevron;
    buf.set(
        x,
        y,
        Cell::new(view.chevron)
            .with_fg(chevron_fg)
            .with_bg(bg),
    );
}

pub fn render_sheet(view: &SheetView, layout: &SheetLayout, buf: &mut Buffer, cx: &RenderContext<'_>) {
    dim_rect(buf, layout.backdrop, BACKDROP_DIM);

    let surface = cx.named(theme::SURFACE, Rgb::WHITE);
    fill_rect(buf, layout.sheet, surface);
    draw_border(
        buf,
        layout.sheet,
        Border::Rounded,
        cx.named(theme::TRIGGER_BORDER, Rgb::BLACK),
    );

    if let (Some(header), Some(rect)) = (&view.header, layout.header) {
        render_header(header, rect, buf, cx);
    }

    if let (Some(title), Some(rect)) = (&view.title, layout.title) {
        let fg = cx.named(theme::TEXT, Rgb::BLACK);
        draw_text(
            buf,
            rect.x + 1,
            rect.y,
            rect.width.saturating_sub(2),
            title,
            fg,
            Some(surface),
            TextStyle::new().bold(),
        );
        let rule = cx.named(theme::RULE, Rgb::BLACK);
        draw_hline(buf, rect.x, rect.y + 1, rect.width, '─', rule, surface);
    }

    for (row, (_, rect)) in view.rows.iter().zip(&layout.rows) {
        render_row(row, *rect, buf, cx);
    }

    let rule = cx.named(theme::RULE, Rgb::BLACK);
    for rect in &layout.separators {
        let line = rect.shrink(0, 1, 0, 1);
        draw_hline(buf, line.x, line.y, line.width, '─', rule, surface);
    }

    let muted = cx.named(theme::BADGE, Rgb::BLACK);
    let indicator_x = layout.list.right().saturating_sub(2);
    if view.has_rows_above() {
        buf.set(
            indicator_x,
            layout.list.y,
            Cell::new('▲').with_fg(muted).with_bg(surface),
        );
    }
    if view.has_rows_below() {
        buf.set(
            indicator_x,
            layout.list.bottom().saturating_sub(1),
            Cell::new('▼').with_fg(muted).with_bg(surface),
        );
    }

    if let (Some(label), Some(rect)) = (&view.close_label, layout.close_button) {
        let bg = cx.named(theme::BUTTON, Rgb::WHITE);
        fill_rect(buf, rect, bg);
        draw_border(buf, rect, Border::Rounded, cx.named(theme::BUTTON_BORDER, Rgb::BLACK));
        let inner = rect.shrink(1, 1, 1, 1);
        let text = truncate_to_width(label, usize::from(inner.width));
        let offset = center_offset(display_width(&text), usize::from(inner.width)) as u16;
        draw_text(
            buf,
            inner.x + offset,
            inner.y,
            inner.width.saturating_sub(offset),
            &text,
            cx.named(theme::TEXT, Rgb::BLACK),
            Some(bg),
            TextStyle::new(),
        );
    }
}

fn render_header(header: &str, rect: Rect, buf: &mut Buffer, cx: &RenderContext<'_>) {
    let bg = cx.named(theme::HEADER, Rgb::WHITE);
    fill_rect(buf, rect, bg);

    // Text and rule span the middle 80%
    let band = (u32::from(rect.width) * 4 / 5) as u16;
    let band_x = rect.x + (rect.width - band) / 2;

    let text = truncate_to_width(header, usize::from(band));
    let offset = center_offset(display_width(&text), usize::from(band)) as u16;
    draw_text(
        buf,
        band_x + offset,
        rect.y,
        band.saturating_sub(offset),
        &text,
        cx.named(theme::TEXT, Rgb::BLACK),
        Some(bg),
        TextStyle::new(),
    );
    draw_hline(
        buf,
        band_x,
        rect.y + 1,
        band,
        '─',
        cx.named(theme::HEADER_RULE, Rgb::BLACK),
        bg,
    );
}

fn render_row(row: &RowView, rect: Rect, buf: &mut Buffer, cx: &RenderContext<'_>) {
    let bg = cx.colors.resolve_or(Some(&row.background()), Rgb::WHITE);
    fill_rect(buf, rect, bg);

    let inner = rect.shrink(0, 1, 0, 1);
    let mut x = inner.x;

    if let Some(glyph) = row.glyph {
        let symbol = cx.glyphs.symbol(glyph.glyph, glyph.size);
        let fg = cx.named(theme::TEXT, Rgb::BLACK);
        buf.set(x, rect.y, Cell::new(symbol).with_fg(fg).with_bg(bg));
        x += char_width(symbol).max(1) as u16 + 1;
    }

    // Right section, laid out from the right edge inward
    let mut right = inner.right();
    if row.checkmark {
        right = right.saturating_sub(1);
        let fg = cx.named(theme::CHECKMARK, Rgb::BLACK);
        buf.set(right, rect.y, Cell::new(CHECKMARK).with_fg(fg).with_bg(bg));
        right = right.saturating_sub(1);
    }
    if let Some(badge) = &row.badge {
        let width = display_width(badge) as u16;
        let start = right.saturating_sub(width).max(x);
        let fg = cx.named(theme::BADGE, Rgb::BLACK);
        draw_text(
            buf,
            start,
            rect.y,
            right.saturating_sub(start),
            badge,
            fg,
            Some(bg),
            TextStyle::new(),
        );
        right = start.saturating_sub(1);
    }

    let fg = cx
        .colors
        .resolve_or(row.label_style.foreground.as_ref(), Rgb::BLACK);
    let available = right.saturating_sub(x);
    let label = truncate_to_width(&row.label, usize::from(available));
    draw_text(
        buf,
        x,
        rect.y,
        available,
        &label,
        fg,
        Some(bg),
        row.label_style.text_style,
    );
}

/// Write `text` starting at (`x`, `y`), stopping after `max_width` cells.
/// Returns the number of cells written. With no `bg` the existing
/// background shows through.
#[allow(clippy::too_many_arguments)]
pub fn draw_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    max_width: u16,
    text: &str,
    fg: Rgb,
    bg: Option<Rgb>,
    style: TextStyle,
) -> u16 {
    let limit = x.saturating_add(max_width);
    let mut cx = x;

    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if cx.saturating_add(width) > limit {
            break;
        }

        let cell_bg = bg.unwrap_or_else(|| buf.get(cx, y).map(|c| c.bg).unwrap_or(Rgb::WHITE));
        buf.set(
            cx,
            y,
            Cell::new(ch).with_fg(fg).with_bg(cell_bg).with_style(style),
        );
        for extra in 1..width {
            buf.set(cx + extra, y, Cell::continuation(cell_bg));
        }
        cx += width;
    }

    cx - x
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            buf.set(x, y, Cell::fill(bg));
        }
    }
}

/// Darken every cell in `rect` toward black by `amount`.
fn dim_rect(buf: &mut Buffer, rect: Rect, amount: f32) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = cell.bg.mix(Rgb::BLACK, amount);
                cell.fg = cell.fg.mix(Rgb::BLACK, amount);
            }
        }
    }
}

fn draw_hline(buf: &mut Buffer, x: u16, y: u16, width: u16, ch: char, fg: Rgb, bg: Rgb) {
    for dx in 0..width {
        buf.set(x + dx, y, Cell::new(ch).with_fg(fg).with_bg(bg));
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, border: Border, fg: Rgb) {
    let Some((tl, tr, bl, br, h, v)) = border.chars() else {
        return;
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    // Corners
    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    // Horizontal lines
    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    // Vertical lines
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}
