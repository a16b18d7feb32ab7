//! Cell geometry of the trigger and the sheet.

use crate::view::{SheetView, TriggerView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left.saturating_add(right));
        let height = self.height.saturating_sub(top.saturating_add(bottom));
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Size of the screen the dropdown lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

/// Rows taken by the bordered trigger box.
pub const TRIGGER_BOX_HEIGHT: u16 = 3;
/// Rows taken by the header banner: text and its rule.
pub const HEADER_HEIGHT: u16 = 2;
/// Rows taken by the sheet title: text and its rule.
pub const TITLE_HEIGHT: u16 = 2;
/// Blank rows above and below the option list, combined.
pub const LIST_PADDING: u16 = 2;
/// Rows taken by the bordered close button.
pub const BUTTON_HEIGHT: u16 = 3;

/// Total rows a trigger needs, caption included.
pub fn trigger_height(has_caption: bool) -> u16 {
    TRIGGER_BOX_HEIGHT + u16::from(has_caption)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerLayout {
    pub caption: Option<Rect>,
    /// The pressable box.
    pub trigger: Rect,
    pub text: Rect,
    pub chevron: (u16, u16),
}

/// Place a trigger at the top of `anchor`, using its full width.
pub fn trigger_layout(view: &TriggerView, anchor: Rect) -> TriggerLayout {
    let caption = view
        .caption
        .as_ref()
        .map(|_| Rect::new(anchor.x, anchor.y, anchor.width, 1));
    let top = anchor.y + u16::from(caption.is_some());
    let trigger = Rect::new(anchor.x, top, anchor.width, TRIGGER_BOX_HEIGHT);

    // border plus one column of padding each side
    let inner = trigger.shrink(1, 2, 1, 2);
    let chevron = (inner.right().saturating_sub(1), inner.y);
    let text = Rect::new(inner.x, inner.y, inner.width.saturating_sub(2), 1);

    TriggerLayout {
        caption,
        trigger,
        text,
        chevron,
    }
}

/// Rows of the sheet that are not option rows.
pub fn sheet_chrome_height(has_header: bool, has_title: bool, has_button: bool) -> u16 {
    let mut height = 2 + LIST_PADDING;
    if has_header {
        height += HEADER_HEIGHT;
    }
    if has_title {
        height += TITLE_HEIGHT;
    }
    if has_button {
        height += BUTTON_HEIGHT;
    }
    height
}

/// Lines taken by `rows` option rows, counting a rule between each pair
/// when `separators` is set.
pub fn list_content_height(rows: u16, separators: bool) -> u16 {
    if separators {
        rows.saturating_mul(2).saturating_sub(1)
    } else {
        rows
    }
}

/// Most option rows that fit in `lines`.
pub fn rows_fitting(lines: u16, separators: bool) -> usize {
    let rows = if separators { lines.div_ceil(2) } else { lines };
    usize::from(rows)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Everything outside `sheet` is backdrop.
    pub backdrop: Rect,
    pub sheet: Rect,
    pub header: Option<Rect>,
    pub title: Option<Rect>,
    pub list: Rect,
    /// Option index and row rectangle for each visible row.
    pub rows: Vec<(usize, Rect)>,
    /// One-line rules between consecutive rows.
    pub separators: Vec<Rect>,
    pub close_button: Option<Rect>,
}

/// Center the sheet in the viewport and stack its regions top to bottom.
pub fn sheet_layout(view: &SheetView, viewport: Viewport) -> SheetLayout {
    let visible = u16::try_from(view.rows.len()).unwrap_or(u16::MAX);
    let height = sheet_chrome_height(
        view.header.is_some(),
        view.title.is_some(),
        view.close_label.is_some(),
    )
    .saturating_add(list_content_height(visible, view.separators));

    let width = view.width;
    let x = viewport.width.saturating_sub(width) / 2;
    let y = viewport.height.saturating_sub(height) / 2;
    let sheet = Rect::new(x, y, width, height);

    let inner = sheet.shrink(1, 1, 1, 1);
    let mut cursor = inner.y;

    let header = view.header.as_ref().map(|_| {
        let rect = Rect::new(inner.x, cursor, inner.width, HEADER_HEIGHT);
        cursor += HEADER_HEIGHT;
        rect
    });

    let title = view.title.as_ref().map(|_| {
        let rect = Rect::new(inner.x, cursor, inner.width, TITLE_HEIGHT);
        cursor += TITLE_HEIGHT;
        rect
    });

    let list = Rect::new(
        inner.x,
        cursor,
        inner.width,
        list_content_height(visible, view.separators) + LIST_PADDING,
    );
    let pitch = if view.separators { 2 } else { 1 };
    let row_y = |i: usize| {
        let i = u16::try_from(i).unwrap_or(u16::MAX);
        list.y.saturating_add(1).saturating_add(i.saturating_mul(pitch))
    };
    let rows = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.index, Rect::new(list.x, row_y(i), list.width, 1)))
        .collect();
    let separators = if view.separators {
        (1..view.rows.len())
            .map(|i| Rect::new(list.x, row_y(i) - 1, list.width, 1))
            .collect()
    } else {
        Vec::new()
    };
    cursor = list.bottom();

    let close_button = view.close_label.as_ref().map(|_| {
        Rect::new(
            inner.x + 1,
            cursor,
            inner.width.saturating_sub(2),
            BUTTON_HEIGHT,
        )
    });

    SheetLayout {
        backdrop: viewport.rect(),
        sheet,
        header,
        title,
        list,
        rows,
        separators,
        close_button,
    }
}
