use dropdown::hit::{hit_test_sheet, hit_test_trigger};
use dropdown::layout::{sheet_chrome_height, sheet_layout, trigger_height, trigger_layout};
use dropdown::{Dropdown, DropdownProps, Metrics, Rect, Target, Viewport};

fn open(props: DropdownProps, viewport: Viewport) -> Dropdown {
    let mut dropdown = Dropdown::new(props);
    dropdown.press_trigger(viewport);
    dropdown
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_sheet_width_clamps() {
    let metrics = Metrics::default();
    assert_eq!(metrics.sheet_width(80), 40);
    assert_eq!(metrics.sheet_width(340), 300);
    assert_eq!(metrics.sheet_width(1000), 300);
    assert_eq!(metrics.sheet_width(10), 0);
}

#[test]
fn test_sheet_height_limit() {
    let metrics = Metrics::default();
    assert_eq!(metrics.sheet_height_limit(24), 20);
    assert_eq!(metrics.sheet_height_limit(1000), 400);
    assert_eq!(metrics.sheet_height_limit(2), 0);
}

#[test]
fn test_chrome_height() {
    assert_eq!(sheet_chrome_height(false, false, false), 4);
    assert_eq!(sheet_chrome_height(true, true, true), 11);
    assert_eq!(trigger_height(true), 4);
    assert_eq!(trigger_height(false), 3);
}

// ============================================================================
// Trigger
// ============================================================================

#[test]
fn test_trigger_layout_with_caption() {
    let dropdown = Dropdown::new(DropdownProps::new().label("City"));
    let layout = trigger_layout(&dropdown.trigger_view(false), Rect::new(2, 2, 30, 4));

    assert_eq!(layout.caption, Some(Rect::new(2, 2, 30, 1)));
    assert_eq!(layout.trigger, Rect::new(2, 3, 30, 3));
    assert_eq!(layout.text, Rect::new(4, 4, 24, 1));
    assert_eq!(layout.chevron, (29, 4));
}

#[test]
fn test_trigger_hit_excludes_caption() {
    let dropdown = Dropdown::new(DropdownProps::new().label("City"));
    let layout = trigger_layout(&dropdown.trigger_view(false), Rect::new(2, 2, 30, 4));

    assert_eq!(hit_test_trigger(&layout, 10, 2), None);
    assert_eq!(hit_test_trigger(&layout, 2, 3), Some(Target::Trigger));
    assert_eq!(hit_test_trigger(&layout, 31, 5), Some(Target::Trigger));
    assert_eq!(hit_test_trigger(&layout, 32, 5), None);
    assert_eq!(hit_test_trigger(&layout, 10, 6), None);
}

// ============================================================================
// Sheet
// ============================================================================

#[test]
fn test_plain_sheet_is_centered() {
    let viewport = Viewport::new(80, 24);
    let dropdown = open(DropdownProps::new().options(["A", "B"]), viewport);
    let layout = sheet_layout(&dropdown.sheet_view().unwrap(), viewport);

    assert_eq!(layout.backdrop, Rect::new(0, 0, 80, 24));
    assert_eq!(layout.sheet, Rect::new(20, 9, 40, 6));
    assert_eq!(layout.header, None);
    assert_eq!(layout.title, None);
    assert_eq!(layout.list, Rect::new(21, 10, 38, 4));
    assert_eq!(
        layout.rows,
        vec![(0, Rect::new(21, 11, 38, 1)), (1, Rect::new(21, 12, 38, 1))]
    );
    assert_eq!(layout.close_button, None);
}

#[test]
fn test_sheet_with_title_and_button() {
    let viewport = Viewport::new(80, 24);
    let dropdown = open(
        DropdownProps::new()
            .label("Fruit")
            .options(["A", "B"])
            .show_button(true),
        viewport,
    );
    let layout = sheet_layout(&dropdown.sheet_view().unwrap(), viewport);

    assert_eq!(layout.sheet, Rect::new(20, 6, 40, 11));
    assert_eq!(layout.title, Some(Rect::new(21, 7, 38, 2)));
    assert_eq!(layout.list, Rect::new(21, 9, 38, 4));
    assert_eq!(layout.rows[0], (0, Rect::new(21, 10, 38, 1)));
    assert_eq!(layout.close_button, Some(Rect::new(22, 13, 36, 3)));
    assert!(layout.close_button.unwrap().bottom() < layout.sheet.bottom());
}

#[test]
fn test_scrolled_rows_keep_option_index() {
    let viewport = Viewport::new(80, 24);
    let labels: Vec<String> = (0..30).map(|i| i.to_string()).collect();
    let mut dropdown = open(DropdownProps::new().options(labels), viewport);
    dropdown.cursor_end();

    let layout = sheet_layout(&dropdown.sheet_view().unwrap(), viewport);
    assert_eq!(layout.rows.len(), 16);
    assert_eq!(layout.rows[0].0, 14);
    assert_eq!(layout.rows[15].0, 29);
    assert!(layout.sheet.bottom() <= viewport.height);
}

// ============================================================================
// Sheet hit testing
// ============================================================================

#[test]
fn test_sheet_hit_regions() {
    let viewport = Viewport::new(80, 24);
    let dropdown = open(
        DropdownProps::new()
            .label("Fruit")
            .options(["A", "B"])
            .show_button(true),
        viewport,
    );
    let layout = sheet_layout(&dropdown.sheet_view().unwrap(), viewport);

    assert_eq!(hit_test_sheet(&layout, 25, 10), Target::Row(0));
    assert_eq!(hit_test_sheet(&layout, 25, 11), Target::Row(1));
    assert_eq!(hit_test_sheet(&layout, 25, 14), Target::CloseButton);
    assert_eq!(hit_test_sheet(&layout, 25, 7), Target::Sheet);
    assert_eq!(hit_test_sheet(&layout, 20, 6), Target::Sheet);
    assert_eq!(hit_test_sheet(&layout, 0, 0), Target::Backdrop);
    assert_eq!(hit_test_sheet(&layout, 60, 10), Target::Backdrop);
    assert_eq!(hit_test_sheet(&layout, 200, 200), Target::Backdrop);
}

#[test]
fn test_target_at_switches_with_open_state() {
    let viewport = Viewport::new(80, 24);
    let anchor = Rect::new(2, 2, 30, 3);
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A", "B"]));

    assert_eq!(dropdown.target_at(5, 3, anchor, viewport), Some(Target::Trigger));
    assert_eq!(dropdown.target_at(50, 20, anchor, viewport), None);

    dropdown.press_trigger(viewport);
    assert_eq!(dropdown.target_at(5, 3, anchor, viewport), Some(Target::Backdrop));
    assert_eq!(dropdown.target_at(25, 12, anchor, viewport), Some(Target::Row(1)));
}

// ============================================================================
// Row separators
// ============================================================================

#[test]
fn test_separators_sit_between_rows() {
    let viewport = Viewport::new(80, 24);
    let dropdown = open(
        DropdownProps::new()
            .options(["A", "B", "C"])
            .row_separators(true),
        viewport,
    );
    let layout = sheet_layout(&dropdown.sheet_view().unwrap(), viewport);

    // Three rows and two rules between them
    assert_eq!(layout.sheet, Rect::new(20, 7, 40, 9));
    assert_eq!(layout.list, Rect::new(21, 8, 38, 7));
    let row_ys: Vec<u16> = layout.rows.iter().map(|(_, r)| r.y).collect();
    assert_eq!(row_ys, vec![9, 11, 13]);
    assert_eq!(
        layout.separators,
        vec![Rect::new(21, 10, 38, 1), Rect::new(21, 12, 38, 1)]
    );

    assert_eq!(hit_test_sheet(&layout, 25, 10), Target::Sheet);
    assert_eq!(hit_test_sheet(&layout, 25, 11), Target::Row(1));
}

#[test]
fn test_separators_reduce_visible_rows() {
    let labels: Vec<String> = (0..30).map(|i| i.to_string()).collect();
    let mut dropdown = Dropdown::new(DropdownProps::new().options(labels).row_separators(true));
    dropdown.press_trigger(Viewport::new(80, 24));

    // 16 free lines hold 8 rows and 7 rules
    assert_eq!(dropdown.visible_rows(), 8);
    assert!(dropdown.sheet_view().unwrap().separators);
}

#[test]
fn test_no_separators_by_default() {
    let viewport = Viewport::new(80, 24);
    let dropdown = open(DropdownProps::new().options(["A", "B"]), viewport);
    let layout = sheet_layout(&dropdown.sheet_view().unwrap(), viewport);
    assert!(layout.separators.is_empty());
}
