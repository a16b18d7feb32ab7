use std::sync::{Arc, Mutex};

use dropdown::{
    Dropdown, DropdownOption, DropdownProps, EventResult, SelectValue, Selection, Viewport,
};

type Picks = Arc<Mutex<Vec<SelectValue>>>;

/// Props wired to a recorder of every callback value.
fn recording(props: DropdownProps) -> (DropdownProps, Picks) {
    let picks: Picks = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&picks);
    let props = props.on_select(move |value| sink.lock().unwrap().push(value.clone()));
    (props, picks)
}

fn phone() -> Viewport {
    Viewport::new(80, 24)
}

fn picks_of(picks: &Picks) -> Vec<SelectValue> {
    picks.lock().unwrap().clone()
}

fn multi(labels: &[&str]) -> SelectValue {
    SelectValue::Multiple(labels.iter().map(|l| l.to_string()).collect())
}

// ============================================================================
// Single selection
// ============================================================================

#[test]
fn test_single_select_round_trip() {
    let (props, picks) = recording(DropdownProps::new().options(["A", "B"]));
    let mut dropdown = Dropdown::new(props);

    assert!(!dropdown.is_open());
    assert_eq!(dropdown.press_trigger(phone()), EventResult::Consumed);
    assert!(dropdown.is_open());

    assert_eq!(dropdown.press_option(1), EventResult::Consumed);

    assert!(!dropdown.is_open());
    assert_eq!(picks_of(&picks), vec![SelectValue::Single("B".into())]);
    assert_eq!(dropdown.display_text(), "B");
    assert!(dropdown.is_active("B"));
    assert!(!dropdown.is_active("A"));
}

#[test]
fn test_single_select_replaces_previous() {
    let (props, picks) = recording(DropdownProps::new().options(["A", "B"]));
    let mut dropdown = Dropdown::new(props);

    dropdown.press_trigger(phone());
    dropdown.press_option(0);
    dropdown.press_trigger(phone());
    dropdown.press_option(1);

    assert_eq!(dropdown.selection(), &Selection::single("B"));
    assert_eq!(
        picks_of(&picks),
        vec![SelectValue::Single("A".into()), SelectValue::Single("B".into())]
    );
}

#[test]
fn test_pressing_selected_row_in_single_mode_keeps_it() {
    let (props, picks) = recording(DropdownProps::new().options(["A", "B"]));
    let mut dropdown = Dropdown::new(props);

    dropdown.press_trigger(phone());
    dropdown.press_option(0);
    dropdown.press_trigger(phone());
    dropdown.press_option(0);

    assert_eq!(dropdown.display_text(), "A");
    assert_eq!(picks_of(&picks).len(), 2);
    assert!(!dropdown.is_open());
}

// ============================================================================
// Multiple selection
// ============================================================================

#[test]
fn test_multi_select_accumulates_and_toggles() {
    let (props, picks) = recording(DropdownProps::new().options(["A", "B"]).multiple(true));
    let mut dropdown = Dropdown::new(props);
    dropdown.press_trigger(phone());

    dropdown.press_option(0);
    assert!(dropdown.is_open());
    dropdown.press_option(1);
    assert!(dropdown.is_open());
    dropdown.press_option(0);
    assert!(dropdown.is_open());

    assert_eq!(
        picks_of(&picks),
        vec![multi(&["A"]), multi(&["A", "B"]), multi(&["B"])]
    );
    assert_eq!(dropdown.selection(), &Selection::multiple(["B"]));
}

#[test]
fn test_multi_select_keeps_selection_order() {
    let (props, _) = recording(
        DropdownProps::new()
            .options(["A", "B", "C"])
            .multiple(true)
            .placeholder("Pick"),
    );
    let mut dropdown = Dropdown::new(props);
    dropdown.press_trigger(phone());

    dropdown.press_option(2);
    dropdown.press_option(0);

    assert_eq!(dropdown.display_text(), "C, A");

    dropdown.press_option(2);
    dropdown.press_option(0);
    assert_eq!(dropdown.display_text(), "Pick");
}

// ============================================================================
// Controlled selection
// ============================================================================

#[test]
fn test_controlled_single_does_not_mutate() {
    let (props, picks) = recording(
        DropdownProps::new()
            .options(["A", "B"])
            .selected(Selection::single("A")),
    );
    let mut dropdown = Dropdown::new(props);
    assert!(dropdown.is_controlled());

    dropdown.press_trigger(phone());
    dropdown.press_option(1);
    assert_eq!(dropdown.display_text(), "A");
    assert!(!dropdown.is_open());

    dropdown.press_trigger(phone());
    dropdown.press_option(1);

    assert_eq!(
        picks_of(&picks),
        vec![SelectValue::Single("B".into()), SelectValue::Single("B".into())]
    );
    assert_eq!(dropdown.display_text(), "A");
}

#[test]
fn test_controlled_multiple_emits_identical_values_without_host_update() {
    let (props, picks) = recording(
        DropdownProps::new()
            .options(["A", "B"])
            .multiple(true)
            .selected(Selection::multiple(["A"])),
    );
    let mut dropdown = Dropdown::new(props);
    dropdown.press_trigger(phone());

    dropdown.press_option(1);
    dropdown.press_option(1);

    assert_eq!(picks_of(&picks), vec![multi(&["A", "B"]), multi(&["A", "B"])]);
    assert_eq!(dropdown.selection(), &Selection::multiple(["A"]));
}

#[test]
fn test_controlled_value_follows_host_update() {
    let (props, picks) = recording(
        DropdownProps::new()
            .options(["A", "B"])
            .multiple(true)
            .selected(Selection::multiple(Vec::<String>::new())),
    );
    let mut dropdown = Dropdown::new(props);
    dropdown.press_trigger(phone());

    dropdown.press_option(0);
    let reported = picks_of(&picks).pop().unwrap();
    dropdown.set_selected(Some(reported.into()));
    dropdown.press_option(1);

    assert_eq!(picks_of(&picks), vec![multi(&["A"]), multi(&["A", "B"])]);
    assert_eq!(dropdown.display_text(), "A");
}

#[test]
fn test_controlled_shape_is_coerced_to_mode() {
    let mut dropdown = Dropdown::new(
        DropdownProps::new()
            .options(["A", "B"])
            .multiple(true)
            .selected(Selection::single("A")),
    );
    assert_eq!(dropdown.selection(), &Selection::multiple(["A"]));

    dropdown.set_props(
        DropdownProps::new()
            .options(["A", "B"])
            .selected(Selection::multiple(["B", "A"])),
    );
    assert_eq!(dropdown.selection(), &Selection::single("B"));
}

#[test]
fn test_releasing_control_returns_to_internal_state() {
    let mut dropdown = Dropdown::new(
        DropdownProps::new()
            .options(["A", "B"])
            .selected(Selection::single("A")),
    );
    dropdown.set_selected(None);

    assert!(!dropdown.is_controlled());
    assert_eq!(dropdown.selection(), &Selection::Single(None));

    dropdown.press_trigger(phone());
    dropdown.press_option(1);
    assert_eq!(dropdown.display_text(), "B");
}

#[test]
fn test_empty_host_single_value_leaves_selection_with_dropdown() {
    let (props, picks) = recording(
        DropdownProps::new()
            .placeholder("Choose")
            .options(["A", "B"])
            .selected(Selection::Single(None)),
    );
    let mut dropdown = Dropdown::new(props);
    assert!(!dropdown.is_controlled());

    dropdown.press_trigger(phone());
    dropdown.press_option(1);

    assert_eq!(dropdown.display_text(), "B");
    assert_eq!(picks_of(&picks), vec![SelectValue::Single("B".into())]);

    dropdown.set_selected(Some(Selection::Single(None)));
    assert!(!dropdown.is_controlled());
    assert_eq!(dropdown.display_text(), "B");
}

#[test]
fn test_empty_host_set_stays_host_owned() {
    let mut dropdown = Dropdown::new(
        DropdownProps::new()
            .placeholder("Choose")
            .options(["A", "B"])
            .multiple(true)
            .selected(Selection::Multiple(vec![])),
    );
    assert!(dropdown.is_controlled());

    dropdown.press_trigger(phone());
    dropdown.press_option(0);
    assert_eq!(dropdown.display_text(), "Choose");
}

// ============================================================================
// Trigger text
// ============================================================================

#[test]
fn test_placeholder_fallback() {
    let mut dropdown = Dropdown::new(DropdownProps::new().placeholder("Choose").options(["A"]));
    assert_eq!(dropdown.display_text(), "Choose");
    assert!(dropdown.shows_placeholder());

    dropdown.press_trigger(phone());
    dropdown.press_option(0);
    assert_eq!(dropdown.display_text(), "A");
    assert!(!dropdown.shows_placeholder());
}

#[test]
fn test_constant_placeholder_survives_selection() {
    let mut dropdown = Dropdown::new(
        DropdownProps::new()
            .placeholder("Choose")
            .options(["A"])
            .constant_placeholder(true),
    );

    dropdown.press_trigger(phone());
    dropdown.press_option(0);

    assert_eq!(dropdown.display_text(), "Choose");
    assert!(dropdown.is_active("A"));
}

#[test]
fn test_empty_label_selection_shows_placeholder() {
    let mut dropdown = Dropdown::new(DropdownProps::new().placeholder("Choose").options(["", "A"]));

    dropdown.press_trigger(phone());
    dropdown.press_option(0);

    assert!(dropdown.is_active(""));
    assert_eq!(dropdown.display_text(), "Choose");
    assert!(dropdown.shows_placeholder());
    assert!(dropdown.trigger_view(false).is_placeholder);
}

#[test]
fn test_missing_placeholder_is_empty_text() {
    let dropdown = Dropdown::new(DropdownProps::new().options(["A"]));
    assert_eq!(dropdown.display_text(), "");
}

// ============================================================================
// Closing
// ============================================================================

#[test]
fn test_backdrop_closes_without_selecting() {
    let (props, picks) = recording(DropdownProps::new().options(["A", "B"]));
    let mut dropdown = Dropdown::new(props);

    dropdown.press_trigger(phone());
    assert_eq!(dropdown.press_backdrop(), EventResult::Consumed);

    assert!(!dropdown.is_open());
    assert!(picks_of(&picks).is_empty());
    assert!(dropdown.selection().is_empty());

    // Already closed
    assert_eq!(dropdown.press_backdrop(), EventResult::Ignored);
}

#[test]
fn test_close_button_only_when_shown() {
    let mut hidden = Dropdown::new(DropdownProps::new().options(["A"]));
    hidden.press_trigger(phone());
    assert_eq!(hidden.press_close_button(), EventResult::Ignored);
    assert!(hidden.is_open());

    let (props, picks) = recording(DropdownProps::new().options(["A"]).show_button(true));
    let mut shown = Dropdown::new(props);
    shown.press_trigger(phone());
    assert_eq!(shown.press_close_button(), EventResult::Consumed);
    assert!(!shown.is_open());
    assert!(picks_of(&picks).is_empty());
}

#[test]
fn test_request_close_and_reopen() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A"]).multiple(true));

    dropdown.press_trigger(phone());
    dropdown.press_option(0);
    dropdown.request_close();
    assert!(!dropdown.is_open());

    dropdown.press_trigger(phone());
    assert!(dropdown.is_open());
    assert!(dropdown.is_active("A"));
}

#[test]
fn test_trigger_press_while_open_is_ignored() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A"]));
    dropdown.press_trigger(phone());
    assert_eq!(dropdown.press_trigger(phone()), EventResult::Ignored);
    assert!(dropdown.is_open());
}

// ============================================================================
// Permissive inputs
// ============================================================================

#[test]
fn test_empty_options_are_safe() {
    let mut dropdown = Dropdown::new(DropdownProps::new());

    dropdown.press_trigger(phone());
    let sheet = dropdown.sheet_view().unwrap();
    assert!(sheet.rows.is_empty());
    assert_eq!(sheet.total_rows, 0);

    assert_eq!(dropdown.press_option(0), EventResult::Ignored);
    assert_eq!(dropdown.activate_cursor(), EventResult::Ignored);
    dropdown.cursor_end();
    dropdown.cursor_down();
    dropdown.scroll_by(5);
    assert!(dropdown.is_open());
}

#[test]
fn test_out_of_range_press_is_ignored() {
    let (props, picks) = recording(DropdownProps::new().options(["A"]));
    let mut dropdown = Dropdown::new(props);
    dropdown.press_trigger(phone());

    assert_eq!(dropdown.press_option(7), EventResult::Ignored);
    assert!(dropdown.is_open());
    assert!(picks_of(&picks).is_empty());
}

#[test]
fn test_press_while_closed_is_ignored() {
    let (props, picks) = recording(DropdownProps::new().options(["A"]));
    let mut dropdown = Dropdown::new(props);

    assert_eq!(dropdown.press_option(0), EventResult::Ignored);
    assert!(picks_of(&picks).is_empty());
}

#[test]
fn test_missing_callback_still_tracks_selection() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A", "B"]).multiple(true));
    dropdown.press_trigger(phone());
    dropdown.press_option(1);

    assert_eq!(dropdown.selection(), &Selection::multiple(["B"]));
}

#[test]
fn test_preview_press_does_not_select() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A", "B"]).multiple(true));
    dropdown.press_trigger(phone());
    dropdown.press_option(0);

    assert_eq!(dropdown.preview_press(1), Some(multi(&["A", "B"])));
    assert_eq!(dropdown.preview_press(0), Some(multi(&[])));
    assert_eq!(dropdown.preview_press(9), None);
    assert_eq!(dropdown.selection(), &Selection::multiple(["A"]));
}

// ============================================================================
// Props updates
// ============================================================================

#[test]
fn test_switching_mode_reshapes_internal_selection() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A", "B"]));
    dropdown.press_trigger(phone());
    dropdown.press_option(1);

    dropdown.set_props(DropdownProps::new().options(["A", "B"]).multiple(true));
    assert_eq!(dropdown.selection(), &Selection::multiple(["B"]));

    dropdown.set_props(DropdownProps::new().options(["A", "B"]));
    assert_eq!(dropdown.selection(), &Selection::single("B"));
}

#[test]
fn test_set_props_keeps_open_state() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A", "B", "C"]));
    dropdown.press_trigger(phone());
    dropdown.cursor_end();

    dropdown.set_props(DropdownProps::new().options([DropdownOption::new("A")]));

    assert!(dropdown.is_open());
    assert_eq!(dropdown.cursor(), 0);
    assert_eq!(dropdown.sheet_view().unwrap().rows.len(), 1);
}

// ============================================================================
// Sheet geometry and cursor
// ============================================================================

#[test]
fn test_sheet_width_recomputed_on_each_open() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A"]));

    dropdown.press_trigger(Viewport::new(80, 24));
    assert_eq!(dropdown.sheet_width(), 40);
    dropdown.press_backdrop();

    dropdown.press_trigger(Viewport::new(60, 24));
    assert_eq!(dropdown.sheet_width(), 20);
    dropdown.press_backdrop();

    dropdown.press_trigger(Viewport::new(400, 24));
    assert_eq!(dropdown.sheet_width(), 300);
    dropdown.press_backdrop();

    dropdown.press_trigger(Viewport::new(30, 24));
    assert_eq!(dropdown.sheet_width(), 0);
}

#[test]
fn test_resize_while_open_remeasures() {
    let mut dropdown = Dropdown::new(DropdownProps::new().options(["A"]));
    dropdown.press_trigger(Viewport::new(80, 24));

    dropdown.resize(Viewport::new(100, 24));
    assert_eq!(dropdown.sheet_width(), 60);
}

#[test]
fn test_open_places_cursor_on_first_active_row() {
    let mut dropdown = Dropdown::new(
        DropdownProps::new()
            .options(["A", "B", "C"])
            .selected(Selection::single("C")),
    );
    dropdown.press_trigger(phone());
    assert_eq!(dropdown.cursor(), 2);
}

#[test]
fn test_long_list_scrolls_with_cursor() {
    let labels: Vec<String> = (0..30).map(|i| format!("Option {}", i)).collect();
    let mut dropdown = Dropdown::new(DropdownProps::new().options(labels));
    dropdown.press_trigger(phone());

    // 24 rows minus 4 of margin, minus border and list padding
    assert_eq!(dropdown.visible_rows(), 16);

    dropdown.cursor_end();
    assert_eq!(dropdown.cursor(), 29);
    assert_eq!(dropdown.scroll_offset(), 14);

    let sheet = dropdown.sheet_view().unwrap();
    assert_eq!(sheet.first_row, 14);
    assert_eq!(sheet.rows.len(), 16);
    assert_eq!(sheet.rows[0].label, "Option 14");
    assert!(sheet.has_rows_above());
    assert!(!sheet.has_rows_below());

    dropdown.cursor_home();
    assert_eq!(dropdown.scroll_offset(), 0);

    dropdown.cursor_page_down();
    assert_eq!(dropdown.cursor(), 16);
    assert_eq!(dropdown.scroll_offset(), 1);
}

#[test]
fn test_scroll_is_clamped() {
    let labels: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    let mut dropdown = Dropdown::new(DropdownProps::new().options(labels));
    dropdown.press_trigger(phone());

    dropdown.scroll_by(-3);
    assert_eq!(dropdown.scroll_offset(), 0);

    dropdown.scroll_by(100);
    assert_eq!(dropdown.scroll_offset(), 4);
}

#[test]
fn test_keyboard_activation_presses_cursor_row() {
    let (props, picks) = recording(DropdownProps::new().options(["A", "B", "C"]));
    let mut dropdown = Dropdown::new(props);
    dropdown.press_trigger(phone());

    dropdown.cursor_down();
    dropdown.cursor_down();
    dropdown.cursor_down();
    assert_eq!(dropdown.cursor(), 2);
    dropdown.cursor_up();

    assert_eq!(dropdown.activate_cursor(), EventResult::Consumed);
    assert_eq!(picks_of(&picks), vec![SelectValue::Single("B".into())]);
}
