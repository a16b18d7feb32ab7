use crate::layout::{SheetLayout, TriggerLayout};

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Trigger,
    /// Option row, by index in the host's list.
    Row(usize),
    CloseButton,
    /// Inside the sheet but on nothing pressable.
    Sheet,
    Backdrop,
}

/// The trigger box, if it contains the point. The caption is not pressable.
pub fn hit_test_trigger(layout: &TriggerLayout, x: u16, y: u16) -> Option<Target> {
    layout.trigger.contains(x, y).then_some(Target::Trigger)
}

/// Resolve a point while the sheet is open. Anything outside the sheet is
/// backdrop, including points beyond the viewport.
pub fn hit_test_sheet(layout: &SheetLayout, x: u16, y: u16) -> Target {
    if !layout.sheet.contains(x, y) {
        return Target::Backdrop;
    }

    if let Some((index, _)) = layout.rows.iter().find(|(_, rect)| rect.contains(x, y)) {
        return Target::Row(*index);
    }

    if layout
        .close_button
        .is_some_and(|button| button.contains(x, y))
    {
        return Target::CloseButton;
    }

    Target::Sheet
}
