//! Options shown in the dropdown list.

/// One selectable entry.
///
/// The label is both the display text and the value identity: selections
/// store labels, so labels are expected to be unique within one dropdown.
///
/// # Example
///
/// ```
/// use dropdown::DropdownOption;
///
/// let plain = DropdownOption::new("Istanbul");
/// let tagged = DropdownOption::new("Ankara").with_badge("capital");
///
/// assert_eq!(plain.badge, None);
/// assert_eq!(tagged.badge.as_deref(), Some("capital"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    /// Secondary annotation drawn at the right of the row.
    pub badge: Option<String>,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

impl From<&str> for DropdownOption {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for DropdownOption {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

// (label, badge) pairs
impl<S1, S2> From<(S1, S2)> for DropdownOption
where
    S1: Into<String>,
    S2: Into<String>,
{
    fn from((label, badge): (S1, S2)) -> Self {
        Self::new(label).with_badge(badge)
    }
}
