//! Selection values and who owns them.

/// The selected label(s) of a dropdown.
///
/// Single mode holds at most one label. Multiple mode holds an ordered set:
/// insertion order is selection order and a label appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<String>),
    Multiple(Vec<String>),
}

impl Selection {
    /// Nothing selected, shaped for the given mode.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Self::Multiple(Vec::new())
        } else {
            Self::Single(None)
        }
    }

    /// A single-mode selection of `label`.
    pub fn single(label: impl Into<String>) -> Self {
        Self::Single(Some(label.into()))
    }

    /// A multiple-mode selection. Repeated labels are dropped, keeping the
    /// first occurrence.
    pub fn multiple<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !set.contains(&label) {
                set.push(label);
            }
        }
        Self::Multiple(set)
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_none(),
            Self::Multiple(set) => set.is_empty(),
        }
    }

    /// Whether `label` is selected. Decides the active look of a row.
    pub fn contains(&self, label: &str) -> bool {
        match self {
            Self::Single(value) => value.as_deref() == Some(label),
            Self::Multiple(set) => set.iter().any(|l| l == label),
        }
    }

    /// Selected labels in selection order.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => value.as_deref().into_iter().collect(),
            Self::Multiple(set) => set.iter().map(String::as_str).collect(),
        }
    }

    /// Text shown on the trigger for this selection, `None` when there is
    /// nothing to show (including an empty label).
    pub fn display(&self) -> Option<String> {
        let text = match self {
            Self::Single(value) => value.clone()?,
            Self::Multiple(set) => set.join(", "),
        };
        (!text.is_empty()).then_some(text)
    }

    /// The value that results from pressing the row labelled `label`.
    ///
    /// Single mode replaces the selection. Multiple mode removes the label
    /// when present and appends it otherwise.
    pub fn pressed(&self, label: &str) -> SelectValue {
        match self {
            Self::Single(_) => SelectValue::Single(label.to_string()),
            Self::Multiple(set) => {
                let next = if set.iter().any(|l| l == label) {
                    set.iter().filter(|l| *l != label).cloned().collect()
                } else {
                    let mut next = set.clone();
                    next.push(label.to_string());
                    next
                };
                SelectValue::Multiple(next)
            }
        }
    }

    /// Reshape for the given mode. A single label becomes a one-element
    /// set; a set keeps only its first label.
    pub fn coerce(self, multiple: bool) -> Self {
        match (self, multiple) {
            (Self::Single(value), true) => Self::Multiple(value.into_iter().collect()),
            (Self::Multiple(set), false) => Self::Single(set.into_iter().next()),
            (same, _) => same,
        }
    }
}

impl From<SelectValue> for Selection {
    fn from(value: SelectValue) -> Self {
        match value {
            SelectValue::Single(label) => Self::Single(Some(label)),
            SelectValue::Multiple(set) => Self::multiple(set),
        }
    }
}

/// Payload of the selection callback: the pressed label in single mode,
/// the full resulting set in multiple mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    Single(String),
    Multiple(Vec<String>),
}

impl SelectValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(label) => Some(label),
            Self::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(set) => Some(set),
        }
    }
}

/// Where the authoritative selection lives for one interaction.
///
/// Controlled values belong to the host and are only read; the next value
/// goes out through the callback. Uncontrolled values belong to the
/// dropdown and are written in place.
#[derive(Debug)]
pub enum SelectionSource<'a> {
    Controlled(&'a Selection),
    Uncontrolled(&'a mut Selection),
}

impl SelectionSource<'_> {
    pub fn current(&self) -> &Selection {
        match self {
            Self::Controlled(value) => value,
            Self::Uncontrolled(value) => value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }

    /// Store `next` if the dropdown owns the selection.
    pub fn commit(self, next: &SelectValue) {
        match self {
            Self::Controlled(_) => {
                log::debug!("selection is host-owned, not writing {:?}", next);
            }
            Self::Uncontrolled(value) => {
                *value = next.clone().into();
            }
        }
    }
}
