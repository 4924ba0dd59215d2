//! Cursor hover state changes
//!
//! Entering an interactive element puts the cursor in its hovered state and,
//! if the element carries a label, shows that label. Leaving always clears
//! both, whatever was shown before.

/// Normalises a raw label attribute: absent and empty both mean "no label"
#[must_use]
pub fn hover_label(attribute: Option<&str>) -> Option<&str> {
    attribute.filter(|label| !label.is_empty())
}

/// An interactive element together with its label, read at enter time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget<T> {
    pub element: T,
    pub label: Option<String>,
}

impl<T> HoverTarget<T> {
    #[must_use]
    pub fn new(element: T, attribute: Option<&str>) -> Self {
        Self {
            element,
            label: hover_label(attribute).map(str::to_string),
        }
    }

    /// Update to apply when the pointer enters this target
    #[must_use]
    pub fn enter(&self) -> CursorUpdate {
        CursorUpdate::Hover {
            label: self.label.clone(),
        }
    }

    /// Update to apply when the pointer leaves this target
    #[must_use]
    pub const fn leave(&self) -> CursorUpdate {
        CursorUpdate::Unhover
    }
}

/// A change to the shared cursor element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorUpdate {
    Hover { label: Option<String> },
    Unhover,
}

impl CursorUpdate {
    /// Whether the hovered marker should be present afterwards
    #[must_use]
    pub const fn hovered(&self) -> bool {
        matches!(self, Self::Hover { .. })
    }

    /// New cursor text, or `None` to leave the current text untouched
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Hover { label } => label.as_deref(),
            Self::Unhover => Some(""),
        }
    }
}
