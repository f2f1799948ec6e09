/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    Tab,
    TextField,
    Image,
    Container,
    ProgressBar,
}

/// Semantics attached to a `View`, used to build the accessibility tree and
/// to find tap targets by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    pub role: Role,
    /// Name announced by screen readers; for tabs and buttons this is the
    /// visible label.
    pub label: Option<String>,
    /// Tabs only: whether this tab is the active one.
    pub selected: bool,
    pub enabled: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            selected: false,
            enabled: true,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}
