use input_core::SelectionRange;
use std::fmt;

/// A change the widget made to the element, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    SetAttribute { name: String, value: String },
    RemoveAttribute { name: String },
    SetValue(String),
    Focus,
    Blur,
    Select(SelectionRange),
    SelectTextRange,
    BubbleFocusEvents,
    InstallChangeBubbler,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::SetAttribute { name, value } => write!(f, "set-attribute {name}={value:?}"),
            Mutation::RemoveAttribute { name } => write!(f, "remove-attribute {name}"),
            Mutation::SetValue(value) => write!(f, "set-value {value:?}"),
            Mutation::Focus => f.write_str("focus"),
            Mutation::Blur => f.write_str("blur"),
            Mutation::Select(range) => write!(f, "select {}..{}", range.start, range.end),
            Mutation::SelectTextRange => f.write_str("select-text-range"),
            Mutation::BubbleFocusEvents => f.write_str("bubble-focus-events"),
            Mutation::InstallChangeBubbler => f.write_str("install-change-bubbler"),
        }
    }
}
