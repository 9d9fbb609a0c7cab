//! Widget kinds for metadata-described fields

/// How a field is edited in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetKind {
    #[default]
    Text,
    Email,
    /// Choice from a closed, enumerated set
    Select,
    Date,
    Time,
    Number,
    Checkbox,
    TextArea,
    /// Unbounded list of sub-records (attachments)
    RepeatedGroup,
}

impl WidgetKind {
    /// Value for the `type` attribute of an `<input>`, when the widget is one
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Date => Some("date"),
            Self::Time => Some("time"),
            Self::Number => Some("number"),
            Self::Checkbox => Some("checkbox"),
            Self::Select | Self::TextArea | Self::RepeatedGroup => None,
        }
    }
}
