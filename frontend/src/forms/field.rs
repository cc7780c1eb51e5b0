use thiserror::Error;

/// Input kinds the validator knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    Password,
    Other,
}

impl FieldKind {
    /// Maps an `<input type=...>` attribute onto a kind. Textareas and
    /// unknown types land in `Other`.
    pub fn from_type_attr(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "" => FieldKind::Text,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "url" => FieldKind::Url,
            "password" => FieldKind::Password,
            _ => FieldKind::Other,
        }
    }

    pub fn as_type_attr(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Other => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::Password => "password",
        }
    }
}

/// Static validation metadata of one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    /// The declared `type` attribute, lowercased; `textarea` for multi-line controls.
    pub input_type: String,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            input_type: kind.as_type_attr().to_string(),
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Builds a descriptor from the raw attributes a form input declares:
    /// `type`, `required`, `maxlength` and `data-min-length`. Unparseable
    /// lengths are ignored, the same way a browser ignores a bad `maxlength`.
    pub fn from_attributes(
        name: &str,
        type_attr: &str,
        required: bool,
        maxlength: Option<&str>,
        min_length: Option<&str>,
    ) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<usize>().ok());
        let input_type = match type_attr.trim().to_ascii_lowercase() {
            t if t.is_empty() => "text".to_string(),
            t => t,
        };
        Self {
            name: name.to_string(),
            kind: FieldKind::from_type_attr(type_attr),
            input_type,
            required,
            min_length: parse(min_length),
            max_length: parse(maxlength),
        }
    }

    /// Rendered as a `<textarea>` rather than an `<input>`.
    pub fn is_multiline(&self) -> bool {
        self.input_type == "textarea"
    }

    pub fn multiline(mut self) -> Self {
        self.input_type = "textarea".to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }
}

/// A failed field check, carrying the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please enter a valid URL.")]
    InvalidUrl,
    #[error("Please enter at least {0} characters.")]
    TooShort(usize),
}
