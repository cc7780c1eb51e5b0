use std::collections::HashMap;

/// Mutable per-form state: the in-flight flag and the current field errors.
///
/// A name is a key of `errors` exactly when the last validation of that field
/// failed. Absence means valid or not yet validated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormSession {
    is_submitting: bool,
    errors: HashMap<String, String>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Marks a submission as started. Callers check `is_submitting` first;
    /// a submit while one is in flight must not reach this point.
    pub fn begin_submit(&mut self) {
        debug_assert!(!self.is_submitting, "submission already in flight");
        self.is_submitting = true;
    }

    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }

    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }
}
