use log::debug;
use yew::NodeRef;

use crate::forms::field::FieldDescriptor;
use crate::forms::sender::FormData;
use crate::forms::session::FormSession;
use crate::forms::validator;

/// One control of the form together with the elements tied to it.
#[derive(Clone, PartialEq)]
pub struct Field {
    pub descriptor: FieldDescriptor,
    pub label: String,
    pub value: String,
    /// Focus target for the rendered input.
    pub node: NodeRef,
    /// id of the element showing this field's error, for `aria-describedby`.
    pub error_id: String,
}

impl Field {
    pub fn new(form_id: &str, descriptor: FieldDescriptor, label: impl Into<String>) -> Self {
        let error_id = format!("{}-{}-error", form_id, descriptor.name);
        Self {
            descriptor,
            label: label.into(),
            value: String::new(),
            node: NodeRef::default(),
            error_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u32,
    pub kind: BannerKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

/// Everything the contact form view renders.
#[derive(Clone, PartialEq)]
pub struct FormModel {
    pub form_id: String,
    fields: Vec<Field>,
    session: FormSession,
    submit: SubmitControl,
    banners: Vec<Banner>,
    next_banner_id: u32,
    focus_request: Option<String>,
}

impl FormModel {
    pub fn new(form_id: impl Into<String>, submit_label: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            fields: Vec::new(),
            session: FormSession::new(),
            submit: SubmitControl { label: submit_label.into(), disabled: false },
            banners: Vec::new(),
            next_banner_id: 0,
            focus_request: None,
        }
    }

    /// Adds a field. Names are unique within a form; a duplicate replaces the
    /// earlier field in place.
    pub fn with_field(mut self, descriptor: FieldDescriptor, label: impl Into<String>) -> Self {
        let field = Field::new(&self.form_id, descriptor, label);
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.session.error(name)
    }

    /// Updates a value from an input event. A field that currently shows an
    /// error is re-checked so the error disappears once the input is fixed.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = self.fields.iter_mut().find(|f| f.name() == name) else {
            debug!("input for unknown field {}", name);
            return;
        };
        field.value = value.into();
        if self.session.has_error(name) {
            self.validate_field(name);
        }
    }

    /// Validates a single field and records the outcome in the session.
    /// Unknown names count as valid.
    pub fn validate_field(&mut self, name: &str) -> bool {
        let Some(field) = self.fields.iter().find(|f| f.name() == name) else {
            return true;
        };
        match validator::check(&field.descriptor, &field.value) {
            Ok(()) => {
                self.session.clear_error(name);
                true
            }
            Err(err) => {
                self.session.set_error(name, err.to_string());
                false
            }
        }
    }

    /// Validates every field, without stopping at the first failure. Returns
    /// the first field in declaration order that carries an error.
    pub fn validate_all(&mut self) -> Option<String> {
        let names: Vec<String> = self.fields.iter().map(|f| f.name().to_string()).collect();
        for name in &names {
            self.validate_field(name);
        }
        self.first_invalid()
    }

    pub fn first_invalid(&self) -> Option<String> {
        self.fields
            .iter()
            .find(|f| self.session.has_error(f.name()))
            .map(|f| f.name().to_string())
    }

    pub fn collect(&self) -> FormData {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.value.clone()))
            .collect()
    }

    /// Clears every value and every error.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.session.clear_errors();
    }

    pub fn set_submit_busy(&mut self, label: impl Into<String>) {
        self.submit = SubmitControl { label: label.into(), disabled: true };
    }

    pub fn restore_submit(&mut self, label: impl Into<String>) {
        self.submit = SubmitControl { label: label.into(), disabled: false };
    }

    pub fn request_focus(&mut self, name: &str) {
        self.focus_request = Some(name.to_string());
    }

    pub fn focus_request(&self) -> Option<&str> {
        self.focus_request.as_deref()
    }

    /// Hands the pending focus request to the view, once.
    pub fn take_focus_request(&mut self) -> Option<String> {
        self.focus_request.take()
    }

    pub fn push_banner(&mut self, kind: BannerKind, message: impl Into<String>) -> u32 {
        let id = self.next_banner_id;
        self.next_banner_id += 1;
        self.banners.push(Banner { id, kind, message: message.into() });
        id
    }

    pub fn remove_banner(&mut self, id: u32) {
        self.banners.retain(|b| b.id != id);
    }
}
