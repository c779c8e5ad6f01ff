use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::value::FieldValue;

/// Any object whose fields can be validated needs to implement `Record`.
/// This is the only thing the validators know about the host object model.
pub trait Record {
    /// The current value of an attribute. Unknown attributes read as `FieldValue::Nil`.
    fn read_attribute(&self, name: &str) -> FieldValue;

    /// True until the record has been persisted. Drives `on: create` / `on: update`.
    fn is_new_record(&self) -> bool;

    fn errors(&self) -> &Errors;

    fn errors_mut(&mut self) -> &mut Errors;
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The value is not a well-formed, checksum-valid document
    Invalid,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::Invalid => "is invalid",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub attribute: String,
    pub kind: ErrorKind,
}

impl FieldError {
    pub fn full_message(&self) -> String {
        format!("{} {}", self.attribute, self.kind.message())
    }
}

/// Errors collected against a record, in the order they were added.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Errors(Vec<FieldError>);

impl Errors {
    /// Registers the generic `invalid` error against `attribute`.
    pub fn add(&mut self, attribute: &str) {
        self.add_kind(attribute, ErrorKind::Invalid);
    }

    pub fn add_kind(&mut self, attribute: &str, kind: ErrorKind) {
        self.0.push(FieldError {
            attribute: attribute.to_owned(),
            kind,
        });
    }

    /// All errors registered against `attribute`.
    pub fn get(&self, attribute: &str) -> Vec<ErrorKind> {
        self.0
            .iter()
            .filter(|error| error.attribute == attribute)
            .map(|error| error.kind)
            .collect()
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.0.iter().any(|error| error.attribute == attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::full_message).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
