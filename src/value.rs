use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A field value as the host object model stores it. Documents are usually strings,
/// but numeric columns and missing values reach the validators too.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl FieldValue {
    pub fn is_nil(&self) -> bool {
        matches!(self, FieldValue::Nil)
    }

    /// Nil, `false`, and strings made only of whitespace are blank. Numbers never are.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Nil => true,
            FieldValue::Bool(value) => !value,
            FieldValue::Integer(_) | FieldValue::Float(_) => false,
            FieldValue::String(value) => value.chars().all(char::is_whitespace),
        }
    }

    /// The text the validators see. Nil renders as the empty string and integers lose
    /// any leading zeros, so `01234567890` stored as a number is no longer a CPF.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Nil => Cow::Borrowed(""),
            FieldValue::Bool(value) => Cow::Owned(value.to_string()),
            FieldValue::Integer(value) => Cow::Owned(value.to_string()),
            FieldValue::Float(value) => Cow::Owned(format!("{value:?}")),
            FieldValue::String(value) => Cow::Borrowed(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Nil, Into::into)
    }
}
