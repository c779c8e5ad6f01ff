use std::collections::BTreeMap;

use crate::record::{Errors, Record};
use crate::value::FieldValue;

/// A map-backed record, mostly useful for tests and benchmarks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleRecord {
    attributes: BTreeMap<String, FieldValue>,
    persisted: bool,
    errors: Errors,
}

impl SimpleRecord {
    /// A record that has not been saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new record from a JSON object of attributes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let attributes: BTreeMap<String, FieldValue> = serde_json::from_str(json)?;
        Ok(Self {
            attributes,
            ..Self::default()
        })
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.attributes.insert(name.to_owned(), value.into());
    }

    pub fn persisted(mut self) -> Self {
        self.persisted = true;
        self
    }
}

impl Record for SimpleRecord {
    fn read_attribute(&self, name: &str) -> FieldValue {
        self.attributes.get(name).cloned().unwrap_or_default()
    }

    fn is_new_record(&self) -> bool {
        !self.persisted
    }

    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }
}
