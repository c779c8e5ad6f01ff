pub mod error;
mod metrics;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use self::error::ValidatorConfigError;
use self::metrics::Metrics;
use crate::checksum::Validator;
use crate::config::{ValidationMode, ValidationOptions};
use crate::observability::labels::{Labels, NO_LABEL};
use crate::record::Record;
use crate::stats::GLOBAL_STATS;
use crate::value::FieldValue;

/// A validator that checks attributes of a record one at a time and reports failures
/// through the record's error collection.
pub trait EachValidator: Send + Sync {
    /// The attributes this validator is registered for.
    fn attributes(&self) -> &[String];

    fn validate_each(&self, record: &mut dyn Record, attribute: &str, value: &FieldValue);

    fn validate(&self, record: &mut dyn Record) {
        for attribute in self.attributes() {
            let value = record.read_attribute(attribute);
            self.validate_each(record, attribute, &value);
        }
    }
}

/// Serializable description of a document validator.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidatorConfig {
    pub mode: ValidationMode,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub options: ValidationOptions,
    #[serde(skip)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            attributes: vec![],
            options: ValidationOptions::default(),
            labels: NO_LABEL,
        }
    }

    pub fn attribute(&self, attribute: &str) -> Self {
        self.mutate_clone(|x| x.attributes.push(attribute.to_owned()))
    }

    pub fn attributes<S: AsRef<str>>(&self, attributes: &[S]) -> Self {
        self.mutate_clone(|x| {
            x.attributes
                .extend(attributes.iter().map(|attribute| attribute.as_ref().to_owned()))
        })
    }

    pub fn options(&self, options: ValidationOptions) -> Self {
        self.mutate_clone(|x| x.options = options)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    /// Fails when no attribute was given. This is a usage error of the registration,
    /// unrelated to the values that will later be validated.
    pub fn build(&self) -> Result<DocumentValidator, ValidatorConfigError> {
        if let Err(err) = self.check_attributes() {
            GLOBAL_STATS.registration_errors.increment(1);
            return Err(err);
        }
        GLOBAL_STATS.validator_creations.increment(1);

        Ok(DocumentValidator {
            attributes: self.attributes.clone(),
            mode: self.mode,
            options: self.options.clone(),
            metrics: Metrics::new(self.mode, &self.labels),
        })
    }

    fn check_attributes(&self) -> Result<(), ValidatorConfigError> {
        if self.attributes.is_empty() {
            return Err(ValidatorConfigError::MissingAttributes);
        }
        if self
            .attributes
            .iter()
            .any(|attribute| attribute.trim().is_empty())
        {
            return Err(ValidatorConfigError::BlankAttribute);
        }
        Ok(())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// Adds the generic `invalid` error to every attribute whose value is not a valid
/// document for its mode.
pub struct DocumentValidator {
    attributes: Vec<String>,
    mode: ValidationMode,
    options: ValidationOptions,
    metrics: Metrics,
}

impl DocumentValidator {
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }
}

impl EachValidator for DocumentValidator {
    fn attributes(&self) -> &[String] {
        &self.attributes
    }

    fn validate_each(&self, record: &mut dyn Record, attribute: &str, value: &FieldValue) {
        if !self.options.should_validate(&*record, value) {
            self.metrics.skipped.increment(1);
            return;
        }

        self.metrics.checked.increment(1);
        if !self.mode.is_valid_match(&value.to_text()) {
            self.metrics.rejected.increment(1);
            record.errors_mut().add(attribute);
        }
    }
}

pub fn validates_cpf<S: AsRef<str>>(
    attributes: &[S],
    options: ValidationOptions,
) -> Result<DocumentValidator, ValidatorConfigError> {
    validates(ValidationMode::Cpf, attributes, options)
}

pub fn validates_cnpj<S: AsRef<str>>(
    attributes: &[S],
    options: ValidationOptions,
) -> Result<DocumentValidator, ValidatorConfigError> {
    validates(ValidationMode::Cnpj, attributes, options)
}

pub fn validates_cpf_or_cnpj<S: AsRef<str>>(
    attributes: &[S],
    options: ValidationOptions,
) -> Result<DocumentValidator, ValidatorConfigError> {
    validates(ValidationMode::CpfOrCnpj, attributes, options)
}

fn validates<S: AsRef<str>>(
    mode: ValidationMode,
    attributes: &[S],
    options: ValidationOptions,
) -> Result<DocumentValidator, ValidatorConfigError> {
    ValidatorConfig::new(mode)
        .attributes(attributes)
        .options(options)
        .build()
}

/// The validators registered for a kind of record, run in registration order.
#[derive(Default)]
pub struct Validations {
    validators: Vec<Box<dyn EachValidator>>,
}

impl Validations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, validator: impl EachValidator + 'static) -> &mut Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn validates_cpf<S: AsRef<str>>(
        &mut self,
        attributes: &[S],
        options: ValidationOptions,
    ) -> Result<&mut Self, ValidatorConfigError> {
        Ok(self.add(validates_cpf(attributes, options)?))
    }

    pub fn validates_cnpj<S: AsRef<str>>(
        &mut self,
        attributes: &[S],
        options: ValidationOptions,
    ) -> Result<&mut Self, ValidatorConfigError> {
        Ok(self.add(validates_cnpj(attributes, options)?))
    }

    pub fn validates_cpf_or_cnpj<S: AsRef<str>>(
        &mut self,
        attributes: &[S],
        options: ValidationOptions,
    ) -> Result<&mut Self, ValidatorConfigError> {
        Ok(self.add(validates_cpf_or_cnpj(attributes, options)?))
    }

    /// Clears the record's errors, runs every validator and returns whether the record
    /// ended up without errors.
    pub fn validate(&self, record: &mut dyn Record) -> bool {
        record.errors_mut().clear();
        for validator in &self.validators {
            validator.validate(record);
        }
        record.errors().is_empty()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

#[cfg(test)]
mod test;
