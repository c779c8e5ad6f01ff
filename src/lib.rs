// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod dispatch;
mod observability;
mod record;
mod shape;
mod stats;
mod validator;
mod value;

#[cfg(any(test, feature = "testing", feature = "bench"))]
mod simple_record;

// Checksum core, with no knowledge of any host object model
pub use checksum::{BrazilianCnpjChecksum, BrazilianCpfChecksum, Validator};
pub use dispatch::{is_valid_cnpj, is_valid_cpf, is_valid_cpf_or_cnpj, is_valid_document};
pub use shape::DocumentKind;

// Host integration
pub use config::{Condition, Lifecycle, RecordPredicate, ValidationMode, ValidationOptions};
pub use observability::labels::Labels;
pub use record::{ErrorKind, Errors, FieldError, Record};
pub use validator::{
    error::ValidatorConfigError, validates_cnpj, validates_cpf, validates_cpf_or_cnpj,
    DocumentValidator, EachValidator, ValidatorConfig, Validations,
};
pub use value::FieldValue;

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::simple_record::SimpleRecord;
