use crate::checksum::Validator;
use crate::config::ValidationMode;
use crate::shape::DocumentKind;

/// A CPF is valid when it is written as `DDDDDDDDDDD` or `DDD.DDD.DDD-DD` and both
/// check digits match.
pub fn is_valid_cpf(value: &str) -> bool {
    is_valid_document(DocumentKind::Cpf, value)
}

/// A CNPJ is valid when it is written as `DDDDDDDDDDDDDD` or `DD.DDD.DDD/DDDD-DD` and
/// both check digits match.
pub fn is_valid_cnpj(value: &str) -> bool {
    is_valid_document(DocumentKind::Cnpj, value)
}

/// Validates as a CPF when the value holds at most 11 digits, as a CNPJ otherwise.
/// The digit count is taken before any shape check.
pub fn is_valid_cpf_or_cnpj(value: &str) -> bool {
    let digit_count = value.chars().filter(char::is_ascii_digit).count();
    is_valid_document(DocumentKind::for_digit_count(digit_count), value)
}

pub fn is_valid_document(kind: DocumentKind, value: &str) -> bool {
    // The checksum is never computed for a value with the wrong shape
    kind.matches_shape(value) && kind.checksum().is_valid_match(value)
}

impl Validator for DocumentKind {
    fn is_valid_match(&self, value: &str) -> bool {
        is_valid_document(*self, value)
    }
}

impl Validator for ValidationMode {
    fn is_valid_match(&self, value: &str) -> bool {
        match self {
            ValidationMode::Cpf => is_valid_cpf(value),
            ValidationMode::Cnpj => is_valid_cnpj(value),
            ValidationMode::CpfOrCnpj => is_valid_cpf_or_cnpj(value),
        }
    }
}
