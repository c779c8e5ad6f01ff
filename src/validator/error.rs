use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidatorConfigError {
    #[error("You need to supply at least one attribute")]
    MissingAttributes,

    #[error("Attribute names must not be blank")]
    BlankAttribute,
}

impl From<ValidatorConfigError> for i64 {
    fn from(value: ValidatorConfigError) -> i64 {
        match value {
            ValidatorConfigError::MissingAttributes => -2,
            ValidatorConfigError::BlankAttribute => -3,
        }
    }
}
