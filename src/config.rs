use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{Display, EnumIter, EnumString};

use crate::record::Record;
use crate::value::FieldValue;

/// Which document a validator accepts.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationMode {
    Cpf,
    Cnpj,
    /// CPF for values holding up to 11 digits, CNPJ above that
    CpfOrCnpj,
}

/// Restricts a validator to records that are being created or updated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Lifecycle {
    Create,
    Update,
}

pub type RecordPredicate = dyn Fn(&dyn Record) -> bool + Send + Sync;

/// An `if` / `unless` gate. Only literal values can come from serialized configs.
#[derive(Clone)]
pub enum Condition {
    Value(bool),
    Predicate(Arc<RecordPredicate>),
}

impl Condition {
    pub fn predicate(predicate: impl Fn(&dyn Record) -> bool + Send + Sync + 'static) -> Self {
        Condition::Predicate(Arc::new(predicate))
    }

    pub fn evaluate(&self, record: &dyn Record) -> bool {
        match self {
            Condition::Value(value) => *value,
            Condition::Predicate(predicate) => predicate(record),
        }
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Value(value)
    }
}

impl Debug for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Condition::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Condition::Value(a), Condition::Value(b)) => a == b,
            (Condition::Predicate(a), Condition::Predicate(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Condition::Value(value) => serializer.serialize_bool(*value),
            Condition::Predicate(_) => Err(serde::ser::Error::custom(
                "predicate conditions cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Condition::Value)
    }
}

/// Options deciding whether a validator runs at all for a given record and value.
/// They are evaluated before any document check.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidationOptions {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub allow_nil: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub allow_blank: bool,
    #[serde(rename = "if", default, skip_serializing_if = "Option::is_none")]
    pub if_condition: Option<Condition>,
    #[serde(rename = "unless", default, skip_serializing_if = "Option::is_none")]
    pub unless_condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<Lifecycle>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_nil(&self) -> Self {
        self.mutate_clone(|x| x.allow_nil = true)
    }

    pub fn allow_blank(&self) -> Self {
        self.mutate_clone(|x| x.allow_blank = true)
    }

    pub fn if_condition(&self, condition: impl Into<Condition>) -> Self {
        let condition = condition.into();
        self.mutate_clone(|x| x.if_condition = Some(condition))
    }

    pub fn unless_condition(&self, condition: impl Into<Condition>) -> Self {
        let condition = condition.into();
        self.mutate_clone(|x| x.unless_condition = Some(condition))
    }

    pub fn on(&self, lifecycle: Lifecycle) -> Self {
        self.mutate_clone(|x| x.on = Some(lifecycle))
    }

    /// False when any option says the check should be skipped for this record and value.
    pub fn should_validate(&self, record: &dyn Record, value: &FieldValue) -> bool {
        if (self.allow_nil && value.is_nil()) || (self.allow_blank && value.is_blank()) {
            return false;
        }

        let if_failed = self
            .if_condition
            .as_ref()
            .is_some_and(|condition| !condition.evaluate(record));
        let unless_passed = self
            .unless_condition
            .as_ref()
            .is_some_and(|condition| condition.evaluate(record));
        if if_failed || unless_passed {
            return false;
        }

        match self.on {
            Some(Lifecycle::Create) => record.is_new_record(),
            Some(Lifecycle::Update) => !record.is_new_record(),
            None => true,
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
