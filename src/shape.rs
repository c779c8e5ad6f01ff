use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::checksum::{BrazilianCnpjChecksum, BrazilianCpfChecksum, Validator};

lazy_static! {
    // `\d` is Unicode-aware in `regex`, only ASCII digits are accepted here.
    static ref CPF_SHAPE: Regex =
        Regex::new(r"\A(?:[0-9]{11}|[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2})\z").unwrap();
    static ref CNPJ_SHAPE: Regex =
        Regex::new(r"\A(?:[0-9]{14}|[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2})\z").unwrap();
}

/// The two Brazilian taxpayer documents.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, `DDD.DDD.DDD-DD`
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, `DD.DDD.DDD/DDDD-DD`
    Cnpj,
}

impl DocumentKind {
    /// Number of digits of the document, check digits included.
    pub fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Picks the document a digit count belongs to. Anything up to 11 digits is
    /// treated as a CPF, so short garbage still goes through the stricter CPF path.
    pub fn for_digit_count(count: usize) -> Self {
        if count <= DocumentKind::Cpf.digit_count() {
            DocumentKind::Cpf
        } else {
            DocumentKind::Cnpj
        }
    }

    /// Full-string match against the plain-digit or punctuated form of the document.
    pub fn matches_shape(&self, value: &str) -> bool {
        match self {
            DocumentKind::Cpf => CPF_SHAPE.is_match(value),
            DocumentKind::Cnpj => CNPJ_SHAPE.is_match(value),
        }
    }

    pub fn checksum(&self) -> &'static dyn Validator {
        match self {
            DocumentKind::Cpf => &BrazilianCpfChecksum,
            DocumentKind::Cnpj => &BrazilianCnpjChecksum,
        }
    }
}
