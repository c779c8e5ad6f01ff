mod brazilian_cnpj_checksum;
mod brazilian_cpf_checksum;

pub use crate::checksum::brazilian_cnpj_checksum::BrazilianCnpjChecksum;
pub use crate::checksum::brazilian_cpf_checksum::BrazilianCpfChecksum;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, value: &str) -> bool;
}

/// Keeps the ASCII digits of `value`, in order, dropping every other character.
fn normalized_digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Sum of `digits[i] * weights[i]`. Extra weights are ignored.
#[inline]
fn weighted_sum(digits: &[u32], weights: impl IntoIterator<Item = u32>) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Mod-11 check digit shared by CPF and CNPJ: remainders 0 and 1 both map to 0.
#[inline]
fn check_digit(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
