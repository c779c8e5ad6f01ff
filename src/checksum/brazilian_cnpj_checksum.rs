use crate::checksum::{check_digit, normalized_digits, weighted_sum, Validator};

pub struct BrazilianCnpjChecksum;

const BRAZILIAN_CNPJ_DIGIT_COUNT: usize = 14;
const BRAZILIAN_CNPJ_BASE_DIGIT_COUNT: usize = BRAZILIAN_CNPJ_DIGIT_COUNT - 2;
const BRAZILIAN_CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const BRAZILIAN_CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

impl Validator for BrazilianCnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid_match(&self, value: &str) -> bool {
        let digits = normalized_digits(value);
        if digits.len() != BRAZILIAN_CNPJ_DIGIT_COUNT {
            return false;
        }

        let v1 = check_digit(weighted_sum(
            &digits[..BRAZILIAN_CNPJ_BASE_DIGIT_COUNT],
            BRAZILIAN_CNPJ_FIRST_WEIGHTS,
        ));
        let v2 = check_digit(weighted_sum(
            &digits[..=BRAZILIAN_CNPJ_BASE_DIGIT_COUNT],
            BRAZILIAN_CNPJ_SECOND_WEIGHTS,
        ));

        // Compare the computed checksum with the provided one
        v1 == digits[BRAZILIAN_CNPJ_BASE_DIGIT_COUNT]
            && v2 == digits[BRAZILIAN_CNPJ_BASE_DIGIT_COUNT + 1]
    }
}
