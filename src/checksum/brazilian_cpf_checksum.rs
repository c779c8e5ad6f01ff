use crate::checksum::{check_digit, normalized_digits, weighted_sum, Validator};

pub struct BrazilianCpfChecksum;

const BRAZILIAN_CPF_DIGIT_COUNT: usize = 11;
const BRAZILIAN_CPF_BASE_DIGIT_COUNT: usize = BRAZILIAN_CPF_DIGIT_COUNT - 2;

impl Validator for BrazilianCpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn is_valid_match(&self, value: &str) -> bool {
        let digits = normalized_digits(value);
        if digits.len() != BRAZILIAN_CPF_DIGIT_COUNT {
            return false;
        }

        // v1 weighs the 9 base digits from 10 down to 2, v2 weighs the base digits
        // followed by v1 from 11 down to 2
        let v1 = check_digit(weighted_sum(
            &digits[..BRAZILIAN_CPF_BASE_DIGIT_COUNT],
            (2..=10).rev(),
        ));
        if v1 != digits[BRAZILIAN_CPF_BASE_DIGIT_COUNT] {
            return false;
        }
        let v2 = check_digit(weighted_sum(
            &digits[..=BRAZILIAN_CPF_BASE_DIGIT_COUNT],
            (2..=11).rev(),
        ));

        v2 == digits[BRAZILIAN_CPF_BASE_DIGIT_COUNT + 1]
    }
}
