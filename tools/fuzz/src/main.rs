use afl::fuzz;
use rand::{rngs::StdRng, Rng, SeedableRng};
use validates_cpf_cnpj::{
    is_valid_cnpj, is_valid_cpf, is_valid_cpf_or_cnpj, DocumentKind, EachValidator, Lifecycle,
    Record, SimpleRecord, ValidationMode, ValidationOptions, Validator, ValidatorConfig,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_mode(rng: &mut StdRng) -> ValidationMode {
    match rng.gen_range::<u8, _>(0..3) {
        0 => ValidationMode::Cpf,
        1 => ValidationMode::Cnpj,
        _ => ValidationMode::CpfOrCnpj,
    }
}

fn gen_options(rng: &mut StdRng) -> ValidationOptions {
    let mut options = ValidationOptions::new();
    if rng.gen_bool(0.3) {
        options = options.allow_nil();
    }
    if rng.gen_bool(0.3) {
        options = options.allow_blank();
    }
    if rng.gen_bool(0.2) {
        options = options.if_condition(rng.gen_bool(0.5));
    }
    if rng.gen_bool(0.2) {
        options = options.unless_condition(rng.gen_bool(0.5));
    }
    if rng.gen_bool(0.3) {
        options = options.on(if rng.gen_bool(0.5) {
            Lifecycle::Create
        } else {
            Lifecycle::Update
        });
    }
    options
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let mode = gen_mode(&mut rng);
    let options = gen_options(&mut rng);
    let persisted = rng.gen_bool(0.5);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Mode: {:?}", mode);
        println!("Options: {:?}", options);
        println!("Persisted: {:?}", persisted);
    }

    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    // A valid document has the right shape, and its digits alone are valid too
    let cpf = is_valid_cpf(input);
    if cpf {
        assert!(DocumentKind::Cpf.matches_shape(input));
        assert!(DocumentKind::Cpf.checksum().is_valid_match(input));
        assert!(is_valid_cpf(&digits));
    }
    let cnpj = is_valid_cnpj(input);
    if cnpj {
        assert!(DocumentKind::Cnpj.matches_shape(input));
        assert!(DocumentKind::Cnpj.checksum().is_valid_match(input));
        assert!(is_valid_cnpj(&digits));
    }
    assert!(!(cpf && cnpj));

    let either = is_valid_cpf_or_cnpj(input);
    if digits.len() <= 11 {
        assert_eq!(either, cpf);
    } else {
        assert_eq!(either, cnpj);
    }

    let validator = ValidatorConfig::new(mode)
        .attribute("document")
        .options(options.clone())
        .build()
        .unwrap();
    let mut record = SimpleRecord::new().with_attribute("document", input);
    if persisted {
        record = record.persisted();
    }
    let value = record.read_attribute("document");
    let checked = options.should_validate(&record, &value);

    validator.validate(&mut record);

    #[cfg(feature = "manual_test")]
    println!("Errors: {:?}", record.errors());

    let expected_error = checked && !mode.is_valid_match(input);
    assert_eq!(record.errors().len(), usize::from(expected_error));
}
