
use crate::config::{Condition, Lifecycle, ValidationMode, ValidationOptions};
use crate::record::{ErrorKind, Record};
use crate::simple_record::SimpleRecord;
use crate::validator::error::ValidatorConfigError;
use crate::validator::{
    validates_cnpj, validates_cpf, validates_cpf_or_cnpj, EachValidator, ValidatorConfig,
    Validations,
};
use crate::value::FieldValue;

const NO_ATTRIBUTES: &[&str] = &[];

#[test]
fn registration_requires_attributes() {
    assert_eq!(
        validates_cpf(NO_ATTRIBUTES, ValidationOptions::new()).err(),
        Some(ValidatorConfigError::MissingAttributes)
    );
    assert_eq!(
        validates_cnpj(NO_ATTRIBUTES, ValidationOptions::new()).err(),
        Some(ValidatorConfigError::MissingAttributes)
    );
    assert_eq!(
        validates_cpf_or_cnpj(NO_ATTRIBUTES, ValidationOptions::new()).err(),
        Some(ValidatorConfigError::MissingAttributes)
    );
    assert_eq!(
        ValidatorConfig::new(ValidationMode::Cpf).build().err(),
        Some(ValidatorConfigError::MissingAttributes)
    );
}

#[test]
fn registration_rejects_blank_attribute_names() {
    assert_eq!(
        validates_cpf(&["cpf", " "], ValidationOptions::new()).err(),
        Some(ValidatorConfigError::BlankAttribute)
    );
}

#[test]
fn invalid_cpf_adds_an_error() {
    let validator = validates_cpf(&["cpf"], ValidationOptions::new()).unwrap();

    let mut record = SimpleRecord::new().with_attribute("cpf", "111.444.777-36");
    validator.validate(&mut record);
    assert_eq!(record.errors().get("cpf"), vec![ErrorKind::Invalid]);

    let mut record = SimpleRecord::new().with_attribute("cpf", "111.444.777-35");
    validator.validate(&mut record);
    assert!(record.errors().is_empty());
}

#[test]
fn every_registered_attribute_is_checked() {
    let validator = validates_cnpj(&["cnpj", "parent_cnpj"], ValidationOptions::new()).unwrap();
    let mut record = SimpleRecord::new()
        .with_attribute("cnpj", "11.222.333/0001-81")
        .with_attribute("parent_cnpj", "11.222.333/0001-82");

    validator.validate(&mut record);

    assert!(!record.errors().contains("cnpj"));
    assert_eq!(record.errors().get("parent_cnpj"), vec![ErrorKind::Invalid]);
}

#[test]
fn nil_is_invalid_unless_allowed() {
    let strict = validates_cpf(&["cpf"], ValidationOptions::new()).unwrap();
    let mut record = SimpleRecord::new();
    strict.validate(&mut record);
    assert_eq!(record.errors().len(), 1);

    let lenient = validates_cpf(&["cpf"], ValidationOptions::new().allow_nil()).unwrap();
    let mut record = SimpleRecord::new();
    lenient.validate(&mut record);
    assert!(record.errors().is_empty());

    // allow_nil does not cover the empty string
    let mut record = SimpleRecord::new().with_attribute("cpf", "");
    lenient.validate(&mut record);
    assert_eq!(record.errors().len(), 1);
}

#[test]
fn blank_is_invalid_unless_allowed() {
    let lenient = validates_cnpj(&["cnpj"], ValidationOptions::new().allow_blank()).unwrap();
    for value in [FieldValue::Nil, FieldValue::from(""), FieldValue::from("  ")] {
        let mut record = SimpleRecord::new().with_attribute("cnpj", value);
        lenient.validate(&mut record);
        assert!(record.errors().is_empty());
    }

    let mut record = SimpleRecord::new().with_attribute("cnpj", "1");
    lenient.validate(&mut record);
    assert_eq!(record.errors().len(), 1);
}

#[test]
fn conditions_gate_the_check() {
    let skipped = validates_cpf(&["cpf"], ValidationOptions::new().if_condition(false)).unwrap();
    let mut record = SimpleRecord::new().with_attribute("cpf", "invalid");
    skipped.validate(&mut record);
    assert!(record.errors().is_empty());

    let skipped = validates_cpf(&["cpf"], ValidationOptions::new().unless_condition(true)).unwrap();
    skipped.validate(&mut record);
    assert!(record.errors().is_empty());

    let only_people = validates_cpf(
        &["document"],
        ValidationOptions::new().if_condition(Condition::predicate(|record| {
            record.read_attribute("kind") == FieldValue::from("person")
        })),
    )
    .unwrap();
    let mut company = SimpleRecord::new()
        .with_attribute("kind", "company")
        .with_attribute("document", "11.222.333/0001-81");
    only_people.validate(&mut company);
    assert!(company.errors().is_empty());

    let mut person = SimpleRecord::new()
        .with_attribute("kind", "person")
        .with_attribute("document", "11.222.333/0001-81");
    only_people.validate(&mut person);
    assert_eq!(person.errors().get("document"), vec![ErrorKind::Invalid]);
}

#[test]
fn lifecycle_scoping() {
    let on_create = validates_cpf(&["cpf"], ValidationOptions::new().on(Lifecycle::Create)).unwrap();
    let on_update = validates_cpf(&["cpf"], ValidationOptions::new().on(Lifecycle::Update)).unwrap();

    let mut new_record = SimpleRecord::new().with_attribute("cpf", "123");
    on_update.validate(&mut new_record);
    assert!(new_record.errors().is_empty());
    on_create.validate(&mut new_record);
    assert_eq!(new_record.errors().len(), 1);

    let mut persisted = SimpleRecord::new().with_attribute("cpf", "123").persisted();
    on_create.validate(&mut persisted);
    assert!(persisted.errors().is_empty());
    on_update.validate(&mut persisted);
    assert_eq!(persisted.errors().len(), 1);
}

#[test]
fn cpf_or_cnpj_accepts_both_documents() {
    let validator = validates_cpf_or_cnpj(&["document"], ValidationOptions::new()).unwrap();
    for document in ["111.444.777-35", "11144477735", "11.222.333/0001-81", "11222333000181"] {
        let mut record = SimpleRecord::new().with_attribute("document", document);
        validator.validate(&mut record);
        assert!(record.errors().is_empty(), "{document}");
    }
    for document in ["123", "111.444.777-36", "11.222.333/0001-82", "111444777350"] {
        let mut record = SimpleRecord::new().with_attribute("document", document);
        validator.validate(&mut record);
        assert_eq!(record.errors().len(), 1, "{document}");
    }
}

#[test]
fn numeric_values_are_validated_as_text() {
    let validator = validates_cpf(&["cpf"], ValidationOptions::new()).unwrap();

    let mut record = SimpleRecord::new().with_attribute("cpf", 11144477735i64);
    validator.validate(&mut record);
    assert!(record.errors().is_empty());

    // 01234567890 loses its leading zero once stored as a number
    let mut record = SimpleRecord::new().with_attribute("cpf", 1234567890i64);
    validator.validate(&mut record);
    assert_eq!(record.errors().len(), 1);
}

#[test]
fn validations_reset_errors_on_each_run() {
    let mut validations = Validations::new();
    validations
        .validates_cpf(&["cpf"], ValidationOptions::new())
        .unwrap()
        .validates_cnpj(&["cnpj"], ValidationOptions::new().allow_nil())
        .unwrap();
    assert_eq!(validations.len(), 2);

    let mut record = SimpleRecord::new()
        .with_attribute("cpf", "000.000.000-01")
        .with_attribute("cnpj", "11.222.333/0001-80");
    assert!(!validations.validate(&mut record));
    assert_eq!(
        record.errors().full_messages(),
        vec!["cpf is invalid", "cnpj is invalid"]
    );

    record.set_attribute("cpf", "111.444.777-35");
    record.set_attribute("cnpj", FieldValue::Nil);
    assert!(validations.validate(&mut record));
    assert!(record.errors().is_empty());
}

#[test]
fn validations_propagate_registration_errors() {
    let mut validations = Validations::new();
    assert_eq!(
        validations
            .validates_cpf_or_cnpj(NO_ATTRIBUTES, ValidationOptions::new())
            .err(),
        Some(ValidatorConfigError::MissingAttributes)
    );
    assert!(validations.is_empty());
}

#[test]
fn config_from_json() {
    let json_config = r#"{
        "mode": "cpf_or_cnpj",
        "attributes": ["document"],
        "options": {"allow_blank": true, "on": "create"}
    }"#;
    let config: ValidatorConfig = serde_json::from_str(json_config).unwrap();
    assert_eq!(
        config,
        ValidatorConfig::new(ValidationMode::CpfOrCnpj)
            .attribute("document")
            .options(ValidationOptions::new().allow_blank().on(Lifecycle::Create))
    );

    let validator = config.build().unwrap();
    assert_eq!(validator.mode(), ValidationMode::CpfOrCnpj);
    assert!(validator.options().allow_blank);
    assert_eq!(validator.attributes(), &["document".to_string()]);
}

#[test]
fn config_should_have_default() {
    let json_config = r#"{"mode": "cnpj", "attributes": null, "options": null}"#;
    let config: ValidatorConfig = serde_json::from_str(json_config).unwrap();
    assert_eq!(config, ValidatorConfig::new(ValidationMode::Cnpj));
    assert_eq!(config.build().err(), Some(ValidatorConfigError::MissingAttributes));

    assert!(serde_json::from_str::<ValidatorConfig>(r#"{"mode": "rg"}"#).is_err());
}
