use crate::country::{validate_city_name, validate_country_name, MAX_NAME_LEN};
use crate::errors::ModelError;

#[test]
fn country_name_must_not_be_blank() {
    assert!(matches!(validate_country_name(""), Err(ModelError::Validation(_))));
    assert!(matches!(validate_country_name("   "), Err(ModelError::Validation(_))));
    assert!(validate_country_name("Japan").is_ok());
}

#[test]
fn names_are_bounded_by_column_width() {
    let long = "x".repeat(MAX_NAME_LEN + 1);
    assert!(validate_country_name(&long).is_err());
    assert!(validate_city_name(&long).is_err());
    assert!(validate_country_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
}

#[test]
fn empty_city_is_allowed() {
    assert!(validate_city_name("").is_ok());
}
