//! Field-presence, whitelist, and per-field format validation.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

/// Fields that must be present when creating an entry.
pub const CREATE_REQUIRED: &[&str] = &["firstname", "surname", "number"];

/// Every field an entry payload may carry.
pub const ENTRY_FIELDS: &[&str] = &["firstname", "surname", "number", "address"];

// A phone number must contain a run of 6 to 15 characters drawn from
// digits, space, hyphen, and `#`. Substring search: the value does not
// have to match in full, only contain a qualifying run.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9 #\-]{6,15}").expect("phone number pattern is valid"));

/// Payload validation errors.
///
/// Display strings double as the plain-text HTTP error bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent from the payload
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    /// A supplied field is outside the allowed set
    #[error("Unrecognized field '{0}'")]
    UnrecognizedField(String),

    /// The number field fails the phone format rule
    #[error("Field 'number' is not a valid phone number")]
    InvalidNumber,

    /// A name field is empty or not a string
    #[error("Field '{0}' must be a non-empty string")]
    EmptyField(String),

    /// A field that may be empty is not a string at all
    #[error("Field '{0}' must be a string")]
    NotAString(String),

    /// An update payload with zero fields
    #[error("No fields supplied")]
    NoFields,
}

/// Validates a request payload against required and allowed field sets.
///
/// Checks run in a fixed order and the first failure wins: presence of
/// all required fields, then the whitelist over supplied keys, then the
/// per-field format rules. No side effects.
pub fn validate(
    payload: &Map<String, Value>,
    required: &[&str],
    allowed: &[&str],
) -> Result<(), ValidationError> {
    for field in required {
        if !payload.contains_key(*field) {
            return Err(ValidationError::MissingField((*field).to_string()));
        }
    }

    for key in payload.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(ValidationError::UnrecognizedField(key.clone()));
        }
    }

    for (key, value) in payload {
        check_field(key, value)?;
    }

    Ok(())
}

/// Applies the format rule for a single supplied field.
fn check_field(field: &str, value: &Value) -> Result<(), ValidationError> {
    match field {
        "number" => match value.as_str() {
            Some(s) if NUMBER_PATTERN.is_match(s) => Ok(()),
            _ => Err(ValidationError::InvalidNumber),
        },
        "firstname" | "surname" => match value.as_str() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(ValidationError::EmptyField(field.to_string())),
        },
        // Empty string and null are both acceptable addresses.
        "address" => match value {
            Value::String(_) | Value::Null => Ok(()),
            _ => Err(ValidationError::NotAString(field.to_string())),
        },
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn valid_create() -> Map<String, Value> {
        payload(json!({
            "firstname": "Mickey",
            "surname": "Mouse",
            "number": "01234567789",
        }))
    }

    #[test]
    fn accepts_valid_create_payload() {
        assert_eq!(validate(&valid_create(), CREATE_REQUIRED, ENTRY_FIELDS), Ok(()));
    }

    #[test]
    fn missing_required_field_reported_first() {
        let mut p = valid_create();
        p.remove("surname");
        // An unrecognized key is also present, but the presence check runs first.
        p.insert("foo".to_string(), json!("bar"));
        assert_eq!(
            validate(&p, CREATE_REQUIRED, ENTRY_FIELDS),
            Err(ValidationError::MissingField("surname".to_string()))
        );
    }

    #[test]
    fn unrecognized_field_rejected() {
        let mut p = valid_create();
        p.insert("foo".to_string(), json!("bar"));
        assert_eq!(
            validate(&p, CREATE_REQUIRED, ENTRY_FIELDS),
            Err(ValidationError::UnrecognizedField("foo".to_string()))
        );
    }

    #[test]
    fn whitelist_checked_before_format() {
        let mut p = valid_create();
        p.insert("number".to_string(), json!("NaN"));
        p.insert("zzz".to_string(), json!(1));
        assert_eq!(
            validate(&p, CREATE_REQUIRED, ENTRY_FIELDS),
            Err(ValidationError::UnrecognizedField("zzz".to_string()))
        );
    }

    #[test]
    fn number_rule_is_a_substring_search() {
        let mut p = valid_create();
        p.insert("number".to_string(), json!("abc0123456xyz"));
        assert_eq!(validate(&p, CREATE_REQUIRED, ENTRY_FIELDS), Ok(()));
    }

    #[test]
    fn number_rule_rejects_short_and_non_numeric_values() {
        for bad in ["NaN", "12345", "", "abc-def"] {
            let mut p = valid_create();
            p.insert("number".to_string(), json!(bad));
            assert_eq!(
                validate(&p, CREATE_REQUIRED, ENTRY_FIELDS),
                Err(ValidationError::InvalidNumber),
                "number {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn number_rule_rejects_non_string_values() {
        let mut p = valid_create();
        p.insert("number".to_string(), json!(1234567));
        assert_eq!(
            validate(&p, CREATE_REQUIRED, ENTRY_FIELDS),
            Err(ValidationError::InvalidNumber)
        );
    }

    #[test]
    fn number_accepts_hyphens_spaces_and_hash() {
        let mut p = valid_create();
        p.insert("number".to_string(), json!("012-345 67#89"));
        assert_eq!(validate(&p, CREATE_REQUIRED, ENTRY_FIELDS), Ok(()));
    }

    #[test]
    fn empty_name_fields_rejected() {
        for field in ["firstname", "surname"] {
            let mut p = valid_create();
            p.insert(field.to_string(), json!(""));
            assert_eq!(
                validate(&p, CREATE_REQUIRED, ENTRY_FIELDS),
                Err(ValidationError::EmptyField(field.to_string()))
            );
        }
    }

    #[test]
    fn empty_address_is_valid() {
        let mut p = valid_create();
        p.insert("address".to_string(), json!(""));
        assert_eq!(validate(&p, CREATE_REQUIRED, ENTRY_FIELDS), Ok(()));
    }

    #[test]
    fn null_address_is_valid_but_object_is_not() {
        let mut p = valid_create();
        p.insert("address".to_string(), json!(null));
        assert_eq!(validate(&p, CREATE_REQUIRED, ENTRY_FIELDS), Ok(()));

        p.insert("address".to_string(), json!({ "street": "x" }));
        assert_eq!(
            validate(&p, CREATE_REQUIRED, ENTRY_FIELDS),
            Err(ValidationError::NotAString("address".to_string()))
        );
    }

    #[test]
    fn update_payload_with_empty_required_set() {
        // PUT semantics: nothing is required, but supplied fields still
        // have to pass their format rules.
        let p = payload(json!({ "number": "" }));
        assert_eq!(
            validate(&p, &[], ENTRY_FIELDS),
            Err(ValidationError::InvalidNumber)
        );

        let p = payload(json!({ "address": "" }));
        assert_eq!(validate(&p, &[], ENTRY_FIELDS), Ok(()));
    }
}
