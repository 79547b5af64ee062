//! Entry model and payload conversion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validate::ValidationError;

/// One contact record, identified by a synthetic id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Synthetic id assigned by the store, immutable thereafter
    pub id: u64,
    pub firstname: String,
    pub surname: String,
    pub number: String,
    /// `None` when the entry was created without an address; distinct
    /// from an empty string, and serialized as JSON null.
    pub address: Option<String>,
}

/// Validated payload for creating an entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub firstname: String,
    pub surname: String,
    pub number: String,
    pub address: Option<String>,
}

impl NewEntry {
    /// Builds a create payload from a validated JSON object.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            firstname: required_str(payload, "firstname")?,
            surname: required_str(payload, "surname")?,
            number: required_str(payload, "number")?,
            address: match payload.get("address") {
                Some(Value::String(s)) => Some(s.clone()),
                _ => None,
            },
        })
    }
}

/// Partial update over an entry's mutable fields.
///
/// The nested option on `address` separates three states: key absent
/// (leave alone), key null (clear), key string (replace).
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub number: Option<String>,
    pub address: Option<Option<String>>,
}

impl EntryPatch {
    /// Builds a partial update from a validated JSON object.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        Self {
            firstname: supplied_str(payload, "firstname"),
            surname: supplied_str(payload, "surname"),
            number: supplied_str(payload, "number"),
            address: match payload.get("address") {
                Some(Value::String(s)) => Some(Some(s.clone())),
                Some(Value::Null) => Some(None),
                _ => None,
            },
        }
    }

    /// Returns whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.surname.is_none()
            && self.number.is_none()
            && self.address.is_none()
    }

    /// Applies the supplied fields to a row, column by column.
    pub fn apply_to(&self, row: &mut Entry) {
        if let Some(firstname) = &self.firstname {
            row.firstname = firstname.clone();
        }
        if let Some(surname) = &self.surname {
            row.surname = surname.clone();
        }
        if let Some(number) = &self.number {
            row.number = number.clone();
        }
        if let Some(address) = &self.address {
            row.address = address.clone();
        }
    }
}

fn required_str(payload: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match payload.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::EmptyField(field.to_string())),
        None => Err(ValidationError::MissingField(field.to_string())),
    }
}

fn supplied_str(payload: &Map<String, Value>, field: &str) -> Option<String> {
    match payload.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}
