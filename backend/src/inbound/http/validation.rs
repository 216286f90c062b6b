//! Shared validation helpers for inbound HTTP adapters.

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    NotAnInteger,
    InvalidValue,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::NotAnInteger => "not_an_integer",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_field_error(field: FieldName, reason: impl std::fmt::Display) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} is invalid: {reason}")).with_details(json!({
        "field": field,
        "code": ValidationCode::InvalidValue.as_str(),
    }))
}

/// Integer that clients may send either as a JSON number or a numeric string.
///
/// Browser forms post `"3"` where API clients post `3`; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LenientInteger {
    /// A JSON number.
    Number(i64),
    /// A string holding a base-10 integer.
    Text(String),
}

impl LenientInteger {
    pub(crate) fn parse(&self, field: FieldName) -> Result<i64, Error> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text.trim().parse().map_err(|_| {
                let name = field.as_str();
                Error::invalid_request(format!("{name} must be an integer")).with_details(json!({
                    "field": name,
                    "value": text,
                    "code": ValidationCode::NotAnInteger.as_str(),
                }))
            }),
        }
    }
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}
