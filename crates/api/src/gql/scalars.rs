use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use thiserror::Error;
use uuid::Uuid;

const HYPHENATED_LEN: usize = 36;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidUuid {
    #[error("expected a hyphenated UUID string, got {0} characters")]
    Length(usize),
    #[error(transparent)]
    Malformed(#[from] uuid::Error),
}

/// `UUID` scalar. Accepts only the hyphenated 8-4-4-4-12 form and echoes
/// the input string back unchanged, case included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UuidScalar {
    raw: String,
    id: Uuid,
}

impl UuidScalar {
    pub fn parse_str(raw: &str) -> Result<Self, InvalidUuid> {
        if raw.len() != HYPHENATED_LEN {
            return Err(InvalidUuid::Length(raw.len()));
        }
        let id = Uuid::try_parse(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            id,
        })
    }

    pub fn uuid(&self) -> Uuid {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<Uuid> for UuidScalar {
    fn from(id: Uuid) -> Self {
        Self {
            raw: id.hyphenated().to_string(),
            id,
        }
    }
}

#[Scalar(name = "UUID")]
impl ScalarType for UuidScalar {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => UuidScalar::parse_str(s).map_err(InputValueError::custom),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(s) if UuidScalar::parse_str(s).is_ok())
    }

    fn to_value(&self) -> Value {
        Value::String(self.raw.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_serialize_returns_the_input() {
        for raw in [
            "0b7f8a3e-5c1d-4e2a-9f60-1a2b3c4d5e6f",
            "00000000-0000-0000-0000-000000000000",
            "0B7F8A3E-5C1D-4E2A-9F60-1A2B3C4D5E6F",
        ] {
            let parsed = <UuidScalar as ScalarType>::parse(Value::String(raw.to_string())).unwrap();
            assert_eq!(parsed.to_value(), Value::String(raw.to_string()));
        }
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for raw in [
            "",
            "not-a-uuid",
            "0b7f8a3e5c1d4e2a9f601a2b3c4d5e6f",
            "{0b7f8a3e-5c1d-4e2a-9f60-1a2b3c4d5e6f}",
            "0b7f8a3e-5c1d-4e2a-9f60-1a2b3c4d5e6g",
            "0b7f8a3e+5c1d+4e2a+9f60+1a2b3c4d5e6f",
        ] {
            let value = Value::String(raw.to_string());
            assert!(!<UuidScalar as ScalarType>::is_valid(&value), "{raw}");
            assert!(<UuidScalar as ScalarType>::parse(value).is_err(), "{raw}");
        }
    }

    #[test]
    fn non_string_values_are_rejected() {
        assert!(<UuidScalar as ScalarType>::parse(Value::Number(42.into())).is_err());
        assert!(!<UuidScalar as ScalarType>::is_valid(&Value::Null));
    }

    #[test]
    fn from_uuid_uses_lowercase_hyphenated_form() {
        let id = Uuid::new_v4();
        let scalar = UuidScalar::from(id);
        assert_eq!(scalar.uuid(), id);
        assert_eq!(scalar.as_str(), id.to_string());
    }

    #[test]
    fn length_error_reports_the_length() {
        assert_eq!(UuidScalar::parse_str("abc"), Err(InvalidUuid::Length(3)));
    }
}
