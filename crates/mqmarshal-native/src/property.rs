use crate::constants::MQ_MAX_PROPERTY_NAME_LENGTH;
use crate::error::MqError;
use crate::reason::{MQRC_PROPERTY_NAME_ERROR, MQRC_PROPERTY_NAME_LENGTH_ERR};

/// Per-property descriptor (`MQPD`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MqPropertyDescriptor {
    pub version: i32,
    pub copy_options: i32,
    pub options: i32,
    pub support: i32,
    pub context: i32,
}

impl MqPropertyDescriptor {
    /// Descriptor with every field at zero.
    pub const ZERO: Self = Self {
        version: 0,
        copy_options: 0,
        options: 0,
        support: 0,
        context: 0,
    };
}

/// A typed value held in the native property store.
#[derive(Debug, Clone, PartialEq)]
pub enum MqValue {
    Boolean(bool),
    Byte(i8),
    Bytes(Vec<u8>),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl MqValue {
    /// The `MQTYPE_*` name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            MqValue::Boolean(_) => "MQTYPE_BOOLEAN",
            MqValue::Byte(_) => "MQTYPE_INT8",
            MqValue::Bytes(_) => "MQTYPE_BYTE_STRING",
            MqValue::Short(_) => "MQTYPE_INT16",
            MqValue::Int(_) => "MQTYPE_INT32",
            MqValue::Long(_) => "MQTYPE_INT64",
            MqValue::Float(_) => "MQTYPE_FLOAT32",
            MqValue::Double(_) => "MQTYPE_FLOAT64",
            MqValue::String(_) => "MQTYPE_STRING",
        }
    }
}

/// A property value together with the descriptor it was stored with.
#[derive(Debug, Clone, PartialEq)]
pub struct MqProperty {
    pub value: MqValue,
    pub descriptor: MqPropertyDescriptor,
}

/// Returns true if `name` is selected by an inquiry `pattern`.
///
/// A trailing `%` matches any suffix, so `"%"` selects every property.
/// Any other pattern must match exactly.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.strip_suffix('%') {
        Some(prefix) => name.starts_with(prefix),
        None => name == pattern,
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), MqError> {
    if name.is_empty() || name.contains('%') {
        return Err(MqError::failed(MQRC_PROPERTY_NAME_ERROR));
    }
    if name.len() > MQ_MAX_PROPERTY_NAME_LENGTH {
        return Err(MqError::failed(MQRC_PROPERTY_NAME_LENGTH_ERR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        assert!(matches_pattern("p1", "%"));
        assert!(matches_pattern("usr.app.id", "%"));
    }

    #[test]
    fn trailing_wildcard_is_prefix_match() {
        assert!(matches_pattern("usr.app.id", "usr.%"));
        assert!(!matches_pattern("app.id", "usr.%"));
    }

    #[test]
    fn plain_pattern_is_exact() {
        assert!(matches_pattern("p1", "p1"));
        assert!(!matches_pattern("p10", "p1"));
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(validate_name("").unwrap_err().reason_code, MQRC_PROPERTY_NAME_ERROR);
        assert_eq!(validate_name("a%b").unwrap_err().reason_code, MQRC_PROPERTY_NAME_ERROR);

        let long = "x".repeat(MQ_MAX_PROPERTY_NAME_LENGTH + 1);
        assert_eq!(
            validate_name(&long).unwrap_err().reason_code,
            MQRC_PROPERTY_NAME_LENGTH_ERR
        );
        assert!(validate_name("ok").is_ok());
    }

    #[test]
    fn type_names() {
        assert_eq!(MqValue::Int(1).type_name(), "MQTYPE_INT32");
        assert_eq!(MqValue::Bytes(vec![]).type_name(), "MQTYPE_BYTE_STRING");
    }
}
