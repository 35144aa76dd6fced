//! Generic message record exchanged with connectors.
//!
//! Records (de)serialize with camelCase field names so connectors can pass
//! them as JSON. Property values are tagged by kind:
//!
//! ```json
//! { "payload": [104, 105],
//!   "priority": 4,
//!   "properties": { "p1": { "value": { "kind": "int", "value": 42 } } } }
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;
use mqmarshal_native::MqPropertyDescriptor;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A message as seen by the connector.
///
/// Header fields are optional on the way in: `None` leaves the native
/// default untouched. Decoding always fills every header field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub payload: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_application_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_queue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_queue_manager_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_properties",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub properties: BTreeMap<String, Property>,
}

impl Message {
    /// Create a message carrying only a payload.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Add a property, replacing any property with the same name.
    pub fn with_property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }
}

/// A named message property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub value: PropertyValue,
    /// `None` encodes with the default descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<PropertyDescriptor>,
}

impl Property {
    pub fn new(value: impl Into<PropertyValue>) -> Self {
        Self {
            value: value.into(),
            descriptor: None,
        }
    }

    pub fn with_descriptor(mut self, descriptor: PropertyDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }
}

/// The closed set of property value kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Int(i64),
    Boolean(bool),
    Byte(u8),
    Bytes(Vec<u8>),
    Float(f32),
    Double(f64),
    String(String),
}

impl PropertyValue {
    /// Serialized `kind` tags, in dispatch order.
    pub const KINDS: [&'static str; 7] =
        ["int", "boolean", "byte", "bytes", "float", "double", "string"];

    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Int(_) => "int",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Byte(_) => "byte",
            PropertyValue::Bytes(_) => "bytes",
            PropertyValue::Float(_) => "float",
            PropertyValue::Double(_) => "double",
            PropertyValue::String(_) => "string",
        }
    }

    fn is_known_kind(kind: &str) -> bool {
        Self::KINDS.contains(&kind)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Boolean(v)
    }
}

impl From<u8> for PropertyValue {
    fn from(v: u8) -> Self {
        PropertyValue::Byte(v)
    }
}

impl From<Vec<u8>> for PropertyValue {
    fn from(v: Vec<u8>) -> Self {
        PropertyValue::Bytes(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Double(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

/// Descriptor attached to a property.
///
/// Fields missing from a serialized override default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub version: i32,
    pub copy_options: i32,
    pub options: i32,
    pub support: i32,
    pub context: i32,
}

impl From<PropertyDescriptor> for MqPropertyDescriptor {
    fn from(pd: PropertyDescriptor) -> Self {
        MqPropertyDescriptor {
            version: pd.version,
            copy_options: pd.copy_options,
            options: pd.options,
            support: pd.support,
            context: pd.context,
        }
    }
}

impl From<MqPropertyDescriptor> for PropertyDescriptor {
    fn from(pd: MqPropertyDescriptor) -> Self {
        PropertyDescriptor {
            version: pd.version,
            copy_options: pd.copy_options,
            options: pd.options,
            support: pd.support,
            context: pd.context,
        }
    }
}

#[derive(Deserialize)]
struct RawProperty {
    value: serde_json::Value,
    #[serde(default)]
    descriptor: Option<PropertyDescriptor>,
}

// Properties whose kind tag is not one of the supported kinds are dropped,
// not rejected. A supported kind with a malformed value is still an error.
fn deserialize_properties<'de, D>(deserializer: D) -> Result<BTreeMap<String, Property>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, RawProperty>::deserialize(deserializer)?;
    let mut properties = BTreeMap::new();
    for (name, raw) in raw {
        let kind = raw.value.get("kind").and_then(serde_json::Value::as_str);
        if !kind.is_some_and(PropertyValue::is_known_kind) {
            warn!(property = %name, ?kind, "dropping property with unsupported value kind");
            continue;
        }
        let value = PropertyValue::deserialize(raw.value)
            .map_err(<D::Error as serde::de::Error>::custom)?;
        properties.insert(
            name,
            Property {
                value,
                descriptor: raw.descriptor,
            },
        );
    }
    Ok(properties)
}
