use mqmarshal_native::{MqPropertyDescriptor, MqValue, NativeMessage};
use tracing::trace;

use crate::error::{read_error, translate, ErrorKind, Result};
use crate::model::{Property, PropertyValue};

/// Descriptor used for properties that do not carry their own.
pub const DEFAULT_DESCRIPTOR: MqPropertyDescriptor = MqPropertyDescriptor::ZERO;

/// Set `property` on the native message under `name`.
///
/// Integers are narrowed to the native 32-bit int property.
pub fn encode_property<M>(native: &mut M, name: &str, property: &Property) -> Result<()>
where
    M: NativeMessage + ?Sized,
{
    let descriptor = property
        .descriptor
        .map(MqPropertyDescriptor::from)
        .unwrap_or(DEFAULT_DESCRIPTOR);
    let value = match &property.value {
        PropertyValue::Int(v) => MqValue::Int(*v as i32),
        PropertyValue::Boolean(v) => MqValue::Boolean(*v),
        PropertyValue::Byte(v) => MqValue::Byte(*v as i8),
        PropertyValue::Bytes(v) => MqValue::Bytes(v.clone()),
        PropertyValue::Float(v) => MqValue::Float(*v),
        PropertyValue::Double(v) => MqValue::Double(*v),
        PropertyValue::String(v) => MqValue::String(v.clone()),
    };
    trace!(property = name, kind = value.type_name(), "encoding property");

    native
        .set_property(name, &descriptor, value)
        .map_err(|err| {
            translate(
                ErrorKind::Transport,
                format!("failed to set message property {name}: {err}"),
                err,
            )
        })
}

/// Read the property `name` and its descriptor back from the native message.
///
/// Native integers of any width widen to [`PropertyValue::Int`]. The returned
/// descriptor is always populated.
pub fn decode_property<M>(native: &M, name: &str) -> Result<Property>
where
    M: NativeMessage + ?Sized,
{
    let stored = native.get_property(name).map_err(read_error)?;
    let value = match stored.value {
        MqValue::Short(v) => PropertyValue::Int(v.into()),
        MqValue::Int(v) => PropertyValue::Int(v.into()),
        MqValue::Long(v) => PropertyValue::Int(v),
        MqValue::Boolean(v) => PropertyValue::Boolean(v),
        MqValue::Byte(v) => PropertyValue::Byte(v as u8),
        MqValue::Bytes(v) => PropertyValue::Bytes(v),
        MqValue::Float(v) => PropertyValue::Float(v),
        MqValue::Double(v) => PropertyValue::Double(v),
        MqValue::String(v) => PropertyValue::String(v),
    };
    Ok(Property {
        value,
        descriptor: Some(stored.descriptor.into()),
    })
}
