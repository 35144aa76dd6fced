use bytes::Bytes;

use crate::error::Result;
use crate::message::Mqmd;
use crate::property::{MqProperty, MqPropertyDescriptor, MqValue};

/// A native message object the codec can populate and read back.
///
/// Implemented by [`MqMessage`](crate::MqMessage) for the in-memory model.
/// A binding to the transport's client library implements the same
/// operations against its own message handle.
pub trait NativeMessage {
    /// Message descriptor header.
    fn header(&self) -> &Mqmd;

    /// Mutable message descriptor header.
    fn header_mut(&mut self) -> &mut Mqmd;

    /// Append payload bytes to the message buffer.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Number of payload bytes not yet read.
    fn data_length(&self) -> usize;

    /// Read exactly `len` payload bytes.
    fn read_fully(&mut self, len: usize) -> Result<Bytes>;

    /// Set a property, replacing any existing property with the same name.
    fn set_property(
        &mut self,
        name: &str,
        descriptor: &MqPropertyDescriptor,
        value: MqValue,
    ) -> Result<()>;

    /// Names of the properties selected by `pattern`, in insertion order.
    fn property_names(&self, pattern: &str) -> Result<Vec<String>>;

    /// Retrieve a property value together with its descriptor.
    fn get_property(&self, name: &str) -> Result<MqProperty>;
}
