use std::io::ErrorKind;

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::constants::{
    DEFAULT_MAX_MSG_LENGTH, MQAT_NO_CONTEXT, MQCI_NONE, MQEI_UNLIMITED, MQFMT_NONE, MQMI_NONE,
    MQMT_DATAGRAM, MQPER_PERSISTENCE_AS_Q_DEF, MQPRI_PRIORITY_AS_Q_DEF, MQ_Q_NAME_LENGTH,
};
use crate::error::{MqError, NativeError, Result};
use crate::property::{matches_pattern, validate_name, MqProperty, MqPropertyDescriptor, MqValue};
use crate::reason::MQRC_PROPERTY_NOT_AVAILABLE;
use crate::traits::NativeMessage;

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Message descriptor (`MQMD`) fields carried by every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mqmd {
    pub format: String,
    pub message_id: Vec<u8>,
    pub correlation_id: Vec<u8>,
    pub expiry: i32,
    pub priority: i32,
    pub persistence: i32,
    pub message_type: i32,
    pub put_application_type: i32,
    /// Blank padded to 48 characters until assigned.
    pub reply_to_queue_name: String,
    /// Blank padded to 48 characters until assigned.
    pub reply_to_queue_manager_name: String,
}

impl Default for Mqmd {
    fn default() -> Self {
        Self {
            format: MQFMT_NONE.to_string(),
            message_id: MQMI_NONE.to_vec(),
            correlation_id: MQCI_NONE.to_vec(),
            expiry: MQEI_UNLIMITED,
            priority: MQPRI_PRIORITY_AS_Q_DEF,
            persistence: MQPER_PERSISTENCE_AS_Q_DEF,
            message_type: MQMT_DATAGRAM,
            put_application_type: MQAT_NO_CONTEXT,
            reply_to_queue_name: " ".repeat(MQ_Q_NAME_LENGTH),
            reply_to_queue_manager_name: " ".repeat(MQ_Q_NAME_LENGTH),
        }
    }
}

/// In-memory native message: header, payload buffer and property store.
///
/// Writes append to the buffer; reads consume from the front, so
/// [`data_length`](NativeMessage::data_length) is always the unread remainder.
#[derive(Debug, Clone)]
pub struct MqMessage {
    pub header: Mqmd,
    data: BytesMut,
    max_message_length: usize,
    properties: Vec<(String, MqProperty)>,
}

impl MqMessage {
    /// Create an empty message with default header fields.
    pub fn new() -> Self {
        Self::with_max_message_length(DEFAULT_MAX_MSG_LENGTH)
    }

    /// Create an empty message whose buffer rejects writes past `max` bytes.
    pub fn with_max_message_length(max: usize) -> Self {
        Self {
            header: Mqmd::default(),
            data: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY.min(max)),
            max_message_length: max,
            properties: Vec::new(),
        }
    }

    /// Unread payload bytes, without consuming them.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of properties currently set.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    fn find(&self, name: &str) -> Option<&MqProperty> {
        self.properties
            .iter()
            .find(|(stored, _)| stored == name)
            .map(|(_, property)| property)
    }
}

impl Default for MqMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeMessage for MqMessage {
    fn header(&self) -> &Mqmd {
        &self.header
    }

    fn header_mut(&mut self) -> &mut Mqmd {
        &mut self.header
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        let total = self.data.len() + data.len();
        if total > self.max_message_length {
            return Err(NativeError::Io(std::io::Error::new(
                ErrorKind::WriteZero,
                format!(
                    "message buffer full ({total} bytes, max {})",
                    self.max_message_length
                ),
            )));
        }
        self.data.extend_from_slice(data);
        Ok(())
    }

    fn data_length(&self) -> usize {
        self.data.len()
    }

    fn read_fully(&mut self, len: usize) -> Result<Bytes> {
        if len > self.data.len() {
            return Err(NativeError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("requested {len} bytes, {} available", self.data.len()),
            )));
        }
        Ok(self.data.split_to(len).freeze())
    }

    fn set_property(
        &mut self,
        name: &str,
        descriptor: &MqPropertyDescriptor,
        value: MqValue,
    ) -> Result<()> {
        validate_name(name)?;
        trace!(property = name, kind = value.type_name(), "set property");
        let property = MqProperty {
            value,
            descriptor: *descriptor,
        };
        match self.properties.iter_mut().find(|(stored, _)| stored == name) {
            Some((_, existing)) => *existing = property,
            None => self.properties.push((name.to_string(), property)),
        }
        Ok(())
    }

    fn property_names(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(self
            .properties
            .iter()
            .filter(|(name, _)| matches_pattern(name, pattern))
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn get_property(&self, name: &str) -> Result<MqProperty> {
        self.find(name)
            .cloned()
            .ok_or_else(|| MqError::failed(MQRC_PROPERTY_NOT_AVAILABLE).into())
    }
}
