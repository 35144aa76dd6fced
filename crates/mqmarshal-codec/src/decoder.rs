use std::collections::BTreeMap;

use bytes::Bytes;
use mqmarshal_native::NativeMessage;
use tracing::debug;

use crate::config::{CodecConfig, PayloadMode};
use crate::error::{read_error, Result};
use crate::model::{Message, Property};
use crate::property::decode_property;

/// Decode a received native message with the default configuration.
pub fn decode_message<M>(native: &mut M) -> Result<Message>
where
    M: NativeMessage + ?Sized,
{
    decode_message_with_config(native, &CodecConfig::default())
}

/// Decode a received native message.
///
/// Every header field is populated in the result; string fields are trimmed.
/// The payload is read as exactly the remaining data length.
pub fn decode_message_with_config<M>(native: &mut M, config: &CodecConfig) -> Result<Message>
where
    M: NativeMessage + ?Sized,
{
    let properties = decode_properties(native, &config.property_pattern)?;

    let header = native.header();
    let mut message = Message {
        payload: Bytes::new(),
        format: Some(header.format.trim().to_string()),
        message_id: Some(header.message_id.clone()),
        correlation_id: Some(header.correlation_id.clone()),
        expiry: Some(header.expiry),
        priority: Some(header.priority),
        persistence: Some(header.persistence),
        message_type: Some(header.message_type),
        put_application_type: Some(header.put_application_type),
        reply_to_queue_name: Some(header.reply_to_queue_name.trim().to_string()),
        reply_to_queue_manager_name: Some(header.reply_to_queue_manager_name.trim().to_string()),
        properties,
    };

    let len = native.data_length();
    let data = native.read_fully(len).map_err(read_error)?;
    message.payload = match config.payload_mode {
        PayloadMode::Raw => data,
        PayloadMode::Utf8Text => Bytes::from(String::from_utf8_lossy(&data).into_owned()),
    };

    debug!(
        properties = message.properties.len(),
        payload_len = message.payload.len(),
        "decoded message"
    );
    Ok(message)
}

fn decode_properties<M>(native: &M, pattern: &str) -> Result<BTreeMap<String, Property>>
where
    M: NativeMessage + ?Sized,
{
    let names = native.property_names(pattern).map_err(read_error)?;
    let mut properties = BTreeMap::new();
    for name in names {
        let property = decode_property(native, &name)?;
        properties.insert(name, property);
    }
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use mqmarshal_native::constants::{MQCC_FAILED, MQFMT_STRING};
    use mqmarshal_native::reason::MQRC_PROPERTY_NOT_AVAILABLE;
    use mqmarshal_native::{
        MqError, MqMessage, MqProperty, MqPropertyDescriptor, MqValue, Mqmd, NativeError,
    };

    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{PropertyDescriptor, PropertyValue};

    #[test]
    fn header_strings_are_trimmed() {
        let mut native = MqMessage::new();
        native.header.format = MQFMT_STRING.to_string();
        native.header.reply_to_queue_name = "  DEV.REPLY   ".to_string();
        native.header.reply_to_queue_manager_name = format!("{:<48}", "QM1");

        let message = decode_message(&mut native).unwrap();

        assert_eq!(message.format.as_deref(), Some("MQSTR"));
        assert_eq!(message.reply_to_queue_name.as_deref(), Some("DEV.REPLY"));
        assert_eq!(message.reply_to_queue_manager_name.as_deref(), Some("QM1"));
    }

    #[test]
    fn defaults_are_always_populated() {
        let mut native = MqMessage::new();
        let message = decode_message(&mut native).unwrap();
        let defaults = Mqmd::default();

        assert_eq!(message.format.as_deref(), Some(""));
        assert_eq!(message.message_id, Some(defaults.message_id));
        assert_eq!(message.correlation_id, Some(defaults.correlation_id));
        assert_eq!(message.expiry, Some(defaults.expiry));
        assert_eq!(message.priority, Some(defaults.priority));
        assert_eq!(message.persistence, Some(defaults.persistence));
        assert_eq!(message.message_type, Some(defaults.message_type));
        assert_eq!(message.put_application_type, Some(defaults.put_application_type));
        assert_eq!(message.reply_to_queue_name.as_deref(), Some(""));
        assert!(message.payload.is_empty());
        assert!(message.properties.is_empty());
    }

    #[test]
    fn payload_read_as_remaining_length() {
        let mut native = MqMessage::new();
        native.write(&[0x00, 0xFF, 0x68]).unwrap();

        let message = decode_message(&mut native).unwrap();

        assert_eq!(message.payload.as_ref(), &[0x00, 0xFF, 0x68]);
        assert_eq!(native.data_length(), 0);
    }

    #[test]
    fn utf8_text_mode_replaces_invalid_sequences() {
        let mut native = MqMessage::new();
        native.write(&[0x68, 0xFF]).unwrap();
        let config = CodecConfig {
            payload_mode: PayloadMode::Utf8Text,
            ..CodecConfig::default()
        };

        let message = decode_message_with_config(&mut native, &config).unwrap();

        assert_eq!(message.payload.as_ref(), "h\u{FFFD}".as_bytes());
    }

    #[test]
    fn properties_filtered_by_pattern() {
        let mut native = MqMessage::new();
        native
            .set_property("usr.a", &MqPropertyDescriptor::ZERO, MqValue::Int(1))
            .unwrap();
        native
            .set_property("sys.b", &MqPropertyDescriptor::ZERO, MqValue::Int(2))
            .unwrap();
        let config = CodecConfig {
            property_pattern: "usr.%".to_string(),
            ..CodecConfig::default()
        };

        let message = decode_message_with_config(&mut native, &config).unwrap();

        assert_eq!(message.properties.len(), 1);
        assert_eq!(message.properties["usr.a"].value, PropertyValue::Int(1));
        assert_eq!(
            message.properties["usr.a"].descriptor,
            Some(PropertyDescriptor::default())
        );
    }

    #[test]
    fn property_read_failure_aborts_decode() {
        let mut native = GhostPropertyMessage::default();

        let err = decode_message(&mut native).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.message().starts_with("failed to read message"));
        assert_eq!(err.detail().reason_code, Some(MQRC_PROPERTY_NOT_AVAILABLE));
        assert_eq!(err.detail().completion_code, Some(MQCC_FAILED));
    }

    #[test]
    fn short_payload_read_aborts_decode() {
        let mut native = ShortReadMessage::default();

        let err = decode_message(&mut native).unwrap_err();

        assert!(err.message().starts_with("failed to read message"));
        assert!(!err.detail().is_transport());
        assert!(matches!(err.cause(), NativeError::Io(_)));
    }

    /// Advertises a property that cannot be read back.
    #[derive(Default)]
    struct GhostPropertyMessage {
        header: Mqmd,
    }

    impl NativeMessage for GhostPropertyMessage {
        fn header(&self) -> &Mqmd {
            &self.header
        }

        fn header_mut(&mut self) -> &mut Mqmd {
            &mut self.header
        }

        fn write(&mut self, _data: &[u8]) -> mqmarshal_native::Result<()> {
            Ok(())
        }

        fn data_length(&self) -> usize {
            0
        }

        fn read_fully(&mut self, _len: usize) -> mqmarshal_native::Result<Bytes> {
            Ok(Bytes::new())
        }

        fn set_property(
            &mut self,
            _name: &str,
            _descriptor: &MqPropertyDescriptor,
            _value: MqValue,
        ) -> mqmarshal_native::Result<()> {
            Ok(())
        }

        fn property_names(&self, _pattern: &str) -> mqmarshal_native::Result<Vec<String>> {
            Ok(vec!["ghost".to_string()])
        }

        fn get_property(&self, _name: &str) -> mqmarshal_native::Result<MqProperty> {
            Err(MqError::failed(MQRC_PROPERTY_NOT_AVAILABLE).into())
        }
    }

    /// Claims more payload than it can deliver.
    #[derive(Default)]
    struct ShortReadMessage {
        header: Mqmd,
    }

    impl NativeMessage for ShortReadMessage {
        fn header(&self) -> &Mqmd {
            &self.header
        }

        fn header_mut(&mut self) -> &mut Mqmd {
            &mut self.header
        }

        fn write(&mut self, _data: &[u8]) -> mqmarshal_native::Result<()> {
            Ok(())
        }

        fn data_length(&self) -> usize {
            16
        }

        fn read_fully(&mut self, len: usize) -> mqmarshal_native::Result<Bytes> {
            Err(NativeError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("requested {len} bytes, 4 available"),
            )))
        }

        fn set_property(
            &mut self,
            _name: &str,
            _descriptor: &MqPropertyDescriptor,
            _value: MqValue,
        ) -> mqmarshal_native::Result<()> {
            Ok(())
        }

        fn property_names(&self, _pattern: &str) -> mqmarshal_native::Result<Vec<String>> {
            Ok(Vec::new())
        }

        fn get_property(&self, _name: &str) -> mqmarshal_native::Result<MqProperty> {
            Err(MqError::failed(MQRC_PROPERTY_NOT_AVAILABLE).into())
        }
    }
}
