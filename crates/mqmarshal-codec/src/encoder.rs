use mqmarshal_native::{MqMessage, Mqmd, NativeMessage};
use tracing::debug;

use crate::error::{translate, ErrorKind, Result};
use crate::model::Message;
use crate::property::encode_property;

/// Encode `message` into a fresh native message object.
pub fn encode_message(message: &Message) -> Result<MqMessage> {
    let mut native = MqMessage::new();
    encode_into(message, &mut native)?;
    Ok(native)
}

/// Encode `message` into a native message object supplied by the transport.
///
/// Properties are set first, then header fields present in `message`, and the
/// payload is written last. Absent header fields keep the native defaults.
pub fn encode_into<M>(message: &Message, native: &mut M) -> Result<()>
where
    M: NativeMessage + ?Sized,
{
    for (name, property) in &message.properties {
        encode_property(native, name, property)?;
    }

    assign_header_fields(message, native.header_mut());

    native.write(&message.payload).map_err(|err| {
        translate(
            ErrorKind::Transport,
            format!("failed to populate payload: {err}"),
            err,
        )
    })?;

    debug!(
        properties = message.properties.len(),
        payload_len = message.payload.len(),
        "encoded message"
    );
    Ok(())
}

fn assign_header_fields(message: &Message, header: &mut Mqmd) {
    if let Some(format) = &message.format {
        header.format = format.clone();
    }
    if let Some(message_id) = &message.message_id {
        header.message_id = message_id.clone();
    }
    if let Some(correlation_id) = &message.correlation_id {
        header.correlation_id = correlation_id.clone();
    }
    if let Some(expiry) = message.expiry {
        header.expiry = expiry;
    }
    if let Some(priority) = message.priority {
        header.priority = priority;
    }
    if let Some(persistence) = message.persistence {
        header.persistence = persistence;
    }
    if let Some(message_type) = message.message_type {
        header.message_type = message_type;
    }
    if let Some(put_application_type) = message.put_application_type {
        header.put_application_type = put_application_type;
    }
    if let Some(name) = &message.reply_to_queue_name {
        header.reply_to_queue_name = name.clone();
    }
    if let Some(name) = &message.reply_to_queue_manager_name {
        header.reply_to_queue_manager_name = name.clone();
    }
}
