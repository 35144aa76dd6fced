//! Two-way codec between generic message records and native MQ messages.
//!
//! - [`encode_message`] / [`encode_into`] turn a [`Message`] into a native object
//! - [`decode_message`] reads a received native object back into a [`Message`]
//! - [`GetOptions`] becomes the native get-message options
//!
//! Every failure is reported as a [`CodecError`] carrying the transport's
//! reason, error and completion codes when the cause came from the transport.

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod model;
pub mod options;
pub mod property;

pub use config::{CodecConfig, PayloadMode};
pub use decoder::{decode_message, decode_message_with_config};
pub use encoder::{encode_into, encode_message};
pub use error::{translate, CodecError, ErrorDetail, ErrorKind, Result};
pub use model::{Message, Property, PropertyDescriptor, PropertyValue};
pub use options::{build_get_options, GetOptions};
pub use property::{decode_property, encode_property, DEFAULT_DESCRIPTOR};
