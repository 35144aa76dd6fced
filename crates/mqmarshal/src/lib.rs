//! Marshalling between generic message records and MQ native messages.
//!
//! mqmarshal sits between a queue connector and the transport's client
//! library. It turns the connector's message records into native message
//! objects on send, reads them back on receive, and reports every failure
//! as one structured error carrying the transport's diagnostic codes.
//!
//! # Crate Structure
//!
//! - [`native`] - Native message object model (header, payload buffer, properties)
//! - [`codec`] - Encoder, decoder, property codec, error translation, get-options

/// Re-export native message types.
pub mod native {
    pub use mqmarshal_native::*;
}

/// Re-export codec types.
pub mod codec {
    pub use mqmarshal_codec::*;
}
