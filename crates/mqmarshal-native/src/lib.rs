//! Native message object model for an MQ-style transport.
//!
//! This is the lowest layer of mqmarshal. It mirrors what the transport's
//! client library hands out:
//! - A message descriptor header ([`Mqmd`]) with transport defaults
//! - A payload buffer written on put and consumed on get
//! - A name-keyed property store where every value carries a descriptor
//!
//! The codec never depends on [`MqMessage`] directly; it talks to the
//! [`NativeMessage`] trait so the real client binding can be slotted in.

pub mod constants;
pub mod error;
pub mod message;
pub mod options;
pub mod property;
pub mod reason;
pub mod traits;

pub use error::{MqError, NativeError, Result};
pub use message::{MqMessage, Mqmd};
pub use options::MqGetMessageOptions;
pub use property::{matches_pattern, MqProperty, MqPropertyDescriptor, MqValue};
pub use reason::reason_name;
pub use traits::NativeMessage;
