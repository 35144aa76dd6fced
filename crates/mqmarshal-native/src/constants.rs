//! MQI constants used by the message model.
//!
//! Values match the transport's published header definitions.

/// No format name (8 blanks).
pub const MQFMT_NONE: &str = "        ";

/// Message data made up entirely of characters.
pub const MQFMT_STRING: &str = "MQSTR   ";

/// Length of the message and correlation identifiers.
pub const MQ_MSG_ID_LENGTH: usize = 24;

/// Length of queue and queue manager names (blank padded).
pub const MQ_Q_NAME_LENGTH: usize = 48;

/// Longest accepted property name.
pub const MQ_MAX_PROPERTY_NAME_LENGTH: usize = 4095;

/// Default queue `MAXMSGL`: 4 MiB.
pub const DEFAULT_MAX_MSG_LENGTH: usize = 4 * 1024 * 1024;

/// No message identifier.
pub const MQMI_NONE: [u8; MQ_MSG_ID_LENGTH] = [0; MQ_MSG_ID_LENGTH];

/// No correlation identifier.
pub const MQCI_NONE: [u8; MQ_MSG_ID_LENGTH] = [0; MQ_MSG_ID_LENGTH];

// Expiry.
pub const MQEI_UNLIMITED: i32 = -1;

// Priority.
pub const MQPRI_PRIORITY_AS_Q_DEF: i32 = -1;

// Persistence.
pub const MQPER_NOT_PERSISTENT: i32 = 0;
pub const MQPER_PERSISTENT: i32 = 1;
pub const MQPER_PERSISTENCE_AS_Q_DEF: i32 = 2;

// Message types.
pub const MQMT_REQUEST: i32 = 1;
pub const MQMT_REPLY: i32 = 2;
pub const MQMT_REPORT: i32 = 4;
pub const MQMT_DATAGRAM: i32 = 8;

// Put application types.
pub const MQAT_NO_CONTEXT: i32 = 0;
pub const MQAT_UNIX: i32 = 6;
pub const MQAT_JAVA: i32 = 28;

// Completion codes.
pub const MQCC_OK: i32 = 0;
pub const MQCC_WARNING: i32 = 1;
pub const MQCC_FAILED: i32 = 2;

// Get-message options.
pub const MQGMO_NO_WAIT: i32 = 0x0000_0000;
pub const MQGMO_WAIT: i32 = 0x0000_0001;
pub const MQGMO_SYNCPOINT: i32 = 0x0000_0002;
pub const MQGMO_NO_SYNCPOINT: i32 = 0x0000_0004;
pub const MQGMO_BROWSE_FIRST: i32 = 0x0000_0010;
pub const MQGMO_BROWSE_NEXT: i32 = 0x0000_0020;
pub const MQGMO_ACCEPT_TRUNCATED_MSG: i32 = 0x0000_0040;
pub const MQGMO_FAIL_IF_QUIESCING: i32 = 0x0000_2000;
pub const MQGMO_CONVERT: i32 = 0x0000_4000;

/// Wait forever.
pub const MQWI_UNLIMITED: i32 = -1;

// Match options.
pub const MQMO_NONE: i32 = 0x0000_0000;
pub const MQMO_MATCH_MSG_ID: i32 = 0x0000_0001;
pub const MQMO_MATCH_CORREL_ID: i32 = 0x0000_0002;

// Property descriptor.
pub const MQPD_VERSION_1: i32 = 1;
pub const MQPD_NONE: i32 = 0;
pub const MQPD_SUPPORT_OPTIONAL: i32 = 0x0000_0001;
pub const MQPD_SUPPORT_REQUIRED_IF_LOCAL: i32 = 0x0000_0400;
pub const MQPD_SUPPORT_REQUIRED: i32 = 0x0010_0000;
pub const MQPD_NO_CONTEXT: i32 = 0;
pub const MQPD_USER_CONTEXT: i32 = 1;

// Property copy options.
pub const MQCOPY_NONE: i32 = 0x0000_0000;
pub const MQCOPY_ALL: i32 = 0x0000_0001;
pub const MQCOPY_FORWARD: i32 = 0x0000_0002;
pub const MQCOPY_PUBLISH: i32 = 0x0000_0004;
pub const MQCOPY_REPLY: i32 = 0x0000_0008;
pub const MQCOPY_REPORT: i32 = 0x0000_0010;
pub const MQCOPY_DEFAULT: i32 = MQCOPY_FORWARD | MQCOPY_PUBLISH | MQCOPY_REPORT;

/// Property name pattern matching every property.
pub const MQPROP_INQUIRE_ALL: &str = "%";
