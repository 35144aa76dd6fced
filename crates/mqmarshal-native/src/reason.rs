//! Reason codes reported by failed MQ calls.

pub const MQRC_NONE: i32 = 0;
pub const MQRC_CONNECTION_BROKEN: i32 = 2009;
pub const MQRC_DATA_LENGTH_ERROR: i32 = 2010;
pub const MQRC_MSG_TOO_BIG_FOR_Q: i32 = 2030;
pub const MQRC_NO_MSG_AVAILABLE: i32 = 2033;
pub const MQRC_NOT_AUTHORIZED: i32 = 2035;
pub const MQRC_Q_FULL: i32 = 2053;
pub const MQRC_Q_MGR_NOT_AVAILABLE: i32 = 2059;
pub const MQRC_TRUNCATED_MSG_FAILED: i32 = 2080;
pub const MQRC_UNKNOWN_OBJECT_NAME: i32 = 2085;
pub const MQRC_FORMAT_ERROR: i32 = 2110;
pub const MQRC_NOT_CONVERTED: i32 = 2119;
pub const MQRC_PROPERTY_NAME_ERROR: i32 = 2442;
pub const MQRC_PROPERTY_VALUE_TOO_BIG: i32 = 2469;
pub const MQRC_PROPERTY_NOT_AVAILABLE: i32 = 2471;
pub const MQRC_PROPERTY_TYPE_ERROR: i32 = 2473;
pub const MQRC_PROPERTY_NAME_LENGTH_ERR: i32 = 2513;

/// Returns the symbolic name for a reason code, if it is a known one.
pub fn reason_name(reason: i32) -> Option<&'static str> {
    let name = match reason {
        MQRC_NONE => "MQRC_NONE",
        MQRC_CONNECTION_BROKEN => "MQRC_CONNECTION_BROKEN",
        MQRC_DATA_LENGTH_ERROR => "MQRC_DATA_LENGTH_ERROR",
        MQRC_MSG_TOO_BIG_FOR_Q => "MQRC_MSG_TOO_BIG_FOR_Q",
        MQRC_NO_MSG_AVAILABLE => "MQRC_NO_MSG_AVAILABLE",
        MQRC_NOT_AUTHORIZED => "MQRC_NOT_AUTHORIZED",
        MQRC_Q_FULL => "MQRC_Q_FULL",
        MQRC_Q_MGR_NOT_AVAILABLE => "MQRC_Q_MGR_NOT_AVAILABLE",
        MQRC_TRUNCATED_MSG_FAILED => "MQRC_TRUNCATED_MSG_FAILED",
        MQRC_UNKNOWN_OBJECT_NAME => "MQRC_UNKNOWN_OBJECT_NAME",
        MQRC_FORMAT_ERROR => "MQRC_FORMAT_ERROR",
        MQRC_NOT_CONVERTED => "MQRC_NOT_CONVERTED",
        MQRC_PROPERTY_NAME_ERROR => "MQRC_PROPERTY_NAME_ERROR",
        MQRC_PROPERTY_VALUE_TOO_BIG => "MQRC_PROPERTY_VALUE_TOO_BIG",
        MQRC_PROPERTY_NOT_AVAILABLE => "MQRC_PROPERTY_NOT_AVAILABLE",
        MQRC_PROPERTY_TYPE_ERROR => "MQRC_PROPERTY_TYPE_ERROR",
        MQRC_PROPERTY_NAME_LENGTH_ERR => "MQRC_PROPERTY_NAME_LENGTH_ERR",
        _ => return None,
    };
    Some(name)
}
