use crate::constants::{MQGMO_NO_WAIT, MQMO_MATCH_CORREL_ID, MQMO_MATCH_MSG_ID};

/// Get-message options (`MQGMO`) consumed by the transport's receive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MqGetMessageOptions {
    /// `MQGMO_*` flags.
    pub options: i32,
    /// Wait interval in milliseconds.
    pub wait_interval: i32,
    /// `MQMO_*` match options.
    pub match_options: i32,
}

impl Default for MqGetMessageOptions {
    fn default() -> Self {
        Self {
            options: MQGMO_NO_WAIT,
            wait_interval: 0,
            match_options: MQMO_MATCH_MSG_ID | MQMO_MATCH_CORREL_ID,
        }
    }
}
