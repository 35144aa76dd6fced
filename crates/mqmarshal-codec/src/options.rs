use std::time::Duration;

use mqmarshal_native::MqGetMessageOptions;
use serde::{Deserialize, Serialize};

/// Receive options as supplied by the connector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOptions {
    /// Wait interval in seconds.
    pub wait_interval: i64,
    /// `MQGMO_*` flags, passed through unchanged.
    pub options: i32,
}

impl GetOptions {
    /// Build options from a wait duration. Sub-second precision is dropped.
    pub fn from_duration(wait: Duration, options: i32) -> Self {
        Self {
            wait_interval: i64::try_from(wait.as_secs()).unwrap_or(i64::MAX),
            options,
        }
    }
}

impl From<&GetOptions> for MqGetMessageOptions {
    fn from(options: &GetOptions) -> Self {
        build_get_options(options)
    }
}

/// Convert connector receive options into native get-message options.
///
/// The wait interval becomes milliseconds, saturating at the native 32-bit
/// range. Negative values such as `MQWI_UNLIMITED` pass through scaled.
pub fn build_get_options(options: &GetOptions) -> MqGetMessageOptions {
    let millis = options
        .wait_interval
        .saturating_mul(1000)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    MqGetMessageOptions {
        options: options.options,
        wait_interval: millis,
        ..MqGetMessageOptions::default()
    }
}
