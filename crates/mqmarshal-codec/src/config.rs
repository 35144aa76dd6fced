use mqmarshal_native::constants::MQPROP_INQUIRE_ALL;

/// How payload bytes are copied out of a received message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadMode {
    /// Copy the bytes unchanged.
    #[default]
    Raw,
    /// Read the payload as UTF-8 text and re-encode it. Invalid sequences are
    /// replaced with U+FFFD, so binary payloads are not preserved.
    Utf8Text,
}

/// Decoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Payload copy mode. Default: [`PayloadMode::Raw`].
    pub payload_mode: PayloadMode,
    /// Pattern selecting which properties are decoded. Default: `"%"` (all).
    pub property_pattern: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            payload_mode: PayloadMode::Raw,
            property_pattern: MQPROP_INQUIRE_ALL.to_string(),
        }
    }
}
