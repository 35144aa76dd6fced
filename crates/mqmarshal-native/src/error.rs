use crate::constants::MQCC_FAILED;
use crate::reason::reason_name;

/// A failed MQ call, as reported by the transport's client library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("MQ call failed (completion code {completion_code}, reason {reason_code} {error_code})")]
pub struct MqError {
    /// `MQCC_*` completion code.
    pub completion_code: i32,
    /// `MQRC_*` reason code.
    pub reason_code: i32,
    /// Symbolic error code, e.g. `MQRC_NO_MSG_AVAILABLE`.
    pub error_code: String,
}

impl MqError {
    /// Create an error whose error code is the symbolic name of `reason_code`.
    ///
    /// Unknown reason codes render as `MQRC_<code>`.
    pub fn new(completion_code: i32, reason_code: i32) -> Self {
        let error_code = reason_name(reason_code)
            .map(str::to_string)
            .unwrap_or_else(|| format!("MQRC_{reason_code}"));
        Self::with_error_code(completion_code, reason_code, error_code)
    }

    /// Create an error with an explicit error code string.
    pub fn with_error_code(
        completion_code: i32,
        reason_code: i32,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            completion_code,
            reason_code,
            error_code: error_code.into(),
        }
    }

    /// Shorthand for an `MQCC_FAILED` error.
    pub fn failed(reason_code: i32) -> Self {
        Self::new(MQCC_FAILED, reason_code)
    }
}

/// Errors raised by native message operations.
#[derive(Debug, thiserror::Error)]
pub enum NativeError {
    /// The transport rejected the call.
    #[error(transparent)]
    Mq(#[from] MqError),

    /// Reading or writing the message buffer failed.
    #[error("message buffer I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NativeError {
    /// The transport failure, if this error came from the transport.
    pub fn as_mq(&self) -> Option<&MqError> {
        match self {
            NativeError::Mq(err) => Some(err),
            NativeError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NativeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reason::MQRC_NO_MSG_AVAILABLE;

    #[test]
    fn new_uses_symbolic_reason_name() {
        let err = MqError::new(MQCC_FAILED, MQRC_NO_MSG_AVAILABLE);
        assert_eq!(err.error_code, "MQRC_NO_MSG_AVAILABLE");
        assert_eq!(
            err.to_string(),
            "MQ call failed (completion code 2, reason 2033 MQRC_NO_MSG_AVAILABLE)"
        );
    }

    #[test]
    fn unknown_reason_falls_back_to_numeric_code() {
        let err = MqError::failed(4242);
        assert_eq!(err.error_code, "MQRC_4242");
        assert_eq!(err.completion_code, MQCC_FAILED);
    }

    #[test]
    fn as_mq_only_matches_transport_failures() {
        let mq = NativeError::from(MqError::failed(MQRC_NO_MSG_AVAILABLE));
        assert_eq!(mq.as_mq().map(|e| e.reason_code), Some(2033));

        let io = NativeError::from(std::io::Error::other("disk gone"));
        assert!(io.as_mq().is_none());
        assert_eq!(io.to_string(), "message buffer I/O error: disk gone");
    }
}
