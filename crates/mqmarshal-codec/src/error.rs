use std::fmt;

use mqmarshal_native::NativeError;
use serde::{Deserialize, Serialize};

/// Category of a codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A native transport operation failed.
    #[serde(rename = "TransportError")]
    Transport,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "TransportError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport diagnostic codes attached to every [`CodecError`].
///
/// All fields are unset unless the cause was a transport failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_code: Option<i32>,
}

impl ErrorDetail {
    fn from_cause(cause: &NativeError) -> Self {
        match cause.as_mq() {
            Some(mq) => Self {
                reason_code: Some(mq.reason_code),
                error_code: Some(mq.error_code.clone()),
                completion_code: Some(mq.completion_code),
            },
            None => Self::default(),
        }
    }

    /// True if the detail carries real transport codes.
    pub fn is_transport(&self) -> bool {
        self.reason_code.is_some()
    }
}

/// Structured error raised by the codec.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CodecError {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: NativeError,
    detail: ErrorDetail,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original failure.
    pub fn cause(&self) -> &NativeError {
        &self.cause
    }

    pub fn detail(&self) -> &ErrorDetail {
        &self.detail
    }
}

/// Wrap `cause` into a [`CodecError`].
///
/// Transport failures populate the [`ErrorDetail`]; anything else leaves it unset.
pub fn translate(
    kind: ErrorKind,
    message: impl Into<String>,
    cause: impl Into<NativeError>,
) -> CodecError {
    let cause = cause.into();
    CodecError {
        kind,
        message: message.into(),
        detail: ErrorDetail::from_cause(&cause),
        cause,
    }
}

pub(crate) fn read_error(cause: NativeError) -> CodecError {
    translate(
        ErrorKind::Transport,
        format!("failed to read message: {cause}"),
        cause,
    )
}

pub type Result<T> = std::result::Result<T, CodecError>;
