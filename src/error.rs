use serde::Deserialize;

/// Error payload carried by non-2xx responses from the backend.
///
/// Decoded best-effort: a body that is not this shape (or not JSON at all)
/// degrades to the empty payload instead of failing classification.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error tag, e.g. `"not_found"`.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable message, surfaced verbatim when present.
    #[serde(default)]
    pub message: Option<String>,
    /// Status code the backend echoes into the body.
    #[serde(default)]
    pub code: Option<i64>,
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum PodsiteError {
    /// Connection-level failure (refused, DNS, interrupted body) from
    /// `reqwest`.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// No response within the request deadline.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
    /// Server responded with a non-2xx status. The message from the decoded
    /// body, when present, is shown verbatim.
    #[error("{}", http_message(.status, .body))]
    Http { status: u16, body: ErrorBody },
    /// Response body was not valid JSON, or did not match the expected
    /// shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl PodsiteError {
    /// Whether an automatic retry can help.
    ///
    /// A 4xx response means the request itself was rejected; everything
    /// else is treated as transient.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Http { status, .. } if (400..500).contains(status))
    }

    /// HTTP status of the failure, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn http_message(status: &u16, body: &ErrorBody) -> String {
    match &body.message {
        Some(message) => message.clone(),
        None => format!("HTTP {status}"),
    }
}
