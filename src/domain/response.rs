use crate::domain::value::{MessageId, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Receipt for an accepted `bulksms` submission.
pub struct SendReceipt {
    /// Provider-issued message id (the trimmed reply body).
    pub message_id: MessageId,
    /// Number of recipients in the submission, after deduplication.
    pub recipients: usize,
    /// Sender id the submission went out under.
    pub sender: SenderId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account balance as reported by the `balance` endpoint.
///
/// The provider replies with plain text; the value is kept verbatim
/// (trimmed) rather than parsed into a number.
pub struct Balance(String);

impl Balance {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
