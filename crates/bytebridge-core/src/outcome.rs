//! Terminal outcome of one exchange.

use bytes::Bytes;

/// Either the full response body, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Delivered(Bytes),
    Failed,
}

impl Outcome {
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Outcome::Delivered(b) => Some(b),
            Outcome::Failed => None,
        }
    }
}
