//! Scoped response memory handed to a consumer.
//!
//! The bridge copies every response body into a fresh `DeliveryBuffer` and
//! lends it to exactly one callback. The slice is only reachable inside that
//! callback; afterwards the bytes are overwritten with zeros and freed, on
//! every exit path including a panicking callback.

use zeroize::Zeroizing;

use crate::consumer::{guarded, CallbackOutcome};

/// Private copy of one response body. Never shared between calls.
pub struct DeliveryBuffer {
    data: Zeroizing<Vec<u8>>,
}

impl DeliveryBuffer {
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self {
            data: Zeroizing::new(bytes.to_vec()),
        }
    }

    /// Run `f` over the buffer contents, then wipe and release the buffer.
    pub fn lend<F>(self, f: F) -> CallbackOutcome
    where
        F: FnOnce(&[u8]),
    {
        let outcome = guarded(|| f(self.data.as_slice()));
        drop(self);
        outcome
    }
}

impl std::fmt::Debug for DeliveryBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Contents may be key material; only the size is printed.
        f.debug_struct("DeliveryBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}
