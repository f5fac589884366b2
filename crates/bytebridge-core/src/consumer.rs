//! The consumer side of an exchange.
//!
//! A consumer supplies two mutually exclusive callbacks. `Completion` owns
//! the consumer for the lifetime of one exchange and makes sure exactly one
//! of them runs: `deliver` and `fail` consume the guard, and dropping an
//! unfinished guard reports failure.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;

use crate::buffer::DeliveryBuffer;

/// Receives the result of one exchange.
pub trait Consumer: Send + 'static {
    /// Called with the full response body. The slice is only valid for the
    /// duration of the call; copy out anything that must be kept.
    fn on_delivered(&mut self, data: &[u8]);

    /// Called when no response could be obtained.
    fn on_failed(&mut self);
}

impl<C: Consumer + ?Sized> Consumer for Box<C> {
    fn on_delivered(&mut self, data: &[u8]) {
        (**self).on_delivered(data)
    }

    fn on_failed(&mut self) {
        (**self).on_failed()
    }
}

/// Consumer built from a pair of closures.
pub struct FnConsumer<D, F> {
    delivered: D,
    failed: F,
}

pub fn consumer_fn<D, F>(delivered: D, failed: F) -> FnConsumer<D, F>
where
    D: FnMut(&[u8]) + Send + 'static,
    F: FnMut() + Send + 'static,
{
    FnConsumer { delivered, failed }
}

impl<D, F> Consumer for FnConsumer<D, F>
where
    D: FnMut(&[u8]) + Send + 'static,
    F: FnMut() + Send + 'static,
{
    fn on_delivered(&mut self, data: &[u8]) {
        (self.delivered)(data)
    }

    fn on_failed(&mut self) {
        (self.failed)()
    }
}

// ── Callback guarding ─────────────────────────────────────────────────────────

/// How a consumer callback ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Returned,
    /// The callback panicked; the message is whatever the panic carried.
    Panicked(String),
}

/// Run a callback, turning a panic into `CallbackOutcome::Panicked`.
pub(crate) fn guarded<F: FnOnce()>(f: F) -> CallbackOutcome {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => CallbackOutcome::Returned,
        Err(payload) => {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "non-string panic payload".to_string()
            };
            CallbackOutcome::Panicked(msg)
        }
    }
}

// ── Completion ────────────────────────────────────────────────────────────────

/// Exactly-once completion of a single exchange.
pub struct Completion<C: Consumer> {
    consumer: Option<C>,
}

impl<C: Consumer> Completion<C> {
    pub fn new(consumer: C) -> Self {
        Self {
            consumer: Some(consumer),
        }
    }

    /// Copy `body` into a private buffer and lend it to `on_delivered`.
    /// The buffer is wiped and freed before this returns.
    pub fn deliver(mut self, body: &Bytes) -> CallbackOutcome {
        let Some(mut consumer) = self.consumer.take() else {
            return CallbackOutcome::Returned;
        };
        DeliveryBuffer::copy_from(body).lend(|data| consumer.on_delivered(data))
    }

    pub fn fail(mut self) -> CallbackOutcome {
        let Some(mut consumer) = self.consumer.take() else {
            return CallbackOutcome::Returned;
        };
        guarded(|| consumer.on_failed())
    }
}

impl<C: Consumer> Drop for Completion<C> {
    fn drop(&mut self) {
        if let Some(mut consumer) = self.consumer.take() {
            tracing::debug!("exchange abandoned before completion, reporting failure");
            if let CallbackOutcome::Panicked(msg) = guarded(|| consumer.on_failed()) {
                tracing::error!(panic = %msg, "consumer panicked in on_failed");
            }
        }
    }
}
