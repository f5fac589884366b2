//! bytebridge-core — consumer contract, delivery buffer, destinations, config.
//! The transport crate and the CLI both depend on this one.

pub mod buffer;
pub mod config;
pub mod consumer;
pub mod destination;
pub mod outcome;

pub use buffer::DeliveryBuffer;
pub use config::BridgeConfig;
pub use consumer::{consumer_fn, CallbackOutcome, Completion, Consumer, FnConsumer};
pub use destination::{Destination, DestinationError};
pub use outcome::Outcome;
