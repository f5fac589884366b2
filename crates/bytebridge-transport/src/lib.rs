//! bytebridge-transport — send opaque bytes over HTTP POST, hand the reply
//! bytes to a consumer or report failure.

pub mod bridge;
pub mod error;

pub use bridge::{BridgeContext, Reply, SendHandle};
pub use error::{BridgeError, TransportError};
