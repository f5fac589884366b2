//! Transport error types.
//!
//! Consumers never see these: every variant collapses to `on_failed()`.
//! They exist for logging and for callers of `BridgeContext::exchange`.

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be constructed, e.g. an invalid header value.
    #[error("failed to build request: {0}")]
    Request(reqwest::Error),
    /// Connection failure, or the body could not be read to the end.
    #[error("network failure: {0}")]
    Network(reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no tokio runtime is running; construct the bridge inside one or use with_handle")]
    NoRuntime,
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}
