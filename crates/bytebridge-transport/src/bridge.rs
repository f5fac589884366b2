//! The byte transport bridge.
//!
//! One `send` is one HTTP POST: the payload goes out as the raw request body,
//! the response body comes back as bytes and is lent to the consumer. The
//! HTTP status is logged but never interpreted. There are no retries and no
//! timeouts.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use bytebridge_core::config::TransportConfig;
use bytebridge_core::{CallbackOutcome, Completion, Consumer, Destination};

use crate::error::{BridgeError, TransportError};

/// Explicit transport context. Clones share one connection pool.
#[derive(Clone)]
pub struct BridgeContext {
    client: reqwest::Client,
    content_type: String,
    runtime: Handle,
}

/// Full response to one exchange.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Informational only.
    pub status: u16,
    pub body: Bytes,
}

/// Handle to an in-flight `send`. Dropping it does not cancel the exchange.
pub struct SendHandle {
    task: Option<JoinHandle<()>>,
}

impl SendHandle {
    fn completed() -> Self {
        Self { task: None }
    }

    /// True once the consumer callback has returned.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Wait until the consumer callback has returned.
    pub async fn finished(self) {
        if let Some(task) = self.task {
            if let Err(e) = task.await {
                tracing::debug!(error = %e, "send task did not run to completion");
            }
        }
    }
}

impl BridgeContext {
    /// Build a context bound to the tokio runtime the caller is running on.
    pub fn new(config: &TransportConfig) -> Result<Self, BridgeError> {
        let runtime = Handle::try_current().map_err(|_| BridgeError::NoRuntime)?;
        Self::with_handle(config, runtime)
    }

    pub fn with_handle(config: &TransportConfig, runtime: Handle) -> Result<Self, BridgeError> {
        let mut builder = reqwest::Client::builder();
        if !config.user_agent.is_empty() {
            builder = builder.user_agent(config.user_agent.clone());
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(BridgeError::Client)?;

        Ok(Self {
            client,
            content_type: config.content_type.clone(),
            runtime,
        })
    }

    /// POST `payload` to `destination` and report the result to `consumer`.
    ///
    /// Exactly one of `on_delivered` / `on_failed` runs. If the request cannot
    /// be built, `on_failed` runs before this returns; otherwise the exchange
    /// runs on the context's runtime and the caller does not wait for it.
    pub fn send<C: Consumer>(
        &self,
        payload: impl Into<Bytes>,
        destination: &Destination,
        consumer: C,
    ) -> SendHandle {
        let completion = Completion::new(consumer);

        let request = match self.request(payload.into(), destination) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url = %destination, error = %e, "send failed before dispatch");
                log_callback(completion.fail());
                return SendHandle::completed();
            }
        };

        tracing::debug!(url = %destination, "dispatching request");
        let client = self.client.clone();
        let task = self.runtime.spawn(async move {
            match execute(&client, request).await {
                Ok(reply) => log_callback(completion.deliver(&reply.body)),
                Err(e) => {
                    tracing::warn!(error = %e, "exchange failed");
                    log_callback(completion.fail());
                }
            }
        });

        SendHandle { task: Some(task) }
    }

    /// POST `payload` to `destination` and wait for the full reply.
    pub async fn exchange(
        &self,
        payload: impl Into<Bytes>,
        destination: &Destination,
    ) -> Result<Reply, TransportError> {
        let request = self.request(payload.into(), destination)?;
        execute(&self.client, request).await
    }

    fn request(
        &self,
        payload: Bytes,
        destination: &Destination,
    ) -> Result<reqwest::Request, TransportError> {
        self.client
            .post(destination.as_str())
            .header(CONTENT_TYPE, self.content_type.as_str())
            .body(payload)
            .build()
            .map_err(TransportError::Request)
    }
}

async fn execute(
    client: &reqwest::Client,
    request: reqwest::Request,
) -> Result<Reply, TransportError> {
    let url = request.url().clone();
    let sent = request.body().and_then(|b| b.as_bytes()).map_or(0, |b| b.len());

    let response = client
        .execute(request)
        .await
        .map_err(TransportError::Network)?;
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(TransportError::Network)?;

    tracing::debug!(%url, status, sent, received = body.len(), "reply received");
    Ok(Reply { status, body })
}

fn log_callback(outcome: CallbackOutcome) {
    if let CallbackOutcome::Panicked(msg) = outcome {
        tracing::error!(panic = %msg, "consumer callback panicked; buffer released");
    }
}
