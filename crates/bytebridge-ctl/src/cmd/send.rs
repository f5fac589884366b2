//! Send a payload and print the reply.

use std::io::Write;

use anyhow::{Context, Result, bail};
use bytes::Bytes;
use tokio::io::AsyncReadExt;
use tokio::sync::oneshot;

use bytebridge_core::{Consumer, Destination, Outcome};
use bytebridge_transport::BridgeContext;

/// Forwards the single outcome of an exchange back to the command.
struct ReplySink {
    tx: Option<oneshot::Sender<Outcome>>,
}

impl ReplySink {
    fn finish(&mut self, outcome: Outcome) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(outcome);
        }
    }
}

impl Consumer for ReplySink {
    fn on_delivered(&mut self, data: &[u8]) {
        self.finish(Outcome::Delivered(Bytes::copy_from_slice(data)));
    }

    fn on_failed(&mut self) {
        self.finish(Outcome::Failed);
    }
}

/// Read the payload from a file, or from stdin when `input` is None or "-".
async fn read_payload(input: Option<&str>) -> Result<Vec<u8>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("failed to read payload from stdin")?;
            Ok(buf)
        }
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read payload from {}", path)),
    }
}

pub async fn cmd_send(
    ctx: &BridgeContext,
    destination: &Destination,
    input: Option<&str>,
    hex_output: bool,
) -> Result<()> {
    let payload = read_payload(input).await?;
    tracing::info!(url = %destination, bytes = payload.len(), "sending payload");

    let (tx, rx) = oneshot::channel();
    let handle = ctx.send(payload, destination, ReplySink { tx: Some(tx) });

    let outcome = rx.await.context("exchange ended without an outcome")?;
    handle.finished().await;
    let Some(reply) = outcome.into_bytes() else {
        bail!("exchange with {} failed — is the server reachable?", destination);
    };

    let mut stdout = std::io::stdout().lock();
    if hex_output {
        writeln!(stdout, "{}", hex::encode(&reply))?;
    } else {
        stdout.write_all(&reply)?;
    }
    stdout.flush()?;
    Ok(())
}
