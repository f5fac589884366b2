use crate::*;

// ══════════════════════════════════════════════════════════════════════════════
//  What goes on the wire
// ══════════════════════════════════════════════════════════════════════════════

/// POST, form content type, body is the caller's payload byte-for-byte.
#[tokio::test]
async fn request_is_post_with_raw_payload() -> Result<()> {
    let server = spawn_mock(MockReply::Fixed(StatusCode::OK, vec![0x00])).await?;
    let ctx = bridge();
    let payload = vec![0x00, 0xFF, 0x10, 0x80, 0x7F, 0x0A];

    send_and_wait(&ctx, payload.clone(), &server.destination("/")).await;

    let seen = server.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::POST);
    assert_eq!(
        seen[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(seen[0].body, payload);
    Ok(())
}

#[tokio::test]
async fn configured_content_type_is_sent() -> Result<()> {
    let server = spawn_mock(MockReply::Fixed(StatusCode::OK, Vec::new())).await?;
    let config = TransportConfig {
        content_type: "application/octet-stream".to_string(),
        ..TransportConfig::default()
    };
    let ctx = BridgeContext::new(&config)?;

    send_and_wait(&ctx, vec![1, 2], &server.destination("/")).await;

    assert_eq!(
        server.seen()[0].content_type.as_deref(),
        Some("application/octet-stream")
    );
    Ok(())
}

/// host + path is a plain join and the server sees the path unchanged.
#[tokio::test]
async fn joined_path_reaches_server() -> Result<()> {
    let server = spawn_mock(MockReply::Echo).await?;
    let ctx = bridge();
    let destination = Destination::join(&server.host(), "/kerberos/requestAS")?;

    let outcome = send_and_wait(&ctx, b"as-req".to_vec(), &destination).await;
    assert_eq!(outcome, Outcome::Delivered(Bytes::from_static(b"as-req")));
    assert_eq!(server.seen()[0].path, "/kerberos/requestAS");
    Ok(())
}

/// Endpoint config resolves to the same destination as a manual join.
#[tokio::test]
async fn endpoint_config_targets_server() -> Result<()> {
    let server = spawn_mock(MockReply::Echo).await?;
    let ctx = bridge();

    let mut config = bytebridge_core::BridgeConfig::default();
    config.endpoint.host = server.host();
    config.endpoint.path = "/ap".to_string();
    let destination = config.endpoint.destination()?;

    send_and_wait(&ctx, vec![9], &destination).await;
    assert_eq!(server.seen()[0].path, "/ap");
    Ok(())
}
