use crate::*;

// ══════════════════════════════════════════════════════════════════════════════
//  Successful delivery
// ══════════════════════════════════════════════════════════════════════════════

/// Empty payload, server answers [0x01, 0x02, 0x03] → delivered verbatim.
#[tokio::test]
async fn empty_payload_delivers_reply() -> Result<()> {
    let server = spawn_mock(MockReply::Fixed(StatusCode::OK, vec![0x01, 0x02, 0x03])).await?;
    let ctx = bridge();

    let outcome = send_and_wait(&ctx, Bytes::new(), &server.destination("/")).await;
    assert_eq!(outcome, Outcome::Delivered(Bytes::from_static(&[0x01, 0x02, 0x03])));

    let seen = server.seen();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].body.is_empty());
    Ok(())
}

/// The status code is not inspected: an error status still delivers its body.
#[tokio::test]
async fn error_status_still_delivers_body() -> Result<()> {
    let server = spawn_mock(MockReply::Fixed(
        StatusCode::INTERNAL_SERVER_ERROR,
        b"KRB_ERROR".to_vec(),
    ))
    .await?;
    let ctx = bridge();

    let outcome = send_and_wait(&ctx, vec![0x6a, 0x81], &server.destination("/as")).await;
    assert_eq!(outcome, Outcome::Delivered(Bytes::from_static(b"KRB_ERROR")));
    Ok(())
}

#[tokio::test]
async fn empty_reply_is_delivered_not_failed() -> Result<()> {
    let server = spawn_mock(MockReply::Fixed(StatusCode::NO_CONTENT, Vec::new())).await?;
    let ctx = bridge();

    let outcome = send_and_wait(&ctx, vec![0x01], &server.destination("/")).await;
    assert_eq!(outcome, Outcome::Delivered(Bytes::new()));
    Ok(())
}

/// A large reply arrives complete: length equals the true response size.
#[tokio::test]
async fn large_reply_is_complete() -> Result<()> {
    let payload: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
    let server = spawn_mock(MockReply::Echo).await?;
    let ctx = bridge();

    let outcome = send_and_wait(&ctx, payload.clone(), &server.destination("/")).await;
    let reply = outcome.into_bytes().context("expected delivery")?;
    assert_eq!(reply.len(), payload.len());
    assert_eq!(reply.as_ref(), payload.as_slice());
    Ok(())
}

/// `exchange` is the awaitable form and also carries the status.
#[tokio::test]
async fn exchange_returns_status_and_body() -> Result<()> {
    let server = spawn_mock(MockReply::Fixed(StatusCode::ACCEPTED, vec![0xAB; 4])).await?;
    let ctx = bridge();

    let reply = ctx.exchange(vec![0x00], &server.destination("/ap")).await?;
    assert_eq!(reply.status, 202);
    assert_eq!(reply.body.as_ref(), &[0xAB; 4]);
    Ok(())
}
