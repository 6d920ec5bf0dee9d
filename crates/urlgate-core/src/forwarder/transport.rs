//! curl-backed transport for the forwarder.
//!
//! One Easy handle per request; the handle is dropped (and the connection
//! released) on every exit path. Redirects are not followed: a redirect
//! issued after validation could point anywhere, which would defeat the
//! allowlist.

use anyhow::{Context, Result};
use std::time::Duration;

use super::ForwardResponse;
use crate::config::ForwardConfig;

/// Performs a single request. GET when `body` is `None`, otherwise a POST
/// with a JSON body. The response body is capped at
/// `cfg.max_response_bytes`; excess bytes are read and discarded.
pub(super) fn perform(
    url: &str,
    body: Option<&[u8]>,
    cfg: &ForwardConfig,
) -> Result<ForwardResponse> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(false)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    if let Some(payload) = body {
        easy.post(true)?;
        easy.post_fields_copy(payload)?;
        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json")?;
        easy.http_headers(headers)?;
    }

    let cap = cfg.max_response_bytes as usize;
    let mut out: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            let room = cap.saturating_sub(out.len());
            let take = room.min(data.len());
            out.extend_from_slice(&data[..take]);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("forward request to {url} failed"))?;
    }

    let status = easy.response_code()?;
    Ok(ForwardResponse { status, body: out })
}
