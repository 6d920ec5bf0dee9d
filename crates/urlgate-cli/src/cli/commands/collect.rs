//! `urlgate collect` – forward an event-collection POST.

use anyhow::Result;
use urlgate_core::forwarder::Forwarder;

/// POST `{"source": ...}` to the sanitized endpoint and print the status.
pub fn run_collect(forwarder: &Forwarder, endpoint: &str, source: Option<&str>) -> Result<()> {
    let body = serde_json::json!({ "source": source });
    let resp = forwarder.post_json(Some(endpoint), &body)?;
    println!("collected: HTTP {}", resp.status);
    Ok(())
}
