//! `urlgate fetch-metrics` – forward a metrics GET.

use anyhow::Result;
use urlgate_core::forwarder::Forwarder;

/// GET the sanitized endpoint with a `provider` query pair and print the
/// response body.
pub fn run_fetch_metrics(forwarder: &Forwarder, url: &str, provider: &str) -> Result<()> {
    let resp = forwarder.get(Some(url), &[("provider", provider)])?;
    println!("HTTP {}", resp.status);
    println!("{}", resp.body_text());
    Ok(())
}
