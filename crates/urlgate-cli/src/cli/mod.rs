//! CLI for the urlgate forwarding gateway.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlgate_core::config;
use urlgate_core::forwarder::Forwarder;
use urlgate_core::url_policy::UrlPolicy;

use commands::{run_check, run_collect, run_fetch_metrics, run_sanitize, run_trusted};

/// Top-level CLI for the urlgate forwarding gateway.
#[derive(Debug, Parser)]
#[command(name = "urlgate")]
#[command(about = "urlgate: SSRF-safe allowlist gateway", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Evaluate a candidate URL against the allowlist policy.
    Check {
        /// Candidate URL to evaluate.
        url: String,
    },

    /// Print the sanitized form of a candidate URL (verbatim if safe,
    /// the safe default otherwise).
    Sanitize {
        /// Candidate URL to sanitize.
        url: String,
    },

    /// Forward an event-collection POST to the sanitized endpoint.
    Collect {
        /// Candidate collection endpoint URL.
        #[arg(long)]
        endpoint: String,

        /// Event source label included in the JSON body.
        #[arg(long)]
        source: Option<String>,
    },

    /// Forward a metrics GET to the sanitized endpoint.
    FetchMetrics {
        /// Candidate metrics endpoint URL.
        #[arg(long)]
        url: String,

        /// Provider name appended as a query parameter.
        #[arg(long)]
        provider: String,
    },

    /// List the configured trusted domains.
    Trusted,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let policy = UrlPolicy::from_config(&cfg);

        match cli.command {
            CliCommand::Check { url } => run_check(&policy, &url),
            CliCommand::Sanitize { url } => run_sanitize(&policy, &url),
            CliCommand::Collect { endpoint, source } => {
                let forwarder = Forwarder::new(policy, cfg.forward_config());
                run_collect(&forwarder, &endpoint, source.as_deref())?;
            }
            CliCommand::FetchMetrics { url, provider } => {
                let forwarder = Forwarder::new(policy, cfg.forward_config());
                run_fetch_metrics(&forwarder, &url, &provider)?;
            }
            CliCommand::Trusted => run_trusted(&policy),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
