//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn parse_check() {
    match parse(&["urlgate", "check", "https://api.analytics.com/x"]) {
        CliCommand::Check { url } => assert_eq!(url, "https://api.analytics.com/x"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_sanitize() {
    match parse(&["urlgate", "sanitize", "http://evil.com"]) {
        CliCommand::Sanitize { url } => assert_eq!(url, "http://evil.com"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_collect_with_source() {
    match parse(&[
        "urlgate",
        "collect",
        "--endpoint",
        "https://collector.analytics.net/ingest",
        "--source",
        "web",
    ]) {
        CliCommand::Collect { endpoint, source } => {
            assert_eq!(endpoint, "https://collector.analytics.net/ingest");
            assert_eq!(source.as_deref(), Some("web"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_collect_source_optional() {
    match parse(&["urlgate", "collect", "--endpoint", "https://x.example/e"]) {
        CliCommand::Collect { source, .. } => assert!(source.is_none()),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_fetch_metrics() {
    match parse(&[
        "urlgate",
        "fetch-metrics",
        "--url",
        "https://data.analytics.io/metrics",
        "--provider",
        "acme",
    ]) {
        CliCommand::FetchMetrics { url, provider } => {
            assert_eq!(url, "https://data.analytics.io/metrics");
            assert_eq!(provider, "acme");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_trusted() {
    assert!(matches!(parse(&["urlgate", "trusted"]), CliCommand::Trusted));
}

#[test]
fn fetch_metrics_requires_provider() {
    assert!(Cli::try_parse_from(["urlgate", "fetch-metrics", "--url", "https://x.example"]).is_err());
}
