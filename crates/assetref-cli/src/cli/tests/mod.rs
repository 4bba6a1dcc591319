//! CLI parse tests.

use super::{effective_config, Cli, CliCommand, Mode};
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn resolve_defaults_to_simple() {
    let cli = parse(&["assetref", "resolve", "uploads/a.png"]);
    assert!(cli.api_origin.is_none());
    match cli.command {
        CliCommand::Resolve {
            reference,
            mode,
            json,
        } => {
            assert_eq!(reference, "uploads/a.png");
            assert_eq!(mode, Mode::Simple);
            assert!(!json);
        }
        other => panic!("expected Resolve, got {:?}", other),
    }
}

#[test]
fn resolve_with_mode_and_json() {
    let cli = parse(&["assetref", "resolve", "x.png", "--mode", "candidates", "--json"]);
    match cli.command {
        CliCommand::Resolve { mode, json, .. } => {
            assert_eq!(mode, Mode::Candidates);
            assert!(json);
        }
        other => panic!("expected Resolve, got {:?}", other),
    }
}

#[test]
fn global_api_origin_after_subcommand() {
    let cli = parse(&[
        "assetref",
        "origins",
        "--api-origin",
        "https://api.example.com/api",
    ]);
    assert_eq!(cli.api_origin.as_deref(), Some("https://api.example.com/api"));
    assert!(matches!(cli.command, CliCommand::Origins));
}

#[test]
fn product_takes_path() {
    let cli = parse(&["assetref", "product", "item.json"]);
    match cli.command {
        CliCommand::Product { path } => assert_eq!(path, "item.json"),
        other => panic!("expected Product, got {:?}", other),
    }
}

#[test]
fn unknown_mode_rejected() {
    assert!(Cli::try_parse_from(["assetref", "resolve", "x", "--mode", "all"]).is_err());
}

#[test]
fn api_origin_flag_bypasses_config_file() {
    let cfg = effective_config(Some("http://api:8080/api".to_string())).unwrap();
    assert_eq!(cfg.api_origin, "http://api:8080/api");
    assert_eq!(cfg.origins().unwrap().asset(), "http://api:8080");
}
