use super::*;
use docbar_core::config::{MissingFieldPolicy, SidebarFields};
use std::path::Path;

#[test]
fn cli_parse_render_defaults() {
    match parse(&["docbar", "render"]) {
        CliCommand::Render { source, output } => {
            assert!(source.config.is_none());
            assert!(output.is_none());
            assert!(!source.permissive);
            assert_eq!(source.policy(), MissingFieldPolicy::Strict);
            assert_eq!(source.overrides(), SidebarFields::default());
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_render_with_overrides() {
    match parse(&[
        "docbar",
        "render",
        "--config",
        "site/sidebar.toml",
        "--host",
        "example.com",
        "--version",
        "1.2.0",
        "-o",
        "out.html",
    ]) {
        CliCommand::Render { source, output } => {
            assert_eq!(source.config.as_deref(), Some(Path::new("site/sidebar.toml")));
            assert_eq!(output.as_deref(), Some(Path::new("out.html")));
            let overrides = source.overrides();
            assert_eq!(overrides.host.as_deref(), Some("example.com"));
            assert_eq!(overrides.version.as_deref(), Some("1.2.0"));
            assert!(overrides.base.is_none());
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_render_permissive() {
    match parse(&["docbar", "render", "--permissive"]) {
        CliCommand::Render { source, .. } => {
            assert_eq!(source.policy(), MissingFieldPolicy::Permissive)
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_init() {
    match parse(&["docbar", "init"]) {
        CliCommand::Init { config, force } => {
            assert!(config.is_none());
            assert!(!force);
        }
        _ => panic!("expected Init"),
    }
}

#[test]
fn cli_parse_init_force_with_path() {
    match parse(&["docbar", "init", "-c", "x.json", "--force"]) {
        CliCommand::Init { config, force } => {
            assert_eq!(config.as_deref(), Some(Path::new("x.json")));
            assert!(force);
        }
        _ => panic!("expected Init"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["docbar", "check", "--base", "CDF"]) {
        CliCommand::Check { source } => {
            assert_eq!(source.overrides().base.as_deref(), Some("CDF"))
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["docbar", "publish"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["docbar", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["docbar", "man"]), CliCommand::Man));
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
