//! CLI parse tests, split per store.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}


#[test]
fn cli_parse_global_paths() {
    let cli = parse(&[
        "lexicon",
        "--urls-file",
        "/tmp/urls.json",
        "url",
        "list",
        "--exceptions-file",
        "/tmp/exceptions.json",
    ]);
    assert_eq!(cli.urls_file.as_deref(), Some(std::path::Path::new("/tmp/urls.json")));
    assert_eq!(
        cli.exceptions_file.as_deref(),
        Some(std::path::Path::new("/tmp/exceptions.json"))
    );
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_completions() {
    match parse(&["lexicon", "completions", "bash"]).command {
        super::CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash)
        }
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_missing_subcommand() {
    assert!(Cli::try_parse_from(["lexicon"]).is_err());
}

#[test]
fn cli_run_uses_explicit_files_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let exceptions = dir.path().join("exceptions.json");
    let config = dir.path().join("config.toml");
    let exceptions_arg = exceptions.to_string_lossy().into_owned();
    let config_arg = config.to_string_lossy().into_owned();

    parse(&[
        "lexicon",
        "--config",
        &config_arg,
        "--exceptions-file",
        &exceptions_arg,
        "exception",
        "add",
        "timeout",
        "Request timed out",
    ])
    .run()
    .unwrap();

    assert!(config.exists(), "default config should be created");
    let store = lexicon_core::ExceptionManager::open(&exceptions);
    assert_eq!(store.get("timeout"), Some("Request timed out"));
}
