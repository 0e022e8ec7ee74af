//! Tests for CLI parsing and defaults.

use super::*;
use rstest::rstest;

#[test]
fn cli_parses_defaults() {
    let cli = Cli::parse_from(["create-tslib"]);
    assert!(cli.dir.is_none());
    assert!(cli.answers.is_none());
    assert!(!cli.dry_run);
    assert!(!cli.skip_install);
    assert!(!cli.quiet);
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.no_color);
}

#[test]
fn cli_parses_dir_and_answers() {
    let cli = Cli::parse_from([
        "create-tslib",
        "-C",
        "my-lib",
        "--answers",
        "/tmp/answers.toml",
    ]);
    assert_eq!(cli.dir, Some(Utf8PathBuf::from("my-lib")));
    assert_eq!(cli.answers, Some(Utf8PathBuf::from("/tmp/answers.toml")));
}

#[test]
fn cli_parses_long_dir_flag() {
    let cli = Cli::parse_from(["create-tslib", "--dir", "lib"]);
    assert_eq!(cli.dir, Some(Utf8PathBuf::from("lib")));
}

#[test]
fn cli_parses_stage_switches() {
    let cli = Cli::parse_from(["create-tslib", "--dry-run", "--skip-install", "--no-color"]);
    assert!(cli.dry_run);
    assert!(cli.skip_install);
    assert!(cli.no_color);
}

#[test]
fn cli_rejects_quiet_with_verbose() {
    let result = Cli::try_parse_from(["create-tslib", "-q", "-v"]);
    assert!(result.is_err());
}

#[rstest]
#[case::none(&["create-tslib"], LevelFilter::Warn)]
#[case::one(&["create-tslib", "-v"], LevelFilter::Info)]
#[case::two(&["create-tslib", "-vv"], LevelFilter::Debug)]
#[case::many(&["create-tslib", "-vvvv"], LevelFilter::Trace)]
fn verbosity_maps_to_log_level(#[case] args: &[&str], #[case] expected: LevelFilter) {
    assert_eq!(Cli::parse_from(args).log_level(), expected);
}

#[test]
fn default_matches_parsed_defaults() {
    let parsed = Cli::parse_from(["create-tslib"]);
    let default = Cli::default();
    assert_eq!(parsed.dir, default.dir);
    assert_eq!(parsed.dry_run, default.dry_run);
    assert_eq!(parsed.verbosity, default.verbosity);
}
