mod common;

use clap::Parser;
use common::temp_config;
use primeorder::cli::Cli;
use primeorder::config::ConfigError;
use primeorder::i18n::Locale;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("primeorder").chain(args.iter().copied()))
        .expect("valid arguments")
}

#[test]
fn config_flag_reads_the_named_file() {
    let (_dir, path) = temp_config("[i18n]\ninitial_locale = \"es\"\n");
    let cli = parse(&["--config", path.to_str().unwrap()]);
    let config = cli.load_config().unwrap();
    assert_eq!(config.i18n.startup_locale(), Locale::Es);
    assert_eq!(cli.initial_route(&config).as_path(), "/es");
}

#[test]
fn locale_flag_beats_config_file() {
    let (_dir, path) = temp_config("[i18n]\ninitial_locale = \"es\"\n");
    let cli = parse(&["--config", path.to_str().unwrap(), "--locale", "en"]);
    let config = cli.load_config().unwrap();
    assert_eq!(config.i18n.startup_locale(), Locale::En);
    assert_eq!(cli.initial_route(&config).as_path(), "/en");
}

#[test]
fn default_locale_from_config_drops_its_prefix() {
    let (_dir, path) = temp_config("[i18n]\ndefault_locale = \"en\"\n");
    let cli = parse(&["--config", path.to_str().unwrap(), "--url", "/en/about"]);
    let config = cli.load_config().unwrap();
    let route = cli.initial_route(&config);
    assert_eq!(route.locale(), Locale::En);
    assert_eq!(route.as_path(), "/about");
}

#[test]
fn invalid_config_file_is_an_error() {
    let (_dir, path) = temp_config("[toast]\nduration_ms = 999999\n");
    let cli = parse(&["--config", path.to_str().unwrap()]);
    assert!(matches!(
        cli.load_config(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn version_flag_is_available() {
    let err = Cli::try_parse_from(["primeorder", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
