use clap::{CommandFactory, FromArgMatches, Parser};
use linkograph::config::{Config, RegressionWeights, ScoringBackend};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let mut argv = vec!["test"];
    argv.extend_from_slice(args);
    let matches = TestCli::command().get_matches_from(argv);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_cli_defaults_match_serde_defaults() {
    let (cli, _) = parse(&[]);
    let default = Config::default();
    assert_eq!(cli.lattice, default.lattice);
    assert_eq!(cli.regression, default.regression);
    assert_eq!(cli.service.backend, ScoringBackend::Local);
    assert_eq!(cli.service.scoring_url, default.service.scoring_url);
    assert_eq!(default.lattice.max_diagonal().unwrap(), 60);
}

#[test]
fn test_partial_profile_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("profile.json");
    let mut f = File::create(&path).unwrap();
    writeln!(
        f,
        r#"{{
            "lattice": {{ "canvas_height": 200.0 }},
            "service": {{ "backend": "remote", "scoring_url": "http://scores:9000" }}
        }}"#
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.lattice.canvas_height, 200.0);
    assert_eq!(config.lattice.canvas_padding, 40.0);
    assert_eq!(config.lattice.max_diagonal().unwrap(), 3);
    assert_eq!(config.regression, RegressionWeights::default());
    assert_eq!(config.service.backend, ScoringBackend::Remote);
    assert_eq!(config.service.timeout_secs, 10);
}

#[test]
fn test_missing_or_broken_profile() {
    assert!(Config::load_from_file("/definitely/not/here.json").is_err());

    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ lattice: ").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    let path = dir.path().join("bad_spacing.json");
    std::fs::write(&path, r#"{"lattice": {"diagonal_spacing": -1.0}}"#).unwrap();
    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_cli_overrides_only_explicit_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("profile.json");
    std::fs::write(
        &path,
        r#"{"lattice": {"max_diagonal": 5}, "regression": {"intercept": -10.0, "coef_run_sum": 0.5}}"#,
    )
    .unwrap();

    let mut config = Config::load_from_file(&path).unwrap();
    let (cli, matches) = parse(&["--intercept", "-3.5", "--backend", "remote"]);
    config.merge_from_cli(&cli, &matches);

    assert_eq!(config.regression.intercept, -3.5);
    assert_eq!(config.regression.coef_run_sum, 0.5);
    assert_eq!(config.lattice.max_diagonal, Some(5));
    assert_eq!(config.service.backend, ScoringBackend::Remote);
}
