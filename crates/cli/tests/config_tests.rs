//! Configuration file loading and flag overrides.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use stellar_data_cli::{AppConfig, Cli, CredentialSource};
use stellar_data_config::NetworkType;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn file_settings_are_flattened() {
    let file = write_config(
        r#"
network = "public"
horizon_url = "http://localhost:8000"
base_fee = 250
tx_timeout_secs = 0
account = "GAQ3DMYZ37GE5YIYTN75N7KONOCUTOJTCSUZMIZ7SQ4L466GO77I65DM"
data_name = "greeting"
data_value = "hello"

[credential]
file = "/run/secrets/stellar"
"#,
    );

    let config = AppConfig::load(file.path()).unwrap();

    assert_eq!(config.client.network, NetworkType::Public);
    assert_eq!(config.client.horizon_url(), "http://localhost:8000");
    assert_eq!(config.client.base_fee, 250);
    assert_eq!(config.client.transaction_timeout(), None);
    assert_eq!(config.client.timeout_secs, 30);
    assert_eq!(config.data_name(), "greeting");
    assert_eq!(config.data_value(), "hello");
    assert_eq!(
        config.credential_source(),
        CredentialSource::File(PathBuf::from("/run/secrets/stellar"))
    );
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");

    let config = AppConfig::load(file.path()).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.client.network, NetworkType::Testnet);
    assert_eq!(config.data_name(), "example_key");
    assert_eq!(config.data_value(), "example_value");
    assert_eq!(config.credential_source(), CredentialSource::env("STELLAR_SECRET_KEY"));
}

#[test]
fn malformed_file_names_the_path() {
    let file = write_config("base_fee = \"cheap\"");

    let err = AppConfig::load(file.path()).unwrap_err();

    assert!(format!("{err:#}").contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(AppConfig::load(&path).is_err());
}

#[test]
fn flags_override_file_values() {
    let file = write_config(
        r#"
network = "public"
base_fee = 250

[credential]
env = "FROM_FILE"
"#,
    );
    let path = file.path().to_str().unwrap();

    let cli = Cli::parse_from([
        "manage-data",
        "--config",
        path,
        "--network",
        "futurenet",
        "--base-fee",
        "300",
        "--secret-env",
        "FROM_FLAG",
        "get",
        "--name",
        "k",
    ]);
    let config = AppConfig::resolve(&cli.global).unwrap();

    assert_eq!(config.client.network, NetworkType::Futurenet);
    assert_eq!(config.client.base_fee, 300);
    assert_eq!(config.credential_source(), CredentialSource::env("FROM_FLAG"));
}

#[test]
fn secret_file_flag_wins_over_secret_env() {
    let cli = Cli::parse_from([
        "manage-data",
        "--secret-env",
        "FROM_FLAG",
        "--secret-file",
        "/tmp/seed",
        "decode-result",
        "AAAA",
    ]);
    let config = AppConfig::resolve(&cli.global).unwrap();

    assert_eq!(config.credential_source(), CredentialSource::file("/tmp/seed"));
}
