//! Client settings deserialization tests

use stellar_data_config::{ClientSettings, NetworkType, BASE_FEE, PUBLIC_HORIZON_URL};

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let settings: ClientSettings = toml::from_str(
        r#"
        network = "public"
        timeout_secs = 10
        "#,
    )
    .unwrap();

    assert_eq!(settings.network, NetworkType::Public);
    assert_eq!(settings.horizon_url(), PUBLIC_HORIZON_URL);
    assert_eq!(settings.timeout_secs, 10);
    assert_eq!(settings.base_fee, BASE_FEE);
    assert_eq!(settings.tx_timeout_secs, 30);
}

#[test]
fn test_empty_toml_is_testnet() {
    let settings: ClientSettings = toml::from_str("").unwrap();
    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.network, NetworkType::Testnet);
}

#[test]
fn test_unknown_network_is_rejected() {
    let result = toml::from_str::<ClientSettings>(r#"network = "localnet""#);
    assert!(result.is_err());
}

#[test]
fn test_settings_roundtrip_through_toml() {
    let mut settings = ClientSettings::for_network(NetworkType::Futurenet);
    settings.horizon_url = Some("http://127.0.0.1:8000".to_string());
    settings.base_fee = 250;

    let text = toml::to_string(&settings).unwrap();
    let parsed: ClientSettings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}
