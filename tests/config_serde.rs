#![cfg(feature = "serde")]

use std::time::Duration;
use strategic_retry::{cookbook, retry, BackoffConfig, ConfigError};

#[test]
fn backoff_config_round_trips_through_json() {
    let config =
        BackoffConfig::new(Duration::from_millis(50), Duration::from_secs(2), Duration::from_millis(10))
            .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: BackoffConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn jitter_defaults_to_zero_when_omitted() {
    let json = r#"{
        "minimum_wait": { "secs": 0, "nanos": 1000000 },
        "maximum_wait": { "secs": 1, "nanos": 0 }
    }"#;
    let config: BackoffConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.jitter(), Duration::ZERO);
    assert_eq!(config.validate(), Ok(config));
}

#[test]
fn inverted_bounds_are_rejected_on_load() {
    let json = r#"{
        "minimum_wait": { "secs": 5, "nanos": 0 },
        "maximum_wait": { "secs": 1, "nanos": 0 },
        "jitter": { "secs": 0, "nanos": 0 }
    }"#;
    let err = serde_json::from_str::<BackoffConfig>(json).unwrap_err();
    let expected = ConfigError::MaxLessThanMin {
        min: Duration::from_secs(5),
        max: Duration::from_secs(1),
    };
    assert!(err.to_string().contains(&expected.to_string()), "error was: {}", err);
}

#[test]
fn maximum_above_cap_is_rejected_on_load() {
    let json = r#"{
        "minimum_wait": { "secs": 1, "nanos": 0 },
        "maximum_wait": { "secs": 2592000, "nanos": 0 }
    }"#;
    let err = serde_json::from_str::<BackoffConfig>(json).unwrap_err();
    assert!(err.to_string().contains("backoff cap"), "error was: {}", err);
}

#[test]
fn loaded_config_drives_a_retry_run() {
    let json = r#"{
        "minimum_wait": { "secs": 0, "nanos": 0 },
        "maximum_wait": { "secs": 0, "nanos": 0 }
    }"#;
    let config: BackoffConfig = serde_json::from_str(json).unwrap();
    let mut calls = 0;
    let result: Result<(), &str> = retry(
        || {
            calls += 1;
            Err("down")
        },
        cookbook::bounded_backoff(3, config),
    );
    assert_eq!(result, Err("down"));
    assert_eq!(calls, 3);
}
