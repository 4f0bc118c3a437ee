//! Integration tests for the public validator API
//!
//! These tests exercise the crate the way a hit builder would:
//! - per-field `is_*` / `validate_*` functions
//! - wire key resolution through `FieldRegistry`
//! - config loaded from a JSON file

use measurement_protocol_validator::{
    self as mp, FieldRegistry, UnknownKeys, ValidationError, ValidatorConfig,
};
use serde_json::{json, Map, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

/// Test: every `is_*` function rejects null
#[test]
fn test_all_predicates_reject_null() {
    let predicates: &[(&str, fn(&Value) -> bool)] = &[
        ("tid", mp::is_tid),
        ("aip", mp::is_aip),
        ("qt", mp::is_qt),
        ("cid", mp::is_cid),
        ("sc", mp::is_sc),
        ("uip", mp::is_uip),
        ("dr", mp::is_dr),
        ("dl", mp::is_dl),
        ("dh", mp::is_dh),
        ("dp", mp::is_dp),
        ("je", mp::is_je),
        ("t", mp::is_t),
        ("cu", mp::is_cu),
        ("pa", mp::is_pa),
        ("prpr", mp::is_prpr),
        ("ilpicm", mp::is_ilpicm),
        ("cd_n", mp::is_cd_n),
        ("cm_n", mp::is_cm_n),
        ("xid", mp::is_xid),
    ];

    for (name, predicate) in predicates {
        assert!(!predicate(&Value::Null), "is_{} should reject null", name);
    }
}

#[test]
fn test_documented_examples() {
    assert!(mp::is_tid(&json!("UA-1234-5")));
    assert!(!mp::is_tid(&json!("UA-XXXX-Y")));

    assert!(mp::is_cid(&json!("35009a79-1a05-49d7-b876-2b884d0f825b")));
    assert!(!mp::is_cid(&json!("35009a791a0549d7b8762b884d0f825b")));

    assert!(mp::is_uip(&json!("1.2.3.4")));
    assert!(mp::is_uip(&json!("2607:f0d0:1002:51::4")));
    assert!(mp::is_uip(&json!("2607:f0d0:1002:0051:0000:0000:0000:0004")));

    assert!(mp::is_dr(&json!("http://example.com")));
    assert!(!mp::is_dr(&json!("x".repeat(2049))));

    assert!(mp::is_cu(&json!("EUR")));
    assert!(!mp::is_cu(&json!("ZZZ")));

    assert!(mp::is_pa(&json!("detail")));
    assert!(!mp::is_pa(&json!("unknown_action")));
}

#[test]
fn test_validate_tid_error() {
    let err: ValidationError = mp::validate_tid(&json!("bad")).unwrap_err();
    assert!(err.to_string().contains("'tid'"));
    assert!(mp::validate_tid(&json!("UA-1234-5")).is_ok());
}

#[test]
fn test_ecommerce_hit() {
    let registry = FieldRegistry::new();
    let hit = as_map(json!({
        "v": 1,
        "tid": "UA-1234-5",
        "cid": "35009a79-1a05-49d7-b876-2b884d0f825b",
        "t": "transaction",
        "ti": "OD564",
        "ta": "Member",
        "tr": 15.47,
        "ts": 3.5,
        "tt": 11.20,
        "cu": "EUR",
        "pa": "purchase",
        "pr1pr": 15.47,
        "pr1qt": 1,
        "il1pi1ps": 2,
    }));

    let errors = registry.validate_params(&hit).unwrap_err();
    assert_eq!(errors.len(), 1, "only the unsupported 'v' key should fail");
    assert_eq!(errors[0].field, "v");

    let lenient = FieldRegistry::with_config(
        ValidatorConfig::new().with_unknown_keys(UnknownKeys::Ignore),
    );
    assert!(lenient.validate_params(&hit).is_ok());
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"unknown_keys": "ignore", "fail_fast": true}}"#).unwrap();

    let config = ValidatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.unknown_keys, UnknownKeys::Ignore);
    assert!(config.fail_fast);

    let registry = FieldRegistry::with_config(config);
    let hit = as_map(json!({"aip": 5, "cu": "XXX", "ni": 7, "zz": 1}));
    let errors = registry.validate_params(&hit).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "aip");
}

#[test]
fn test_catalog_export() {
    let exported = serde_json::to_value(mp::ALL_RULES).unwrap();
    let entries = exported.as_array().unwrap();
    assert_eq!(entries.len(), mp::ALL_RULES.len());
    assert!(entries.iter().any(|e| e["key"] == "cu" && e["rule"]["type"] == "currency_code"));
}

#[test]
fn test_validators_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let registry = FieldRegistry::new();
                let key = format!("cd{}", i + 1);
                registry.is_valid_param(&key, &json!("segment")) && mp::is_cu(&json!("USD"))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
