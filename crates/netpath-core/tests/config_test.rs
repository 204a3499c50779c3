use std::collections::HashMap;
use std::io::Write;

use netpath_core::config::*;
use netpath_core::errors::ConfigError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NetpathConfig::from_toml("").unwrap();

    assert_eq!(config.topology.self_loops, SelfLoopPolicy::Ignore);
    assert!(config.traversal.record_trace);

    assert_eq!(config.generator.node_count, 5);
    assert_eq!(config.generator.min_address, 1);
    assert_eq!(config.generator.max_address, 254);
    assert_eq!(config.generator.extra_edge_ratio, 0.5);
    assert!(config.generator.seed.is_none());

    assert_eq!(config.logging.filter, "netpath=info");
    assert!(!config.logging.json);

    assert!(config.validate().is_ok());
}

#[test]
fn config_partial_toml_overrides_only_named_keys() {
    let config = NetpathConfig::from_toml(
        r#"
        [topology]
        self_loops = "allow"

        [generator]
        node_count = 12
        seed = 99
        "#,
    )
    .unwrap();

    assert_eq!(config.topology.self_loops, SelfLoopPolicy::Allow);
    assert_eq!(config.generator.node_count, 12);
    assert_eq!(config.generator.seed, Some(99));
    assert_eq!(config.generator.max_address, 254);
    assert!(config.traversal.record_trace);
}

#[test]
fn config_rejects_unknown_self_loop_policy() {
    let result = NetpathConfig::from_toml("[topology]\nself_loops = \"forbid\"\n");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn config_validation_rejects_tiny_generator() {
    let mut config = NetpathConfig::default();
    config.generator.node_count = 1;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("generator.node_count"));
}

#[test]
fn config_validation_rejects_inverted_address_range() {
    let mut config = NetpathConfig::default();
    config.generator.min_address = 300;
    config.generator.max_address = 10;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn config_validation_rejects_negative_edge_ratio() {
    let mut config = NetpathConfig::default();
    config.generator.extra_edge_ratio = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn config_validation_rejects_oversized_generator() {
    let mut config = NetpathConfig::default();
    config.generator.extra_edge_ratio = 1e30;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("generator.extra_edge_ratio"));
    assert_eq!(
        config.generator.extra_edge_attempts(),
        (5.0 * netpath_core::constants::MAX_EXTRA_EDGE_RATIO) as usize
    );

    config.generator.extra_edge_ratio = f64::NAN;
    assert!(config.validate().is_err());
    assert_eq!(config.generator.extra_edge_attempts(), 0);

    let mut config = NetpathConfig::default();
    config.generator.node_count = netpath_core::constants::MAX_GENERATED_NODES + 1;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("generator.node_count"));

    config.generator.node_count = netpath_core::constants::MAX_GENERATED_NODES;
    assert!(config.validate().is_ok());
}

#[test]
fn oversized_node_count_from_env_fails_load_validation() {
    let mut config = NetpathConfig::default();
    config
        .apply_overrides_from(lookup(&[("NETPATH_GENERATOR_NODES", "18446744073709551615")]))
        .unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "generator.node_count"
    ));
}

#[test]
fn env_overrides_take_priority() {
    let mut config = NetpathConfig::default();
    config
        .apply_overrides_from(lookup(&[
            ("NETPATH_SELF_LOOPS", "ALLOW"),
            ("NETPATH_RECORD_TRACE", "false"),
            ("NETPATH_GENERATOR_SEED", "1234"),
            ("NETPATH_GENERATOR_NODES", "8"),
        ]))
        .unwrap();

    assert_eq!(config.topology.self_loops, SelfLoopPolicy::Allow);
    assert!(!config.traversal.record_trace);
    assert_eq!(config.generator.seed, Some(1234));
    assert_eq!(config.generator.node_count, 8);
}

#[test]
fn env_override_with_garbage_is_reported() {
    let mut config = NetpathConfig::default();
    let err = config
        .apply_overrides_from(lookup(&[("NETPATH_GENERATOR_SEED", "twelve")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "generator.seed"));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[traversal]\nrecord_trace = false").unwrap();

    let config = NetpathConfig::load(Some(file.path())).unwrap();
    assert!(!config.traversal.record_trace);
}

#[test]
fn load_missing_file_is_file_not_found() {
    let result = NetpathConfig::load(Some(std::path::Path::new("/definitely/not/here.toml")));
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = NetpathConfig::default();
    config.generator.seed = Some(7);
    let text = config.to_toml().unwrap();
    let parsed = NetpathConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.generator.seed, Some(7));
}

#[test]
fn extra_edge_attempts_floors() {
    let config = GeneratorConfig {
        node_count: 7,
        extra_edge_ratio: 0.5,
        ..Default::default()
    };
    assert_eq!(config.extra_edge_attempts(), 3);
}

mod properties {
    use proptest::prelude::*;

    use super::lookup;
    use netpath_core::config::{NetpathConfig, SelfLoopPolicy};

    proptest! {
        #[test]
        fn node_count_override_parses_any_usize(n in 0_usize..200_000) {
            let mut config = NetpathConfig::default();
            let raw = n.to_string();
            config.apply_overrides_from(lookup(&[("NETPATH_GENERATOR_NODES", raw.as_str())])).unwrap();
            prop_assert_eq!(config.generator.node_count, n);
            prop_assert_eq!(config.validate().is_ok(), n >= 2 && n <= netpath_core::constants::MAX_GENERATED_NODES);
        }

        #[test]
        fn self_loop_policy_names_are_case_insensitive(upper in proptest::bool::ANY, allow in proptest::bool::ANY) {
            let policy = if allow { SelfLoopPolicy::Allow } else { SelfLoopPolicy::Ignore };
            let name = if upper { policy.as_str().to_uppercase() } else { policy.as_str().to_string() };
            prop_assert_eq!(SelfLoopPolicy::from_str_name(&name), Some(policy));
        }
    }
}
