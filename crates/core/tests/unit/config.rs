//! Configuration defaults and JSON deserialization.

use rv32sim_core::config::Config;

#[test]
fn defaults_match_the_modeled_hardware() {
    let config = Config::default();
    assert!(!config.trace);
    assert_eq!(config.memory.ram_size, 64 * 1024);
    assert_eq!(config.memory.write_wait_cycles, 2);
    assert_eq!(config.cache.size_bytes, 1024);
    assert_eq!(config.cache.block_bytes, 32);
    assert_eq!(config.cache.ways, 4);
    assert_eq!(config.predictor.entries, 1024);
    assert_eq!(config.run.max_cycles, 1_000_000);
    assert_eq!(config.run.halt_pc, None);
}

#[test]
fn partial_json_overrides_keep_remaining_defaults() {
    let config: Config = serde_json::from_str(
        r#"{
            "trace": true,
            "memory": { "ram_size": 4096 },
            "run": { "halt_pc": 52, "max_cycles": 5000 }
        }"#,
    )
    .unwrap();

    assert!(config.trace);
    assert_eq!(config.memory.ram_size, 4096);
    assert_eq!(config.memory.write_wait_cycles, 2, "untouched field keeps default");
    assert_eq!(config.cache.ways, 4);
    assert_eq!(config.run.halt_pc, Some(52));
    assert_eq!(config.run.max_cycles, 5000);
    assert_eq!(config.run.min_cycles, 16);
}

#[test]
fn empty_json_is_the_default_config() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.memory.ram_size, Config::default().memory.ram_size);
    assert_eq!(config.predictor.entries, Config::default().predictor.entries);
}
