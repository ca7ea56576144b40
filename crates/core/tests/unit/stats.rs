//! Statistics derived metrics and serialization.

use rv32sim_core::stats::Statistics;

#[test]
fn cpi_guards_division_by_zero() {
    let stats = Statistics::default();
    assert_eq!(stats.cpi(), 0.0);
}

#[test]
fn cpi_is_cycles_over_instructions() {
    let stats = Statistics {
        total_cycles: 100,
        instructions_completed: 40,
        ..Statistics::default()
    };
    assert_eq!(stats.cpi(), 2.5);
}

#[test]
fn misprediction_rate_over_resolved_branches() {
    let stats = Statistics {
        total_branches: 8,
        branch_mispredictions: 2,
        ..Statistics::default()
    };
    assert_eq!(stats.misprediction_rate(), 0.25);

    assert_eq!(Statistics::default().misprediction_rate(), 0.0);
}

#[test]
fn serializes_every_counter() {
    let stats = Statistics {
        total_cycles: 7,
        ..Statistics::default()
    };
    let json: serde_json::Value = serde_json::to_value(&stats).unwrap();

    for key in [
        "total_cycles",
        "instructions_completed",
        "data_hazard_stalls",
        "memory_stalls",
        "control_hazard_stalls",
        "ram_wait_cycles",
        "cache_misses",
        "branch_mispredictions",
        "exceptions",
        "total_branches",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["total_cycles"], 7);
}
