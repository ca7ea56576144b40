//! End-to-end run of the reference vector-add program at a reduced element
//! count: C[i] = A[i] + B[i] with A[i] = i + 1 and B[i] = 2i.

use crate::common;
use rv32sim_core::config::Config;
use rv32sim_core::isa::encode;
use rv32sim_core::sim;

const A_BASE: u32 = 0x1000;
const B_BASE: u32 = 0x2000;
const C_BASE: u32 = 0x3000;
const ELEMENTS: usize = 8;

/// Pointer setup, a nine-instruction loop body, and a jump-to-self
/// terminator at 0x34.
fn vector_add_program() -> Vec<u32> {
    vec![
        encode::lui(1, A_BASE >> 12),
        encode::lui(2, B_BASE >> 12),
        encode::lui(3, C_BASE >> 12),
        encode::addi(4, 0, ELEMENTS as i32),
        // loop:
        encode::flw(1, 1, 0),
        encode::flw(2, 2, 0),
        encode::fadd_s(3, 1, 2),
        encode::fsw(3, 3, 0),
        encode::addi(1, 1, 4),
        encode::addi(2, 2, 4),
        encode::addi(3, 3, 4),
        encode::addi(4, 4, -1),
        encode::bnez(4, -32),
        // done:
        encode::j(0),
    ]
}

#[test]
fn vector_add_end_to_end() {
    let program = vector_add_program();
    let halt_pc = (program.len() as u32 - 1) * 4;

    let mut ram = common::ram_with_program(&program);
    for i in 0..ELEMENTS {
        let offset = (i * 4) as u32;
        ram.write_float(A_BASE + offset, (i + 1) as f32);
        ram.write_float(B_BASE + offset, (2 * i) as f32);
        ram.write_float(C_BASE + offset, 0.0);
    }
    common::drain(&mut ram);

    let mut config = Config::default();
    config.run.halt_pc = Some(halt_pc);

    let outcome = sim::run(&mut ram, &config);
    assert!(outcome.halted, "must reach the terminator before the cap");

    for i in 0..ELEMENTS {
        let got = ram.read_float(C_BASE + (i * 4) as u32);
        let expected = (3 * i + 1) as f32;
        assert_eq!(got, expected, "C[{}]", i);
    }

    // One BNEZ resolution per iteration; only the loop exit mispredicts.
    assert_eq!(outcome.stats.total_branches, ELEMENTS as u64);
    assert_eq!(outcome.stats.branch_mispredictions, 1);

    // Four setup instructions plus nine per iteration retire; squashed
    // wrong-path slots never do.
    assert_eq!(
        outcome.stats.instructions_completed,
        4 + 9 * ELEMENTS as u64
    );

    // The interlocks and the store latency must both have been exercised;
    // each FSW leaves the RAM busy, which blocks the fetch stream.
    assert!(outcome.stats.data_hazard_stalls > 0);
    assert!(outcome.stats.ram_wait_cycles > 0);
    assert!(outcome.stats.cache_misses > 0);
    assert!(outcome.stats.total_cycles >= outcome.stats.instructions_completed);
}
