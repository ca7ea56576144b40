//! Hazard detection and forwarding-unit tests.
//!
//! Both functions are pure over latch snapshots, so the tests build
//! latches directly from decoded instructions.

use rv32sim_core::core::pipeline::hazards::{Forward, forward_sources, need_stall};
use rv32sim_core::core::pipeline::latches::StageLatch;
use rv32sim_core::isa::{decode, encode};

fn latch(word: u32) -> StageLatch {
    StageLatch {
        pc: 0,
        inst: decode(word),
        bubble: false,
        stall: false,
        pred_taken: false,
    }
}

// ──────────────────────────────────────────────────────────
// RAW stall detection
// ──────────────────────────────────────────────────────────

#[test]
fn stall_when_ex_produces_rs1() {
    let id = latch(encode::addi(3, 1, 0)); // reads x1
    let ex = latch(encode::addi(1, 0, 5)); // writes x1
    assert!(need_stall(&id, &ex, &StageLatch::bubble()));
}

#[test]
fn stall_when_mem_produces_rs2() {
    let id = latch(encode::fadd_s(3, 4, 2)); // rs2 field = 2
    let mem = latch(encode::flw(2, 5, 0)); // rd field = 2
    assert!(need_stall(&id, &StageLatch::bubble(), &mem));
}

#[test]
fn no_stall_for_x0_producer() {
    let id = latch(encode::addi(3, 0, 1)); // reads x0
    let ex = latch(encode::addi(0, 1, 1)); // "writes" x0
    assert!(!need_stall(&id, &ex, &StageLatch::bubble()));
}

#[test]
fn no_stall_against_bubbles() {
    let id = latch(encode::addi(3, 1, 0));
    assert!(!need_stall(&id, &StageLatch::bubble(), &StageLatch::bubble()));
}

#[test]
fn no_stall_without_register_match() {
    let id = latch(encode::addi(3, 1, 0));
    let ex = latch(encode::addi(2, 1, 0));
    let mem = latch(encode::addi(4, 1, 0));
    assert!(!need_stall(&id, &ex, &mem));
}

// ──────────────────────────────────────────────────────────
// Forwarding decisions (advisory)
// ──────────────────────────────────────────────────────────

#[test]
fn ex_mem_forwards_matching_sources() {
    let id_ex = latch(encode::addi(3, 1, 0));
    let ex_mem = latch(encode::addi(1, 2, 0));
    let (a, b) = forward_sources(&id_ex, &ex_mem, &StageLatch::bubble());
    assert_eq!(a, Forward::FromExMem);
    assert_eq!(b, Forward::None);
}

#[test]
fn ex_mem_outranks_mem_wb() {
    // Both older instructions write x1; the younger result wins.
    let id_ex = latch(encode::addi(3, 1, 0));
    let ex_mem = latch(encode::addi(1, 2, 0));
    let mem_wb = latch(encode::addi(1, 4, 0));
    let (a, _) = forward_sources(&id_ex, &ex_mem, &mem_wb);
    assert_eq!(a, Forward::FromExMem);
}

#[test]
fn mem_wb_fills_sources_ex_mem_does_not_cover() {
    // fadd.s f3, f1, f2: EX/MEM produces field 1, MEM/WB produces field 2.
    let id_ex = latch(encode::fadd_s(3, 1, 2));
    let ex_mem = latch(encode::flw(1, 5, 0));
    let mem_wb = latch(encode::flw(2, 5, 4));
    let (a, b) = forward_sources(&id_ex, &ex_mem, &mem_wb);
    assert_eq!(a, Forward::FromExMem);
    assert_eq!(b, Forward::FromMemWb);
}

#[test]
fn no_forwarding_from_x0_or_bubbles() {
    let id_ex = latch(encode::addi(3, 0, 0));
    let ex_mem = latch(encode::addi(0, 1, 0));
    let mut mem_wb = latch(encode::addi(0, 1, 0));
    mem_wb.bubble = true;
    let (a, b) = forward_sources(&id_ex, &ex_mem, &mem_wb);
    assert_eq!(a, Forward::None);
    assert_eq!(b, Forward::None);
}
