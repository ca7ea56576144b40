//! Writeback (WB) stage.

use crate::core::pipeline::Pipeline;
use crate::isa::instruction::Instruction;
use crate::isa::{functs, opcodes};

/// True for encodings that count as completed instructions at retirement.
/// Unknown encodings flow through the pipe as no-ops and are excluded.
fn retires(inst: &Instruction) -> bool {
    match inst.opcode {
        opcodes::OP_LUI
        | opcodes::OP_IMM
        | opcodes::OP_LOAD_FP
        | opcodes::OP_STORE_FP
        | opcodes::OP_BRANCH
        | opcodes::OP_JAL => true,
        opcodes::OP_FP => inst.funct7 == functs::F7_FADD,
        _ => false,
    }
}

/// Retires the instruction in WB.
///
/// Architectural commits happen in Execute and Memory in this design;
/// Writeback is the single authoritative point where
/// `instructions_completed` advances, for a live, unstalled slot holding a
/// recognized opcode.
pub(crate) fn wb_stage(p: &mut Pipeline<'_>) {
    let latch = p.wb_latch;
    if latch.bubble || latch.stall {
        return;
    }

    if p.trace {
        eprintln!("WB  pc={:#010x} inst={:#010x}", latch.pc, latch.inst.raw);
    }

    if retires(&latch.inst) {
        p.stats.instructions_completed += 1;
    }
}
