//! Instruction Decode (ID) stage.

use crate::core::pipeline::Pipeline;
use crate::core::pipeline::hazards;
use crate::isa::{disasm, opcodes};

/// Runs hazard detection and branch prediction for the instruction in ID.
///
/// On a RAW hazard against EX or MEM the latch is marked stalled: the next
/// shift injects a bubble into EX and holds ID and IF in place, so the
/// instruction is re-decoded next cycle. Decode is skipped entirely on a
/// memory-frozen cycle; the pipe is held for the RAM, not for a data hazard.
///
/// A BNEZ that survives the hazard check consults the predictor. The chosen
/// direction is recorded in the latch for Execute to verify; a taken
/// prediction requests a front-end redirect to `pc + imm`, squashing only
/// the fetch slot behind it.
pub(crate) fn id_stage(p: &mut Pipeline<'_>) {
    if p.mem_frozen || p.id_ex.bubble {
        return;
    }

    if hazards::need_stall(&p.id_ex, &p.ex_mem, &p.mem_wb) {
        p.stats.data_hazard_stalls += 1;
        p.id_ex.stall = true;
        if p.trace {
            eprintln!("ID  pc={:#010x} # RAW hazard, stall", p.id_ex.pc);
        }
        return;
    }

    let latch = p.id_ex;
    if p.trace {
        eprintln!("ID  pc={:#010x} {}", latch.pc, disasm::disasm(&latch.inst));
    }

    if latch.inst.opcode == opcodes::OP_BRANCH {
        let taken = p.predictor.predict(latch.pc);
        p.id_ex.pred_taken = taken;
        // An older redirect from Execute outranks the prediction: this
        // instruction is on the wrong path and about to be squashed.
        if taken && p.redirect.is_none() {
            p.request_redirect(latch.pc.wrapping_add(latch.inst.imm as u32), false);
        }
    }
}
