//! Instruction Fetch (IF) stage.

use crate::core::pipeline::Pipeline;
use crate::core::pipeline::latches::StageLatch;
use crate::isa;

/// Fetches the next instruction into the IF latch.
///
/// Does nothing while the IF slot is occupied (held by an upstream stall).
/// While the RAM is busy completing a write, the slot stays a bubble and the
/// lost cycle is charged to `ram_wait_cycles`. Otherwise the word at `pc` is
/// read, decoded, and probed against the instruction cache, and `pc`
/// advances by 4.
pub(crate) fn if_stage(p: &mut Pipeline<'_>) {
    if !p.if_id.bubble {
        return;
    }

    if p.ram.is_waiting() {
        p.stats.ram_wait_cycles += 1;
        return;
    }

    let pc = p.cpu.pc;
    let word = p.ram.read32(pc);
    let inst = isa::decode(word);

    if !p.icache.access(pc, false) {
        p.stats.cache_misses += 1;
    }

    if p.trace {
        eprintln!("IF  pc={:#010x} inst={:#010x}", pc, word);
    }

    p.if_id = StageLatch {
        pc,
        inst,
        bubble: false,
        stall: false,
        pred_taken: false,
    };
    p.cpu.pc = pc.wrapping_add(4);
}
