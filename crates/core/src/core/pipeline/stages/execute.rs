//! Execute (EX) stage.

use crate::core::pipeline::Pipeline;
use crate::core::pipeline::hazards;
use crate::isa::{functs, opcodes};

/// Executes the instruction in EX and resolves branches.
///
/// Integer and FP-arithmetic results commit to the architectural register
/// files here (memory operations commit in MEM). The stage runs only on a
/// freshly loaded latch: a latch held in place by a memory freeze must not
/// re-execute, because commits such as `addi x1, x1, 4` are not idempotent.
///
/// The forwarding unit's decision is computed and reported on the trace
/// channel, but operands are read from the register file; see
/// [`hazards::forward_sources`].
pub(crate) fn ex_stage(p: &mut Pipeline<'_>) {
    if !p.ex_fresh || p.ex_mem.bubble {
        return;
    }

    let latch = p.ex_mem;
    let inst = latch.inst;

    // Advisory only: the decision is reported, the operands below still
    // come from the register file.
    let (fwd_a, fwd_b) = hazards::forward_sources(&p.ex_mem, &p.mem_wb, &p.wb_latch);

    if p.trace {
        eprintln!(
            "EX  pc={:#010x} inst={:#010x} (rs1={}, rs2={}, rd={}) fwd=({:?}, {:?})",
            latch.pc, inst.raw, inst.rs1, inst.rs2, inst.rd, fwd_a, fwd_b
        );
    }

    match inst.opcode {
        opcodes::OP_LUI => {
            p.cpu.gpr.write(inst.rd, inst.imm as u32);
        }
        opcodes::OP_IMM => {
            let value = p.cpu.gpr.read(inst.rs1).wrapping_add(inst.imm as u32);
            p.cpu.gpr.write(inst.rd, value);
        }
        opcodes::OP_FP if inst.funct7 == functs::F7_FADD => {
            let value = p.cpu.fpr.read(inst.rs1) + p.cpu.fpr.read(inst.rs2);
            p.cpu.fpr.write(inst.rd, value);
        }
        opcodes::OP_BRANCH => {
            p.stats.total_branches += 1;
            let taken = p.cpu.gpr.read(inst.rs1) != 0;
            p.predictor.update(latch.pc, taken);

            if taken != latch.pred_taken {
                p.stats.branch_mispredictions += 1;
                p.stats.control_hazard_stalls += 2;
                let target = if taken {
                    latch.pc.wrapping_add(inst.imm as u32)
                } else {
                    latch.pc.wrapping_add(4)
                };
                if p.trace {
                    eprintln!(
                        "EX  pc={:#010x} # mispredict ({} predicted, {} resolved), redirect to {:#010x}",
                        latch.pc,
                        if latch.pred_taken { "taken" } else { "not taken" },
                        if taken { "taken" } else { "not taken" },
                        target
                    );
                }
                p.request_redirect(target, true);
            }
        }
        opcodes::OP_JAL => {
            if inst.rd != 0 {
                p.cpu.gpr.write(inst.rd, latch.pc.wrapping_add(4));
            }
            // Unconditional transfer the fetch stream did not anticipate:
            // the two younger slots are squashed, same cost as a mispredict.
            p.stats.control_hazard_stalls += 2;
            p.request_redirect(latch.pc.wrapping_add(inst.imm as u32), true);
        }
        // Unknown opcodes pass through as no-ops.
        _ => {}
    }
}
