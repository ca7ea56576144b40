//! Memory (MEM) stage.

use crate::core::pipeline::Pipeline;
use crate::isa::opcodes;

/// Performs the data-memory access for the instruction in MEM.
///
/// FLW and FSW compute `x[rs1] + imm` and access the RAM as a float. While
/// the RAM is still busy with an earlier write the access cannot start: the
/// cycle is charged to `memory_stalls` and the latch is marked stalled,
/// which injects a bubble into WB on the next shift and freezes the
/// upstream pipe until the RAM drains. The stage re-runs each cycle, so the
/// access retries until it completes.
///
/// Everything else passes through untouched.
pub(crate) fn mem_stage(p: &mut Pipeline<'_>) {
    if p.mem_wb.bubble {
        return;
    }

    let latch = p.mem_wb;
    let inst = latch.inst;

    match inst.opcode {
        opcodes::OP_LOAD_FP => {
            if p.ram.is_waiting() {
                p.stats.memory_stalls += 1;
                p.mem_wb.stall = true;
                return;
            }
            let addr = p.cpu.gpr.read(inst.rs1).wrapping_add(inst.imm as u32);
            let value = p.ram.read_float(addr);
            p.cpu.fpr.write(inst.rd, value);
            if p.trace {
                eprintln!("MEM pc={:#010x} flw f{} <- [{:#010x}] = {}", latch.pc, inst.rd, addr, value);
            }
        }
        opcodes::OP_STORE_FP => {
            if p.ram.is_waiting() {
                p.stats.memory_stalls += 1;
                p.mem_wb.stall = true;
                return;
            }
            let addr = p.cpu.gpr.read(inst.rs1).wrapping_add(inst.imm as u32);
            let value = p.cpu.fpr.read(inst.rs2);
            if let Some(false) = p.ram.write_float(addr, value) {
                p.stats.cache_misses += 1;
            }
            if p.trace {
                eprintln!("MEM pc={:#010x} fsw [{:#010x}] <- f{} = {}", latch.pc, addr, inst.rs2, value);
            }
        }
        _ => {}
    }
}
