//! Data hazard detection and the advisory forwarding unit.
//!
//! Both functions are pure over latch snapshots. The hazard check drives the
//! Decode-stage interlock; the forwarding unit only reports where a source
//! operand *could* be forwarded from; Execute reads the architectural
//! register file, so the decision carries no data.
//!
//! The check compares the raw rd/rs fields without distinguishing the
//! integer and float register namespaces; the supported subset shares the
//! field layout across both.

use crate::core::pipeline::latches::StageLatch;

/// Forward-source selection for one operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Forward {
    /// Read from the register file.
    #[default]
    None,
    /// The EX/MEM latch holds the producing instruction.
    FromExMem,
    /// The MEM/WB latch holds the producing instruction.
    FromMemWb,
}

/// Returns true when the instruction in Decode must stall.
///
/// A stall is required iff the EX or MEM latch holds a live instruction
/// whose `rd` is nonzero and matches the decoding instruction's rs1 or rs2.
pub fn need_stall(id: &StageLatch, ex: &StageLatch, mem: &StageLatch) -> bool {
    let depends_on = |older: &StageLatch| {
        !older.bubble
            && older.inst.rd != 0
            && (id.inst.rs1 == older.inst.rd || id.inst.rs2 == older.inst.rd)
    };
    depends_on(ex) || depends_on(mem)
}

/// Maps the three back-end latch snapshots to forward-source selections for
/// the instruction in ID/EX.
///
/// EX/MEM wins for each source it produces; MEM/WB fills any source not
/// already covered. Producers with `rd == 0` and bubbles never forward.
pub fn forward_sources(
    id_ex: &StageLatch,
    ex_mem: &StageLatch,
    mem_wb: &StageLatch,
) -> (Forward, Forward) {
    let mut forward_a = Forward::None;
    let mut forward_b = Forward::None;

    if !ex_mem.bubble && ex_mem.inst.rd != 0 {
        if id_ex.inst.rs1 == ex_mem.inst.rd {
            forward_a = Forward::FromExMem;
        }
        if id_ex.inst.rs2 == ex_mem.inst.rd {
            forward_b = Forward::FromExMem;
        }
    }

    if !mem_wb.bubble && mem_wb.inst.rd != 0 {
        if forward_a == Forward::None && id_ex.inst.rs1 == mem_wb.inst.rd {
            forward_a = Forward::FromMemWb;
        }
        if forward_b == Forward::None && id_ex.inst.rs2 == mem_wb.inst.rd {
            forward_b = Forward::FromMemWb;
        }
    }

    (forward_a, forward_b)
}
