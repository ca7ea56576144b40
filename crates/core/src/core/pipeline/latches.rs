//! Pipeline latch structure for inter-stage communication.
//!
//! One latch sits between each pair of adjacent stages, recording the
//! instruction in flight. The `bubble` flag marks an empty (no-op) slot; the
//! `stall` flag is a producer-side hold honored by the next latch shift.

use crate::isa::Instruction;

/// A stage latch: PC, decoded instruction, and flow-control flags.
#[derive(Clone, Copy, Debug)]
pub struct StageLatch {
    /// Program counter of the instruction in this slot.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Empty slot; no architectural effect.
    pub bubble: bool,
    /// Producer-side hold: the next shift injects a bubble downstream and
    /// keeps this latch (and everything upstream) in place.
    pub stall: bool,
    /// Direction the predictor chose when this instruction was in Decode.
    /// Execute compares the resolved direction against it.
    pub pred_taken: bool,
}

impl StageLatch {
    /// An empty slot.
    pub fn bubble() -> Self {
        Self {
            pc: 0,
            inst: Instruction::default(),
            bubble: true,
            stall: false,
            pred_taken: false,
        }
    }
}

impl Default for StageLatch {
    fn default() -> Self {
        Self::bubble()
    }
}
