//! Exception definitions.
//!
//! This module defines the fatal-exception channel of the simulator. An
//! exception latched on the CPU state is handled at the start of the next
//! cycle with a diagnostic and a full pipeline reset; there is no precise
//! replay.

use std::fmt;

/// Exception categories recognized by the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionKind {
    /// An opcode outside the supported subset reached Execute.
    ///
    /// Reserved: the current design treats unknown opcodes as no-ops and
    /// never latches this kind itself.
    InvalidInstruction,

    /// A 32-bit access extended past the RAM bounds.
    ///
    /// Reserved: out-of-range writes are dropped and reads return zero
    /// without latching.
    MemoryAccessFault,

    /// Division by zero.
    ///
    /// Reserved: no divide instructions are defined in the subset.
    DivideByZero,
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExceptionKind::InvalidInstruction => write!(f, "InvalidInstruction"),
            ExceptionKind::MemoryAccessFault => write!(f, "MemoryAccessFault"),
            ExceptionKind::DivideByZero => write!(f, "DivideByZero"),
        }
    }
}

/// A latched exception: kind, faulting PC, and a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exception {
    /// Exception category.
    pub kind: ExceptionKind,
    /// Program counter of the faulting instruction.
    pub pc: u32,
    /// Human-readable description for the diagnostic.
    pub message: String,
}

impl Exception {
    /// Creates a new exception record.
    pub fn new(kind: ExceptionKind, pc: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            pc,
            message: message.into(),
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at pc={:#010x}: {}", self.kind, self.pc, self.message)
    }
}

impl std::error::Error for Exception {}
