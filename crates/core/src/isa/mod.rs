//! Instruction set definitions for the supported RV32 subset.

pub mod decode;
pub mod disasm;
pub mod encode;
pub mod instruction;

pub use decode::decode;
pub use instruction::Instruction;

/// Opcode constants for the supported subset.
pub mod opcodes {
    /// LUI: load upper immediate (U-type).
    pub const OP_LUI: u32 = 0x37;
    /// ADDI: add immediate (I-type).
    pub const OP_IMM: u32 = 0x13;
    /// FLW: float load word (I-type).
    pub const OP_LOAD_FP: u32 = 0x07;
    /// FSW: float store word (S-type).
    pub const OP_STORE_FP: u32 = 0x27;
    /// FADD.S and the rest of the FP register-register space (R-type).
    pub const OP_FP: u32 = 0x53;
    /// BNEZ: branch if rs1 nonzero (B-type).
    pub const OP_BRANCH: u32 = 0x63;
    /// JAL: jump and link (J-type); `J` is JAL with rd = x0.
    pub const OP_JAL: u32 = 0x6F;
}

/// funct3/funct7 values used by the supported encodings.
pub mod functs {
    /// funct3 for FLW/FSW (32-bit float access).
    pub const F3_WORD: u32 = 0b010;
    /// funct3 for BNE (BNEZ encodes as BNE rs1, x0).
    pub const F3_BNE: u32 = 0b001;
    /// funct7 for FADD.S.
    pub const F7_FADD: u32 = 0b0000000;
}
