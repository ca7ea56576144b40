//! Disassembly of the supported subset for trace output.

use crate::isa::instruction::Instruction;
use crate::isa::{functs, opcodes};

/// Renders one instruction as assembly text.
///
/// Encodings outside the supported subset render as `.word <raw>`.
pub fn disasm(inst: &Instruction) -> String {
    match inst.opcode {
        opcodes::OP_LUI => format!("lui x{}, {:#x}", inst.rd, (inst.imm as u32) >> 12),
        opcodes::OP_IMM => format!("addi x{}, x{}, {}", inst.rd, inst.rs1, inst.imm),
        opcodes::OP_LOAD_FP => format!("flw f{}, {}(x{})", inst.rd, inst.imm, inst.rs1),
        opcodes::OP_STORE_FP => format!("fsw f{}, {}(x{})", inst.rs2, inst.imm, inst.rs1),
        opcodes::OP_FP if inst.funct7 == functs::F7_FADD => {
            format!("fadd.s f{}, f{}, f{}", inst.rd, inst.rs1, inst.rs2)
        }
        opcodes::OP_BRANCH => format!("bnez x{}, {}", inst.rs1, inst.imm),
        opcodes::OP_JAL if inst.rd == 0 => format!("j {}", inst.imm),
        opcodes::OP_JAL => format!("jal x{}, {}", inst.rd, inst.imm),
        _ => format!(".word {:#010x}", inst.raw),
    }
}
