use crate::instruction::Instruction;
use crate::isa::mips1::{IOpcode, RFunct};

/// Renders an instruction with exactly the operand order and separators the
/// encoder accepts, so a decoded line re-encodes to the same word.
pub fn fmt_instruction(inst: &Instruction) -> String {
    match *inst {
        Instruction::Nop => "nop".to_string(),
        Instruction::R {
            funct,
            rs,
            rt,
            rd,
            shamt,
        } => match funct {
            RFunct::Sll | RFunct::Srl => format!("{} {rd}, {rt}, {shamt}", funct.mnemonic()),
            RFunct::Jr => format!("jr {rs}"),
            _ => format!("{} {rd}, {rs}, {rt}", funct.mnemonic()),
        },
        Instruction::I {
            opcode,
            rs,
            rt,
            imm,
        } => match opcode {
            IOpcode::Lui => format!("lui {rt}, {imm}"),
            IOpcode::Lw | IOpcode::Sw => format!("{} {rt}, {imm}({rs})", opcode.mnemonic()),
            IOpcode::Beq | IOpcode::Bne => format!("{} {rs}, {rt}, {imm}", opcode.mnemonic()),
            IOpcode::Addi | IOpcode::Slti => format!("{} {rt}, {rs}, {imm}", opcode.mnemonic()),
        },
        Instruction::J { opcode, target } => format!("{} {target}", opcode.mnemonic()),
    }
}
