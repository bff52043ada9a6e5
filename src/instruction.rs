use serde::{Deserialize, Serialize};

use crate::bits::{field, pack, sign_extend};
use crate::error::TranslateError;
use crate::isa::mips1::{IOpcode, JOpcode, RFunct};
use crate::registers::Reg;

/// One instruction, one variant per fixed 32-bit layout, plus the
/// privileged all-zero word.
///
/// Layouts, MSB first:
/// R: opcode=0(6) rs(5) rt(5) rd(5) shamt(5) funct(6)
/// I: opcode(6) rs(5) rt(5) immediate(16, signed)
/// J: opcode(6) address(26, unsigned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    Nop,
    R {
        funct: RFunct,
        rs: Reg,
        rt: Reg,
        rd: Reg,
        shamt: u8,
    },
    I {
        opcode: IOpcode,
        rs: Reg,
        rt: Reg,
        imm: i32,
    },
    J {
        opcode: JOpcode,
        target: i32,
    },
}

impl Instruction {
    /// Packs the instruction into its 32-bit word. Immediates and jump
    /// targets wrap modulo their field width.
    pub fn encode(&self) -> u32 {
        match *self {
            Instruction::Nop => 0,
            Instruction::R {
                funct,
                rs,
                rt,
                rd,
                shamt,
            } => {
                (rs.index() << 21)
                    | (rt.index() << 16)
                    | (rd.index() << 11)
                    | (pack(i64::from(shamt), 5) << 6)
                    | funct.code()
            }
            Instruction::I {
                opcode,
                rs,
                rt,
                imm,
            } => {
                (opcode.code() << 26)
                    | (rs.index() << 21)
                    | (rt.index() << 16)
                    | pack(i64::from(imm), 16)
            }
            Instruction::J { opcode, target } => {
                (opcode.code() << 26) | pack(i64::from(target), 26)
            }
        }
    }

    /// Unpacks a 32-bit word. Every candidate field is sliced up front;
    /// the opcode (and, for opcode 0, the funct) selects the variant.
    pub fn decode(word: u32) -> Result<Instruction, TranslateError> {
        let opcode = field(word, 26, 6);
        let rs = Reg::from_field(field(word, 21, 5));
        let rt = Reg::from_field(field(word, 16, 5));
        let rd = Reg::from_field(field(word, 11, 5));
        let shamt = field(word, 6, 5) as u8;
        let funct = field(word, 0, 6);
        let imm = sign_extend(field(word, 0, 16), 16);
        let target = field(word, 0, 26) as i32;

        if opcode == 0 {
            // Funct 0 is sll, except with all-zero operand fields, which is
            // the canonical nop (rs is not consulted).
            return match RFunct::from_code(funct) {
                Some(RFunct::Sll) if rd.index() == 0 && rt.index() == 0 && shamt == 0 => {
                    Ok(Instruction::Nop)
                }
                Some(funct) => Ok(Instruction::R {
                    funct,
                    rs,
                    rt,
                    rd,
                    shamt,
                }),
                None => Err(TranslateError::UnknownFunct(funct)),
            };
        }
        if let Some(opcode) = IOpcode::from_code(opcode) {
            return Ok(Instruction::I {
                opcode,
                rs,
                rt,
                imm,
            });
        }
        if let Some(opcode) = JOpcode::from_code(opcode) {
            return Ok(Instruction::J { opcode, target });
        }
        Err(TranslateError::UnknownOpcode(opcode))
    }
}
