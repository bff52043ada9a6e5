//! MIPS I integer subset: the three closed instruction-format tables.
//!
//! Opcode 0 always selects the register-register format and dispatches on
//! the funct field; every other recognized opcode belongs to exactly one of
//! the immediate or jump tables.

use serde::{Deserialize, Serialize};

/// Register-register operations, selected by funct when opcode == 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RFunct {
    Add,
    Sub,
    And,
    Or,
    Xor,
    Slt,
    Sll,
    Srl,
    Jr,
}

impl RFunct {
    pub const ALL: [RFunct; 9] = [
        RFunct::Add,
        RFunct::Sub,
        RFunct::And,
        RFunct::Or,
        RFunct::Xor,
        RFunct::Slt,
        RFunct::Sll,
        RFunct::Srl,
        RFunct::Jr,
    ];

    pub fn code(self) -> u32 {
        match self {
            RFunct::Add => 0x20,
            RFunct::Sub => 0x22,
            RFunct::And => 0x24,
            RFunct::Or => 0x25,
            RFunct::Xor => 0x26,
            RFunct::Slt => 0x2A,
            RFunct::Sll => 0x00,
            RFunct::Srl => 0x02,
            RFunct::Jr => 0x08,
        }
    }

    pub fn from_code(code: u32) -> Option<RFunct> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            RFunct::Add => "add",
            RFunct::Sub => "sub",
            RFunct::And => "and",
            RFunct::Or => "or",
            RFunct::Xor => "xor",
            RFunct::Slt => "slt",
            RFunct::Sll => "sll",
            RFunct::Srl => "srl",
            RFunct::Jr => "jr",
        }
    }

    pub fn from_mnemonic(mnemonic: &str) -> Option<RFunct> {
        Self::ALL.into_iter().find(|f| f.mnemonic() == mnemonic)
    }
}

/// Register-immediate operations, selected directly by opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IOpcode {
    Addi,
    Slti,
    Lui,
    Lw,
    Sw,
    Beq,
    Bne,
}

impl IOpcode {
    pub const ALL: [IOpcode; 7] = [
        IOpcode::Addi,
        IOpcode::Slti,
        IOpcode::Lui,
        IOpcode::Lw,
        IOpcode::Sw,
        IOpcode::Beq,
        IOpcode::Bne,
    ];

    pub fn code(self) -> u32 {
        match self {
            IOpcode::Addi => 0x08,
            IOpcode::Slti => 0x0A,
            IOpcode::Lui => 0x0F,
            IOpcode::Lw => 0x23,
            IOpcode::Sw => 0x2B,
            IOpcode::Beq => 0x04,
            IOpcode::Bne => 0x05,
        }
    }

    pub fn from_code(code: u32) -> Option<IOpcode> {
        Self::ALL.into_iter().find(|o| o.code() == code)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            IOpcode::Addi => "addi",
            IOpcode::Slti => "slti",
            IOpcode::Lui => "lui",
            IOpcode::Lw => "lw",
            IOpcode::Sw => "sw",
            IOpcode::Beq => "beq",
            IOpcode::Bne => "bne",
        }
    }

    pub fn from_mnemonic(mnemonic: &str) -> Option<IOpcode> {
        Self::ALL.into_iter().find(|o| o.mnemonic() == mnemonic)
    }
}

/// Jump operations, selected directly by opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JOpcode {
    J,
    Jal,
}

impl JOpcode {
    pub const ALL: [JOpcode; 2] = [JOpcode::J, JOpcode::Jal];

    pub fn code(self) -> u32 {
        match self {
            JOpcode::J => 0x02,
            JOpcode::Jal => 0x03,
        }
    }

    pub fn from_code(code: u32) -> Option<JOpcode> {
        Self::ALL.into_iter().find(|o| o.code() == code)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            JOpcode::J => "j",
            JOpcode::Jal => "jal",
        }
    }

    pub fn from_mnemonic(mnemonic: &str) -> Option<JOpcode> {
        Self::ALL.into_iter().find(|o| o.mnemonic() == mnemonic)
    }
}
