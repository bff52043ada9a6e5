use thiserror::Error;

/// Per-line translation failures. All are recoverable: the driver turns
/// each one into a single diagnostic output line and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unknown register {0}")]
    UnknownRegister(String),
    #[error("unknown mnemonic {0}")]
    UnknownMnemonic(String),
    #[error("unknown opcode {0:#08b}")]
    UnknownOpcode(u32),
    #[error("unknown funct {0:#08b}")]
    UnknownFunct(u32),
    #[error("malformed operand: {0}")]
    MalformedOperand(String),
    #[error("malformed word: {0}")]
    MalformedWord(String),
}
