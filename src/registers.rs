use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TranslateError;

/// Architectural names of the 32 general-purpose registers, indexed by
/// their 5-bit encoding.
pub const NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp",
    "ra",
];

/// A register index in [0, 31]. The name set is fixed; nothing is added or
/// removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reg(u8);

pub const ZERO: Reg = Reg(0);

impl Reg {
    /// Parses an assembly operand token like `$t0`.
    pub fn parse(token: &str) -> Result<Reg, TranslateError> {
        let name = token
            .strip_prefix('$')
            .ok_or_else(|| TranslateError::UnknownRegister(token.to_string()))?;
        NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| Reg(i as u8))
            .ok_or_else(|| TranslateError::UnknownRegister(token.to_string()))
    }

    /// Total: the argument comes out of a 5-bit field, so it cannot miss.
    pub fn from_field(index: u32) -> Reg {
        Reg((index & 0x1F) as u8)
    }

    pub fn index(self) -> u32 {
        u32::from(self.0)
    }

    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.0)]
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_index_involution() {
        for name in NAMES {
            let reg = Reg::parse(&format!("${name}")).unwrap();
            assert_eq!(reg.name(), name);
        }
        for index in 0..32 {
            let reg = Reg::from_field(index);
            assert_eq!(Reg::parse(&reg.to_string()).unwrap().index(), index);
        }
    }

    #[test]
    fn rejects_unregistered_names() {
        assert_eq!(
            Reg::parse("$x9"),
            Err(TranslateError::UnknownRegister("$x9".into()))
        );
        // Missing sigil is not a register token at all.
        assert_eq!(
            Reg::parse("t0"),
            Err(TranslateError::UnknownRegister("t0".into()))
        );
    }
}
