use tracing::debug;

use crate::bits::parse_word;
use crate::disasm::fmt_instruction;
use crate::error::TranslateError;
use crate::instruction::Instruction;

/// Translates one line holding a 32-bit word (32 `0`/`1` characters) back
/// into assembly text. Empty lines and the inert `#` line translate to
/// nothing.
pub fn decode_line(line: &str) -> Result<Option<String>, TranslateError> {
    let text = line.trim();
    if text.is_empty() || text == "#" {
        debug!(line, "skipping non-word line");
        return Ok(None);
    }
    let word = parse_word(text)?;
    let inst = Instruction::decode(word)?;
    Ok(Some(fmt_instruction(&inst)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_sentinel_lines_are_inert() {
        assert_eq!(decode_line("").unwrap(), None);
        assert_eq!(decode_line("   ").unwrap(), None);
        assert_eq!(decode_line("#").unwrap(), None);
    }

    #[test]
    fn short_or_nonbinary_lines_are_malformed() {
        assert!(matches!(
            decode_line("0101"),
            Err(TranslateError::MalformedWord(_))
        ));
        assert!(matches!(
            decode_line("0000000000000000000000000000002x"),
            Err(TranslateError::MalformedWord(_))
        ));
    }
}
