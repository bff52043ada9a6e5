use tracing::debug;

use crate::bits::render_word;
use crate::error::TranslateError;
use crate::instruction::Instruction;
use crate::isa::mips1::{IOpcode, JOpcode, RFunct};
use crate::registers::{Reg, ZERO};

/// Everything from `#` onward is a comment.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Base-10 integer literal, optionally negative. Wraps to the target field
/// width at encode time.
fn parse_literal(token: &str) -> Result<i32, TranslateError> {
    token
        .parse::<i64>()
        .map(|v| v as i32)
        .map_err(|_| TranslateError::MalformedOperand(token.to_string()))
}

fn arity_error(mnemonic: &str) -> TranslateError {
    TranslateError::MalformedOperand(format!("wrong operand count for {mnemonic}"))
}

fn parse_r(funct: RFunct, operands: &[&str]) -> Result<Instruction, TranslateError> {
    let inst = match (funct, operands) {
        (RFunct::Jr, [rs]) => Instruction::R {
            funct,
            rs: Reg::parse(rs)?,
            rt: ZERO,
            rd: ZERO,
            shamt: 0,
        },
        (RFunct::Sll | RFunct::Srl, [rd, rt, shamt]) => Instruction::R {
            funct,
            rs: ZERO,
            rt: Reg::parse(rt)?,
            rd: Reg::parse(rd)?,
            // low 5 bits of the literal
            shamt: (parse_literal(shamt)? & 0x1F) as u8,
        },
        (
            RFunct::Add | RFunct::Sub | RFunct::And | RFunct::Or | RFunct::Xor | RFunct::Slt,
            [rd, rs, rt],
        ) => Instruction::R {
            funct,
            rs: Reg::parse(rs)?,
            rt: Reg::parse(rt)?,
            rd: Reg::parse(rd)?,
            shamt: 0,
        },
        _ => return Err(arity_error(funct.mnemonic())),
    };
    Ok(inst)
}

fn parse_i(opcode: IOpcode, operands: &[&str]) -> Result<Instruction, TranslateError> {
    let inst = match (opcode, operands) {
        (IOpcode::Lui, [rt, imm]) => Instruction::I {
            opcode,
            rs: ZERO,
            rt: Reg::parse(rt)?,
            imm: parse_literal(imm)?,
        },
        // `offset(base)` tokenizes to offset then base.
        (IOpcode::Lw | IOpcode::Sw, [rt, imm, rs]) => Instruction::I {
            opcode,
            rs: Reg::parse(rs)?,
            rt: Reg::parse(rt)?,
            imm: parse_literal(imm)?,
        },
        (IOpcode::Beq | IOpcode::Bne, [rs, rt, imm]) => Instruction::I {
            opcode,
            rs: Reg::parse(rs)?,
            rt: Reg::parse(rt)?,
            imm: parse_literal(imm)?,
        },
        (IOpcode::Addi | IOpcode::Slti, [rt, rs, imm]) => Instruction::I {
            opcode,
            rs: Reg::parse(rs)?,
            rt: Reg::parse(rt)?,
            imm: parse_literal(imm)?,
        },
        _ => return Err(arity_error(opcode.mnemonic())),
    };
    Ok(inst)
}

fn parse_j(opcode: JOpcode, operands: &[&str]) -> Result<Instruction, TranslateError> {
    match operands {
        [target] => Ok(Instruction::J {
            opcode,
            target: parse_literal(target)?,
        }),
        _ => Err(arity_error(opcode.mnemonic())),
    }
}

/// Splits an instruction body into mnemonic and operand tokens. Commas and
/// the `offset(base)` parentheses are plain delimiters, not retained.
fn parse_instruction(text: &str) -> Result<Instruction, TranslateError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c == '(' || c == ')' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    let Some((first, operands)) = tokens.split_first() else {
        return Err(TranslateError::MalformedOperand(text.to_string()));
    };
    let mnemonic = first.to_lowercase();

    if let Some(funct) = RFunct::from_mnemonic(&mnemonic) {
        return parse_r(funct, operands);
    }
    if let Some(opcode) = IOpcode::from_mnemonic(&mnemonic) {
        return parse_i(opcode, operands);
    }
    if let Some(opcode) = JOpcode::from_mnemonic(&mnemonic) {
        return parse_j(opcode, operands);
    }
    Err(TranslateError::UnknownMnemonic(mnemonic))
}

/// Translates one source line into its 32-bit word, rendered as 32 `0`/`1`
/// characters. Blank, comment-only, directive (`.`) and label (`:`) lines
/// translate to nothing.
pub fn encode_line(line: &str) -> Result<Option<String>, TranslateError> {
    let text = strip_comment(line).trim();
    if text.is_empty() || text.starts_with('.') || text.ends_with(':') {
        debug!(line, "skipping non-instruction line");
        return Ok(None);
    }
    // The privileged literal: no tokenization, no table row.
    if text == "nop" {
        return Ok(Some(render_word(0)));
    }
    let inst = parse_instruction(text)?;
    Ok(Some(render_word(inst.encode())))
}
