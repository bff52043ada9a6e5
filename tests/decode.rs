use pretty_assertions::assert_eq;

use mips32_rs::bits::render_word;
use mips32_rs::{decode_line, TranslateError};

fn decoded(word: u32) -> String {
    decode_line(&render_word(word)).unwrap().unwrap()
}

#[test]
fn published_vectors() {
    assert_eq!(
        decode_line("00000001001010100100000000100000").unwrap(),
        Some("add $t0, $t1, $t2".to_string())
    );
    assert_eq!(decode_line(&"0".repeat(32)).unwrap(), Some("nop".to_string()));
}

#[test]
fn operand_orders_per_variant() {
    assert_eq!(decoded(0x0009_4080), "sll $t0, $t1, 2");
    assert_eq!(decoded(0x0009_4082), "srl $t0, $t1, 2");
    assert_eq!(decoded(0x03E0_0008), "jr $ra");
    assert_eq!(decoded(0x3C08_0064), "lui $t0, 100");
    assert_eq!(decoded(0xAFA8_0008), "sw $t0, 8($sp)");
    assert_eq!(decoded(0x8FA8_FFFC), "lw $t0, -4($sp)");
    assert_eq!(decoded(0x1109_FFFF), "beq $t0, $t1, -1");
    assert_eq!(decoded(0x2008_0005), "addi $t0, $zero, 5");
    assert_eq!(decoded(0x0800_000A), "j 10");
}

#[test]
fn nop_requires_zero_rd_rt_shamt_only() {
    // funct 0 with nonzero rd is a shift, not a nop.
    assert_eq!(decoded(0x0000_4000), "sll $t0, $zero, 0");
    // rs is not consulted by the nop rule.
    assert_eq!(decoded(0x0120_0000), "nop");
}

#[test]
fn unknown_codes_are_classified() {
    assert_eq!(
        decode_line(&render_word(0x0000_003F)),
        Err(TranslateError::UnknownFunct(0x3F))
    );
    assert_eq!(
        decode_line(&render_word(0xFC00_0000)),
        Err(TranslateError::UnknownOpcode(0x3F))
    );
}

#[test]
fn jump_addresses_decode_unsigned() {
    // All 26 address bits set: a huge positive number, never -2.
    assert_eq!(decoded(0x0BFF_FFFE), "j 67108862");
}
