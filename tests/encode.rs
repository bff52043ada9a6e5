use pretty_assertions::assert_eq;

use mips32_rs::{encode_line, TranslateError};

fn encoded(line: &str) -> String {
    encode_line(line).unwrap().unwrap()
}

#[test]
fn published_vectors() {
    assert_eq!(encoded("add $t0, $t1, $t2"), "00000001001010100100000000100000");
    assert_eq!(encoded("addi $t0, $zero, 5"), "00100000000010000000000000000101");
    assert_eq!(encoded("j 10"), "00001000000000000000000000001010");
    assert_eq!(encoded("nop"), "0".repeat(32));
}

#[test]
fn one_instruction_of_each_shape() {
    // Hand-checked against the R/I/J field layouts.
    assert_eq!(encoded("jr $ra"), format!("{:032b}", 0x03E0_0008u32));
    assert_eq!(encoded("sll $t0, $t1, 2"), format!("{:032b}", 0x0009_4080u32));
    assert_eq!(encoded("lui $t0, 100"), format!("{:032b}", 0x3C08_0064u32));
    assert_eq!(encoded("sw $t0, 8($sp)"), format!("{:032b}", 0xAFA8_0008u32));
    assert_eq!(encoded("beq $t0, $t1, -1"), format!("{:032b}", 0x1109_FFFFu32));
}

#[test]
fn negative_immediates_wrap_to_sixteen_bits() {
    let bits = encoded("addi $t0, $zero, -5");
    assert_eq!(&bits[16..], "1111111111111011");
}

#[test]
fn directives_labels_blanks_and_comments_encode_to_nothing() {
    for line in [".data", ".text", "loop:", "", "   ", "# just a comment"] {
        assert_eq!(encode_line(line).unwrap(), None, "line {line:?}");
    }
}

#[test]
fn trailing_comments_are_discarded() {
    assert_eq!(
        encode_line("add $t0, $t1, $t2 # three registers").unwrap(),
        encode_line("add $t0, $t1, $t2").unwrap()
    );
}

#[test]
fn failure_kinds_are_classified() {
    assert_eq!(
        encode_line("add $t0, $t9, $x9"),
        Err(TranslateError::UnknownRegister("$x9".into()))
    );
    assert_eq!(
        encode_line("mul $t0, $t1, $t2"),
        Err(TranslateError::UnknownMnemonic("mul".into()))
    );
    assert!(matches!(
        encode_line("addi $t0, $t1, five"),
        Err(TranslateError::MalformedOperand(_))
    ));
}
