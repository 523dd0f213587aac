use hexcraft_core::model::{BinaryMode, TextEncoding};
use hexcraft_core::services::binary::{
    hex_to_binary, numbers_to_binary, parse_leading_integer, text_to_binary,
};
use hexcraft_core::services::convert_to_binary;

#[test]
fn ascii_letter() {
    assert_eq!(text_to_binary("A", TextEncoding::Ascii), "01000001");
    assert_eq!(text_to_binary("Hi", TextEncoding::Ascii), "01001000 01101001");
}

#[test]
fn utf16_letter_is_sixteen_bits() {
    assert_eq!(text_to_binary("A", TextEncoding::Utf16), "0000000001000001");
}

#[test]
fn utf8_multibyte_character_yields_one_group_per_byte() {
    // U+4E16 encodes as E4 B8 96.
    assert_eq!(text_to_binary("世", TextEncoding::Utf8), "11100100 10111000 10010110");
}

#[test]
fn ascii_mode_does_not_truncate_wide_code_units() {
    // U+4E16 is rendered at its full width.
    assert_eq!(text_to_binary("世", TextEncoding::Ascii), "100111000010110");
}

#[test]
fn astral_characters_are_walked_by_code_unit() {
    // U+1F30D is the surrogate pair D83C DF0D.
    assert_eq!(
        text_to_binary("🌍", TextEncoding::Utf16),
        "1101100000111100 1101111100001101"
    );
    // Each lone half re-encodes as U+FFFD.
    assert_eq!(
        text_to_binary("🌍", TextEncoding::Utf8),
        "11101111 10111111 10111101 11101111 10111111 10111101"
    );
}

#[test]
fn empty_text_yields_empty_output() {
    for encoding in TextEncoding::ALL {
        assert_eq!(text_to_binary("", encoding), "");
    }
}

#[test]
fn machine_listing_is_rerendered_per_octet() {
    assert_eq!(hex_to_binary("00000000: 48 89 e5\n"), "00000000: 01001000 10001001 11100101");
}

#[test]
fn machine_listing_keeps_odd_lines_and_tokens() {
    let listing = "00000000: c3\nnot a listing line\n\n00000004: 50 zz 123\na: b: c\n";
    assert_eq!(
        hex_to_binary(listing),
        "00000000: 11000011\nnot a listing line\n00000004: 01010000 zz 123\na: b: c"
    );
}

#[test]
fn machine_listing_blank_input() {
    assert_eq!(hex_to_binary(""), "");
    assert_eq!(hex_to_binary(" \n\n"), "");
}

#[test]
fn numbers_mode_renders_decimal_and_binary() {
    assert_eq!(numbers_to_binary("42"), "42 (decimal) = 101010 (binary)");
    assert_eq!(
        numbers_to_binary("42\n255\n\n1024"),
        "42 (decimal) = 101010 (binary)\n\
         255 (decimal) = 11111111 (binary)\n\
         1024 (decimal) = 10000000000 (binary)"
    );
}

#[test]
fn numbers_mode_falls_back_to_ascii_for_text() {
    assert_eq!(numbers_to_binary("hi"), "\"hi\" = 01101000 01101001");
}

#[test]
fn numbers_mode_reads_leading_digits_and_signs() {
    assert_eq!(numbers_to_binary("  12px "), "12 (decimal) = 1100 (binary)");
    assert_eq!(numbers_to_binary("-5"), "-5 (decimal) = -101 (binary)");
    assert_eq!(numbers_to_binary("007"), "7 (decimal) = 111 (binary)");
    assert_eq!(numbers_to_binary("-0"), "0 (decimal) = 0 (binary)");
}

#[test]
fn leading_integer_parser_edges() {
    assert_eq!(parse_leading_integer("+9"), Some(9));
    assert_eq!(parse_leading_integer("-"), None);
    assert_eq!(parse_leading_integer("x1"), None);
    assert_eq!(parse_leading_integer(&"9".repeat(60)), None);
    assert_eq!(
        parse_leading_integer("-170141183460469231731687303715884105728"),
        Some(i128::MIN)
    );
}

#[test]
fn numbers_mode_trims_byte_order_mark() {
    assert_eq!(numbers_to_binary("\u{feff}42"), "42 (decimal) = 101010 (binary)");
    assert_eq!(numbers_to_binary("\u{feff}"), "");
    assert_eq!(hex_to_binary("\u{feff}\n"), "");
}

#[test]
fn numbers_mode_blank_input() {
    assert_eq!(numbers_to_binary(""), "");
    assert_eq!(numbers_to_binary("\n  \n"), "");
}

#[test]
fn dispatcher_routes_by_mode() {
    let listing = "00000000: ff\n";
    assert_eq!(convert_to_binary("A", BinaryMode::Text, TextEncoding::Utf16, None), "0000000001000001");
    assert_eq!(
        convert_to_binary("ignored", BinaryMode::Machine, TextEncoding::Ascii, Some(listing)),
        "00000000: 11111111"
    );
    assert_eq!(convert_to_binary("ignored", BinaryMode::Machine, TextEncoding::Ascii, None), "");
    assert_eq!(
        convert_to_binary("3", BinaryMode::Numbers, TextEncoding::Utf8, None),
        "3 (decimal) = 11 (binary)"
    );
}

#[test]
fn encoder_is_deterministic() {
    let input = "Hello 世界 🌍";
    for encoding in TextEncoding::ALL {
        assert_eq!(text_to_binary(input, encoding), text_to_binary(input, encoding));
    }
}
