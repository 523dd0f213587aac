//! Binary-digit renderings of text, hex listings, and decimal numbers.
//!
//! All functions here are deterministic. Text is walked by UTF-16 code
//! unit, so a character outside the BMP contributes two groups.

use crate::model::{BinaryMode, TextEncoding};
use crate::services::trim_source;

/// Dispatch to the encoder selected by `mode`.
///
/// In machine mode `input` is ignored and `machine_code` is re-rendered;
/// a missing listing is treated as empty.
pub fn convert_to_binary(
    input: &str,
    mode: BinaryMode,
    encoding: TextEncoding,
    machine_code: Option<&str>,
) -> String {
    match mode {
        BinaryMode::Text => text_to_binary(input, encoding),
        BinaryMode::Machine => hex_to_binary(machine_code.unwrap_or("")),
        BinaryMode::Numbers => numbers_to_binary(input),
    }
}

/// Encode every UTF-16 code unit of `text` as space-separated bit groups.
pub fn text_to_binary(text: &str, encoding: TextEncoding) -> String {
    let mut groups: Vec<String> = Vec::new();

    for unit in text.encode_utf16() {
        match encoding {
            TextEncoding::Ascii => groups.push(format!("{unit:08b}")),
            TextEncoding::Utf8 => {
                // A lone surrogate half cannot be encoded and becomes U+FFFD.
                let ch = char::decode_utf16([unit])
                    .next()
                    .and_then(Result::ok)
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).bytes() {
                    groups.push(format!("{byte:08b}"));
                }
            }
            TextEncoding::Utf16 => groups.push(format!("{unit:016b}")),
        }
    }

    groups.join(" ")
}

/// Re-render an `address: hex bytes` listing with each octet in binary.
///
/// Lines without exactly one `": "` separator pass through unchanged, as do
/// byte tokens that are not two hex digits. Blank lines are dropped.
pub fn hex_to_binary(listing: &str) -> String {
    if trim_source(listing).is_empty() {
        return String::new();
    }

    listing
        .split('\n')
        .filter(|line| !trim_source(line).is_empty())
        .map(|line| {
            let trimmed = trim_source(line);
            if trimmed.matches(": ").count() != 1 {
                return line.to_string();
            }
            match trimmed.split_once(": ") {
                Some((address, bytes)) => {
                    let rendered: Vec<String> = bytes.split(' ').map(octet_to_binary).collect();
                    format!("{address}: {}", rendered.join(" "))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn octet_to_binary(token: &str) -> String {
    if token.len() == 2 && token.bytes().all(|b| b.is_ascii_hexdigit()) {
        if let Ok(value) = u8::from_str_radix(token, 16) {
            return format!("{value:08b}");
        }
    }
    token.to_string()
}

/// Render each line as `<n> (decimal) = <bits> (binary)`, falling back to
/// `"<line>" = <ascii octets>` for lines that do not start with a number.
pub fn numbers_to_binary(input: &str) -> String {
    if trim_source(input).is_empty() {
        return String::new();
    }

    input
        .split('\n')
        .map(trim_source)
        .filter(|line| !line.is_empty())
        .map(|line| match parse_leading_integer(line) {
            Some(value) => format!("{value} (decimal) = {} (binary)", signed_binary(value)),
            None => format!("\"{line}\" = {}", text_to_binary(line, TextEncoding::Ascii)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse an optional sign followed by the leading run of decimal digits.
///
/// Trailing garbage is ignored (`12px` is 12). Returns `None` when there
/// are no digits or the value does not fit in an `i128`.
pub fn parse_leading_integer(s: &str) -> Option<i128> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i128 = 0;
    for b in digits.bytes() {
        let digit = i128::from(b - b'0');
        value = if negative {
            value.checked_mul(10)?.checked_sub(digit)?
        } else {
            value.checked_mul(10)?.checked_add(digit)?
        };
    }
    Some(value)
}

fn signed_binary(value: i128) -> String {
    if value < 0 {
        format!("-{:b}", value.unsigned_abs())
    } else {
        format!("{value:b}")
    }
}
