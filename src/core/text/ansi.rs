//! ANSI escape sequence scanning.
//!
//! Only sequence boundaries matter here: width and layout helpers skip escape sequences
//! without interpreting them.

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// Byte length of the escape sequence starting at `pos`, if one starts there.
///
/// Recognizes CSI (`ESC [`), string-terminated OSC/APC/DCS (`ESC ]`, `ESC _`, `ESC P`,
/// ended by BEL or `ESC \`) and SS3 (`ESC O x`). Unterminated sequences return `None`.
pub fn ansi_sequence_len(input: &str, pos: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if pos + 1 >= bytes.len() || bytes[pos] != ESC {
        return None;
    }

    match bytes[pos + 1] {
        b'[' => bytes[pos + 2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|offset| offset + 3),
        b']' | b'_' | b'P' => string_terminated_len(bytes, pos),
        b'O' if pos + 2 < bytes.len() => Some(3),
        _ => None,
    }
}

fn string_terminated_len(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut idx = pos + 2;
    while idx < bytes.len() {
        if bytes[idx] == BEL {
            return Some(idx + 1 - pos);
        }
        if bytes[idx] == ESC && bytes.get(idx + 1) == Some(&b'\\') {
            return Some(idx + 2 - pos);
        }
        idx += 1;
    }
    None
}

/// Removes escape sequences, keeping only printable text.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut idx = 0;
    while idx < input.len() {
        if let Some(len) = ansi_sequence_len(input, idx) {
            idx += len;
            continue;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        out.push(ch);
        idx += ch.len_utf8();
    }
    out
}
