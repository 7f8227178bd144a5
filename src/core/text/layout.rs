//! Block layout helpers: truncation, padding and centering of rendered text.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::ansi_sequence_len;
use super::width::{grapheme_width, visible_width};

const ANSI_RESET: &str = "\x1b[0m";

/// Cuts `text` to at most `max_width` columns, keeping escape sequences intact.
///
/// A reset is appended when anything was cut so styles do not bleed into the padding.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if visible_width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    let mut idx = 0;
    'scan: while idx < text.len() {
        if let Some(len) = ansi_sequence_len(text, idx) {
            out.push_str(&text[idx..idx + len]);
            idx += len;
            continue;
        }

        let run_end = next_escape_or_end(text, idx);
        for grapheme in text[idx..run_end].graphemes(true) {
            let width = grapheme_width(grapheme);
            if used + width > max_width {
                break 'scan;
            }
            out.push_str(grapheme);
            used += width;
        }
        idx = run_end;
    }
    out.push_str(ANSI_RESET);
    out
}

fn next_escape_or_end(text: &str, from: usize) -> usize {
    let bytes = text.as_bytes();
    let mut idx = from;
    while idx < bytes.len() {
        if bytes[idx] == 0x1b && ansi_sequence_len(text, idx).is_some() {
            return idx;
        }
        idx += 1;
    }
    bytes.len()
}

/// Right-pads `text` with spaces to `width` columns. Wider text is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = visible_width(text);
    if current >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + width - current);
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

/// Splits a rendered block into exactly `height` lines, truncating or padding with
/// empty lines.
pub fn fit_to_height(block: &str, height: usize) -> Vec<String> {
    let mut lines: Vec<String> = if block.is_empty() {
        Vec::new()
    } else {
        block.split('\n').map(str::to_string).collect()
    };
    lines.truncate(height);
    lines.resize(height, String::new());
    lines
}

/// Centers a block inside a `width` x `height` area.
///
/// The block is measured by its widest line and its line count. When the block does not
/// fit, the padding on that axis clamps to zero: overflow renders flush top-left and is
/// never cropped.
pub fn center_block(block: &str, width: usize, height: usize) -> String {
    let lines: Vec<&str> = block.split('\n').collect();
    let block_width = lines.iter().map(|line| visible_width(line)).max().unwrap_or(0);
    let block_height = lines.len();

    let pad_top = height.saturating_sub(block_height) / 2;
    let pad_left = width.saturating_sub(block_width) / 2;
    let pad_bottom = height.saturating_sub(block_height + pad_top);

    let blank = " ".repeat(width);
    let indent = " ".repeat(pad_left);
    let mut out = Vec::with_capacity(pad_top + block_height + pad_bottom);
    out.extend(std::iter::repeat(blank.clone()).take(pad_top));
    for line in lines {
        out.push(pad_to_width(&format!("{indent}{line}"), width));
    }
    out.extend(std::iter::repeat(blank).take(pad_bottom));
    out.join("\n")
}
