//! Normalized key identifiers.
//!
//! Keys travel through the shell as id strings (`"ctrl+c"`, `"shift+tab"`, `"escape"`,
//! `"alt+1"`, `"?"`). Hosts translating raw terminal input only need to produce these ids;
//! [`Key::new`] normalizes modifier order and the common aliases so matching is a plain
//! string comparison.

use std::fmt;

/// Normalized key id.
pub type KeyId = String;

/// A single keystroke delivered to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    id: KeyId,
}

#[derive(Debug, Default)]
struct ParsedKeyId {
    ctrl: bool,
    alt: bool,
    shift: bool,
    key: String,
}

impl Key {
    /// Builds a key from an id such as `"Ctrl+C"`, `"esc"` or `"shift+ctrl+x"`.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: normalize_key_id(id.as_ref()),
        }
    }

    /// Builds a key for a single typed character.
    pub fn char(ch: char) -> Self {
        Self { id: ch.to_string() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this key matches `id` after normalization.
    pub fn is(&self, id: &str) -> bool {
        self.id == normalize_key_id(id)
    }

    /// Whether this key matches any of `ids`.
    pub fn is_any(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.is(id))
    }

    /// Text inserted by this key, if it is an unmodified printable character.
    pub fn text(&self) -> Option<&str> {
        if self.id == "space" {
            return Some(" ");
        }
        let mut chars = self.id.chars();
        let first = chars.next()?;
        if chars.next().is_some() || first.is_control() {
            return None;
        }
        Some(&self.id)
    }

    /// Whether the id carries a `ctrl+` prefix.
    pub fn is_ctrl(&self) -> bool {
        self.id.starts_with("ctrl+")
    }

    /// Digit for `alt+1` through `alt+9`.
    pub fn alt_digit(&self) -> Option<usize> {
        let rest = self.id.strip_prefix("alt+")?;
        let mut chars = rest.chars();
        let digit = chars.next()?.to_digit(10)?;
        if chars.next().is_some() || digit == 0 {
            return None;
        }
        Some(digit as usize)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::new(value)
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Key::char(value)
    }
}

/// Normalizes a key id: lowercase modifiers in `ctrl+alt+shift` order and canonical names.
pub fn normalize_key_id(id: &str) -> KeyId {
    let parsed = parse_key_id(id);
    let mut out = String::with_capacity(id.len());
    if parsed.ctrl {
        out.push_str("ctrl+");
    }
    if parsed.alt {
        out.push_str("alt+");
    }
    if parsed.shift {
        out.push_str("shift+");
    }
    out.push_str(&parsed.key);
    out
}

fn parse_key_id(id: &str) -> ParsedKeyId {
    // A bare "+" is the plus key; "ctrl++" is ctrl with plus.
    if id == "+" {
        return ParsedKeyId {
            key: "+".to_string(),
            ..ParsedKeyId::default()
        };
    }

    let mut parsed = ParsedKeyId::default();
    let (mods, key) = match id.strip_suffix("++") {
        Some(mods) => (mods, "+"),
        None => match id.rfind('+') {
            Some(idx) => (&id[..idx], &id[idx + 1..]),
            None => ("", id),
        },
    };

    for part in mods.split('+').filter(|part| !part.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => parsed.ctrl = true,
            "alt" | "meta" | "option" => parsed.alt = true,
            "shift" => parsed.shift = true,
            _ => {}
        }
    }

    parsed.key = canonical_key_name(key, !mods.is_empty());
    parsed
}

fn canonical_key_name(key: &str, modified: bool) -> String {
    if key.chars().count() == 1 {
        // Typed characters keep their case; modified letters are reported lowercase.
        return if modified {
            key.to_lowercase()
        } else {
            key.to_string()
        };
    }

    let lower = key.to_ascii_lowercase();
    match lower.as_str() {
        "esc" | "escape" => "escape".to_string(),
        "return" | "enter" => "enter".to_string(),
        "pageup" | "pgup" => "pageUp".to_string(),
        "pagedown" | "pgdn" => "pageDown".to_string(),
        " " | "space" => "space".to_string(),
        "del" | "delete" => "delete".to_string(),
        "bs" | "backspace" => "backspace".to_string(),
        _ => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_key_id, Key};

    #[test]
    fn modifiers_are_reordered_and_lowercased() {
        assert_eq!(normalize_key_id("Shift+Ctrl+X"), "ctrl+shift+x");
        assert_eq!(normalize_key_id("alt+CTRL+]"), "ctrl+alt+]");
        assert_eq!(normalize_key_id("ctrl++"), "ctrl++");
        assert_eq!(normalize_key_id("+"), "+");
    }

    #[test]
    fn aliases_collapse_to_canonical_names() {
        assert!(Key::new("esc").is("escape"));
        assert!(Key::new("Return").is("enter"));
        assert!(Key::new("pgup").is("pageUp"));
    }

    #[test]
    fn text_is_reported_for_plain_characters_only() {
        assert_eq!(Key::char('?').text(), Some("?"));
        assert_eq!(Key::char('A').text(), Some("A"));
        assert_eq!(Key::new("space").text(), Some(" "));
        assert_eq!(Key::new("ctrl+a").text(), None);
        assert_eq!(Key::new("enter").text(), None);
    }

    #[test]
    fn alt_digits_cover_one_through_nine() {
        assert_eq!(Key::new("alt+1").alt_digit(), Some(1));
        assert_eq!(Key::new("Alt+9").alt_digit(), Some(9));
        assert_eq!(Key::new("alt+0").alt_digit(), None);
        assert_eq!(Key::new("alt+12").alt_digit(), None);
        assert_eq!(Key::new("ctrl+1").alt_digit(), None);
    }
}
