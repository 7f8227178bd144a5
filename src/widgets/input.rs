//! Input widget.

use std::any::Any;

use unicode_segmentation::UnicodeSegmentation;

use crate::core::autocomplete::{AutocompleteItem, AutocompleteProvider, SuggestionRenderer};
use crate::core::content::{Content, Focusable};
use crate::core::key::Key;
use crate::core::message::{Cmd, Msg};
use crate::core::text::{truncate_to_width, visible_width};

/// Rows occupied by the bordered input: rule, prompt line, rule.
pub const INPUT_HEIGHT: usize = 3;

const BORDER: &str = "─";

/// Supplies previously submitted entries, oldest first.
pub type HistoryProvider = Box<dyn Fn() -> Vec<String>>;

/// Bordered single-line input with history recall and pluggable autocomplete.
pub struct Input {
    value: String,
    cursor: usize,
    focused: bool,
    prompt: String,
    placeholder: String,
    width: usize,
    history: Option<HistoryProvider>,
    history_entries: Vec<String>,
    history_index: Option<usize>,
    draft: String,
    autocomplete: Option<Box<dyn AutocompleteProvider>>,
    renderer: Option<Box<dyn SuggestionRenderer>>,
    suggestions: Vec<AutocompleteItem>,
    selected: usize,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            prompt: "> ".to_string(),
            placeholder: String::new(),
            width: 0,
            history: None,
            history_entries: Vec::new(),
            history_index: None,
            draft: String::new(),
            autocomplete: None,
            renderer: None,
            suggestions: Vec::new(),
            selected: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
        self.history_index = None;
        self.refresh_suggestions();
    }

    pub fn clear(&mut self) {
        self.set_value(String::new());
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_history_provider(&mut self, provider: Option<HistoryProvider>) {
        self.history = provider;
        self.history_index = None;
    }

    pub fn set_autocomplete(&mut self, provider: Option<Box<dyn AutocompleteProvider>>) {
        self.autocomplete = provider;
        self.refresh_suggestions();
    }

    pub fn set_suggestion_renderer(&mut self, renderer: Option<Box<dyn SuggestionRenderer>>) {
        self.renderer = renderer;
    }

    pub fn suggestions(&self) -> &[AutocompleteItem] {
        &self.suggestions
    }

    pub fn selected_suggestion(&self) -> Option<&AutocompleteItem> {
        self.suggestions.get(self.selected)
    }

    /// Rendered candidate list, empty when there is nothing to show or no renderer.
    pub fn suggestion_lines(&self, width: usize) -> Vec<String> {
        match self.renderer.as_ref() {
            Some(renderer) if !self.suggestions.is_empty() => {
                renderer.render(&self.suggestions, self.selected, width)
            }
            _ => Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        INPUT_HEIGHT
    }

    /// Apply one key. Returns a submit command on `enter`.
    pub fn handle_key(&mut self, key: &Key) -> Option<Cmd> {
        if let Some(text) = key.text() {
            let text = text.to_string();
            self.insert_text(&text);
            self.after_edit();
            return None;
        }

        match key.id() {
            "enter" => return self.submit(),
            "backspace" => {
                if let Some(len) = self.grapheme_before_cursor() {
                    let start = self.cursor - len;
                    self.value.replace_range(start..self.cursor, "");
                    self.cursor = start;
                    self.after_edit();
                }
            }
            "delete" => {
                if let Some(len) = self.grapheme_after_cursor() {
                    self.value.replace_range(self.cursor..self.cursor + len, "");
                    self.after_edit();
                }
            }
            "left" | "ctrl+b" => {
                if let Some(len) = self.grapheme_before_cursor() {
                    self.cursor -= len;
                }
            }
            "right" | "ctrl+f" => {
                if let Some(len) = self.grapheme_after_cursor() {
                    self.cursor += len;
                }
            }
            "home" | "ctrl+a" => self.cursor = 0,
            "end" | "ctrl+e" => self.cursor = self.value.len(),
            "ctrl+u" => {
                self.value.replace_range(..self.cursor, "");
                self.cursor = 0;
                self.after_edit();
            }
            "ctrl+k" => {
                self.value.truncate(self.cursor);
                self.after_edit();
            }
            "ctrl+w" | "alt+backspace" => {
                self.delete_word_backwards();
                self.after_edit();
            }
            "up" => {
                if self.suggestions.is_empty() {
                    self.history_prev();
                } else {
                    self.selected = self.selected.saturating_sub(1);
                }
            }
            "down" => {
                if self.suggestions.is_empty() {
                    self.history_next();
                } else if self.selected + 1 < self.suggestions.len() {
                    self.selected += 1;
                }
            }
            "tab" => self.accept_suggestion(),
            _ => {}
        }
        None
    }

    fn submit(&mut self) -> Option<Cmd> {
        if self.value.trim().is_empty() {
            return None;
        }
        let value = std::mem::take(&mut self.value);
        self.cursor = 0;
        self.history_index = None;
        self.draft.clear();
        self.suggestions.clear();
        Some(Cmd::msg(Msg::InputSubmit { value }))
    }

    fn accept_suggestion(&mut self) {
        if let Some(item) = self.suggestions.get(self.selected) {
            self.value = item.value.clone();
            self.cursor = self.value.len();
            self.suggestions.clear();
            self.selected = 0;
        }
    }

    fn history_prev(&mut self) {
        let next_index = match self.history_index {
            Some(index) => index.saturating_sub(1),
            None => {
                let Some(provider) = self.history.as_ref() else {
                    return;
                };
                self.history_entries = provider();
                if self.history_entries.is_empty() {
                    return;
                }
                self.draft = self.value.clone();
                self.history_entries.len() - 1
            }
        };
        self.history_index = Some(next_index);
        self.value = self.history_entries[next_index].clone();
        self.cursor = self.value.len();
    }

    fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history_entries.len() {
            self.history_index = Some(index + 1);
            self.value = self.history_entries[index + 1].clone();
        } else {
            self.history_index = None;
            self.value = std::mem::take(&mut self.draft);
        }
        self.cursor = self.value.len();
    }

    fn after_edit(&mut self) {
        self.history_index = None;
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        self.selected = 0;
        self.suggestions = match self.autocomplete.as_ref() {
            Some(provider) if !self.value.is_empty() => provider.suggestions(&self.value),
            _ => Vec::new(),
        };
    }

    fn insert_text(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn grapheme_before_cursor(&self) -> Option<usize> {
        self.value[..self.cursor]
            .graphemes(true)
            .next_back()
            .map(str::len)
    }

    fn grapheme_after_cursor(&self) -> Option<usize> {
        self.value[self.cursor..].graphemes(true).next().map(str::len)
    }

    fn delete_word_backwards(&mut self) {
        let before = &self.value[..self.cursor];
        let trimmed = before.trim_end_matches(char::is_whitespace);
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(index, ch)| index + ch.len_utf8())
            .unwrap_or(0);
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// The slice of the value that fits in `available` columns, keeping the cursor visible,
    /// plus the cursor's byte offset within that slice.
    fn visible_window(&self, available: usize) -> (&str, usize) {
        if visible_width(&self.value) < available {
            return (&self.value, self.cursor);
        }

        // Leave a column for the cursor block.
        let budget = available.saturating_sub(1);
        let mut start = self.cursor;
        let mut used = 0;
        for grapheme in self.value[..self.cursor].graphemes(true).rev() {
            let width = visible_width(grapheme);
            if used + width > budget {
                break;
            }
            used += width;
            start -= grapheme.len();
        }
        let mut end = self.cursor;
        for grapheme in self.value[self.cursor..].graphemes(true) {
            let width = visible_width(grapheme);
            if used + width > budget {
                break;
            }
            used += width;
            end += grapheme.len();
        }
        (&self.value[start..end], self.cursor - start)
    }

    fn render_line(&self) -> String {
        let available = self.width.saturating_sub(visible_width(&self.prompt));
        if available == 0 {
            return truncate_to_width(&self.prompt, self.width);
        }

        if self.value.is_empty() {
            let cursor = if self.focused { "\x1b[7m \x1b[27m" } else { "" };
            let placeholder = if self.placeholder.is_empty() {
                String::new()
            } else {
                format!("\x1b[2m{}\x1b[22m", self.placeholder)
            };
            let line = format!("{}{cursor}{placeholder}", self.prompt);
            return truncate_to_width(&line, self.width);
        }

        let (text, cursor) = self.visible_window(available);
        if !self.focused {
            return format!("{}{text}", self.prompt);
        }
        let before = &text[..cursor];
        let mut rest = text[cursor..].graphemes(true);
        let at_cursor = rest.next().unwrap_or(" ");
        let after: String = rest.collect();
        format!("{}{before}\x1b[7m{at_cursor}\x1b[27m{after}", self.prompt)
    }
}

impl Content for Input {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            _ => None,
        }
    }

    fn view(&self) -> String {
        let rule = BORDER.repeat(self.width);
        [rule.clone(), self.render_line(), rule].join("\n")
    }

    fn value(&self) -> Option<&dyn Any> {
        Some(&self.value)
    }

    fn set_size(&mut self, width: usize, _height: usize) {
        self.width = width;
    }
}

impl Focusable for Input {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::Input;
    use crate::core::autocomplete::{AutocompleteItem, PlainSuggestions};
    use crate::core::content::{Content, Focusable};
    use crate::core::key::Key;
    use crate::core::message::{Cmd, Msg};
    use crate::core::text::ansi::strip_ansi;

    fn send(input: &mut Input, keys: &[&str]) -> Option<Cmd> {
        let mut last = None;
        for key in keys {
            last = input.handle_key(&Key::new(key));
        }
        last
    }

    fn type_text(input: &mut Input, text: &str) {
        for ch in text.chars() {
            input.handle_key(&Key::char(ch));
        }
    }

    #[test]
    fn input_edits_and_moves_cursor() {
        let mut input = Input::new();
        type_text(&mut input, "hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);

        send(&mut input, &["left", "left"]);
        assert_eq!(input.cursor(), 3);
        type_text(&mut input, "p");
        assert_eq!(input.value(), "helplo");

        send(&mut input, &["backspace"]);
        assert_eq!(input.value(), "hello");
        send(&mut input, &["home", "delete"]);
        assert_eq!(input.value(), "ello");
        send(&mut input, &["end"]);
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn delete_word_and_line_edits() {
        let mut input = Input::new();
        type_text(&mut input, "run the tests  ");
        send(&mut input, &["ctrl+w"]);
        assert_eq!(input.value(), "run the ");
        send(&mut input, &["left", "ctrl+k"]);
        assert_eq!(input.value(), "run the");
        send(&mut input, &["ctrl+u"]);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut input = Input::new();
        assert!(send(&mut input, &["enter"]).is_none());
        type_text(&mut input, "   ");
        assert!(send(&mut input, &["enter"]).is_none());

        input.clear();
        type_text(&mut input, "ship it");
        let cmd = send(&mut input, &["enter"]);
        match cmd {
            Some(Cmd::Msg(Msg::InputSubmit { value })) => assert_eq!(value, "ship it"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(input.is_empty());
    }

    #[test]
    fn history_walks_entries_and_restores_draft() {
        let mut input = Input::new();
        input.set_history_provider(Some(Box::new(|| {
            vec!["first".to_string(), "second".to_string()]
        })));
        type_text(&mut input, "dra");

        send(&mut input, &["up"]);
        assert_eq!(input.value(), "second");
        send(&mut input, &["up", "up"]);
        assert_eq!(input.value(), "first");
        send(&mut input, &["down"]);
        assert_eq!(input.value(), "second");
        send(&mut input, &["down"]);
        assert_eq!(input.value(), "dra");
    }

    #[test]
    fn autocomplete_selects_and_accepts() {
        let mut input = Input::new();
        input.set_autocomplete(Some(Box::new(|value: &str| {
            ["/help", "/history"]
                .iter()
                .filter(|cmd| cmd.starts_with(value))
                .map(|cmd| AutocompleteItem::new(*cmd, *cmd))
                .collect::<Vec<_>>()
        })));
        input.set_suggestion_renderer(Some(Box::new(PlainSuggestions::default())));

        type_text(&mut input, "/h");
        assert_eq!(input.suggestions().len(), 2);
        assert_eq!(input.suggestion_lines(20), vec!["> /help", "  /history"]);

        send(&mut input, &["down", "tab"]);
        assert_eq!(input.value(), "/history");
        assert!(input.suggestions().is_empty());
        assert!(input.suggestion_lines(20).is_empty());
    }

    #[test]
    fn renders_bordered_box_with_placeholder() {
        let mut input = Input::new();
        input.set_size(12, 3);
        input.set_placeholder("Ask");

        let view = input.view();
        let lines: Vec<&str> = view.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "─".repeat(12));
        assert_eq!(strip_ansi(lines[1]), "> Ask");

        input.set_focused(true);
        type_text(&mut input, "hi");
        assert_eq!(input.view().split('\n').nth(1), Some("> hi\x1b[7m \x1b[27m"));
    }

    #[test]
    fn long_values_scroll_to_keep_cursor_visible() {
        let mut input = Input::new();
        input.set_size(8, 3);
        input.set_focused(true);
        type_text(&mut input, "abcdefghij");

        let view = input.view();
        let line = view.split('\n').nth(1).map(strip_ansi).unwrap_or_default();
        assert_eq!(line, "> fghij ");
    }
}
