//! Generated keyboard help overlay.

use crate::core::key::Key;
use crate::core::message::{Cmd, Msg};
use crate::core::modal::{Modal, Size};
use crate::core::text::{truncate_to_width, visible_width};

/// One key binding row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpBinding {
    pub keys: String,
    pub description: String,
}

/// A titled group of bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCategory {
    pub title: String,
    pub bindings: Vec<HelpBinding>,
}

impl HelpCategory {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bindings: Vec::new(),
        }
    }

    pub fn binding(mut self, keys: impl Into<String>, description: impl Into<String>) -> Self {
        self.bindings.push(HelpBinding {
            keys: keys.into(),
            description: description.into(),
        });
        self
    }
}

/// Scrollable list of key bindings, grouped by category.
///
/// `?` or `q` closes it through a `PopModal` message; `escape` is left to the shell.
pub struct HelpModal {
    categories: Vec<HelpCategory>,
    scroll: usize,
    visible_rows: usize,
}

impl HelpModal {
    pub fn new(categories: Vec<HelpCategory>) -> Self {
        Self {
            categories,
            scroll: 0,
            visible_rows: 0,
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn body_lines(&self) -> Vec<String> {
        let key_width = self
            .categories
            .iter()
            .flat_map(|category| category.bindings.iter())
            .map(|binding| visible_width(&binding.keys))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for (index, category) in self.categories.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.push(format!("\x1b[1m{}\x1b[22m", category.title));
            for binding in &category.bindings {
                let pad = " ".repeat(key_width - visible_width(&binding.keys));
                lines.push(format!("  {}{pad}  {}", binding.keys, binding.description));
            }
        }
        lines
    }

    fn max_scroll(&self) -> usize {
        self.body_lines().len().saturating_sub(self.body_rows(self.visible_rows))
    }

    // Title and separator take the first two rows.
    fn body_rows(&self, height: usize) -> usize {
        height.saturating_sub(2).max(1)
    }
}

impl Modal for HelpModal {
    fn id(&self) -> &str {
        "help"
    }

    fn title(&self) -> &str {
        "Keyboard Shortcuts"
    }

    fn size(&self) -> Size {
        Size::Medium
    }

    fn render(&self, width: usize, height: usize) -> String {
        let mut lines = vec![
            truncate_to_width(&format!("\x1b[1m{}\x1b[22m", self.title()), width),
            "─".repeat(width),
        ];
        lines.extend(
            self.body_lines()
                .into_iter()
                .skip(self.scroll)
                .take(self.body_rows(height))
                .map(|line| truncate_to_width(&line, width)),
        );
        lines.join("\n")
    }

    fn on_push(&mut self, width: usize, height: usize) {
        self.scroll = 0;
        self.visible_rows = self.size().dimensions(width, height).1;
    }

    fn handle_key(&mut self, key: &Key) -> (bool, Option<Cmd>) {
        match key.id() {
            "?" | "q" => (true, Some(Cmd::msg(Msg::PopModal))),
            "up" | "k" => {
                self.scroll = self.scroll.saturating_sub(1);
                (true, None)
            }
            "down" | "j" => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                (true, None)
            }
            "home" => {
                self.scroll = 0;
                (true, None)
            }
            "end" => {
                self.scroll = self.max_scroll();
                (true, None)
            }
            _ => (false, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HelpCategory, HelpModal};
    use crate::core::key::Key;
    use crate::core::message::{Cmd, Msg};
    use crate::core::modal::Modal;
    use crate::core::text::ansi::strip_ansi;

    fn categories() -> Vec<HelpCategory> {
        vec![
            HelpCategory::new("Global")
                .binding("ctrl+c", "Quit")
                .binding("?", "Help"),
            HelpCategory::new("Tabs").binding("alt+1-9", "Jump to tab"),
        ]
    }

    #[test]
    fn renders_aligned_bindings() {
        let help = HelpModal::new(categories());
        let rendered = strip_ansi(&help.render(40, 20));
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines[0], "Keyboard Shortcuts");
        assert_eq!(lines[2], "Global");
        assert_eq!(lines[3], "  ctrl+c   Quit");
        assert_eq!(lines[4], "  ?        Help");
        assert_eq!(lines[6], "Tabs");
        assert_eq!(lines[7], "  alt+1-9  Jump to tab");
    }

    #[test]
    fn render_is_repeatable() {
        let help = HelpModal::new(categories());
        assert_eq!(help.render(30, 6), help.render(30, 6));
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut help = HelpModal::new(categories());
        // Medium height of a 10-row viewport is 5 rows, 3 of them for bindings.
        help.on_push(40, 10);
        for _ in 0..10 {
            assert!(help.handle_key(&Key::new("down")).0);
        }
        assert_eq!(help.scroll(), 3);
        help.handle_key(&Key::new("home"));
        assert_eq!(help.scroll(), 0);
    }

    #[test]
    fn question_mark_requests_pop_and_escape_is_unclaimed() {
        let mut help = HelpModal::new(categories());
        let (handled, cmd) = help.handle_key(&Key::char('?'));
        assert!(handled);
        assert!(matches!(cmd, Some(Cmd::Msg(Msg::PopModal))));

        let (handled, cmd) = help.handle_key(&Key::new("esc"));
        assert!(!handled);
        assert!(cmd.is_none());
    }
}
