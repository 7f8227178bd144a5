//! Autocomplete contracts wired into the input box.
//!
//! The core only defines the seams. Providers (slash commands, file paths, history search)
//! and list renderers are supplied by the host.

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteItem {
    /// Text that replaces the input value when accepted.
    pub value: String,
    pub label: String,
    pub description: Option<String>,
}

impl AutocompleteItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Produces completion candidates for the current input value.
pub trait AutocompleteProvider {
    fn suggestions(&self, input: &str) -> Vec<AutocompleteItem>;
}

impl<F> AutocompleteProvider for F
where
    F: Fn(&str) -> Vec<AutocompleteItem>,
{
    fn suggestions(&self, input: &str) -> Vec<AutocompleteItem> {
        self(input)
    }
}

/// Renders the candidate list shown above the input box.
pub trait SuggestionRenderer {
    fn render(&self, items: &[AutocompleteItem], selected: usize, width: usize) -> Vec<String>;
}

/// Plain one-line-per-item renderer; the selected row is marked with `>`.
#[derive(Debug, Clone, Copy)]
pub struct PlainSuggestions {
    pub max_visible: usize,
}

impl Default for PlainSuggestions {
    fn default() -> Self {
        Self { max_visible: 5 }
    }
}

impl SuggestionRenderer for PlainSuggestions {
    fn render(&self, items: &[AutocompleteItem], selected: usize, width: usize) -> Vec<String> {
        let max_visible = self.max_visible.max(1);
        let start = selected.saturating_sub(max_visible - 1);
        items
            .iter()
            .enumerate()
            .skip(start)
            .take(max_visible)
            .map(|(index, item)| {
                let marker = if index == selected { "> " } else { "  " };
                let line = match item.description.as_deref() {
                    Some(description) => format!("{marker}{}  {description}", item.label),
                    None => format!("{marker}{}", item.label),
                };
                crate::core::text::truncate_to_width(&line, width)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AutocompleteItem, AutocompleteProvider, PlainSuggestions, SuggestionRenderer};

    #[test]
    fn closures_are_providers() {
        let provider = |input: &str| {
            ["/help", "/clear"]
                .iter()
                .filter(|cmd| cmd.starts_with(input))
                .map(|cmd| AutocompleteItem::new(*cmd, *cmd))
                .collect::<Vec<_>>()
        };
        assert_eq!(provider.suggestions("/h").len(), 1);
        assert_eq!(provider.suggestions("/").len(), 2);
    }

    #[test]
    fn plain_renderer_scrolls_to_selection() {
        let items: Vec<AutocompleteItem> = (0..4)
            .map(|n| AutocompleteItem::new(n.to_string(), format!("item{n}")))
            .collect();
        let renderer = PlainSuggestions { max_visible: 2 };
        assert_eq!(renderer.render(&items, 0, 20), vec!["> item0", "  item1"]);
        assert_eq!(renderer.render(&items, 3, 20), vec!["  item2", "> item3"]);
    }
}
