//! Environment and shell configuration.

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::core::autocomplete::{AutocompleteProvider, SuggestionRenderer};
use crate::core::message::Cmd;
use crate::widgets::help::HelpCategory;
use crate::widgets::input::HistoryProvider;

/// Process-level settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// File that receives `tracing` output. Stdout belongs to the UI.
    pub log_file: Option<PathBuf>,
    pub debug: bool,
    pub accessibility: Accessibility,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_file: env_string_opt("TUI_SHELL_LOG").map(PathBuf::from),
            debug: env_flag("TUI_SHELL_DEBUG"),
            accessibility: Accessibility {
                high_contrast: env_flag("TUI_SHELL_HIGH_CONTRAST"),
                reduced_motion: env_flag("TUI_SHELL_REDUCED_MOTION"),
                screen_reader: env_flag("TUI_SHELL_SCREEN_READER"),
            },
        }
    }
}

/// Accessibility preferences.
///
/// Passed through to widgets unchanged; the shell itself does not act on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub screen_reader: bool,
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Callback taking the submitted input text.
pub type SubmitCallback = Box<dyn FnMut(String) -> Option<Cmd>>;
/// Callback without arguments.
pub type ActionCallback = Box<dyn FnMut() -> Option<Cmd>>;

/// Options recognized by the shell.
pub struct ShellConfig {
    pub show_tab_bar: bool,
    pub show_status_bar: bool,
    pub show_input: bool,
    pub input_prefix: String,
    pub input_placeholder: String,
    pub on_input_submit: Option<SubmitCallback>,
    pub on_show_errors: Option<ActionCallback>,
    pub on_quick_actions: Option<ActionCallback>,
    pub history_provider: Option<HistoryProvider>,
    /// Enables the `?` help overlay when non-empty.
    pub help_categories: Vec<HelpCategory>,
    pub autocomplete: Option<Box<dyn AutocompleteProvider>>,
    pub suggestions: Option<Box<dyn SuggestionRenderer>>,
    pub accessibility: Accessibility,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_tab_bar: true,
            show_status_bar: true,
            show_input: true,
            input_prefix: "> ".to_string(),
            input_placeholder: String::new(),
            on_input_submit: None,
            on_show_errors: None,
            on_quick_actions: None,
            history_provider: None,
            help_categories: Vec::new(),
            autocomplete: None,
            suggestions: None,
            accessibility: Accessibility::default(),
        }
    }
}

impl ShellConfig {
    /// Defaults seeded with the environment's accessibility flags.
    pub fn from_env(env: &EnvConfig) -> Self {
        Self {
            accessibility: env.accessibility,
            ..Self::default()
        }
    }
}

impl fmt::Debug for ShellConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellConfig")
            .field("show_tab_bar", &self.show_tab_bar)
            .field("show_status_bar", &self.show_status_bar)
            .field("show_input", &self.show_input)
            .field("input_prefix", &self.input_prefix)
            .field("input_placeholder", &self.input_placeholder)
            .field("on_input_submit", &self.on_input_submit.is_some())
            .field("on_show_errors", &self.on_show_errors.is_some())
            .field("on_quick_actions", &self.on_quick_actions.is_some())
            .field("history_provider", &self.history_provider.is_some())
            .field("help_categories", &self.help_categories.len())
            .field("autocomplete", &self.autocomplete.is_some())
            .field("suggestions", &self.suggestions.is_some())
            .field("accessibility", &self.accessibility)
            .finish()
    }
}
