//! Application shell for terminal coding agents.
//!
//! A [`Shell`] composes a tab bar, the active tab's content, a bordered input box and a
//! status bar, with a stack of modal overlays on top. All state changes flow through
//! [`Msg`] values; handlers return [`Cmd`]s that a [`Program`] executes.
//!
//! # Public API Overview
//! - Host content inside tabs by implementing [`Content`] (and optionally [`TabContent`]).
//! - Show overlays by implementing [`Modal`] and pushing it through the shell.
//! - Drive the shell with [`Program`], feeding keys and resizes through a [`ProgramHandle`].
//! - Use the text helpers for ANSI-safe width, truncation and centering.

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod runtime;
pub mod widgets;

pub use crate::config::{Accessibility, ActionCallback, EnvConfig, ShellConfig, SubmitCallback};
pub use crate::error::{Result, ShellError};

/// Autocomplete primitives and the default suggestion renderer.
pub use crate::core::autocomplete::{
    AutocompleteItem, AutocompleteProvider, PlainSuggestions, SuggestionRenderer,
};
/// Content hosted inside tabs.
pub use crate::core::content::{Content, Focusable, TabContent};
/// Key identifiers.
pub use crate::core::key::{normalize_key_id, Key, KeyId};
/// Messages and commands.
pub use crate::core::message::{Cmd, Msg};
/// Modal overlays.
pub use crate::core::modal::{Modal, Size};
/// Terminal sink.
pub use crate::core::terminal::{Terminal, WriterTerminal};

pub use crate::runtime::{FocusTarget, ModalManager, Program, ProgramHandle, Shell};
pub use crate::widgets::{
    HelpBinding, HelpCategory, HelpModal, HistoryProvider, Input, StatusBar, Tab, TabBar,
};

/// ANSI-aware layout helpers.
pub use crate::core::text::{
    block_width, center_block, fit_to_height, pad_to_width, truncate_to_width, visible_width,
};
