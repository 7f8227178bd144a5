//! Core interfaces and types shared by the runtime and widgets.

pub mod autocomplete;
pub mod content;
pub mod key;
pub mod message;
pub mod modal;
pub mod terminal;
pub mod text;
