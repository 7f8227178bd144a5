//! Built-in widgets hosted by the shell.

pub mod help;
pub mod input;
pub mod status_bar;
pub mod tab_bar;

pub use help::{HelpBinding, HelpCategory, HelpModal};
pub use input::{HistoryProvider, Input, INPUT_HEIGHT};
pub use status_bar::StatusBar;
pub use tab_bar::{Tab, TabBar};
