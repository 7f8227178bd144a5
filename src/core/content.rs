//! Content and TabContent traits.

use std::any::Any;

use crate::core::message::{Cmd, Msg};

/// A renderable, message-driven widget hosted inside a tab (or a modal).
pub trait Content {
    /// Startup command, run once when the shell initializes.
    fn init(&mut self) -> Option<Cmd> {
        None
    }

    /// Apply a message and return follow-up work.
    fn update(&mut self, msg: &Msg) -> Option<Cmd>;

    /// Render the current state. Lines are separated by `\n`.
    fn view(&self) -> String;

    /// The widget's current value, if it has one (form data, a selection, ...).
    fn value(&self) -> Option<&dyn Any> {
        None
    }

    /// Allocated region for this content.
    ///
    /// This is a budget, not a promise about the number of lines `view` returns; the tab
    /// bar pads or truncates the output to the region height.
    fn set_size(&mut self, _width: usize, _height: usize) {}

    /// Optional tab lifecycle hooks.
    fn as_tab_content(&mut self) -> Option<&mut dyn TabContent> {
        None
    }
}

/// Lifecycle hooks for content that cares about becoming the visible tab.
pub trait TabContent {
    fn on_activate(&mut self) -> Option<Cmd>;
    fn on_deactivate(&mut self);
}

/// Focus behavior for widgets that render a cursor only while focused.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}
