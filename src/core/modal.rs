//! Modal contract and overlay size presets.

use crate::core::key::Key;
use crate::core::message::Cmd;

/// Preferred overlay footprint as a fraction of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
    Fullscreen,
}

impl Size {
    pub fn height_percent(self) -> f64 {
        match self {
            Size::Small => 0.30,
            Size::Medium => 0.50,
            Size::Large => 0.80,
            Size::Fullscreen => 1.00,
        }
    }

    pub fn width_percent(self) -> f64 {
        match self {
            Size::Small => 0.50,
            Size::Medium => 0.60,
            Size::Large => 0.80,
            Size::Fullscreen => 1.00,
        }
    }

    /// Modal dimensions for a `width` x `height` viewport, rounded down.
    pub fn dimensions(self, width: usize, height: usize) -> (usize, usize) {
        let modal_width = (width as f64 * self.width_percent()).floor() as usize;
        let modal_height = (height as f64 * self.height_percent()).floor() as usize;
        (modal_width, modal_height)
    }
}

/// A stack-resident overlay dialog.
///
/// While a modal is on top of the stack it owns the keystream: the shell hands it every
/// key before considering anything else.
pub trait Modal: Send {
    /// Stable identifier, used for logging and debugging.
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn size(&self) -> Size {
        Size::Medium
    }

    /// Render at the given size.
    ///
    /// Must depend only on internal state and the arguments; the stack re-renders the top
    /// modal on every frame.
    fn render(&self, width: usize, height: usize) -> String;

    /// Called before the modal is placed on the stack, with the current viewport size.
    fn on_push(&mut self, _width: usize, _height: usize) {}

    /// Called before the modal is removed from the stack.
    fn on_pop(&mut self) {}

    /// Handle a key. Returns whether the key was consumed and an optional command.
    fn handle_key(&mut self, key: &Key) -> (bool, Option<Cmd>);
}
