//! Overlay stack: a LIFO of modals with lifecycle hooks and centered rendering.

use crate::core::key::Key;
use crate::core::message::Cmd;
use crate::core::modal::Modal;
use crate::core::text::center_block;

/// Owns the modal stack. The only mutator of the stack.
///
/// Semantics:
/// - `version` increases by exactly one per successful push or pop.
/// - Popping an empty stack is a no-op that leaves `version` untouched.
#[derive(Default)]
pub struct ModalManager {
    stack: Vec<Box<dyn Modal>>,
    version: u64,
    width: usize,
    height: usize,
    backdrop_style: Option<String>,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a modal. `on_push` runs first, with the current viewport size.
    pub fn push(&mut self, mut modal: Box<dyn Modal>) {
        modal.on_push(self.width, self.height);
        tracing::debug!(
            modal = modal.id(),
            depth = self.stack.len() + 1,
            "modal pushed"
        );
        self.stack.push(modal);
        self.version += 1;
    }

    /// Remove and return the top modal after running its `on_pop`.
    pub fn pop(&mut self) -> Option<Box<dyn Modal>> {
        let mut modal = self.stack.pop()?;
        modal.on_pop();
        self.version += 1;
        tracing::debug!(modal = modal.id(), depth = self.stack.len(), "modal popped");
        Some(modal)
    }

    pub fn peek(&self) -> Option<&dyn Modal> {
        self.stack.last().map(|modal| modal.as_ref())
    }

    pub fn peek_mut(&mut self) -> Option<&mut (dyn Modal + 'static)> {
        self.stack.last_mut().map(|modal| modal.as_mut())
    }

    /// Pop every modal, top to bottom, so each one sees its `on_pop`.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    pub fn has_active(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn count(&self) -> usize {
        self.stack.len()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Viewport size handed to the next `push`.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Style intended for a dimmed backdrop behind the top modal.
    ///
    /// Stored for hosts that composite their own backdrop; `render` does not apply it.
    pub fn set_backdrop_style(&mut self, style: Option<String>) {
        self.backdrop_style = style;
    }

    pub fn backdrop_style(&self) -> Option<&str> {
        self.backdrop_style.as_deref()
    }

    /// Render the top modal centered in a `width` x `height` viewport.
    ///
    /// Returns an empty string when no modal is active.
    pub fn render(&self, width: usize, height: usize) -> String {
        let Some(modal) = self.peek() else {
            return String::new();
        };
        let (modal_width, modal_height) = modal.size().dimensions(width, height);
        let body = modal.render(modal_width, modal_height);
        center_block(&body, width, height)
    }

    /// Give the key to the top modal. `(false, None)` when the stack is empty.
    pub fn handle_key(&mut self, key: &Key) -> (bool, Option<Cmd>) {
        match self.peek_mut() {
            Some(modal) => modal.handle_key(key),
            None => (false, None),
        }
    }
}
