//! Inbound messages and outbound commands.
//!
//! Every state change in the shell is driven by a [`Msg`]. Handlers return an optional
//! [`Cmd`]; commands never run inside `update` itself. The program loop executes them and
//! feeds any resulting message back on a later cycle.

use std::any::Any;
use std::fmt;

use crate::core::key::Key;
use crate::core::modal::Modal;

/// Messages accepted by `Shell::update`.
pub enum Msg {
    /// Terminal viewport changed size.
    Resize { width: usize, height: usize },
    /// A keystroke.
    Key(Key),
    /// Pop the top modal.
    PopModal,
    /// Push a modal onto the overlay stack.
    PushModal(Box<dyn Modal>),
    /// The input box submitted a value.
    InputSubmit { value: String },
    /// Forces a re-render without changing shell state.
    Refresh,
    /// Anything else; forwarded verbatim to the active tab's content.
    Custom(Box<dyn Any + Send>),
}

impl Msg {
    pub fn key(id: impl AsRef<str>) -> Self {
        Msg::Key(Key::new(id))
    }

    pub fn resize(width: usize, height: usize) -> Self {
        Msg::Resize { width, height }
    }

    pub fn push_modal(modal: impl Modal + 'static) -> Self {
        Msg::PushModal(Box::new(modal))
    }

    pub fn custom<T: Any + Send>(value: T) -> Self {
        Msg::Custom(Box::new(value))
    }

    /// Borrows a custom payload as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Msg::Custom(payload) => payload.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The key carried by a `Key` message.
    pub fn as_key(&self) -> Option<&Key> {
        match self {
            Msg::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Msg::Resize { width, height } => f
                .debug_struct("Resize")
                .field("width", width)
                .field("height", height)
                .finish(),
            Msg::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Msg::PopModal => f.write_str("PopModal"),
            Msg::PushModal(modal) => f.debug_tuple("PushModal").field(&modal.id()).finish(),
            Msg::InputSubmit { value } => {
                f.debug_struct("InputSubmit").field("value", value).finish()
            }
            Msg::Refresh => f.write_str("Refresh"),
            Msg::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Deferred work returned from an update.
pub enum Cmd {
    /// Terminate the program loop.
    Quit,
    /// Deliver a message on the next cycle.
    Msg(Msg),
    /// Run off the update call stack; the produced message, if any, re-enters later.
    Task(Box<dyn FnOnce() -> Option<Msg> + Send>),
    /// Several commands at once.
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn msg(msg: Msg) -> Self {
        Cmd::Msg(msg)
    }

    pub fn task<F>(task: F) -> Self
    where
        F: FnOnce() -> Option<Msg> + Send + 'static,
    {
        Cmd::Task(Box::new(task))
    }

    /// Combines optional commands, dropping `None`s and flattening nested batches.
    ///
    /// Returns `None` when nothing is left and the single command itself when only one is.
    pub fn batch(cmds: impl IntoIterator<Item = Option<Cmd>>) -> Option<Cmd> {
        let mut flat = Vec::new();
        for cmd in cmds.into_iter().flatten() {
            match cmd {
                Cmd::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Cmd::Batch(flat)),
        }
    }

    /// Whether this command (or any command in a batch) quits.
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_quit),
            _ => false,
        }
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cmd::Quit => f.write_str("Quit"),
            Cmd::Msg(msg) => f.debug_tuple("Msg").field(msg).finish(),
            Cmd::Task(_) => f.write_str("Task(..)"),
            Cmd::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
        }
    }
}
