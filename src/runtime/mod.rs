//! Runtime orchestration: the shell, its modal stack and the message loop.

pub mod focus;
pub mod overlay;
pub mod program;
pub mod shell;

pub use focus::FocusTarget;
pub use overlay::ModalManager;
pub use program::{Program, ProgramHandle};
pub use shell::Shell;
