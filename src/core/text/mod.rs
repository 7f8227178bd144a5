//! Text helpers (ANSI scanning, width calculations, block layout).
//!
//! These helpers are pure (string in/string out) and live under `core` so widgets can depend
//! on them without importing anything from the runtime.

pub mod ansi;
pub mod layout;
pub mod width;

pub use layout::{center_block, fit_to_height, pad_to_width, truncate_to_width};
pub use width::{block_width, visible_width};
