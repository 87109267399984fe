//! Custom TUI widgets.

pub mod mascot;

pub use mascot::{LOADING_MESSAGES, MascotWidget};
