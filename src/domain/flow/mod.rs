//! Flow module - which screen comes next.
//!
//! Forward navigation branches once, on the intent screen. Back navigation
//! is only offered before the games start; exit is always available and is
//! handled by the application layer, since it also resets the state.

mod screen;

pub use screen::Screen;
