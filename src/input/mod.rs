//! Input handling for the measurement overlay.
//!
//! Translates backend keyboard and mouse events into measurement gesture
//! transitions (anchor, finish, cancel) and overlay lifecycle flags.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use state::InputState;
