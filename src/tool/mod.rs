//! The bounds-measurement tool: gesture state plus per-frame rendering.

pub mod state;
pub mod tick;

// Re-export commonly used items at module level
pub use state::BoundsToolState;
pub use tick::draw_measure_tick;
