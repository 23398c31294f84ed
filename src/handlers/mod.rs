//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and translate input into model changes or
//! store calls.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
