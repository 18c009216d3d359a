//! Client-side game systems
//!
//! Organized into submodules for maintainability.

mod cursor;
mod ground;
mod player;
mod world;

// Re-export everything for easy access from main.rs
pub use cursor::*;
pub use ground::*;
pub use player::*;
pub use world::*;
