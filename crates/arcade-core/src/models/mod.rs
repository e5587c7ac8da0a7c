//! Domain models for Arcade.

pub mod game;

pub use game::*;
