//! The table: every card dealt for the current level.
//!
//! The `Table` owns the `CardInstance`s and their deal order. The round
//! controller mutates it (reveal, hide, remove); the presentation layer
//! reads it to draw.

mod board;

pub use board::Table;
