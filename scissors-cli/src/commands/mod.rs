//! Command implementations for the scissors CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod diff;
pub mod validate;
