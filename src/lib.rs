//! Bubble levels (workspace facade crate).
//!
//! Re-exports the level core and shared types under `bubble_levels::{core, types}` and
//! hosts the pieces only the command-line tool needs: session persistence and the CLI.

pub use bubble_levels_core as core;
pub use bubble_levels_types as types;

pub mod cli;
pub mod session;
