//! Falling-block simulation core (workspace facade crate).
//!
//! This package keeps a stable `tetris_sim::{core,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use tetris_sim_core as core;
pub use tetris_sim_types as types;
