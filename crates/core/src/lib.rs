//! Falling-block simulation core - pure, deterministic, and testable.
//!
//! This crate contains the complete rules of the playing field: collision
//! detection, piece movement and rotation, locking, row clearing, and the
//! score/level side effects of clears. It has **zero dependencies** on UI,
//! timing, or I/O:
//!
//! - **Deterministic**: the RNG is seeded at construction, so the same seed
//!   produces the same piece sequence.
//! - **Synchronous**: an external clock drives [`Field::on_tick`]; no call
//!   suspends, blocks, or performs I/O.
//! - **Pre-validated**: every mutation is tested on a cloned piece before
//!   commit, so infeasible requests are silent no-ops and the grid can never
//!   enter an overlapping state.
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven canonical tetromino masks and their colors
//! - [`piece`]: 4x4 mask + anchor + color, rotation and board translation
//! - [`grid`]: 10x20 color grid with occupancy and row compaction
//! - [`level`]: level/score collaborator seam and stock implementation
//! - [`field`]: the tick-driven state machine composing the above
//! - [`rng`]: seedable LCG for shape and spawn-column selection
//! - [`snapshot`]: serializable read-only view for renderers/serializers
//!
//! # Example
//!
//! ```
//! use tetris_sim_core::{Field, Level};
//!
//! let mut field = Field::new(Level::new(), 12345);
//!
//! // Player intents between ticks; infeasible requests are no-ops.
//! field.move_left();
//! field.rotate_clockwise();
//!
//! // The external clock drives the simulation; `false` signals game over.
//! let alive = field.on_tick();
//! assert!(alive);
//! ```

pub mod catalog;
pub mod field;
pub mod grid;
pub mod level;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use tetris_sim_types as types;

// Re-export commonly used types for convenience
pub use field::{Field, Phase};
pub use grid::Grid;
pub use level::{Level, LevelTracker};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use snapshot::{FieldSnapshot, PieceSnapshot};
