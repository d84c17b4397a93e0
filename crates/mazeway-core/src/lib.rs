//! **mazeway-core** — wall-bitmask maze model and collaborator contracts.
//!
//! This crate provides the types shared across the *mazeway* workspace:
//! grid positions, per-cell wall masks, the four cardinal moves, the
//! validated [`Maze`] grid, and the narrow seams ([`MazeSource`],
//! [`ClaimSink`]) behind which the network-facing collaborators live.

pub mod maze;
pub mod moves;
pub mod pos;
pub mod session;
pub mod walls;

pub use maze::{Maze, MazeError};
pub use moves::Move;
pub use pos::Pos;
pub use session::{ClaimSink, MazeData, MazeSolution, MazeSource};
pub use walls::Walls;
