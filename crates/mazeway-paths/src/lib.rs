//! **mazeway-paths** — shortest-path search over wall-bitmask mazes.
//!
//! The path finder is a pure function of (maze, goal): [`find_path`] returns
//! the optimal move sequence from the fixed start cell, or `None` when the
//! goal is unreachable. [`solve`] wraps it for a full [`MazeData`] request,
//! producing the [`MazeSolution`] the claim collaborator consumes.
//!
//! [`MazeData`]: mazeway_core::MazeData
//! [`MazeSolution`]: mazeway_core::MazeSolution

mod astar;
mod distance;

pub use astar::{find_path, solve};
pub use distance::manhattan;
