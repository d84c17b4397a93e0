//! Collaborator contracts.
//!
//! The solver sits between two collaborators: a maze source that fetches a
//! grid and goal under an opaque session identifier, and a claim sink that
//! submits the move sequence back under the same identifier. Transport,
//! retries and sessions live entirely on the collaborator side of these
//! seams; the solver only ever sees a validated [`MazeData`].

use crate::maze::{Maze, MazeError};
use crate::moves::Move;
use crate::pos::Pos;

/// A validated solve request: maze, goal, and the session it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeData {
    maze: Maze,
    session_id: String,
    goal: Pos,
}

impl MazeData {
    /// Pair a maze with its goal and session, checking that the goal lies
    /// inside the grid. This is the last validation gate before the solver.
    pub fn new(maze: Maze, session_id: String, goal: Pos) -> Result<Self, MazeError> {
        if !maze.contains(goal) {
            return Err(MazeError::GoalOutOfBounds {
                row: goal.row,
                col: goal.col,
                rows: maze.rows(),
                cols: maze.cols(),
            });
        }
        Ok(Self {
            maze,
            session_id,
            goal,
        })
    }

    /// The maze grid.
    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The opaque session identifier this maze was issued under.
    #[inline]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The goal cell. Guaranteed in bounds.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }
}

/// A solved maze: the move sequence paired with its session identifier.
///
/// The moves are consumed verbatim by the claim collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MazeSolution {
    pub session_id: String,
    pub moves: Vec<Move>,
}

/// The maze-acquisition collaborator seam.
///
/// Implementations own the remote service, proxying, and any retry policy;
/// they hand over only fully validated data.
pub trait MazeSource {
    type Error;

    /// Fetch the next maze to solve.
    fn fetch(&mut self) -> Result<MazeData, Self::Error>;
}

/// The claim-submission collaborator seam.
pub trait ClaimSink {
    type Error;

    /// Submit a solution for the session it was solved under.
    fn submit(&mut self, solution: &MazeSolution) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// Serde wire form
// ---------------------------------------------------------------------------

// MazeData (de)serializes through a raw mirror of the upstream payload shape
// ({ "walls", "sessionId", "goalPos": { "row", "col" } }) so that grid and
// goal validation also run on the serde path.
#[cfg(feature = "serde")]
mod wire {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::MazeData;
    use crate::maze::Maze;
    use crate::pos::Pos;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawMazeData {
        walls: Vec<Vec<u8>>,
        session_id: String,
        goal_pos: Pos,
    }

    impl Serialize for MazeData {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawMazeData {
                walls: self.maze.wall_codes(),
                session_id: self.session_id.clone(),
                goal_pos: self.goal,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for MazeData {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawMazeData::deserialize(deserializer)?;
            let maze = Maze::from_rows(&raw.walls).map_err(de::Error::custom)?;
            MazeData::new(maze, raw.session_id, raw.goal_pos).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze_2x2() -> Maze {
        Maze::from_rows(&[vec![6, 12], vec![3, 9]]).unwrap()
    }

    #[test]
    fn goal_inside_bounds_accepted() {
        let data = MazeData::new(maze_2x2(), "s-1".into(), Pos::new(1, 1)).unwrap();
        assert_eq!(data.goal(), Pos::new(1, 1));
        assert_eq!(data.session_id(), "s-1");
    }

    #[test]
    fn goal_outside_bounds_rejected() {
        let err = MazeData::new(maze_2x2(), "s-1".into(), Pos::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::GoalOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_data_from_upstream_json() {
        let json = r#"{
            "walls": [[6, 12], [3, 9]],
            "sessionId": "abc123",
            "goalPos": { "row": 1, "col": 1 }
        }"#;
        let data: MazeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.session_id(), "abc123");
        assert_eq!(data.goal(), Pos::new(1, 1));
        assert_eq!(data.maze().wall_codes(), vec![vec![6, 12], vec![3, 9]]);
    }

    #[test]
    fn maze_data_round_trip() {
        let data = MazeData::new(
            Maze::from_rows(&[vec![0, 0], vec![0, 0]]).unwrap(),
            "xyz".into(),
            Pos::new(1, 0),
        )
        .unwrap();
        let json = serde_json::to_string(&data).unwrap();
        let back: MazeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn invalid_grid_rejected_on_deserialize() {
        let json = r#"{
            "walls": [[6, 99]],
            "sessionId": "abc",
            "goalPos": { "row": 0, "col": 0 }
        }"#;
        assert!(serde_json::from_str::<MazeData>(json).is_err());
    }

    #[test]
    fn solution_moves_serialize_lowercase() {
        let sol = MazeSolution {
            session_id: "abc".into(),
            moves: vec![Move::Down, Move::Right],
        };
        let json = serde_json::to_string(&sol).unwrap();
        assert_eq!(json, r#"{"sessionId":"abc","moves":["down","right"]}"#);
    }
}
