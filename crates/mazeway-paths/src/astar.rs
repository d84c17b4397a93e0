//! A* shortest-path search over a wall-bitmask maze.
//!
//! The search is a closed computation over an already-validated grid: no
//! I/O, no shared state, all working structures allocated per call. Calling
//! it concurrently from independent threads is safe.

use std::collections::BinaryHeap;

use mazeway_core::{Maze, MazeData, MazeSolution, Move, Pos};

use crate::distance::manhattan;

/// Sentinel g-score for cells not yet reached.
const UNREACHABLE: i32 = i32::MAX;

/// Frontier entry, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct FrontierEntry {
    idx: usize,
    f: i32,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the shortest move sequence from the start cell (0, 0) to `goal`.
///
/// Returns `None` when the goal is unreachable under the wall constraints —
/// an expected outcome, not an error. An out-of-bounds goal also returns
/// `None` without searching; catching that earlier with a descriptive error
/// is [`MazeData::new`]'s job.
///
/// The returned sequence has minimal length: the Manhattan heuristic never
/// overestimates over uniform-cost 4-way edges, so A* terminates on the true
/// shortest path. A goal equal to the start yields an empty sequence.
pub fn find_path(maze: &Maze, goal: Pos) -> Option<Vec<Move>> {
    let goal_idx = maze.idx(goal)?;
    let start_idx = maze.idx(Pos::START)?;

    if start_idx == goal_idx {
        return Some(Vec::new());
    }

    // Best known cost from start, per cell.
    let mut g = vec![UNREACHABLE; maze.len()];
    g[start_idx] = 0;

    // Predecessor trace: flat index of the previous cell and the move taken.
    let mut parent: Vec<Option<(usize, Move)>> = vec![None; maze.len()];

    let mut open = BinaryHeap::new();
    open.push(FrontierEntry {
        idx: start_idx,
        f: manhattan(Pos::START, goal),
    });

    while let Some(FrontierEntry { idx: ci, f }) = open.pop() {
        let cp = maze.pos(ci);

        // The heap may hold superseded entries for a cell (decrease-key is
        // emulated by pushing fresh entries). Skip a pop whose recorded f
        // exceeds the freshest known f for that cell.
        if f > g[ci].saturating_add(manhattan(cp, goal)) {
            continue;
        }

        if ci == goal_idx {
            let mut moves = Vec::new();
            let mut cur = goal_idx;
            while let Some((prev, mv)) = parent[cur] {
                moves.push(mv);
                cur = prev;
            }
            moves.reverse();
            return Some(moves);
        }

        let tentative = g[ci] + 1;
        for mv in Move::ALL {
            if !maze.open(cp, mv) {
                continue;
            }
            let np = mv.apply(cp);
            let Some(ni) = maze.idx(np) else {
                continue;
            };
            if tentative < g[ni] {
                g[ni] = tentative;
                parent[ni] = Some((ci, mv));
                open.push(FrontierEntry {
                    idx: ni,
                    f: tentative + manhattan(np, goal),
                });
            }
        }
    }

    None
}

/// Solve a full [`MazeData`] request, pairing the move sequence with the
/// session it was issued under.
///
/// Returns `None` when the maze has no solution.
pub fn solve(data: &MazeData) -> Option<MazeSolution> {
    match find_path(data.maze(), data.goal()) {
        Some(moves) => {
            log::debug!(
                "solved {}x{} maze in {} moves (session {})",
                data.maze().rows(),
                data.maze().cols(),
                moves.len(),
                data.session_id()
            );
            Some(MazeSolution {
                session_id: data.session_id().to_owned(),
                moves,
            })
        }
        None => {
            log::debug!(
                "{}x{} maze has no path to {} (session {})",
                data.maze().rows(),
                data.maze().cols(),
                data.goal(),
                data.session_id()
            );
            None
        }
    }
}
