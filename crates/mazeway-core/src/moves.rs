//! Directional moves.
//!
//! [`Move`] is the output alphabet of the path finder: the four cardinal
//! steps, serialized in the lowercase form the claim endpoint expects.

use std::fmt;

use crate::pos::Pos;
use crate::walls::Walls;

/// A single cardinal step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
}

impl Move {
    /// All moves, in the fixed up, right, down, left enumeration order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// The (row-delta, column-delta) of this move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Right => (0, 1),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
        }
    }

    /// The position reached by taking this move from `from`.
    #[inline]
    pub const fn apply(self, from: Pos) -> Pos {
        let (dr, dc) = self.delta();
        from.shift(dr, dc)
    }

    /// The reverse move.
    #[inline]
    pub const fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Right => Move::Left,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
        }
    }

    /// The wall bits that block this move: the bit on the departing side of
    /// the source cell, and the bit on the arriving side of the destination
    /// cell.
    #[inline]
    pub const fn blocking_bits(self) -> (Walls, Walls) {
        match self {
            Move::Up => (Walls::TOP, Walls::BOTTOM),
            Move::Right => (Walls::RIGHT, Walls::LEFT),
            Move::Down => (Walls::BOTTOM, Walls::TOP),
            Move::Left => (Walls::LEFT, Walls::RIGHT),
        }
    }

    /// Lowercase wire name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Right => "right",
            Move::Down => "down",
            Move::Left => "left",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas() {
        assert_eq!(Move::Up.delta(), (-1, 0));
        assert_eq!(Move::Right.delta(), (0, 1));
        assert_eq!(Move::Down.delta(), (1, 0));
        assert_eq!(Move::Left.delta(), (0, -1));
    }

    #[test]
    fn apply_then_opposite_round_trips() {
        let p = Pos::new(3, 4);
        for mv in Move::ALL {
            assert_eq!(mv.opposite().apply(mv.apply(p)), p);
        }
    }

    #[test]
    fn blocking_bits_pair_opposite_sides() {
        assert_eq!(Move::Up.blocking_bits(), (Walls::TOP, Walls::BOTTOM));
        assert_eq!(Move::Right.blocking_bits(), (Walls::RIGHT, Walls::LEFT));
        assert_eq!(Move::Down.blocking_bits(), (Walls::BOTTOM, Walls::TOP));
        assert_eq!(Move::Left.blocking_bits(), (Walls::LEFT, Walls::RIGHT));
    }

    #[test]
    fn wire_names_lowercase() {
        let names: Vec<_> = Move::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["up", "right", "down", "left"]);
    }
}
