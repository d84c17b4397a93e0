//! Per-cell wall bitmasks.
//!
//! Each maze cell carries a 4-bit code describing which of its edges are
//! walled: bit 0 = top, bit 1 = right, bit 2 = bottom, bit 3 = left.

use std::fmt;

/// The wall bitmask of a single cell, wrapping the raw 4-bit code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    /// Wall on the top edge.
    pub const TOP: Self = Self(1);
    /// Wall on the right edge.
    pub const RIGHT: Self = Self(2);
    /// Wall on the bottom edge.
    pub const BOTTOM: Self = Self(4);
    /// Wall on the left edge.
    pub const LEFT: Self = Self(8);
    /// No walls.
    pub const NONE: Self = Self(0);
    /// All four walls.
    pub const ALL: Self = Self(15);

    /// Wrap a raw cell code. Returns `None` if the value exceeds 4 bits.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code <= Self::ALL.0 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// The raw 4-bit code.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every wall bit in `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl From<Walls> for u8 {
    fn from(w: Walls) -> Self {
        w.0
    }
}

impl fmt::Display for Walls {
    /// Renders as a fixed-width `TRBL` pattern, unset sides as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write;
        for (bit, ch) in [
            (Self::TOP, 'T'),
            (Self::RIGHT, 'R'),
            (Self::BOTTOM, 'B'),
            (Self::LEFT, 'L'),
        ] {
            f.write_char(if self.contains(bit) { ch } else { '-' })?;
        }
        Ok(())
    }
}
