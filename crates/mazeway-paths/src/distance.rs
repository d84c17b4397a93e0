use mazeway_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// With uniform edge cost and 4-way movement this is an admissible and
/// consistent A* heuristic.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
