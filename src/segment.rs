/// Direction of a contour line segment within a single cell
///
/// Each variant names the pair of cell edges the segment connects, in a
/// fixed first-edge/second-edge order. The order matters: the segment's
/// interpolation fractions are reported for the first-named edge first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentDirection {
    WestToNorth,
    WestToEast,
    WestToSouth,
    NorthToEast,
    NorthToSouth,
    SouthToEast,
}

/// A contour line segment crossing one grid cell
///
/// The two endpoints are given as interpolation fractions rather than
/// coordinates: `d0` is the fraction of the way along the first-named edge
/// (from its first corner toward its second) where the scalar field crosses
/// the isovalue, and `d1` is the same for the second-named edge. Both lie in
/// [0, 1] whenever the cell genuinely straddles the isovalue.
///
/// Edge corner order is fixed per edge: West runs NW→SW, North runs NW→NE,
/// South runs SW→SE, East runs NE→SE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub direction: SegmentDirection,
    pub d0: f64,
    pub d1: f64,
}

impl LineSegment {
    /// Create a segment from a direction and its two edge fractions
    pub fn new(direction: SegmentDirection, d0: f64, d1: f64) -> Self {
        Self { direction, d0, d1 }
    }
}
