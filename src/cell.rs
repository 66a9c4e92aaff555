//! Per-cell isocontour classification and segment dispatch
//!
//! A cell is the 2×2 block of grid samples at corners NW, NE, SW, SE.
//! Classification reduces the four corners to a 4-bit composite case, and
//! the dispatch table maps each case to the contour segment(s) crossing
//! the cell, with linearly interpolated edge fractions.

use crate::segment::{LineSegment, SegmentDirection};
use arrayvec::ArrayVec;

/// Contour segments for one cell: zero, one, or two line segments
///
/// Two segments only occur for the saddle cases (6 and 9).
pub type CellResult = ArrayVec<LineSegment, 2>;

/// Classify a cell's corners against an isovalue into a composite case
///
/// Each corner contributes one bit, set iff `value >= isovalue` (a corner
/// exactly on the isovalue counts as above). Bit packing is fixed:
/// NW is bit 3, NE bit 2, SW bit 1, SE bit 0 — note this groups the top
/// row into the high bits rather than walking the corners clockwise.
///
/// NaN corners compare false against any isovalue and therefore map to a
/// zero bit.
pub fn classify(isovalue: f64, nw: f64, ne: f64, sw: f64, se: f64) -> u8 {
    let mut case = 0u8;
    case |= if nw >= isovalue { 8 } else { 0 };
    case |= if ne >= isovalue { 4 } else { 0 };
    case |= if sw >= isovalue { 2 } else { 0 };
    case |= if se >= isovalue { 1 } else { 0 };
    case
}

/// Fraction of the way from `left` toward `right` at which the field
/// crosses the isovalue
///
/// For example, 4 is 50% of the way between 3 and 5, 1/3 of the way
/// between 3 and 6, and 25% of the way between 3 and 7. "Left" is always
/// the edge's first corner per the fixed edge order (West: NW→SW,
/// North: NW→NE, South: SW→SE, East: NE→SE).
fn crossing_fraction(isovalue: f64, left: f64, right: f64) -> f64 {
    (left - isovalue) / (left - right)
}

/// Map a composite case to its contour segment(s)
///
/// The match below is the full 16-entry dispatch table. Complementary
/// cases share one arm on purpose: case `15 - n` describes the inverted
/// corner pattern of case `n`, and complementary regions share the same
/// boundary, so both run identical arithmetic. Editing one arm edits its
/// complement with it.
///
/// Cases 6 and 9 are the saddles (two diagonally opposite corners above
/// the isovalue) and emit two disjoint segments. The diagonal choice is
/// fixed: both resolve to W→S plus N→E, with no asymptotic decider or
/// cell-average disambiguation. This can render visually disconnected
/// contours at saddle points; it is an accepted limitation of this
/// extractor, kept for output compatibility.
///
/// # Panics
///
/// Panics if `case > 15`.
pub fn segments_for_case(
    case: u8,
    isovalue: f64,
    nw: f64,
    ne: f64,
    sw: f64,
    se: f64,
) -> CellResult {
    match case {
        // 0: no corner above; 15: every corner above. No crossing either way.
        0 | 15 => CellResult::new(),
        // 1: SE only / 14: all but SE
        // 0 - 0    1 - 1
        // |   |    |   |
        // 0 - 1    1 - 0
        1 | 14 => single(LineSegment::new(
            SegmentDirection::SouthToEast,
            crossing_fraction(isovalue, sw, se),
            crossing_fraction(isovalue, ne, se),
        )),
        // 2: SW only / 13: all but SW
        2 | 13 => single(west_to_south(isovalue, nw, sw, se)),
        // 3: bottom row / 12: top row
        3 | 12 => single(LineSegment::new(
            SegmentDirection::WestToEast,
            crossing_fraction(isovalue, nw, sw),
            crossing_fraction(isovalue, ne, se),
        )),
        // 4: NE only / 11: all but NE
        4 | 11 => single(north_to_east(isovalue, nw, ne, se)),
        // 5: east column / 10: west column
        5 | 10 => single(LineSegment::new(
            SegmentDirection::NorthToSouth,
            crossing_fraction(isovalue, nw, ne),
            crossing_fraction(isovalue, sw, se),
        )),
        // 6: NE+SW saddle / 9: NW+SE saddle (fixed diagonal choice)
        // 0 - 1    1 - 0
        // |   |    |   |
        // 1 - 0    0 - 1
        6 | 9 => {
            let mut cell = CellResult::new();
            cell.push(west_to_south(isovalue, nw, sw, se));
            cell.push(north_to_east(isovalue, nw, ne, se));
            cell
        }
        // 7: all but NW / 8: NW only
        7 | 8 => single(LineSegment::new(
            SegmentDirection::WestToNorth,
            crossing_fraction(isovalue, nw, sw),
            crossing_fraction(isovalue, nw, ne),
        )),
        _ => panic!("composite case out of range: {case} (expected 0-15)"),
    }
}

/// Classify a cell and dispatch in one step
pub fn isocontour_cell(isovalue: f64, nw: f64, ne: f64, sw: f64, se: f64) -> CellResult {
    segments_for_case(classify(isovalue, nw, ne, sw, se), isovalue, nw, ne, sw, se)
}

fn single(segment: LineSegment) -> CellResult {
    let mut cell = CellResult::new();
    cell.push(segment);
    cell
}

// Shared by the single-corner cases and the saddle arm

fn west_to_south(isovalue: f64, nw: f64, sw: f64, se: f64) -> LineSegment {
    LineSegment::new(
        SegmentDirection::WestToSouth,
        crossing_fraction(isovalue, nw, sw),
        crossing_fraction(isovalue, sw, se),
    )
}

fn north_to_east(isovalue: f64, nw: f64, ne: f64, se: f64) -> LineSegment {
    LineSegment::new(
        SegmentDirection::NorthToEast,
        crossing_fraction(isovalue, nw, ne),
        crossing_fraction(isovalue, ne, se),
    )
}
