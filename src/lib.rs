//! # grid-isocontours
//!
//! A Rust implementation of the marching squares algorithm for extracting
//! isocontour line segments from 2D scalar fields.
//!
//! Given a row-major grid of scalar samples and an isovalue, each interior
//! 2×2 cell is classified into one of 16 configurations by comparing its
//! corners against the isovalue, and the matching contour segment(s) are
//! emitted with linearly interpolated edge-crossing fractions. The output
//! is a `(rows-1) × (cols-1)` field of per-cell results that a renderer
//! can map into its own coordinate space.
//!
//! The crate deliberately stops at per-cell segments: no stitching of
//! segments into polylines or polygons, and no 3D (marching cubes)
//! variant. Segment endpoints are fractions along cell edges rather than
//! coordinates, so callers own all geometry and scaling decisions.
//!
//! ## Example
//!
//! ```rust
//! use grid_isocontours::{isocontours, SegmentDirection};
//!
//! // 2x2 grid: one cell, SE corner above the isovalue
//! let values = vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 5.0],
//! ];
//!
//! let field = isocontours(4.0, &values);
//!
//! assert_eq!(field.len(), 1);
//! let cell = &field[0][0];
//! assert_eq!(cell.len(), 1);
//! assert_eq!(cell[0].direction, SegmentDirection::SouthToEast);
//! assert_eq!(cell[0].d0, 0.5);       // crossing half way along the south edge
//! assert_eq!(cell[0].d1, 2.0 / 3.0); // and two thirds down the east edge
//! ```
//!
//! ## Saddle cells
//!
//! Configurations with two diagonally opposite corners above the isovalue
//! (cases 6 and 9) admit two valid topologies. This implementation uses a
//! fixed diagonal choice with no asymptotic decider, which keeps every
//! call a pure function of its arguments but can draw visually
//! disconnected contours at saddle points. See
//! [`segments_for_case`] for details.
//!
//! ## Performance
//!
//! - **Pure functions**: no hidden state, re-entrant, trivially cacheable
//! - **Parallel option**: [`isocontours_par`] spreads cell rows over
//!   Rayon's thread pool; output is bit-identical to the sequential walker
//! - **Flat input**: [`isocontours_flat`] consumes `width * height` slices
//!   directly, the layout scalar data usually arrives in

mod cell;
mod marching_squares;
mod segment;

pub use cell::{classify, isocontour_cell, segments_for_case, CellResult};
pub use marching_squares::{isocontours, isocontours_flat, isocontours_par};
pub use segment::{LineSegment, SegmentDirection};
