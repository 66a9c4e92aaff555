//! Grid walkers applying the cell classifier across a scalar field
//!
//! The walkers visit every interior cell of a row-major grid, classify its
//! 2×2 corner block, and collect the resulting contour segments into a
//! field with one entry per cell. Cells are independent of each other, so
//! a Rayon-parallel variant is provided alongside the sequential one.

use crate::cell::{isocontour_cell, CellResult};
use log::trace;
use rayon::prelude::*;

/// Extract the isocontour field for a nested row-major grid
///
/// Output dimensions are `(rows - 1) × (cols - 1)`; `output[i][j]` is the
/// cell whose NW corner is `values[i][j]`. A grid with fewer than two rows
/// or columns produces a field with no cells.
///
/// # Panics
///
/// Panics if the grid is ragged (rows of unequal length).
pub fn isocontours(isovalue: f64, values: &[Vec<f64>]) -> Vec<Vec<CellResult>> {
    check_rectangular(values);
    trace!(
        "isocontours: {} x {} grid at isovalue {}",
        values.len(),
        values.first().map_or(0, Vec::len),
        isovalue
    );

    values
        .windows(2)
        .map(|rows| row_cells(isovalue, &rows[0], &rows[1]))
        .collect()
}

/// Extract the isocontour field with cell rows processed in parallel
///
/// Produces bit-identical output to [`isocontours`]; cells carry no
/// ordering dependency, so rows are farmed out to Rayon's thread pool.
/// Worthwhile for large grids only.
///
/// # Panics
///
/// Panics if the grid is ragged (rows of unequal length).
pub fn isocontours_par(isovalue: f64, values: &[Vec<f64>]) -> Vec<Vec<CellResult>> {
    check_rectangular(values);

    values
        .par_windows(2)
        .map(|rows| row_cells(isovalue, &rows[0], &rows[1]))
        .collect()
}

/// Extract the isocontour field from a flat row-major array
///
/// Accepts the grid as a single `width * height` slice, the layout scalar
/// fields typically arrive in from chunked stores or frame buffers, and
/// avoids building nested vectors on the input side.
///
/// # Panics
///
/// Panics if `values.len() != width * height`.
pub fn isocontours_flat(
    isovalue: f64,
    values: &[f64],
    width: usize,
    height: usize,
) -> Vec<Vec<CellResult>> {
    assert_eq!(
        values.len(),
        width * height,
        "flat grid length {} does not match {} x {}",
        values.len(),
        width,
        height
    );
    trace!("isocontours_flat: {height} x {width} grid at isovalue {isovalue}");

    if height < 2 {
        return Vec::new();
    }

    (0..height - 1)
        .map(|i| {
            let top = &values[i * width..(i + 1) * width];
            let bottom = &values[(i + 1) * width..(i + 2) * width];
            row_cells(isovalue, top, bottom)
        })
        .collect()
}

/// Classify every cell formed by two adjacent grid rows
fn row_cells(isovalue: f64, top: &[f64], bottom: &[f64]) -> Vec<CellResult> {
    top.windows(2)
        .zip(bottom.windows(2))
        .map(|(t, b)| isocontour_cell(isovalue, t[0], t[1], b[0], b[1]))
        .collect()
}

fn check_rectangular(values: &[Vec<f64>]) {
    if let Some(first) = values.first() {
        for (i, row) in values.iter().enumerate() {
            assert_eq!(
                row.len(),
                first.len(),
                "ragged grid: row {} has {} values, expected {}",
                i,
                row.len(),
                first.len()
            );
        }
    }
}
