// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Result, VelocityError};

/// A named two-dimensional grid of f64 values.
///
/// Stores the cell values flat in row-major order together with the grid
/// shape (rows, columns). Both velocity components and the derived speed
/// field are represented this way.
pub struct Field2 {
    name: String,
    shape: [usize; 2],
    data: Box<[f64]>,
}

impl Field2 {
    /// Create a new field with the given name, shape, and row-major data.
    ///
    /// # Parameters
    /// - `name`: Variable name this grid was loaded as (or will be saved as)
    /// - `shape`: Number of cells along each axis (each must be >= 1)
    /// - `data`: Cell values in row-major order
    ///
    /// # Errors
    /// Returns an error if an axis has zero cells or if the data length does
    /// not match the product of the shape dimensions.
    pub fn new(name: impl Into<String>, shape: [usize; 2], data: Vec<f64>) -> Result<Self> {
        for (axis, &size) in shape.iter().enumerate() {
            if size == 0 {
                return Err(VelocityError::InvalidGridShape { axis, size });
            }
        }

        let num_cells: usize = shape.iter().product();
        if data.len() != num_cells {
            return Err(VelocityError::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Field2 {
            name: name.into(),
            shape,
            data: data.into_boxed_slice(),
        })
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the grid shape (rows, columns).
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Get the total number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.shape.iter().product()
    }

    /// Get the cell value at the given (row, column) index.
    pub fn get(&self, idx: [usize; 2]) -> f64 {
        self.data[self.idx_to_flat(idx)]
    }

    /// Get the raw row-major cell data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Convert a flat index to a (row, column) index.
    pub fn flat_to_idx(&self, flat: usize) -> [usize; 2] {
        [flat / self.shape[1], flat % self.shape[1]]
    }

    /// Convert a (row, column) index to a flat index.
    pub fn idx_to_flat(&self, idx: [usize; 2]) -> usize {
        idx[0] * self.shape[1] + idx[1]
    }

    /// Compute summary statistics over the grid.
    ///
    /// Min, max, and mean are taken over finite cells only; NaN and infinite
    /// cells are counted separately. If no cell is finite, min, max, and mean
    /// are NaN.
    pub fn stats(&self) -> FieldStats {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut finite_cells = 0usize;
        let mut non_finite_cells = 0usize;

        for &v in self.data.iter() {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
                sum += v;
                finite_cells += 1;
            } else {
                non_finite_cells += 1;
            }
        }

        if finite_cells == 0 {
            return FieldStats {
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                finite_cells,
                non_finite_cells,
            };
        }

        FieldStats {
            min,
            max,
            mean: sum / finite_cells as f64,
            finite_cells,
            non_finite_cells,
        }
    }
}

/// Summary statistics over a field's finite cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    /// Minimum finite cell value (NaN if no cell is finite).
    pub min: f64,
    /// Maximum finite cell value (NaN if no cell is finite).
    pub max: f64,
    /// Mean of the finite cell values (NaN if no cell is finite).
    pub mean: f64,
    /// Number of finite cells.
    pub finite_cells: usize,
    /// Number of NaN or infinite cells.
    pub non_finite_cells: usize,
}
