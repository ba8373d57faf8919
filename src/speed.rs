// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use crate::core::{Field2, FieldStats};
use crate::error::{Result, VelocityError};

/// Compute the pointwise speed (velocity magnitude) of a 2D vector field.
///
/// Given the X and Y velocity components on the same grid, produces a grid of
/// the same shape where each cell is `sqrt(vx^2 + vy^2)` in IEEE f64
/// arithmetic. Non-finite inputs propagate: NaN in a component gives NaN
/// speed, an infinite component gives infinite speed. Fill values present in
/// the source data combine arithmetically like any other value; no masking
/// is applied.
///
/// # Errors
/// Returns `ShapeMismatch` if the two component grids do not have identical
/// shapes. No arithmetic is performed in that case.
pub fn compute_speed(vx: &Field2, vy: &Field2) -> Result<Field2> {
    if vx.shape() != vy.shape() {
        return Err(VelocityError::ShapeMismatch {
            expected: vx.shape().to_vec(),
            got: vy.shape().to_vec(),
        });
    }

    let data: Vec<f64> = vx
        .data()
        .iter()
        .zip(vy.data().iter())
        .map(|(&x, &y)| (x * x + y * y).sqrt())
        .collect();

    Field2::new("speed", vx.shape(), data)
}

/// Summarize a speed field, warning if any cell is non-finite.
///
/// Non-finite output cells are not an error; they arise from NaN/Inf or fill
/// values in the source components and are surfaced here as a warning.
pub fn summarize(speed: &Field2) -> FieldStats {
    let stats = speed.stats();
    if stats.non_finite_cells > 0 {
        log::warn!(
            "speed field contains {} non-finite cell(s) out of {}",
            stats.non_finite_cells,
            speed.num_cells()
        );
    }
    stats
}
