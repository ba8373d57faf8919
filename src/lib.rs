// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

//! Pointwise speed calculator for gridded ice-velocity data.
//!
//! This library reads two-dimensional velocity component grids (X and Y) from
//! a NetCDF dataset and computes the Euclidean magnitude (speed) of the
//! velocity vector at every grid cell: speed = sqrt(vx² + vy²). The
//! computation is a single pass over equally-shaped in-memory grids; shape
//! disagreement between the components is rejected before any arithmetic.

#![warn(missing_docs)]

/// Core grid data structures.
pub mod core;
/// Error types for the library.
pub mod error;
/// Dataset I/O: loading velocity components and saving speed grids.
pub mod io;
/// The pointwise speed calculation.
pub mod speed;

pub use crate::core::{Field2, FieldStats};
pub use crate::error::{Result, VelocityError};
pub use crate::speed::{compute_speed, summarize};
