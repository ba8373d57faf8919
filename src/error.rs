// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading velocity grids or computing speed.
#[derive(Debug)]
pub enum VelocityError {
    /// The dataset file does not exist or cannot be opened.
    ResourceNotFound {
        /// The path that was requested.
        path: PathBuf,
    },
    /// A required variable is absent from the dataset.
    MissingVariable {
        /// The variable name that was requested.
        expected: String,
        /// The variable names that are available.
        available: Vec<String>,
    },
    /// A dataset variable is not two-dimensional.
    InvalidDimensions {
        /// The variable name.
        name: String,
        /// The dimension lengths the variable actually has.
        dims: Vec<usize>,
    },
    /// Grid shape is invalid (axis with zero cells).
    InvalidGridShape {
        /// The axis index.
        axis: usize,
        /// The size provided.
        size: usize,
    },
    /// Two grids have incompatible shapes.
    ShapeMismatch {
        /// The expected shape.
        expected: Vec<usize>,
        /// The actual shape encountered.
        got: Vec<usize>,
    },
    /// Unsupported file format (unrecognized extension).
    UnsupportedFileFormat(String),
    /// Error reported by the NetCDF library.
    NetCdf(netcdf::Error),
    /// I/O error occurred.
    IoError(std::io::Error),
    /// Other error with a descriptive message.
    Other(String),
}

impl fmt::Display for VelocityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VelocityError::ResourceNotFound { path } => {
                write!(f, "dataset not found: {}", path.display())
            }
            VelocityError::MissingVariable {
                expected,
                available,
            } => {
                write!(
                    f,
                    "variable '{}' not found; available variables: {:?}",
                    expected, available
                )
            }
            VelocityError::InvalidDimensions { name, dims } => {
                write!(
                    f,
                    "variable '{}' has dimensions {:?} (expected a 2D grid)",
                    name, dims
                )
            }
            VelocityError::InvalidGridShape { axis, size } => {
                write!(
                    f,
                    "invalid grid shape: axis {} has size {} (must be >= 1)",
                    axis, size
                )
            }
            VelocityError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {:?}, got {:?}", expected, got)
            }
            VelocityError::UnsupportedFileFormat(ext) => {
                write!(f, "unsupported file format: {}", ext)
            }
            VelocityError::NetCdf(e) => write!(f, "NetCDF error: {}", e),
            VelocityError::IoError(e) => write!(f, "I/O error: {}", e),
            VelocityError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for VelocityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VelocityError::NetCdf(e) => Some(e),
            VelocityError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VelocityError {
    fn from(e: std::io::Error) -> Self {
        VelocityError::IoError(e)
    }
}

impl From<netcdf::Error> for VelocityError {
    fn from(e: netcdf::Error) -> Self {
        VelocityError::NetCdf(e)
    }
}

/// Convenience type alias for Results with VelocityError.
pub type Result<T> = std::result::Result<T, VelocityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_resource_not_found() {
        let e = VelocityError::ResourceNotFound {
            path: PathBuf::from("data/antarctica.nc"),
        };
        assert_eq!(e.to_string(), "dataset not found: data/antarctica.nc");
    }

    #[test]
    fn display_missing_variable() {
        let e = VelocityError::MissingVariable {
            expected: "VY".to_string(),
            available: vec!["VX".to_string(), "lat".to_string()],
        };
        assert!(e.to_string().contains("VY"));
        assert!(e.to_string().contains("VX"));
    }

    #[test]
    fn display_invalid_dimensions() {
        let e = VelocityError::InvalidDimensions {
            name: "VX".to_string(),
            dims: vec![1, 4, 4],
        };
        assert_eq!(
            e.to_string(),
            "variable 'VX' has dimensions [1, 4, 4] (expected a 2D grid)"
        );
    }

    #[test]
    fn display_invalid_grid_shape() {
        let e = VelocityError::InvalidGridShape { axis: 1, size: 0 };
        assert_eq!(
            e.to_string(),
            "invalid grid shape: axis 1 has size 0 (must be >= 1)"
        );
    }

    #[test]
    fn display_shape_mismatch() {
        let e = VelocityError::ShapeMismatch {
            expected: vec![4, 4],
            got: vec![3, 4],
        };
        assert_eq!(e.to_string(), "shape mismatch: expected [4, 4], got [3, 4]");
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = VelocityError::IoError(io_err);
        assert!(e.to_string().contains("file not found"));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let e: VelocityError = io_err.into();
        assert!(matches!(e, VelocityError::IoError(_)));
    }

    #[test]
    fn display_unsupported_format() {
        let e = VelocityError::UnsupportedFileFormat("tif".to_string());
        assert_eq!(e.to_string(), "unsupported file format: tif");
    }
}
