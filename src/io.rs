// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use ndarray::Array2;

use crate::core::Field2;
use crate::error::{Result, VelocityError};

/// Open a NetCDF dataset for reading.
///
/// The returned handle releases the underlying file on drop, on every exit
/// path. A nonexistent path is reported as `ResourceNotFound` before the
/// NetCDF library is asked to open it.
pub fn open_dataset(path: &Path) -> Result<netcdf::File> {
    if !path.exists() {
        return Err(VelocityError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Load a named two-dimensional variable from an open dataset.
///
/// The full variable contents are materialized into memory as f64; narrower
/// numeric types stored in the file are promoted by the NetCDF read path.
///
/// # Errors
/// Returns `MissingVariable` (listing the variables that are available) if
/// the name is absent, or `InvalidDimensions` if the variable is not a 2D
/// grid.
pub fn load_variable(file: &netcdf::File, name: &str) -> Result<Field2> {
    let Some(var) = file.variable(name) else {
        let available: Vec<String> = file.variables().map(|v| v.name()).collect();
        return Err(VelocityError::MissingVariable {
            expected: name.to_string(),
            available,
        });
    };

    let dims: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    if dims.len() != 2 {
        return Err(VelocityError::InvalidDimensions {
            name: name.to_string(),
            dims,
        });
    }

    // Fill values are loaded as-is and propagate arithmetically downstream.
    if let Ok(Some(fill)) = var.fill_value::<f64>() {
        log::debug!("variable '{}' declares _FillValue {}", name, fill);
    }

    // NetCDF stores variables in row-major order, matching Field2.
    let data: Vec<f64> = var.get_values::<f64, _>(..)?;
    Field2::new(name, [dims[0], dims[1]], data)
}

/// Load the X and Y velocity component grids from a dataset file.
///
/// Opens the dataset at `path`, extracts the two named variables, and returns
/// them as equally-shaped grids. The dataset handle is released before this
/// function returns, whether it succeeds or fails.
pub fn load_velocity_components(
    path: &Path,
    vx_name: &str,
    vy_name: &str,
) -> Result<(Field2, Field2)> {
    let file = open_dataset(path)?;
    let vx = load_variable(&file, vx_name)?;
    let vy = load_variable(&file, vy_name)?;
    Ok((vx, vy))
}

/// Save a field to a .npy file.
pub fn save_npy(field: &Field2, path: &Path) -> Result<()> {
    let [rows, cols] = field.shape();
    let arr = Array2::from_shape_vec((rows, cols), field.data().to_vec())
        .map_err(|e| VelocityError::Other(format!("shape error: {}", e)))?;

    ndarray_npy::write_npy(path, &arr)
        .map_err(|e| VelocityError::Other(format!("npy write error: {}", e)))?;

    Ok(())
}

/// Save a field to a NetCDF file as a single 2D variable.
pub fn save_netcdf(field: &Field2, path: &Path) -> Result<()> {
    let [rows, cols] = field.shape();
    let mut file = netcdf::create(path)?;
    file.add_dimension("y", rows)?;
    file.add_dimension("x", cols)?;
    let mut var = file.add_variable::<f64>(field.name(), &["y", "x"])?;
    var.put_values(field.data(), ..)?;
    Ok(())
}

/// Infer file format from extension.
pub fn infer_format(path: &Path) -> Result<FileFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("npy") => Ok(FileFormat::Npy),
        Some("nc") => Ok(FileFormat::NetCdf),
        Some(ext) => Err(VelocityError::UnsupportedFileFormat(ext.to_string())),
        None => Err(VelocityError::UnsupportedFileFormat(
            "(no extension)".to_string(),
        )),
    }
}

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    /// NumPy .npy format.
    Npy,
    /// NetCDF .nc format.
    NetCdf,
}

/// Save a field to a file, inferring format from extension.
pub fn save_field(field: &Field2, path: &Path) -> Result<()> {
    match infer_format(path)? {
        FileFormat::Npy => save_npy(field, path),
        FileFormat::NetCdf => save_netcdf(field, path),
    }
}
