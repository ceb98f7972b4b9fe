//! PNG output. The only error class that escapes a render after drawing
//! has finished.

use crate::error::CoverError;
use crate::render::canvas::Canvas;
use image::{ImageError, ImageFormat};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Encode `canvas` as `file_name` inside `output_dir`, creating the
/// directory if needed.
///
/// The PNG is written to a `.tmp` sibling first and renamed into place,
/// so a failed write never leaves a partial cover behind. Failures keep
/// their underlying I/O error so callers can inspect the kind.
pub fn save_png(canvas: Canvas, output_dir: &Path, file_name: &str) -> Result<PathBuf, CoverError> {
    fs::create_dir_all(output_dir)?;

    let final_path = output_dir.join(file_name);
    let tmp_path = output_dir.join(format!("{file_name}.tmp"));

    canvas
        .into_image()
        .save_with_format(&tmp_path, ImageFormat::Png)
        .map_err(into_io_error)?;

    fs::rename(&tmp_path, &final_path)?;

    Ok(final_path)
}

fn into_io_error(err: ImageError) -> io::Error {
    match err {
        ImageError::IoError(err) => err,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}
