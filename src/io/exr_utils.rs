/* Copyright 2020 @TwoCookingMice */

use crate::core::error::{RenderError, Result};
use crate::math::bitmap::Bitmap;

use exr::prelude::*;

use std::path::Path;

// Write the rgb channels of a bitmap as a 32-bit float OpenEXR image
pub fn write_exr_to_file(image: &Bitmap, file_path: &Path) -> Result<()> {
    log::info!("Starting writing openexr images: {}.", file_path.display());

    if image.width() == 0 || image.height() == 0 {
        return Err(RenderError::Exr(String::from("cannot write an empty image")));
    }

    write_rgb_file(file_path, image.width(), image.height(), |x, y| {
        image[(x, y)].rgb()
    }).map_err(|e| RenderError::Exr(e.to_string()))?;

    log::info!("EXR written to: {}.", file_path.display());
    Ok(())
}
