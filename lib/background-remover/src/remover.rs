use crate::{Error, Result};
use image::{ImageError, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::path::Path;

/// Channels must be strictly greater than this for a pixel to count as white.
pub const WHITE_THRESHOLD: u8 = 230;

pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoutStats {
    pub width: u32,
    pub height: u32,
    pub cleared: usize,
}

/// Alpha is not part of the test, a translucent near-white pixel still matches.
pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    pixel[0] > WHITE_THRESHOLD && pixel[1] > WHITE_THRESHOLD && pixel[2] > WHITE_THRESHOLD
}

/// Replace every near-white pixel with transparent white in place.
/// Returns how many pixels were replaced.
pub fn clear_white_pixels(image: &mut RgbaImage) -> usize {
    let mut cleared = 0;

    for pixel in image.pixels_mut() {
        if is_near_white(pixel) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }

    cleared
}

/// Decode `input_path`, key out its near-white background and write the
/// result to `output_path` as an RGBA PNG, whatever the output extension is.
pub fn remove_white_background<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<CutoutStats> {
    let (input_path, output_path) = (input_path.as_ref(), output_path.as_ref());

    if !input_path.try_exists()? {
        return Err(Error::InputNotFound(input_path.to_path_buf()));
    }

    log::debug!("Loading image from: {}", input_path.display());

    // Format comes from the file contents, the extension is only a fallback
    let mut image = ImageReader::open(input_path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|source| Error::Decode {
            path: input_path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (width, height) = image.dimensions();
    let cleared = clear_white_pixels(&mut image);
    log::info!("Image size: {width}x{height}, cleared {cleared} near-white pixels");

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output_path.to_path_buf(),
            source,
        })?;
    log::info!("Saving result to: {}", output_path.display());

    Ok(CutoutStats {
        width,
        height,
        cleared,
    })
}
