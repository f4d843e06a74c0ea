//! Writing rendered frames to disk.
//!
//! PPM is written by hand as plain text (`P3`), one pixel per line. PNG goes through `image`.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{Rgb32FImage, RgbImage};

use crate::{color::Vec3AsRgbExt, error::OutputError, math::vec::Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    /// Format matching the extension of `path`, case insensitive
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "ppm" => Ok(Self::Ppm),
            "png" => Ok(Self::Png),
            _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Quantizes every channel with `floor(255.99 * c)` after clamping to `[0, 1]`
pub fn to_rgb8(image: &Rgb32FImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Vec3(image.get_pixel(x, y).0).rgb8()
    })
}

/// Writes `image` as a plain PPM, top row first.
pub fn write_ppm<W: Write>(image: &Rgb32FImage, mut out: W) -> Result<(), OutputError> {
    writeln!(out, "P3\n{} {}\n255", image.width(), image.height())?;
    for pixel in to_rgb8(image).pixels() {
        let [r, g, b] = pixel.0;
        writeln!(out, "{r} {g} {b}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_ppm(image: &Rgb32FImage, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))
}

pub fn save_png(image: &Rgb32FImage, path: &Path) -> Result<(), OutputError> {
    to_rgb8(image).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Saves `image` in the format picked from the extension of `path`
pub fn save(image: &Rgb32FImage, path: &Path) -> Result<(), OutputError> {
    match OutputFormat::from_path(path)? {
        OutputFormat::Ppm => save_ppm(image, path)?,
        OutputFormat::Png => save_png(image, path)?,
    }
    log::info!("Image saved as {}", path.display());
    Ok(())
}
