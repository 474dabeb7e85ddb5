//! Grayscale PNG output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tagsheet_core::GrayCanvas;

#[derive(thiserror::Error, Debug)]
pub enum PngWriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encoding(#[from] png::EncodingError),
}

/// Persist the page canvas as an 8-bit grayscale PNG.
pub fn save_png(canvas: &GrayCanvas, path: impl AsRef<Path>) -> Result<(), PngWriteError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(canvas.data())?;
    Ok(())
}
