//! RGBA images decoded from PNG files.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::graphics::Color;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to open image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode png: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("unsupported png color type {0:?}")]
    Unsupported(png::ColorType),
    #[error("pixel data is {actual} bytes, expected {expected} for {width}x{height}")]
    Size {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if data.len() != expected {
            return Err(ImageError::Size {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

pub fn load_png(path: impl AsRef<Path>) -> Result<RgbaImage, ImageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(BufReader::new(file))
}

/// Decodes any 8/16-bit PNG into RGBA8.
pub fn decode_png<R: BufRead + Seek>(reader: R) -> Result<RgbaImage, ImageError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let (color_type, _) = reader.output_color_type();
    let samples = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(ImageError::Unsupported(other)),
    };
    let (width, height) = (reader.info().width, reader.info().height);

    let mut buf = vec![0u8; width as usize * height as usize * samples];
    let frame = reader.next_frame(&mut buf)?;

    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    for row in buf.chunks(frame.line_size).take(height as usize) {
        for px in row.chunks_exact(samples).take(width as usize) {
            let expanded: Color = match *px {
                [g] => [g, g, g, 255],
                [g, a] => [g, g, g, a],
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a] => [r, g, b, a],
                _ => [0, 0, 0, 0],
            };
            rgba.extend_from_slice(&expanded);
        }
    }

    RgbaImage::from_rgba(width, height, rgba)
}
