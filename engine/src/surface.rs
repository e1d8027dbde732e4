use sha2::{Digest, Sha256};

use crate::graphics::Color;
use crate::ui::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    pub fn as_size(self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// A simple in-memory RGBA surface for headless rendering and tests.
///
/// Pair it with `graphics::CpuRenderer` to draw a frame without opening a window.
#[derive(Debug, Clone)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBufferSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    pub fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.buf.resize(size.rgba_len(), 0u8);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y as usize) * (self.size.width as usize) + x as usize) * 4;
        let px = self.buf.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Hex-encoded SHA-256 of the raw RGBA bytes.
    pub fn digest(&self) -> String {
        frame_digest(&self.buf)
    }
}

/// Stable content hash for a rendered frame; used by render regression tests.
pub fn frame_digest(frame: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(frame);
    hex::encode(hasher.finalize())
}
