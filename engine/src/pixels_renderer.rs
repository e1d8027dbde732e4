use pixels::Pixels;

use crate::font::Font;
use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

/// Headful renderer built on `pixels`: the frame is rasterized on the CPU into the pixel buffer and
/// uploaded on `present`.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    size: SurfaceSize,
    font: Box<dyn Font>,
}

impl PixelsRenderer2d {
    pub fn new(
        mut pixels: Pixels,
        size: SurfaceSize,
        font: Box<dyn Font>,
    ) -> Result<Self, pixels::Error> {
        pixels.resize_buffer(size.width.max(1), size.height.max(1))?;
        Ok(Self { pixels, size, font })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn font(&self) -> &dyn Font {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, font: Box<dyn Font>) {
        self.font = font;
    }

    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), pixels::Error> {
        // A minimized window reports 0x0; keep the old buffer until it comes back.
        if size.is_empty() {
            return Ok(());
        }
        self.size = size;
        self.pixels.resize_surface(size.width, size.height)?;
        self.pixels.resize_buffer(size.width, size.height)?;
        Ok(())
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.size, self.font.as_ref());
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
