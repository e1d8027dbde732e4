use std::f32::consts::TAU;
use std::ops::Range;

use crate::font::{BlockFont, Font};
use crate::image::RgbaImage;
use crate::surface::SurfaceSize;
use crate::ui::{Point, Rect, Size};

pub type Color = [u8; 4];

pub const DEFAULT_TEXT_SCALE: f32 = 2.0;

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Fill,
    /// Ring of the given thickness, drawn inward from the shape's edge.
    Outline(f32),
}

/// Unified 2D rendering interface.
///
/// Game code should only talk to this trait: it must not care whether it is drawing straight into
/// an RGBA buffer, through a `canvas::LogicalCanvas`, or into a command log for tests.
///
/// Coordinates are `f32` pixels with the origin at the top-left corner. A pixel is covered when its
/// center lies inside the shape. Apart from `fill_rect`, every primitive blends using the alpha
/// channel of `color`.
pub trait Renderer2d {
    fn size(&self) -> Size;

    /// Opaque fill: the destination pixels are replaced with `color` as-is.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Alpha-blended rect over existing content (alpha is applied to `color`'s RGB).
    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8);

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Straight segment with round ends.
    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color);

    fn circle(&mut self, center: Point, radius: f32, stroke: Stroke, color: Color);

    /// Part of a circle outline.
    ///
    /// Angles are radians, measured counterclockwise on screen from the +x axis; the arc covers
    /// `start..=end`. A sweep of `TAU` or more draws the full ring.
    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start: f32,
        end: f32,
        thickness: f32,
        color: Color,
    );

    /// Even-odd filled polygon. Fewer than three points draws nothing.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    fn fill_ellipse(&mut self, bounds: Rect, color: Color);

    /// Nearest-neighbour scaled blit of `image` into `dest`.
    fn draw_image(&mut self, dest: Rect, image: &RgbaImage);

    fn draw_text_scaled(&mut self, origin: Point, text: &str, color: Color, scale: f32);

    /// Width of the widest line of `text` at `scale`.
    fn text_width(&self, text: &str, scale: f32) -> f32;

    /// Height of a single line of text at `scale`.
    fn text_height(&self, scale: f32) -> f32;

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        self.draw_text_scaled(origin, text, color, DEFAULT_TEXT_SCALE);
    }

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(Rect::from_size(s.w, s.h), color);
    }
}

/// Text width in dots for a font: glyph advances minus the trailing gap, widest line wins.
pub fn text_width_in(font: &dyn Font, text: &str, scale: f32) -> f32 {
    let advance = font.advance() as f32;
    text.split('\n')
        .map(|line| line.chars().count() as f32)
        .filter(|n| *n > 0.0)
        .map(|n| (n * advance - 1.0) * scale)
        .fold(0.0, f32::max)
}

static BUILTIN_FONT: BlockFont = BlockFont;

/// CPU renderer that draws into an RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
    font: &'a dyn Font,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize, font: &'a dyn Font) -> Self {
        Self { frame, size, font }
    }

    /// Renderer using the built-in block font.
    pub fn with_block_font(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self::new(frame, size, &BUILTIN_FONT)
    }

    fn cols(&self, lo: f32, hi: f32) -> Range<u32> {
        pixel_span(lo, hi, self.size.width)
    }

    fn rows(&self, lo: f32, hi: f32) -> Range<u32> {
        pixel_span(lo, hi, self.size.height)
    }

    fn plot(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        if let Some(px) = self.frame.get_mut(idx..idx + 4) {
            blend_into(px, color);
        }
    }

    /// Blends `color` into every pixel of the box whose center passes `inside`.
    fn fill_where(
        &mut self,
        min: Point,
        max: Point,
        color: Color,
        inside: impl Fn(Point) -> bool,
    ) {
        if color[3] == 0 {
            return;
        }
        let cols = self.cols(min.x, max.x);
        for y in self.rows(min.y, max.y) {
            let cy = y as f32 + 0.5;
            for x in cols.clone() {
                if inside(Point::new(x as f32 + 0.5, cy)) {
                    self.plot(x, y, color);
                }
            }
        }
    }

    fn paint_rect(&mut self, rect: Rect, color: Color) {
        self.fill_where(
            Point::new(rect.x, rect.y),
            Point::new(rect.right(), rect.bottom()),
            color,
            |_| true,
        );
    }

    fn ring(
        &mut self,
        center: Point,
        radius: f32,
        thickness: f32,
        color: Color,
        on_arc: impl Fn(f32) -> bool,
    ) {
        if radius <= 0.0 {
            return;
        }
        let outer2 = radius * radius;
        let inner = (radius - thickness.max(1.0)).max(0.0);
        let inner2 = inner * inner;
        self.fill_where(
            center.offset(-radius, -radius),
            center.offset(radius, radius),
            color,
            |p| {
                let dx = p.x - center.x;
                let dy = p.y - center.y;
                let d2 = dx * dx + dy * dy;
                d2 <= outer2 && d2 >= inner2 && on_arc((-dy).atan2(dx).rem_euclid(TAU))
            },
        );
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn size(&self) -> Size {
        self.size.as_size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let cols = self.cols(rect.x, rect.right());
        if cols.is_empty() {
            return;
        }
        let stride = self.size.width as usize * 4;
        for y in self.rows(rect.y, rect.bottom()) {
            let start = y as usize * stride + cols.start as usize * 4;
            let end = y as usize * stride + cols.end as usize * 4;
            let Some(row) = self.frame.get_mut(start..end) else {
                return;
            };
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }

    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8) {
        let [r, g, b, _] = color;
        self.paint_rect(rect, [r, g, b, alpha]);
    }

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let t = thickness.max(1.0).min(rect.w / 2.0).min(rect.h / 2.0);

        // Top / bottom.
        self.paint_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.paint_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);

        // Left / right, between the horizontal edges.
        let inner_h = rect.h - 2.0 * t;
        if inner_h > 0.0 {
            self.paint_rect(Rect::new(rect.x, rect.y + t, t, inner_h), color);
            self.paint_rect(Rect::new(rect.right() - t, rect.y + t, t, inner_h), color);
        }
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        let half = thickness.max(1.0) / 2.0;
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len2 = dx * dx + dy * dy;
        self.fill_where(
            Point::new(from.x.min(to.x) - half, from.y.min(to.y) - half),
            Point::new(from.x.max(to.x) + half, from.y.max(to.y) + half),
            color,
            |p| {
                let t = if len2 > 0.0 {
                    (((p.x - from.x) * dx + (p.y - from.y) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let ex = p.x - (from.x + dx * t);
                let ey = p.y - (from.y + dy * t);
                ex * ex + ey * ey <= half * half
            },
        );
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: Stroke, color: Color) {
        match stroke {
            Stroke::Fill => self.ring(center, radius, radius + 1.0, color, |_| true),
            Stroke::Outline(thickness) => self.ring(center, radius, thickness, color, |_| true),
        }
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start: f32,
        end: f32,
        thickness: f32,
        color: Color,
    ) {
        let sweep = end - start;
        if sweep.is_nan() || sweep <= 0.0 {
            return;
        }
        if sweep >= TAU {
            self.ring(center, radius, thickness, color, |_| true);
            return;
        }
        let start = start.rem_euclid(TAU);
        self.ring(center, radius, thickness, color, |angle| {
            (angle - start).rem_euclid(TAU) <= sweep
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 || color[3] == 0 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });

        let mut crossings = Vec::with_capacity(points.len());
        for y in self.rows(min_y, max_y) {
            let cy = y as f32 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= cy) != (b.y <= cy) {
                    let t = (cy - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                for x in self.cols(pair[0], pair[1]) {
                    self.plot(x, y, color);
                }
            }
        }
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let rx = bounds.w / 2.0;
        let ry = bounds.h / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let c = bounds.center();
        self.fill_where(
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.right(), bounds.bottom()),
            color,
            |p| {
                let nx = (p.x - c.x) / rx;
                let ny = (p.y - c.y) / ry;
                nx * nx + ny * ny <= 1.0
            },
        );
    }

    fn draw_image(&mut self, dest: Rect, image: &RgbaImage) {
        if dest.w <= 0.0 || dest.h <= 0.0 || image.is_empty() {
            return;
        }
        let cols = self.cols(dest.x, dest.right());
        for y in self.rows(dest.y, dest.bottom()) {
            let v = ((y as f32 + 0.5 - dest.y) / dest.h * image.height() as f32) as u32;
            for x in cols.clone() {
                let u = ((x as f32 + 0.5 - dest.x) / dest.w * image.width() as f32) as u32;
                if let Some(color) = image.pixel(u, v) {
                    self.plot(x, y, color);
                }
            }
        }
    }

    fn draw_text_scaled(&mut self, origin: Point, text: &str, color: Color, scale: f32) {
        if scale <= 0.0 {
            return;
        }
        let font = self.font;
        let glyph_w = font.glyph_width().min(8);
        let adv_x = font.advance() as f32 * scale;
        let adv_y = font.line_advance() as f32 * scale;

        let mut cursor = origin;
        for ch in text.chars() {
            if ch == '\n' {
                cursor = Point::new(origin.x, cursor.y + adv_y);
                continue;
            }
            if ch != ' ' {
                for (row, bits) in font.glyph_rows(ch).iter().enumerate() {
                    for col in 0..glyph_w {
                        if bits & (1u8 << (glyph_w - 1 - col)) == 0 {
                            continue;
                        }
                        let dot = Rect::new(
                            cursor.x + col as f32 * scale,
                            cursor.y + row as f32 * scale,
                            scale,
                            scale,
                        );
                        self.paint_rect(dot, color);
                    }
                }
            }
            cursor.x += adv_x;
        }
    }

    fn text_width(&self, text: &str, scale: f32) -> f32 {
        text_width_in(self.font, text, scale)
    }

    fn text_height(&self, scale: f32) -> f32 {
        self.font.glyph_height() as f32 * scale
    }
}

/// Pixel indices in `0..limit` whose centers fall in `[lo, hi)`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Range<u32> {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(limit as f32);
    if !(start < end) {
        return 0..0;
    }
    start as u32..end as u32
}

fn blend_into(px: &mut [u8], color: Color) {
    let a = color[3] as u32;
    if a == 255 {
        px.copy_from_slice(&color);
        return;
    }
    if a == 0 {
        return;
    }
    let inv = 255 - a;
    for (dst, src) in px.iter_mut().zip(color).take(3) {
        *dst = ((*dst as u32 * inv + src as u32 * a + 127) / 255) as u8;
    }
    px[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const WHITE: Color = [255, 255, 255, 255];
    const RED: Color = [255, 0, 0, 255];

    fn frame(w: u32, h: u32) -> (Vec<u8>, SurfaceSize) {
        let size = SurfaceSize::new(w, h);
        (vec![0u8; size.rgba_len()], size)
    }

    fn px(buf: &[u8], size: SurfaceSize, x: u32, y: u32) -> Color {
        let i = ((y * size.width + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn fill_rect_clips_to_surface() {
        let (mut buf, size) = frame(4, 4);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        r.fill_rect(Rect::new(2.0, 2.0, 10.0, 10.0), RED);
        assert_eq!(px(&buf, size, 3, 3), RED);
        assert_eq!(px(&buf, size, 1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn blend_rect_mixes_with_background() {
        let (mut buf, size) = frame(2, 2);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        r.fill_rect(Rect::from_size(2.0, 2.0), [0, 0, 0, 255]);
        r.blend_rect(Rect::from_size(2.0, 2.0), WHITE, 128);
        assert_eq!(px(&buf, size, 0, 0), [128, 128, 128, 255]);
    }

    #[test]
    fn thick_line_covers_its_midpoint_but_not_far_pixels() {
        let (mut buf, size) = frame(20, 20);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        r.line(Point::new(2.0, 10.0), Point::new(18.0, 10.0), 4.0, RED);
        assert_eq!(px(&buf, size, 10, 10), RED);
        assert_eq!(px(&buf, size, 10, 9), RED);
        assert_eq!(px(&buf, size, 10, 14), [0, 0, 0, 0]);
    }

    #[test]
    fn circle_outline_leaves_center_empty() {
        let (mut buf, size) = frame(40, 40);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        r.circle(Point::new(20.0, 20.0), 10.0, Stroke::Outline(2.0), WHITE);
        assert_eq!(px(&buf, size, 20, 20), [0, 0, 0, 0]);
        assert_eq!(px(&buf, size, 29, 20), WHITE);

        r = CpuRenderer::with_block_font(&mut buf, size);
        r.circle(Point::new(20.0, 20.0), 10.0, Stroke::Fill, WHITE);
        assert_eq!(px(&buf, size, 20, 20), WHITE);
    }

    #[test]
    fn quarter_arc_only_touches_upper_right_quadrant() {
        let (mut buf, size) = frame(40, 40);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        r.arc(Point::new(20.0, 20.0), 10.0, 0.1, FRAC_PI_2 - 0.1, 2.0, WHITE);

        // Up-right of the center is lit; down-left is not.
        assert_eq!(px(&buf, size, 26, 13), WHITE);
        assert_eq!(px(&buf, size, 13, 26), [0, 0, 0, 0]);
        assert_eq!(px(&buf, size, 26, 26), [0, 0, 0, 0]);
    }

    #[test]
    fn polygon_fills_interior_only() {
        let (mut buf, size) = frame(20, 20);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        let tri = [
            Point::new(0.0, 20.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 20.0),
        ];
        r.fill_polygon(&tri, RED);
        assert_eq!(px(&buf, size, 10, 15), RED);
        assert_eq!(px(&buf, size, 1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn text_draws_dots_and_measures_width() {
        let (mut buf, size) = frame(32, 16);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        assert_eq!(r.text_width("AB", 2.0), 14.0);
        assert_eq!(r.text_width("", 2.0), 0.0);
        assert_eq!(r.text_height(2.0), 10.0);

        // Top row of 'T' is solid.
        r.draw_text_scaled(Point::new(0.0, 0.0), "T", WHITE, 2.0);
        assert_eq!(px(&buf, size, 0, 0), WHITE);
        assert_eq!(px(&buf, size, 5, 1), WHITE);
        assert_eq!(px(&buf, size, 0, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn translucent_colors_blend() {
        let (mut buf, size) = frame(4, 4);
        let mut r = CpuRenderer::with_block_font(&mut buf, size);
        r.clear([0, 0, 0, 255]);
        r.fill_ellipse(Rect::from_size(4.0, 4.0), [255, 255, 255, 0]);
        assert_eq!(px(r.frame, size, 2, 2), [0, 0, 0, 255]);
        r.fill_ellipse(Rect::from_size(4.0, 4.0), [200, 200, 200, 255]);
        assert_eq!(px(&buf, size, 2, 2), [200, 200, 200, 255]);
    }
}
