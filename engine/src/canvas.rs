//! Fixed reference-resolution drawing on top of any `Renderer2d`.
//!
//! Games lay out against a reference canvas (e.g. 800x600); `LogicalCanvas` scales x and y
//! independently onto the real surface. Thicknesses, radii and text scale by the vertical factor so
//! strokes keep their weight when the window is stretched sideways.

use crate::graphics::{Color, Renderer2d, Stroke};
use crate::image::RgbaImage;
use crate::ui::{Point, Rect, Size};

pub struct LogicalCanvas<'a> {
    inner: &'a mut dyn Renderer2d,
    reference: Size,
    sx: f32,
    sy: f32,
}

impl<'a> LogicalCanvas<'a> {
    pub fn new(inner: &'a mut dyn Renderer2d, reference: Size) -> Self {
        let physical = inner.size();
        let sx = scale_factor(physical.w, reference.w);
        let sy = scale_factor(physical.h, reference.h);
        Self {
            inner,
            reference,
            sx,
            sy,
        }
    }

    pub fn scale(&self) -> (f32, f32) {
        (self.sx, self.sy)
    }

    fn point(&self, p: Point) -> Point {
        Point::new(p.x * self.sx, p.y * self.sy)
    }

    fn rect(&self, r: Rect) -> Rect {
        Rect::new(r.x * self.sx, r.y * self.sy, r.w * self.sx, r.h * self.sy)
    }

    fn length(&self, v: f32) -> f32 {
        v * self.sy
    }
}

fn scale_factor(physical: f32, reference: f32) -> f32 {
    if reference > 0.0 && physical > 0.0 {
        physical / reference
    } else {
        1.0
    }
}

/// Maps a physical pointer position back onto the reference canvas.
pub fn to_logical(physical: Point, surface: Size, reference: Size) -> Point {
    Point::new(
        physical.x / scale_factor(surface.w, reference.w),
        physical.y / scale_factor(surface.h, reference.h),
    )
}

impl Renderer2d for LogicalCanvas<'_> {
    fn size(&self) -> Size {
        self.reference
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = self.rect(rect);
        self.inner.fill_rect(r, color);
    }

    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8) {
        let r = self.rect(rect);
        self.inner.blend_rect(r, color, alpha);
    }

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        let r = self.rect(rect);
        let t = self.length(thickness);
        self.inner.rect_outline(r, t, color);
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        let (a, b, t) = (self.point(from), self.point(to), self.length(thickness));
        self.inner.line(a, b, t, color);
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: Stroke, color: Color) {
        let stroke = match stroke {
            Stroke::Fill => Stroke::Fill,
            Stroke::Outline(t) => Stroke::Outline(self.length(t)),
        };
        let (c, r) = (self.point(center), self.length(radius));
        self.inner.circle(c, r, stroke, color);
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
        let (c, r, t) = (
            self.point(center),
            self.length(radius),
            self.length(thickness),
        );
        self.inner.arc(c, r, start, end, t, color);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let mapped: Vec<Point> = points.iter().map(|p| self.point(*p)).collect();
        self.inner.fill_polygon(&mapped, color);
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let r = self.rect(bounds);
        self.inner.fill_ellipse(r, color);
    }

    fn draw_image(&mut self, dest: Rect, image: &RgbaImage) {
        let r = self.rect(dest);
        self.inner.draw_image(r, image);
    }

    fn draw_text_scaled(&mut self, origin: Point, text: &str, color: Color, scale: f32) {
        let (o, s) = (self.point(origin), self.length(scale));
        self.inner.draw_text_scaled(o, text, color, s);
    }

    // Measurements come back in reference units.
    fn text_width(&self, text: &str, scale: f32) -> f32 {
        self.inner.text_width(text, self.length(scale)) / self.sx
    }

    fn text_height(&self, scale: f32) -> f32 {
        self.inner.text_height(self.length(scale)) / self.sy
    }
}
