//! A `Renderer2d` that records draw calls instead of rasterizing them.
//!
//! Useful in tests that care about *what* got drawn (how many segments, which text) rather than
//! the exact pixels.

use crate::font::{BlockFont, Font};
use crate::graphics::{Color, Renderer2d, Stroke, text_width_in};
use crate::image::RgbaImage;
use crate::ui::{Point, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect(Rect, Color),
    BlendRect(Rect, Color, u8),
    RectOutline(Rect, f32, Color),
    Line {
        from: Point,
        to: Point,
        thickness: f32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        stroke: Stroke,
        color: Color,
    },
    Arc {
        center: Point,
        radius: f32,
        start: f32,
        end: f32,
        thickness: f32,
        color: Color,
    },
    Polygon(Vec<Point>, Color),
    Ellipse(Rect, Color),
    Image(Rect, u32, u32),
    Text {
        origin: Point,
        text: String,
        color: Color,
        scale: f32,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    size: Size,
    font: BlockFont,
    pub commands: Vec<DrawCmd>,
}

impl RecordingRenderer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            font: BlockFont,
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Renderer2d for RecordingRenderer {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCmd::FillRect(rect, color));
    }

    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8) {
        self.commands.push(DrawCmd::BlendRect(rect, color, alpha));
    }

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.commands.push(DrawCmd::RectOutline(rect, thickness, color));
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: Stroke, color: Color) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            stroke,
            color,
        });
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
        self.commands.push(DrawCmd::Arc {
            center,
            radius,
            start,
            end,
            thickness,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCmd::Polygon(points.to_vec(), color));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.commands.push(DrawCmd::Ellipse(bounds, color));
    }

    fn draw_image(&mut self, dest: Rect, image: &RgbaImage) {
        self.commands
            .push(DrawCmd::Image(dest, image.width(), image.height()));
    }

    fn draw_text_scaled(&mut self, origin: Point, text: &str, color: Color, scale: f32) {
        self.commands.push(DrawCmd::Text {
            origin,
            text: text.to_string(),
            color,
            scale,
        });
    }

    fn text_width(&self, text: &str, scale: f32) -> f32 {
        text_width_in(&self.font, text, scale)
    }

    fn text_height(&self, scale: f32) -> f32 {
        self.font.glyph_height() as f32 * scale
    }
}
