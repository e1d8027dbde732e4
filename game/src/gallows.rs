use std::f32::consts::TAU;

use engine::graphics::{Color, Renderer2d, Stroke};
use engine::ui::Point;

use crate::animation::{HangmanAnimation, SCAFFOLD_PARTS, TOTAL_PARTS};

/// Top of the rope; the figure swings about this point.
pub const PIVOT: Point = Point::new(300.0, 100.0);
const ROPE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
        thickness: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        thickness: f32,
    },
}

const fn line(x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32) -> Segment {
    Segment::Line {
        start: Point::new(x0, y0),
        end: Point::new(x1, y1),
        thickness,
    }
}

/// Scaffold first (base, pole, top beam, rope), then head, body, arms and legs.
pub const PARTS: [Segment; TOTAL_PARTS] = [
    line(150.0, 400.0, 250.0, 400.0, 10.0),
    line(200.0, 400.0, 200.0, 100.0, 10.0),
    line(200.0, 100.0, 300.0, 100.0, 10.0),
    line(300.0, 100.0, 300.0, 150.0, 10.0),
    Segment::Circle {
        center: Point::new(300.0, 180.0),
        radius: 30.0,
        thickness: 3.0,
    },
    line(300.0, 210.0, 300.0, 290.0, 3.0),
    line(300.0, 230.0, 260.0, 260.0, 3.0),
    line(300.0, 230.0, 340.0, 260.0, 3.0),
    line(300.0, 290.0, 260.0, 340.0, 3.0),
    line(300.0, 290.0, 340.0, 340.0, 3.0),
];

impl Segment {
    pub fn rotated(self, pivot: Point, angle: f32) -> Self {
        match self {
            Segment::Line {
                start,
                end,
                thickness,
            } => Segment::Line {
                start: start.rotate_about(pivot, angle),
                end: end.rotate_about(pivot, angle),
                thickness,
            },
            Segment::Circle {
                center,
                radius,
                thickness,
            } => Segment::Circle {
                center: center.rotate_about(pivot, angle),
                radius,
                thickness,
            },
        }
    }

    /// Lines grow from their start point; the head sweeps as an arc.
    pub fn draw(self, gfx: &mut dyn Renderer2d, progress: f32, ink: Color) {
        if progress <= 0.0 {
            return;
        }
        match self {
            Segment::Line {
                start,
                end,
                thickness,
            } => {
                let tip = start.lerp(end, progress.min(1.0));
                gfx.line(start, tip, thickness, ink);
            }
            Segment::Circle {
                center,
                radius,
                thickness,
            } => {
                if progress >= 1.0 {
                    gfx.circle(center, radius, Stroke::Outline(thickness), ink);
                } else {
                    gfx.arc(center, radius, 0.0, progress * TAU, thickness, ink);
                }
            }
        }
    }
}

/// Draws the scaffold plus the first `due` body parts at their current reveal progress.
pub fn draw_gallows(gfx: &mut dyn Renderer2d, anim: &HangmanAnimation, due: usize, ink: Color) {
    // A part still being revealed is drawn in the resting pose.
    let swing = anim.swing();
    let angle = if swing.is_swinging() && anim.all_due_complete(due) {
        swing.angle()
    } else {
        0.0
    };

    let visible = (SCAFFOLD_PARTS + due).min(TOTAL_PARTS);
    for (index, segment) in PARTS.iter().enumerate().take(visible) {
        let segment = if index >= ROPE && angle != 0.0 {
            segment.rotated(PIVOT, angle)
        } else {
            *segment
        };
        segment.draw(gfx, anim.part(index).progress, ink);
    }
}
