//! Scrolling scenery drawn behind the menus.
//!
//! Elements live on the 800x600 reference canvas and move left by a fixed amount per frame;
//! slower layers are drawn first so nearer ones cover them.

use std::f32::consts::TAU;

use engine::graphics::{Color, Renderer2d, Stroke};
use engine::ui::{Point, Rect};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Ground line at 70% of the canvas height.
pub const GROUND_Y: f32 = CANVAS_HEIGHT * 0.7;

pub const FLAP_STEP: f32 = 0.2;

pub const SKY: Color = [135, 206, 235, 255];
pub const GROUND: Color = [34, 139, 34, 255];
const TREE_GREEN: Color = [0, 100, 0, 255];
const MOUNTAIN_GRAY: Color = [100, 100, 100, 255];
const BROWN: Color = [139, 69, 19, 255];
const WHITE: Color = [255, 255, 255, 255];
const BLACK: Color = [0, 0, 0, 255];

const BUSH_BLOBS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Mountain,
    Tree,
    Bush,
    Cloud,
    Bird,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    /// Wing phase; only birds advance it.
    pub flap: f32,
    /// Bush blob offsets, sampled once so bushes do not flicker.
    pub blobs: Vec<Point>,
}

impl Element {
    fn new<R: Rng + ?Sized>(
        kind: ElementKind,
        at: Point,
        size: f32,
        speed: f32,
        rng: &mut R,
    ) -> Self {
        let blobs = if kind == ElementKind::Bush {
            let (dx, dy) = (size / 2.0, size / 3.0);
            (0..BUSH_BLOBS)
                .map(|_| Point::new(rng.gen_range(-dx..=dx), rng.gen_range(-dy..=dy)))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            kind,
            x: at.x,
            y: at.y,
            size,
            speed,
            flap: rng.gen_range(0.0..TAU),
            blobs,
        }
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
        if self.x < -self.size * 3.0 {
            self.x = CANVAS_WIDTH + self.size;
        }
        if self.kind == ElementKind::Bird {
            self.flap += FLAP_STEP;
        }
    }

    pub fn draw(&self, gfx: &mut dyn Renderer2d) {
        let at = Point::new(self.x, self.y);
        match self.kind {
            ElementKind::Mountain => draw_mountain(gfx, at, self.size * 3.0, self.size * 2.0),
            ElementKind::Tree => draw_tree(gfx, at, self.size),
            ElementKind::Bush => {
                for blob in &self.blobs {
                    gfx.circle(
                        at.offset(blob.x, blob.y),
                        self.size / 2.0,
                        Stroke::Fill,
                        TREE_GREEN,
                    );
                }
            }
            ElementKind::Cloud => draw_cloud(gfx, at, self.size),
            ElementKind::Bird => draw_bird(gfx, at, self.size, self.flap),
        }
    }
}

/// One layer of the initial population.
struct Layer {
    kind: ElementKind,
    count: usize,
    size: (u32, u32),
    speed: f32,
    /// Vertical placement; `None` means standing on the ground line.
    y: Option<(u32, u32)>,
}

const fn scenery(
    kind: ElementKind,
    count: usize,
    size: (u32, u32),
    speed: f32,
    y: Option<(u32, u32)>,
) -> Layer {
    Layer {
        kind,
        count,
        size,
        speed,
        y,
    }
}

const LAYERS: [Layer; 7] = [
    scenery(ElementKind::Mountain, 5, (100, 200), 0.2, None),
    scenery(ElementKind::Tree, 15, (50, 80), 0.5, None),
    scenery(ElementKind::Bush, 10, (20, 40), 1.0, None),
    scenery(ElementKind::Tree, 10, (80, 120), 1.5, None),
    scenery(ElementKind::Tree, 8, (120, 180), 2.5, None),
    scenery(ElementKind::Cloud, 8, (20, 40), 0.3, Some((50, 240))),
    scenery(ElementKind::Bird, 5, (15, 30), 1.8, Some((100, 300))),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxField {
    elements: Vec<Element>,
    active: bool,
}

impl ParallaxField {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut elements = Vec::new();
        for layer in &LAYERS {
            for _ in 0..layer.count {
                let size = rng.gen_range(layer.size.0..=layer.size.1) as f32;
                let x = rng.gen_range(0..=CANVAS_WIDTH as u32) as f32;
                let y = match (layer.y, layer.kind) {
                    (Some((lo, hi)), _) => rng.gen_range(lo..=hi) as f32,
                    (None, ElementKind::Bush) => GROUND_Y + (size / 2.0).floor(),
                    (None, _) => GROUND_Y,
                };
                elements.push(Element::new(
                    layer.kind,
                    Point::new(x, y),
                    size,
                    layer.speed,
                    rng,
                ));
            }
        }
        // Stable, so elements of equal speed keep creation order.
        elements.sort_by(|a, b| a.speed.total_cmp(&b.speed));
        Self {
            elements,
            active: true,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        for element in &mut self.elements {
            element.update();
        }
    }

    /// Sky, ground, then every element from the slowest layer up.
    pub fn draw(&self, gfx: &mut dyn Renderer2d) {
        let size = gfx.size();
        gfx.fill_rect(Rect::new(0.0, 0.0, size.w, GROUND_Y), SKY);
        gfx.fill_rect(
            Rect::new(0.0, GROUND_Y, size.w, (size.h - GROUND_Y).max(0.0)),
            GROUND,
        );
        for element in &self.elements {
            element.draw(gfx);
        }
    }
}

fn draw_tree(gfx: &mut dyn Renderer2d, base: Point, size: f32) {
    let trunk_w = (size / 5.0).floor();
    let trunk_h = (size / 2.0).floor();
    gfx.fill_rect(
        Rect::new(base.x - (trunk_w / 2.0).floor(), base.y - trunk_h, trunk_w, trunk_h),
        BROWN,
    );

    let top = base.y - trunk_h - size;
    for tier in 0..3 {
        let dy = tier as f32 * (size / 4.0).floor();
        let shoulder = base.y - trunk_h - (size / 3.0).floor() + dy;
        gfx.fill_polygon(
            &[
                Point::new(base.x, top + dy),
                Point::new(base.x - size / 2.0, shoulder),
                Point::new(base.x + size / 2.0, shoulder),
            ],
            TREE_GREEN,
        );
    }
}

fn draw_cloud(gfx: &mut dyn Renderer2d, at: Point, size: f32) {
    let half = (size / 2.0).floor();
    let puffs = [
        (0.0, 0.0, 1.0),
        (size, 0.0, 0.8),
        (-size, 0.0, 0.7),
        (half, -half, 0.6),
        (-half, -half, 0.5),
    ];
    for (dx, dy, r) in puffs {
        gfx.circle(at.offset(dx, dy), (size * r).floor(), Stroke::Fill, WHITE);
    }
}

fn draw_bird(gfx: &mut dyn Renderer2d, at: Point, size: f32, flap: f32) {
    let wing = flap.sin() * 0.5;
    let quarter = (size / 4.0).floor();
    let half = (size / 2.0).floor();

    gfx.fill_ellipse(Rect::new(at.x - half, at.y - quarter, size, half), BLACK);
    gfx.circle(
        Point::new(at.x + half - (size / 8.0).floor(), at.y - quarter),
        quarter,
        Stroke::Fill,
        BLACK,
    );

    let joint = Point::new(at.x, at.y - quarter);
    let lift = (size * wing).trunc();
    gfx.fill_polygon(&[joint, Point::new(at.x - half, at.y - half - lift), at], BLACK);
    gfx.fill_polygon(&[joint, Point::new(at.x + half, at.y - half + lift), at], BLACK);
}

fn draw_mountain(gfx: &mut dyn Renderer2d, base_left: Point, width: f32, height: f32) {
    let peak = Point::new(base_left.x + width / 2.0, base_left.y - height);
    gfx.fill_polygon(
        &[base_left, peak, Point::new(base_left.x + width, base_left.y)],
        MOUNTAIN_GRAY,
    );

    let cap_y = peak.y + (height / 5.0).floor();
    let cap_dx = (width / 6.0).floor();
    gfx.fill_polygon(
        &[
            peak,
            Point::new(peak.x - cap_dx, cap_y),
            Point::new(peak.x + cap_dx, cap_y),
        ],
        WHITE,
    );
}
