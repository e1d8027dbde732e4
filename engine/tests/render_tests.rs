use engine::canvas::LogicalCanvas;
use engine::graphics::{CpuRenderer, Renderer2d, Stroke};
use engine::surface::{RgbaBufferSurface, SurfaceSize};
use engine::ui::{Point, Rect, Size};
use engine::view_tree::{ButtonNode, ButtonStyle, ViewNode, ViewTree, draw_view_tree};

const BG: [u8; 4] = [30, 30, 40, 255];
const INK: [u8; 4] = [240, 240, 240, 255];

fn draw_scene(gfx: &mut dyn Renderer2d) {
    gfx.clear(BG);
    gfx.line(Point::new(150.0, 400.0), Point::new(250.0, 400.0), 10.0, INK);
    gfx.circle(Point::new(300.0, 180.0), 30.0, Stroke::Outline(3.0), INK);
    gfx.draw_text(Point::new(20.0, 20.0), "HANGMAN", INK);
}

fn render_at(width: u32, height: u32) -> RgbaBufferSurface {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(width, height));
    let size = surface.size();
    let mut cpu = CpuRenderer::with_block_font(surface.frame_mut(), size);
    let mut canvas = LogicalCanvas::new(&mut cpu, Size::new(800.0, 600.0));
    draw_scene(&mut canvas);
    surface
}

#[test]
fn rendering_is_deterministic() {
    let a = render_at(800, 600);
    let b = render_at(800, 600);
    assert_eq!(a.digest(), b.digest());
}

#[test]
fn scene_scales_with_the_surface() {
    let small = render_at(400, 300);
    let big = render_at(1600, 1200);
    assert_ne!(small.digest(), big.digest());

    // The base beam sits at logical (200, 400) in both.
    assert_eq!(small.pixel(100, 200), Some(INK));
    assert_eq!(big.pixel(400, 800), Some(INK));

    // Head ring is hollow at the center.
    assert_eq!(big.pixel(600, 360), Some(BG));
}

#[test]
fn hovered_button_uses_hover_fill() {
    let style = ButtonStyle {
        fill: [10, 10, 10, 255],
        hover_fill: [90, 90, 90, 255],
        text: INK,
        border: None,
    };
    let mut view = ViewTree::new();
    view.push(ViewNode::Button(ButtonNode {
        id: 7,
        rect: Rect::new(0.0, 0.0, 40.0, 20.0),
        label: String::new(),
        text_scale: 2.0,
        action: (),
        enabled: true,
        style,
    }));

    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(40, 20));
    let size = surface.size();
    {
        let mut cpu = CpuRenderer::with_block_font(surface.frame_mut(), size);
        draw_view_tree(&mut cpu, &view, None);
    }
    assert_eq!(surface.pixel(1, 1), Some(style.fill));

    {
        let mut cpu = CpuRenderer::with_block_font(surface.frame_mut(), size);
        draw_view_tree(&mut cpu, &view, Some(7));
    }
    assert_eq!(surface.pixel(1, 1), Some(style.hover_fill));
}
