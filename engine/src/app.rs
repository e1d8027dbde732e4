use std::time::{Duration, Instant};

use pixels::{PixelsBuilder, SurfaceTexture};
use tracing::{debug, error, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowBuilder};

use crate::EngineError;
use crate::canvas::{LogicalCanvas, to_logical};
use crate::font::FontChain;
use crate::graphics::Renderer2d;
use crate::input::{EventQueue, InputEvent, Key};
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;
use crate::ui::{Point, Size};
use crate::view_tree::{ViewTree, hit_test_actions, hovered_button};

pub struct AppConfig {
    pub title: String,
    /// Reference canvas the game lays itself out on.
    pub logical_size: Size,
    pub desired_size: PhysicalSize<u32>,
    pub clamp_to_monitor: bool,
    pub vsync: Option<bool>,
    pub target_fps: u32,
    pub fullscreen: bool,
    pub fonts: FontChain,
}

pub struct AppContext {
    pub window: Window,
    pub renderer: PixelsRenderer2d,
    pub surface_size: SurfaceSize,
    exit_requested: bool,
}

impl AppContext {
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    pub fn toggle_fullscreen(&mut self) {
        let next = if self.is_fullscreen() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        info!(fullscreen = next.is_some(), "toggling fullscreen");
        self.window.set_fullscreen(next);
    }
}

/// Everything that happened since the previous frame. Pointer positions are in logical units.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
    pub pointer: Option<Point>,
}

pub trait GameApp {
    type State;
    type Action: Clone;
    type Effect;

    fn init_state(&mut self, ctx: &mut AppContext) -> Self::State;

    fn build_view(&self, state: &Self::State) -> ViewTree<Self::Action>;

    /// `actions` are the button actions hit by this frame's pointer-down events, in order.
    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        actions: &[Self::Action],
        dt: Duration,
    ) -> Vec<Self::Effect>;

    /// Draws on the logical canvas.
    fn render(
        &mut self,
        state: &Self::State,
        view: &ViewTree<Self::Action>,
        hovered: Option<u32>,
        gfx: &mut dyn Renderer2d,
    );

    fn handle_effects(&mut self, _effects: Vec<Self::Effect>, _ctx: &mut AppContext) {}
}

const LETTER_KEYS: [(VirtualKeyCode, char); 26] = [
    (VirtualKeyCode::A, 'a'),
    (VirtualKeyCode::B, 'b'),
    (VirtualKeyCode::C, 'c'),
    (VirtualKeyCode::D, 'd'),
    (VirtualKeyCode::E, 'e'),
    (VirtualKeyCode::F, 'f'),
    (VirtualKeyCode::G, 'g'),
    (VirtualKeyCode::H, 'h'),
    (VirtualKeyCode::I, 'i'),
    (VirtualKeyCode::J, 'j'),
    (VirtualKeyCode::K, 'k'),
    (VirtualKeyCode::L, 'l'),
    (VirtualKeyCode::M, 'm'),
    (VirtualKeyCode::N, 'n'),
    (VirtualKeyCode::O, 'o'),
    (VirtualKeyCode::P, 'p'),
    (VirtualKeyCode::Q, 'q'),
    (VirtualKeyCode::R, 'r'),
    (VirtualKeyCode::S, 's'),
    (VirtualKeyCode::T, 't'),
    (VirtualKeyCode::U, 'u'),
    (VirtualKeyCode::V, 'v'),
    (VirtualKeyCode::W, 'w'),
    (VirtualKeyCode::X, 'x'),
    (VirtualKeyCode::Y, 'y'),
    (VirtualKeyCode::Z, 'z'),
];

pub fn map_virtual_key(key: VirtualKeyCode) -> Key {
    match key {
        VirtualKeyCode::Escape => Key::Escape,
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Key::Enter,
        VirtualKeyCode::F11 => Key::F11,
        other => LETTER_KEYS
            .iter()
            .find(|(code, _)| *code == other)
            .map(|(_, ch)| Key::Letter(*ch))
            .unwrap_or(Key::Other),
    }
}

pub fn run_game<G: GameApp + 'static>(config: AppConfig, mut game: G) -> Result<(), EngineError> {
    let event_loop = EventLoop::new();
    let monitor_size = if config.clamp_to_monitor {
        event_loop.primary_monitor().map(|m| m.size())
    } else {
        None
    };
    let initial_size = if let Some(monitor) = monitor_size {
        PhysicalSize::new(
            config.desired_size.width.min(monitor.width),
            config.desired_size.height.min(monitor.height),
        )
    } else {
        config.desired_size
    };
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(initial_size)
        .with_fullscreen(config.fullscreen.then_some(Fullscreen::Borderless(None)))
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let surface_size = SurfaceSize::new(window_size.width.max(1), window_size.height.max(1));

    let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, &window);
    let mut pixels_builder =
        PixelsBuilder::new(surface_size.width, surface_size.height, surface_texture);
    if let Some(vsync) = config.vsync {
        pixels_builder = pixels_builder.enable_vsync(vsync);
    }
    let pixels = pixels_builder.build()?;

    let renderer = PixelsRenderer2d::new(pixels, surface_size, config.fonts.resolve())?;
    info!(
        width = surface_size.width,
        height = surface_size.height,
        font = renderer.font().name(),
        "window ready"
    );

    let mut ctx = AppContext {
        window,
        renderer,
        surface_size,
        exit_requested: false,
    };
    let logical_size = config.logical_size;
    let frame_interval = Duration::from_secs_f64(1.0 / f64::from(config.target_fps.max(1)));

    let mut state = game.init_state(&mut ctx);
    let mut queue = EventQueue::new();
    let mut last_frame = Instant::now();
    let mut next_redraw = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(next_redraw);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    resize(&mut ctx, SurfaceSize::new(size.width, size.height));
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    resize(
                        &mut ctx,
                        SurfaceSize::new(new_inner_size.width, new_inner_size.height),
                    );
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let physical = Point::new(position.x as f32, position.y as f32);
                    let p = to_logical(physical, ctx.surface_size.as_size(), logical_size);
                    queue.push(InputEvent::PointerMoved(p));
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(p) = queue.pointer() {
                        queue.push(InputEvent::PointerDown(p));
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    queue.push(InputEvent::KeyDown(map_virtual_key(key)));
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_redraw {
                    ctx.window.request_redraw();
                    next_redraw = now + frame_interval;
                }
            }
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(last_frame);
                last_frame = now;

                let input = InputFrame {
                    events: queue.drain(),
                    pointer: queue.pointer(),
                };

                let view_for_input = game.build_view(&state);
                let actions: Vec<G::Action> = input
                    .events
                    .iter()
                    .filter_map(|event| match event {
                        InputEvent::PointerDown(p) => Some(*p),
                        _ => None,
                    })
                    .flat_map(|p| hit_test_actions(&view_for_input, p))
                    .collect();
                let effects = game.update_state(&mut state, &input, &actions, dt);

                let view_for_render = game.build_view(&state);
                let hovered = hovered_button(&view_for_render, input.pointer);
                ctx.renderer.draw_frame(|gfx| {
                    let mut canvas = LogicalCanvas::new(gfx, logical_size);
                    game.render(&state, &view_for_render, hovered, &mut canvas);
                });
                if let Err(err) = ctx.renderer.present() {
                    error!(error = %err, "present failed");
                }

                game.handle_effects(effects, &mut ctx);
                if ctx.exit_requested() {
                    info!("exit requested");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    #[allow(unreachable_code)]
    Ok(())
}

fn resize(ctx: &mut AppContext, size: SurfaceSize) {
    if size.is_empty() {
        return;
    }
    debug!(width = size.width, height = size.height, "resize");
    ctx.surface_size = size;
    if let Err(err) = ctx.renderer.resize(size) {
        error!(error = %err, "resize failed");
    }
    ctx.window.request_redraw();
}
