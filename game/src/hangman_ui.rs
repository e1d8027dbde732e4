//! View trees and drawing for every screen, laid out on the 800x600 reference canvas.

pub mod menus;

use std::path::Path;

use engine::graphics::{Color, Renderer2d, Stroke};
use engine::image::{RgbaImage, load_png};
use engine::ui::{Point, Rect};
use engine::view_tree::{ButtonNode, ButtonStyle, ViewNode, ViewTree, draw_view_tree};
use tracing::{info, warn};

use crate::gallows::draw_gallows;
use crate::round::{LetterState, RoundState};
use crate::state::{GameAction, GameState};
use crate::ui_ids::*;
use crate::view::{Screen, ScreenEvent};
use crate::words::Difficulty;

pub const TITLE_SCALE: f32 = 6.0;
pub const LARGE_SCALE: f32 = 4.0;
pub const MEDIUM_SCALE: f32 = 3.0;
pub const SMALL_SCALE: f32 = 2.0;

pub const DARK_BG: Color = [25, 25, 35, 255];
pub const WHITE: Color = [255, 255, 255, 255];
pub const BLACK: Color = [0, 0, 0, 255];
pub const GRAY: Color = [200, 200, 200, 255];
pub const LIGHT_GRAY: Color = [230, 230, 230, 255];
pub const NEON_GREEN: Color = [57, 255, 20, 255];
pub const NEON_BLUE: Color = [0, 195, 255, 255];
pub const NEON_YELLOW: Color = [255, 255, 0, 255];
pub const NEON_PURPLE: Color = [180, 0, 255, 255];
pub const NEON_RED: Color = [255, 50, 50, 255];
pub const BUTTON_BG: Color = [60, 60, 80, 255];
pub const BUTTON_HOVER: Color = [80, 80, 100, 255];
pub const BUTTON_TEXT: Color = [240, 240, 240, 255];
const BUTTON_BORDER: Color = [200, 200, 210, 255];

const HEART: Color = [255, 0, 0, 255];
const HEART_FADED: Color = [150, 150, 150, 255];
const TIMER_BG: Color = [40, 40, 60, 255];
const TIMER_BG_ALPHA: u8 = 180;

pub const BUTTON: ButtonStyle = ButtonStyle {
    fill: BUTTON_BG,
    hover_fill: BUTTON_HOVER,
    text: BUTTON_TEXT,
    border: Some(BUTTON_BORDER),
};

const KEY_HIT: ButtonStyle = ButtonStyle {
    fill: NEON_GREEN,
    hover_fill: NEON_GREEN,
    text: BLACK,
    border: None,
};

const KEY_MISS: ButtonStyle = ButtonStyle {
    fill: NEON_RED,
    hover_fill: NEON_RED,
    text: WHITE,
    border: None,
};

const KEY_SIZE: f32 = 35.0;
const KEY_MARGIN: f32 = 6.0;
const KEY_ROWS_Y: [f32; 2] = [480.0, 525.0];
const KEYS_PER_ROW: usize = 13;

const WORD_Y: f32 = 450.0;
const HEART_SIZE: f32 = 20.0;
const HEART_SPACING: f32 = 30.0;
const HEART_Y: f32 = 30.0;
const TIMER_Y: f32 = 40.0;

const PAUSE_BUTTON: Rect = Rect::new(10.0, 550.0, 40.0, 40.0);
const FULLSCREEN_BUTTON: Rect = Rect::new(750.0, 550.0, 40.0, 40.0);

/// Optional artwork for the round screens.
#[derive(Debug, Clone, Default)]
pub struct SceneAssets {
    pub background: Option<RgbaImage>,
}

impl SceneAssets {
    /// A missing or unreadable image falls back to a flat fill.
    pub fn load(background: Option<&Path>) -> Self {
        let Some(path) = background else {
            return Self::default();
        };
        match load_png(path) {
            Ok(image) => {
                info!(
                    path = %path.display(),
                    width = image.width(),
                    height = image.height(),
                    "background loaded"
                );
                Self {
                    background: Some(image),
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "background unavailable, using solid fill");
                Self::default()
            }
        }
    }
}

pub fn build_view(state: &GameState) -> ViewTree<GameAction> {
    let mut tree = ViewTree::new();
    match &state.screen {
        Screen::MainMenu => menus::main_menu_buttons(&mut tree),
        Screen::Difficulty => menus::difficulty_buttons(&mut tree),
        Screen::Category => menus::category_buttons(&mut tree),
        Screen::Playing => playing_buttons(&mut tree, state),
        Screen::Paused(_) => menus::pause_buttons(&mut tree),
        Screen::Won | Screen::Lost(_) => menus::game_over_buttons(&mut tree),
    }
    push_styled_button(
        &mut tree,
        UI_FULLSCREEN,
        FULLSCREEN_BUTTON,
        "F",
        SMALL_SCALE,
        GameAction::ToggleFullscreen,
        true,
        BUTTON,
    );
    tree
}

/// Draws `state` and then the buttons of `view` on top.
pub fn draw_screen(
    gfx: &mut dyn Renderer2d,
    state: &GameState,
    view: &ViewTree<GameAction>,
    hovered: Option<u32>,
    assets: &SceneAssets,
) {
    if state.screen.draws_scenery() {
        state.parallax.draw(gfx);
    } else {
        draw_static_background(gfx, assets);
    }

    let has_image = assets.background.is_some();
    match &state.screen {
        Screen::MainMenu => menus::draw_main_menu(gfx),
        Screen::Difficulty => menus::draw_difficulty(gfx),
        Screen::Category => menus::draw_category(gfx),
        Screen::Playing => draw_round(gfx, state, has_image),
        Screen::Paused(_) => {
            draw_round(gfx, state, has_image);
            let mut under = ViewTree::new();
            playing_buttons(&mut under, state);
            draw_view_tree(gfx, &under, None);
            menus::draw_pause_overlay(gfx);
        }
        Screen::Won => menus::draw_won(gfx, state),
        Screen::Lost(reason) => menus::draw_lost(gfx, state, *reason),
    }

    draw_view_tree(gfx, view, hovered);
}

pub fn push_button(
    tree: &mut ViewTree<GameAction>,
    id: u32,
    rect: Rect,
    label: &str,
    action: GameAction,
    enabled: bool,
) {
    push_styled_button(tree, id, rect, label, MEDIUM_SCALE, action, enabled, BUTTON);
}

#[allow(clippy::too_many_arguments)]
pub fn push_styled_button(
    tree: &mut ViewTree<GameAction>,
    id: u32,
    rect: Rect,
    label: &str,
    text_scale: f32,
    action: GameAction,
    enabled: bool,
    style: ButtonStyle,
) {
    tree.push(ViewNode::Button(ButtonNode {
        id,
        rect,
        label: label.to_string(),
        text_scale,
        action,
        enabled,
        style,
    }));
}

/// On-screen keyboard rectangle for `letter` (two rows, a-m over n-z).
pub fn key_rect(letter: char) -> Option<Rect> {
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let index = (letter as u8 - b'a') as usize;
    let (row, col) = (index / KEYS_PER_ROW, index % KEYS_PER_ROW);
    let row_w = (KEY_SIZE + KEY_MARGIN) * KEYS_PER_ROW as f32 - KEY_MARGIN;
    let x0 = ((800.0 - row_w) / 2.0).floor();
    Some(Rect::new(
        x0 + col as f32 * (KEY_SIZE + KEY_MARGIN),
        KEY_ROWS_Y[row],
        KEY_SIZE,
        KEY_SIZE,
    ))
}

fn playing_buttons(tree: &mut ViewTree<GameAction>, state: &GameState) {
    push_styled_button(
        tree,
        UI_PLAYING_PAUSE,
        PAUSE_BUTTON,
        "||",
        MEDIUM_SCALE,
        GameAction::Screen(ScreenEvent::Pause),
        true,
        BUTTON,
    );

    let Some(round) = state.round.as_ref() else {
        return;
    };
    for letter in 'a'..='z' {
        let Some(rect) = key_rect(letter) else {
            continue;
        };
        let (style, enabled) = match round.letter_state(letter) {
            LetterState::Unguessed => (BUTTON, true),
            LetterState::Hit => (KEY_HIT, false),
            LetterState::Miss => (KEY_MISS, false),
        };
        push_styled_button(
            tree,
            keyboard_key(letter),
            rect,
            &letter.to_string(),
            SMALL_SCALE,
            GameAction::Guess(letter),
            enabled,
            style,
        );
    }
}

fn draw_static_background(gfx: &mut dyn Renderer2d, assets: &SceneAssets) {
    let size = gfx.size();
    let full = Rect::from_size(size.w, size.h);
    match &assets.background {
        Some(image) => gfx.draw_image(full, image),
        None => gfx.fill_rect(full, DARK_BG),
    }
}

fn draw_round(gfx: &mut dyn Renderer2d, state: &GameState, has_image: bool) {
    let Some(round) = state.round.as_ref() else {
        return;
    };

    shadowed_text(
        gfx,
        Point::new(20.0, 20.0),
        &format!("Category: {}", round.category().name()),
        NEON_BLUE,
        MEDIUM_SCALE,
    );
    shadowed_text(
        gfx,
        Point::new(20.0, 60.0),
        &format!("Difficulty: {}", round.difficulty().name()),
        difficulty_color(round.difficulty()),
        SMALL_SCALE,
    );

    draw_hearts(gfx, round);
    if let Some(fraction) = state.time_fraction_remaining() {
        let remaining = state.time_remaining().unwrap_or_default();
        draw_timer(gfx, remaining.as_secs(), fraction);
    }

    let stats = score_line(state);
    let w = gfx.text_width(&stats, SMALL_SCALE);
    shadowed_text(gfx, Point::new(780.0 - w, 60.0), &stats, WHITE, SMALL_SCALE);

    // Dark ink reads on the artwork, light ink on the flat fill.
    let ink = if has_image { BLACK } else { LIGHT_GRAY };
    draw_gallows(gfx, &state.animation, round.body_parts_due(), ink);

    shadowed_text_centered(
        gfx,
        Point::new(400.0, WORD_Y),
        &round.masked_word(),
        NEON_BLUE,
        LARGE_SCALE,
        2.0,
    );
}

fn draw_hearts(gfx: &mut dyn Renderer2d, round: &RoundState) {
    let max = round.max_wrong();
    let start_x = 800.0 - max as f32 * HEART_SPACING - 30.0;
    let lost_from = round.lives_left();
    for i in 0..max {
        let color = if i >= lost_from { HEART_FADED } else { HEART };
        draw_heart(
            gfx,
            Point::new(start_x + i as f32 * HEART_SPACING, HEART_Y),
            HEART_SIZE,
            color,
        );
    }
}

fn draw_heart(gfx: &mut dyn Renderer2d, at: Point, size: f32, color: Color) {
    let r = (size / 4.0).floor();
    gfx.circle(at.offset(-r, -r), r, Stroke::Fill, color);
    gfx.circle(at.offset(r, -r), r, Stroke::Fill, color);
    gfx.fill_polygon(
        &[
            at.offset(-2.0 * r, -r),
            at.offset(0.0, 2.0 * r),
            at.offset(2.0 * r, -r),
        ],
        color,
    );
}

pub fn timer_color(fraction: f32) -> Color {
    if fraction > 0.6 {
        NEON_GREEN
    } else if fraction > 0.3 {
        NEON_YELLOW
    } else {
        NEON_RED
    }
}

pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn draw_timer(gfx: &mut dyn Renderer2d, secs: u64, fraction: f32) {
    let color = timer_color(fraction);
    let text = format_clock(secs);
    let w = gfx.text_width(&text, MEDIUM_SCALE);
    let h = gfx.text_height(MEDIUM_SCALE);
    let text_rect = Rect::new(400.0 - w / 2.0, TIMER_Y - h / 2.0, w, h);
    gfx.blend_rect(text_rect.inflate(20.0, 10.0), TIMER_BG, TIMER_BG_ALPHA);
    shadowed_text_centered(
        gfx,
        Point::new(400.0, TIMER_Y),
        &text,
        color,
        MEDIUM_SCALE,
        2.0,
    );

    let bar = Rect::new(350.0, TIMER_Y + 20.0, 100.0, 10.0);
    gfx.fill_rect(bar, GRAY);
    gfx.fill_rect(
        Rect::new(bar.x, bar.y, (bar.w * fraction).floor(), bar.h),
        color,
    );
    gfx.rect_outline(bar, 1.0, BLACK);
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => NEON_GREEN,
        Difficulty::Medium => NEON_YELLOW,
        Difficulty::Hard => NEON_RED,
    }
}

pub fn score_line(state: &GameState) -> String {
    format!(
        "Wins: {}  Losses: {}",
        state.score.wins, state.score.losses
    )
}

/// Text with a black drop shadow, `origin` at the top left.
pub(crate) fn shadowed_text(
    gfx: &mut dyn Renderer2d,
    origin: Point,
    text: &str,
    color: Color,
    scale: f32,
) {
    gfx.draw_text_scaled(origin.offset(2.0, 2.0), text, BLACK, scale);
    gfx.draw_text_scaled(origin, text, color, scale);
}

pub(crate) fn shadowed_text_centered(
    gfx: &mut dyn Renderer2d,
    center: Point,
    text: &str,
    color: Color,
    scale: f32,
    shadow: f32,
) {
    let w = gfx.text_width(text, scale);
    let h = gfx.text_height(scale);
    let origin = Point::new(center.x - w / 2.0, center.y - h / 2.0);
    gfx.draw_text_scaled(origin.offset(shadow, shadow), text, BLACK, scale);
    gfx.draw_text_scaled(origin, text, color, scale);
}
