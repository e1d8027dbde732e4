use engine::graphics::{Color, Renderer2d};
use engine::ui::{Point, Rect};
use engine::view_tree::{ButtonStyle, ViewTree};

use super::{
    BUTTON, LARGE_SCALE, MEDIUM_SCALE, NEON_BLUE, NEON_GREEN, NEON_PURPLE, NEON_RED,
    NEON_YELLOW, SMALL_SCALE, TITLE_SCALE, WHITE, push_button, push_styled_button, score_line,
    shadowed_text_centered,
};
use crate::round::LossReason;
use crate::state::{GameAction, GameState};
use crate::ui_ids::*;
use crate::view::ScreenEvent;
use crate::words::{Category, Difficulty};

const MENU_BUTTON_W: f32 = 200.0;
const MENU_BUTTON_H: f32 = 60.0;
const MENU_BUTTON_X: f32 = 300.0;
const BACK_BUTTON: Rect = Rect::new(50.0, 520.0, 100.0, 50.0);

const DIFFICULTY_ROWS_Y: [f32; 3] = [150.0, 250.0, 350.0];

const CATEGORY_W: f32 = 180.0;
const CATEGORY_H: f32 = 50.0;
const CATEGORY_GAP: f32 = 30.0;
const CATEGORY_ROWS_Y: [f32; 3] = [120.0, 190.0, 260.0];

const GAME_OVER_W: f32 = 160.0;
const GAME_OVER_H: f32 = 50.0;
const GAME_OVER_GAP: f32 = 30.0;
const GAME_OVER_Y: f32 = 500.0;

const OVERLAY_ALPHA: u8 = 150;
const PAUSE_ALPHA: u8 = 180;
const WON_TINT: Color = [0, 100, 0, 255];
const LOST_TINT: Color = [100, 0, 0, 255];

const PAUSE_TIP: &str = "Tip: You can also use your keyboard to type letters";

fn menu_button(y: f32) -> Rect {
    Rect::new(MENU_BUTTON_X, y, MENU_BUTTON_W, MENU_BUTTON_H)
}

fn hover_tinted(hover_fill: Color) -> ButtonStyle {
    ButtonStyle {
        hover_fill,
        ..BUTTON
    }
}

fn difficulty_hover(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => [100, 255, 100, 255],
        Difficulty::Medium => [255, 255, 100, 255],
        Difficulty::Hard => [255, 100, 100, 255],
    }
}

pub fn category_rect(category: Category) -> Rect {
    let index = category.index();
    let (row, col) = (index / 2, index % 2);
    let left = (800.0 - (2.0 * CATEGORY_W + CATEGORY_GAP)) / 2.0;
    Rect::new(
        left + col as f32 * (CATEGORY_W + CATEGORY_GAP),
        CATEGORY_ROWS_Y[row],
        CATEGORY_W,
        CATEGORY_H,
    )
}

fn screen(event: ScreenEvent) -> GameAction {
    GameAction::Screen(event)
}

pub fn main_menu_buttons(tree: &mut ViewTree<GameAction>) {
    push_button(
        tree,
        UI_MAIN_MENU_PLAY,
        menu_button(200.0),
        "Play Game",
        screen(ScreenEvent::Play),
        true,
    );
    push_button(
        tree,
        UI_MAIN_MENU_QUIT,
        menu_button(300.0),
        "Quit",
        screen(ScreenEvent::Quit),
        true,
    );
}

pub fn draw_main_menu(gfx: &mut dyn Renderer2d) {
    shadowed_text_centered(
        gfx,
        Point::new(400.0, 100.0),
        "HANGMAN GAME",
        NEON_PURPLE,
        TITLE_SCALE,
        3.0,
    );
}

pub fn difficulty_buttons(tree: &mut ViewTree<GameAction>) {
    for (difficulty, y) in Difficulty::ALL.into_iter().zip(DIFFICULTY_ROWS_Y) {
        push_styled_button(
            tree,
            UI_DIFFICULTY_BASE + difficulty.index() as u32,
            menu_button(y),
            difficulty.name(),
            MEDIUM_SCALE,
            screen(ScreenEvent::SelectDifficulty(difficulty)),
            true,
            hover_tinted(difficulty_hover(difficulty)),
        );
    }
    push_button(
        tree,
        UI_DIFFICULTY_BACK,
        BACK_BUTTON,
        "Back",
        screen(ScreenEvent::Back),
        true,
    );
}

pub fn draw_difficulty(gfx: &mut dyn Renderer2d) {
    shadowed_text_centered(
        gfx,
        Point::new(400.0, 80.0),
        "SELECT DIFFICULTY",
        NEON_BLUE,
        TITLE_SCALE,
        3.0,
    );
    for (difficulty, y) in Difficulty::ALL.into_iter().zip(DIFFICULTY_ROWS_Y) {
        let below = menu_button(y).bottom() + 25.0;
        shadowed_text_centered(
            gfx,
            Point::new(400.0, below),
            difficulty.description(),
            WHITE,
            SMALL_SCALE,
            2.0,
        );
    }
}

pub fn category_buttons(tree: &mut ViewTree<GameAction>) {
    for category in Category::ALL {
        push_button(
            tree,
            UI_CATEGORY_BASE + category.index() as u32,
            category_rect(category),
            category.name(),
            screen(ScreenEvent::SelectCategory(category)),
            true,
        );
    }
    push_button(
        tree,
        UI_CATEGORY_BACK,
        BACK_BUTTON,
        "Back",
        screen(ScreenEvent::Back),
        true,
    );
}

pub fn draw_category(gfx: &mut dyn Renderer2d) {
    shadowed_text_centered(
        gfx,
        Point::new(400.0, 80.0),
        "SELECT CATEGORY",
        NEON_BLUE,
        TITLE_SCALE,
        3.0,
    );
}

pub fn pause_buttons(tree: &mut ViewTree<GameAction>) {
    push_styled_button(
        tree,
        UI_PAUSE_CONTINUE,
        menu_button(200.0),
        "Continue",
        MEDIUM_SCALE,
        screen(ScreenEvent::Continue),
        true,
        hover_tinted(difficulty_hover(Difficulty::Easy)),
    );
    push_styled_button(
        tree,
        UI_PAUSE_QUIT_TO_MENU,
        menu_button(300.0),
        "Quit to Menu",
        MEDIUM_SCALE,
        screen(ScreenEvent::QuitToMenu),
        true,
        hover_tinted(difficulty_hover(Difficulty::Hard)),
    );
}

pub fn draw_pause_overlay(gfx: &mut dyn Renderer2d) {
    let size = gfx.size();
    gfx.blend_rect(Rect::from_size(size.w, size.h), [0, 0, 0, 255], PAUSE_ALPHA);
    shadowed_text_centered(
        gfx,
        Point::new(400.0, 150.0),
        "GAME PAUSED",
        NEON_BLUE,
        TITLE_SCALE,
        3.0,
    );
    shadowed_text_centered(
        gfx,
        Point::new(400.0, 400.0),
        PAUSE_TIP,
        NEON_YELLOW,
        SMALL_SCALE,
        2.0,
    );
}

pub fn game_over_buttons(tree: &mut ViewTree<GameAction>) {
    let left = (800.0 - (2.0 * GAME_OVER_W + GAME_OVER_GAP)) / 2.0;
    push_button(
        tree,
        UI_GAME_OVER_PLAY_AGAIN,
        Rect::new(left, GAME_OVER_Y, GAME_OVER_W, GAME_OVER_H),
        "Play Again",
        screen(ScreenEvent::PlayAgain),
        true,
    );
    push_button(
        tree,
        UI_GAME_OVER_MAIN_MENU,
        Rect::new(
            left + GAME_OVER_W + GAME_OVER_GAP,
            GAME_OVER_Y,
            GAME_OVER_W,
            GAME_OVER_H,
        ),
        "Main Menu",
        screen(ScreenEvent::MainMenu),
        true,
    );
}

pub fn draw_won(gfx: &mut dyn Renderer2d, state: &GameState) {
    draw_round_summary(gfx, state, WON_TINT, "YOU WIN!", NEON_GREEN);
    centered(gfx, 330.0, &score_line(state), WHITE, MEDIUM_SCALE);
}

pub fn draw_lost(gfx: &mut dyn Renderer2d, state: &GameState, reason: LossReason) {
    draw_round_summary(gfx, state, LOST_TINT, "GAME OVER", NEON_RED);
    centered(gfx, 330.0, reason.message(), NEON_RED, MEDIUM_SCALE);
    centered(gfx, 370.0, &score_line(state), WHITE, MEDIUM_SCALE);
}

fn draw_round_summary(
    gfx: &mut dyn Renderer2d,
    state: &GameState,
    tint: Color,
    headline: &str,
    headline_color: Color,
) {
    let size = gfx.size();
    gfx.blend_rect(Rect::from_size(size.w, size.h), tint, OVERLAY_ALPHA);
    shadowed_text_centered(
        gfx,
        Point::new(400.0, 150.0),
        headline,
        headline_color,
        TITLE_SCALE,
        3.0,
    );

    let Some(round) = state.round.as_ref() else {
        return;
    };
    centered(
        gfx,
        250.0,
        &format!("The word was: {}", round.word()),
        WHITE,
        LARGE_SCALE,
    );
    centered(
        gfx,
        290.0,
        &format!("Difficulty: {}", round.difficulty().name()),
        WHITE,
        MEDIUM_SCALE,
    );
}

fn centered(gfx: &mut dyn Renderer2d, y: f32, text: &str, color: Color, scale: f32) {
    shadowed_text_centered(gfx, Point::new(400.0, y), text, color, scale, 2.0);
}
