//! Stable button ids, used for hover tracking and by tests to find buttons.

pub const UI_FULLSCREEN: u32 = 1;

pub const UI_MAIN_MENU_PLAY: u32 = 101;
pub const UI_MAIN_MENU_QUIT: u32 = 102;

/// `+ Difficulty::index()`.
pub const UI_DIFFICULTY_BASE: u32 = 200;
pub const UI_DIFFICULTY_BACK: u32 = 210;

/// `+ Category::index()`.
pub const UI_CATEGORY_BASE: u32 = 300;
pub const UI_CATEGORY_BACK: u32 = 310;

pub const UI_PLAYING_PAUSE: u32 = 400;
/// `+ (letter - 'a')`.
pub const UI_KEYBOARD_BASE: u32 = 500;

pub const UI_PAUSE_CONTINUE: u32 = 601;
pub const UI_PAUSE_QUIT_TO_MENU: u32 = 602;

pub const UI_GAME_OVER_PLAY_AGAIN: u32 = 701;
pub const UI_GAME_OVER_MAIN_MENU: u32 = 702;

pub fn keyboard_key(letter: char) -> u32 {
    UI_KEYBOARD_BASE + (letter as u32).saturating_sub('a' as u32)
}
