pub mod animation;
pub mod gallows;
pub mod hangman_ui;
pub mod headful;
pub mod parallax;
pub mod playtest;
pub mod round;
pub mod round_timer;
pub mod settings;
pub mod sfx;
pub mod state;
pub mod ui_ids;
pub mod view;
pub mod words;
