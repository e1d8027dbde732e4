use serde::{Deserialize, Serialize};

use crate::round::LossReason;
use crate::words::{Category, Difficulty};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    MainMenu,
    Difficulty,
    Category,
    Playing,
    Won,
    Lost(LossReason),
    /// Holds the screen to return to on `Continue`.
    Paused(Box<Screen>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenEvent {
    Play,
    Quit,
    SelectDifficulty(Difficulty),
    SelectCategory(Category),
    Back,
    Pause,
    Continue,
    QuitToMenu,
    RoundWon,
    RoundLost(LossReason),
    PlayAgain,
    MainMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenEffect {
    None,
    Exit,
    SetDifficulty(Difficulty),
    StartRound(Category),
    RecordWin,
    RecordLoss(LossReason),
}

impl Screen {
    /// Pure transition function for the screen state machine.
    ///
    /// Work that touches the rest of the game (drawing a word, bumping the score) is reported via
    /// `ScreenEffect` so callers stay deterministic and easy to test.
    pub fn handle(self, event: ScreenEvent) -> (Screen, ScreenEffect) {
        match (self, event) {
            (Screen::MainMenu, ScreenEvent::Play) => (Screen::Difficulty, ScreenEffect::None),
            (Screen::MainMenu, ScreenEvent::Quit) => (Screen::MainMenu, ScreenEffect::Exit),

            (Screen::Difficulty, ScreenEvent::SelectDifficulty(d)) => {
                (Screen::Category, ScreenEffect::SetDifficulty(d))
            }
            (Screen::Difficulty, ScreenEvent::Back) => (Screen::MainMenu, ScreenEffect::None),

            (Screen::Category, ScreenEvent::SelectCategory(c)) => {
                (Screen::Playing, ScreenEffect::StartRound(c))
            }
            (Screen::Category, ScreenEvent::Back) => (Screen::Difficulty, ScreenEffect::None),

            (Screen::Playing, ScreenEvent::Pause) => (
                Screen::Paused(Box::new(Screen::Playing)),
                ScreenEffect::None,
            ),
            (Screen::Playing, ScreenEvent::RoundWon) => (Screen::Won, ScreenEffect::RecordWin),
            (Screen::Playing, ScreenEvent::RoundLost(reason)) => {
                (Screen::Lost(reason), ScreenEffect::RecordLoss(reason))
            }

            (Screen::Paused(previous), ScreenEvent::Continue) => (*previous, ScreenEffect::None),
            (Screen::Paused(_), ScreenEvent::QuitToMenu) => (Screen::MainMenu, ScreenEffect::None),

            (Screen::Won | Screen::Lost(_), ScreenEvent::PlayAgain) => {
                (Screen::Difficulty, ScreenEffect::None)
            }
            (Screen::Won | Screen::Lost(_), ScreenEvent::MainMenu) => {
                (Screen::MainMenu, ScreenEffect::None)
            }

            // Ignore irrelevant events in the current state.
            (state, _) => (state, ScreenEffect::None),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Screen::Playing)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Screen::Paused(_))
    }

    /// Every screen except an active or paused round sits on the scrolling scenery.
    pub fn draws_scenery(&self) -> bool {
        !matches!(self, Screen::Playing | Screen::Paused(_))
    }
}
