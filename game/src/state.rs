use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::animation::HangmanAnimation;
use crate::parallax::ParallaxField;
use crate::round::{GuessOutcome, LossReason, RoundState};
use crate::sfx::SfxCue;
use crate::view::{Screen, ScreenEffect, ScreenEvent};
use crate::words::{Category, Difficulty, pick_word};

/// One frame at 60 Hz.
pub const FRAME_DT: Duration = Duration::from_micros(16_667);

/// Longest step the swing animation takes in one frame. The round clock is never capped.
pub const MAX_ANIMATION_DT: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    Screen(ScreenEvent),
    Guess(char),
    ToggleParallax,
    ToggleFullscreen,
    /// Leaves fullscreen if active, otherwise pauses a running round.
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEffect {
    Sfx(SfxCue),
    ToggleFullscreen,
    Exit,
}

/// Everything the game needs between frames.
///
/// The score lives for the whole process; the round and its animation are replaced on every
/// round start.
#[derive(Debug, Clone)]
pub struct GameState {
    pub screen: Screen,
    pub difficulty: Difficulty,
    pub round: Option<RoundState>,
    pub score: Score,
    pub animation: HangmanAnimation,
    pub parallax: ParallaxField,
    pub fullscreen: bool,
    clock: Duration,
    rng: StdRng,
}

impl GameState {
    /// `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let parallax = ParallaxField::new(&mut rng);
        Self {
            screen: Screen::default(),
            difficulty: Difficulty::default(),
            round: None,
            score: Score::default(),
            animation: HangmanAnimation::new(),
            parallax,
            fullscreen: false,
            clock: Duration::ZERO,
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Game clock: the sum of every `dt` passed to `tick`.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn time_remaining(&self) -> Option<Duration> {
        let timer = self.round.as_ref()?.timer()?;
        Some(timer.remaining(self.clock))
    }

    pub fn time_fraction_remaining(&self) -> Option<f32> {
        let timer = self.round.as_ref()?.timer()?;
        Some(timer.fraction_remaining(self.clock))
    }

    pub fn apply(&mut self, action: GameAction) -> Vec<GameEffect> {
        let mut effects = Vec::new();
        match action {
            GameAction::Screen(event) => self.handle_screen_event(event, &mut effects),
            GameAction::Guess(letter) => self.guess_into(letter, &mut effects),
            GameAction::ToggleParallax => {
                if !self.screen.is_playing() {
                    self.parallax.toggle();
                    debug!(active = self.parallax.is_active(), "parallax toggled");
                }
            }
            GameAction::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                effects.push(GameEffect::ToggleFullscreen);
            }
            GameAction::Escape => {
                if self.fullscreen {
                    self.fullscreen = false;
                    effects.push(GameEffect::ToggleFullscreen);
                } else if self.screen.is_playing() {
                    self.handle_screen_event(ScreenEvent::Pause, &mut effects);
                }
            }
        }
        effects
    }

    /// Applies a guess while a round is being played; ignored anywhere else.
    pub fn guess_letter(&mut self, letter: char) -> Vec<GameEffect> {
        let mut effects = Vec::new();
        self.guess_into(letter, &mut effects);
        effects
    }

    /// Advances the clock by `dt` and runs one frame of the active screen.
    pub fn tick(&mut self, dt: Duration) -> Vec<GameEffect> {
        let mut effects = Vec::new();
        self.clock = self.clock.saturating_add(dt);

        if !self.screen.is_playing() {
            self.parallax.update();
            return effects;
        }

        let now = self.clock;
        let Some(round) = self.round.as_mut() else {
            return effects;
        };
        self.animation.update(round.body_parts_due(), dt.min(MAX_ANIMATION_DT));
        if round.check_timeout(now) {
            self.handle_screen_event(ScreenEvent::RoundLost(LossReason::TimeUp), &mut effects);
        }
        effects
    }

    pub fn start_round(&mut self, category: Category) {
        let word = pick_word(category, self.difficulty, &mut self.rng);
        self.start_round_with_word(category, word);
    }

    /// Replaces the round and its animation; the score carries over.
    pub fn start_round_with_word(&mut self, category: Category, word: &str) {
        self.round = Some(RoundState::new(
            word,
            category,
            self.difficulty,
            self.clock,
        ));
        self.animation = HangmanAnimation::new();
        info!(
            category = category.name(),
            difficulty = self.difficulty.name(),
            "round started"
        );
        debug!(word, "round word");
    }

    fn guess_into(&mut self, letter: char, effects: &mut Vec<GameEffect>) {
        if !self.screen.is_playing() {
            return;
        }
        let Some(round) = self.round.as_mut() else {
            return;
        };

        match round.guess(letter) {
            GuessOutcome::Ignored => return,
            GuessOutcome::Correct => effects.push(GameEffect::Sfx(SfxCue::Correct)),
            GuessOutcome::Wrong => effects.push(GameEffect::Sfx(SfxCue::Wrong)),
        }

        let finished = if round.is_out_of_lives() {
            Some(ScreenEvent::RoundLost(LossReason::OutOfLives))
        } else if round.is_won() {
            Some(ScreenEvent::RoundWon)
        } else {
            None
        };
        if let Some(event) = finished {
            self.handle_screen_event(event, effects);
        }
    }

    fn handle_screen_event(&mut self, event: ScreenEvent, effects: &mut Vec<GameEffect>) {
        let (next, effect) = std::mem::take(&mut self.screen).handle(event);
        self.screen = next;

        match effect {
            ScreenEffect::None => {}
            ScreenEffect::Exit => effects.push(GameEffect::Exit),
            ScreenEffect::SetDifficulty(difficulty) => self.difficulty = difficulty,
            ScreenEffect::StartRound(category) => self.start_round(category),
            ScreenEffect::RecordWin => {
                self.score.wins += 1;
                info!(
                    wins = self.score.wins,
                    losses = self.score.losses,
                    "round won"
                );
                effects.push(GameEffect::Sfx(SfxCue::Win));
            }
            ScreenEffect::RecordLoss(reason) => {
                self.score.losses += 1;
                info!(
                    ?reason,
                    wins = self.score.wins,
                    losses = self.score.losses,
                    "round lost"
                );
                effects.push(GameEffect::Sfx(SfxCue::Lose));
            }
        }
        debug!(?event, screen = ?self.screen, "screen event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(word: &str, difficulty: Difficulty) -> GameState {
        let mut state = GameState::with_seed(1);
        state.difficulty = difficulty;
        state.screen = Screen::Playing;
        state.start_round_with_word(Category::Animals, word);
        state
    }

    #[test]
    fn menus_lead_into_a_round_with_the_chosen_difficulty() {
        let mut state = GameState::with_seed(3);
        state.apply(GameAction::Screen(ScreenEvent::Play));
        state.apply(GameAction::Screen(ScreenEvent::SelectDifficulty(
            Difficulty::Medium,
        )));
        state.apply(GameAction::Screen(ScreenEvent::SelectCategory(
            Category::Sports,
        )));

        assert_eq!(state.screen, Screen::Playing);
        let round = state.round.as_ref().expect("round started");
        assert_eq!(round.difficulty(), Difficulty::Medium);
        assert_eq!(round.max_wrong(), 6);
        assert_eq!(state.time_remaining(), Some(Duration::from_secs(120)));
    }

    #[test]
    fn losing_on_lives_counts_once() {
        let mut state = playing("dog", Difficulty::Hard);
        for c in ['a', 'b', 'c', 'e'] {
            state.guess_letter(c);
        }
        assert_eq!(state.screen, Screen::Lost(LossReason::OutOfLives));
        assert_eq!(state.score.losses, 1);

        state.guess_letter('f');
        state.tick(Duration::from_secs(120));
        assert_eq!(state.score.losses, 1);
    }

    #[test]
    fn parallax_scrolls_only_off_the_playing_screen() {
        let mut state = playing("dog", Difficulty::Easy);
        let before = state.parallax.clone();
        state.tick(FRAME_DT);
        assert_eq!(state.parallax, before);

        state.apply(GameAction::Escape);
        state.tick(FRAME_DT);
        assert_ne!(state.parallax, before);
    }

    #[test]
    fn new_round_resets_round_and_animation_but_keeps_score() {
        let mut state = playing("ox", Difficulty::Easy);
        state.guess_letter('o');
        state.guess_letter('x');
        state.apply(GameAction::Screen(ScreenEvent::PlayAgain));
        state.apply(GameAction::Screen(ScreenEvent::SelectDifficulty(
            Difficulty::Easy,
        )));
        state.apply(GameAction::Screen(ScreenEvent::SelectCategory(
            Category::Fruits,
        )));

        let round = state.round.as_ref().expect("round started");
        assert!(round.guesses().is_empty());
        assert_eq!(round.wrong_count(), 0);
        assert_eq!(state.animation, HangmanAnimation::new());
        assert_eq!(state.score.wins, 1);
    }
}
