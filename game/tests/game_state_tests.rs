use game::round::LossReason;
use game::sfx::SfxCue;
use game::state::{FRAME_DT, GameAction, GameEffect, GameState};
use game::view::{Screen, ScreenEvent};
use game::words::{Category, Difficulty};

fn in_round(word: &str, difficulty: Difficulty) -> GameState {
    let mut state = GameState::with_seed(1);
    state.apply(GameAction::Screen(ScreenEvent::Play));
    state.apply(GameAction::Screen(ScreenEvent::SelectDifficulty(difficulty)));
    state.apply(GameAction::Screen(ScreenEvent::SelectCategory(
        Category::Fruits,
    )));
    state.start_round_with_word(Category::Fruits, word);
    state
}

#[test]
fn quit_from_the_main_menu_exits() {
    let mut state = GameState::with_seed(0);
    assert_eq!(
        state.apply(GameAction::Screen(ScreenEvent::Quit)),
        vec![GameEffect::Exit]
    );
}

#[test]
fn winning_guess_plays_correct_then_win() {
    let mut state = in_round("kiwi", Difficulty::Medium);
    assert_eq!(
        state.apply(GameAction::Guess('k')),
        vec![GameEffect::Sfx(SfxCue::Correct)]
    );
    state.apply(GameAction::Guess('i'));
    assert_eq!(
        state.apply(GameAction::Guess('w')),
        vec![
            GameEffect::Sfx(SfxCue::Correct),
            GameEffect::Sfx(SfxCue::Win)
        ]
    );
    assert_eq!(state.screen, Screen::Won);
}

#[test]
fn last_life_plays_wrong_then_lose() {
    let mut state = in_round("kiwi", Difficulty::Hard);
    for letter in ['a', 'b', 'c'] {
        assert_eq!(
            state.apply(GameAction::Guess(letter)),
            vec![GameEffect::Sfx(SfxCue::Wrong)]
        );
    }
    assert_eq!(
        state.apply(GameAction::Guess('d')),
        vec![
            GameEffect::Sfx(SfxCue::Wrong),
            GameEffect::Sfx(SfxCue::Lose)
        ]
    );
    assert_eq!(state.screen, Screen::Lost(LossReason::OutOfLives));
    assert_eq!(state.score.losses, 1);
}

#[test]
fn escape_leaves_fullscreen_before_pausing() {
    let mut state = in_round("kiwi", Difficulty::Easy);
    assert_eq!(
        state.apply(GameAction::ToggleFullscreen),
        vec![GameEffect::ToggleFullscreen]
    );
    assert!(state.fullscreen);

    assert_eq!(
        state.apply(GameAction::Escape),
        vec![GameEffect::ToggleFullscreen]
    );
    assert!(!state.fullscreen);
    assert_eq!(state.screen, Screen::Playing);

    assert!(state.apply(GameAction::Escape).is_empty());
    assert!(state.screen.is_paused());
}

#[test]
fn guesses_are_ignored_while_paused() {
    let mut state = in_round("kiwi", Difficulty::Easy);
    state.apply(GameAction::Screen(ScreenEvent::Pause));
    assert!(state.apply(GameAction::Guess('k')).is_empty());
    let round = state.round.as_ref().expect("round");
    assert!(round.guesses().is_empty());
}

#[test]
fn parallax_toggles_only_outside_rounds() {
    let mut state = GameState::with_seed(2);
    assert!(state.parallax.is_active());
    state.apply(GameAction::ToggleParallax);
    assert!(!state.parallax.is_active());

    let mut state = in_round("kiwi", Difficulty::Easy);
    state.apply(GameAction::ToggleParallax);
    assert!(state.parallax.is_active());
}

#[test]
fn scenery_freezes_during_a_round() {
    let mut state = in_round("kiwi", Difficulty::Easy);
    let before: Vec<f32> = state.parallax.elements().iter().map(|e| e.x).collect();
    for _ in 0..30 {
        state.tick(FRAME_DT);
    }
    let after: Vec<f32> = state.parallax.elements().iter().map(|e| e.x).collect();
    assert_eq!(before, after);
}

#[test]
fn wrong_guess_starts_revealing_a_body_part() {
    let mut state = in_round("kiwi", Difficulty::Medium);
    state.apply(GameAction::Guess('z'));
    state.tick(FRAME_DT);
    // Medium: one miss of six is one part due, the head.
    assert_eq!(state.animation.revealing(), Some(4));
    for _ in 0..60 {
        state.tick(FRAME_DT);
    }
    assert!(state.animation.part(4).complete);
    assert!(!state.animation.part(5).complete);
}
