//! Window glue: adapts `GameState` to the engine's `GameApp` loop.

pub mod audio;
pub mod input_adapter;

use std::time::Duration;

use engine::app::{AppContext, GameApp, InputFrame};
use engine::graphics::Renderer2d;
use engine::view_tree::ViewTree;
use tracing::{debug, info};

use crate::hangman_ui::{SceneAssets, build_view, draw_screen};
use crate::settings::HangmanSettings;
use crate::sfx::{SfxCue, SfxPlayer};
use crate::state::{GameAction, GameEffect, GameState};

use self::input_adapter::key_actions;

pub struct HangmanApp {
    sfx: Box<dyn SfxPlayer>,
    assets: SceneAssets,
    settings: HangmanSettings,
}

impl HangmanApp {
    pub fn new(settings: HangmanSettings, assets: SceneAssets, sfx: Box<dyn SfxPlayer>) -> Self {
        Self {
            sfx,
            assets,
            settings,
        }
    }
}

impl GameApp for HangmanApp {
    type State = GameState;
    type Action = GameAction;
    type Effect = GameEffect;

    fn init_state(&mut self, ctx: &mut AppContext) -> GameState {
        let mut state = GameState::new(self.settings.seed);
        state.parallax.set_active(self.settings.gameplay.parallax_enabled);
        state.fullscreen = ctx.is_fullscreen();
        info!(
            seed = ?self.settings.seed,
            parallax = state.parallax.is_active(),
            fullscreen = state.fullscreen,
            "game ready"
        );
        state
    }

    fn build_view(&self, state: &GameState) -> ViewTree<GameAction> {
        build_view(state)
    }

    fn update_state(
        &mut self,
        state: &mut GameState,
        input: &InputFrame,
        actions: &[GameAction],
        dt: Duration,
    ) -> Vec<GameEffect> {
        let keys: Vec<GameAction> = key_actions(&input.events, &state.screen).collect();

        let mut effects = Vec::new();
        for action in actions {
            effects.push(GameEffect::Sfx(SfxCue::Click));
            effects.extend(state.apply(*action));
        }
        for action in keys {
            effects.extend(state.apply(action));
        }
        effects.extend(state.tick(dt));
        effects
    }

    fn render(
        &mut self,
        state: &GameState,
        view: &ViewTree<GameAction>,
        hovered: Option<u32>,
        gfx: &mut dyn Renderer2d,
    ) {
        draw_screen(gfx, state, view, hovered, &self.assets);
    }

    fn handle_effects(&mut self, effects: Vec<GameEffect>, ctx: &mut AppContext) {
        for effect in effects {
            match effect {
                GameEffect::Sfx(cue) => self.sfx.play(cue),
                GameEffect::ToggleFullscreen => ctx.toggle_fullscreen(),
                GameEffect::Exit => {
                    debug!("quit selected");
                    ctx.request_exit();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::LossReason;
    use crate::sfx::NullSfx;
    use crate::view::{Screen, ScreenEvent};
    use crate::words::{Category, Difficulty};

    fn app() -> HangmanApp {
        HangmanApp::new(
            HangmanSettings::default(),
            SceneAssets::default(),
            Box::new(NullSfx),
        )
    }

    fn hard_round() -> GameState {
        let mut state = GameState::with_seed(6);
        state.difficulty = Difficulty::Hard;
        state.screen = Screen::Playing;
        state.start_round_with_word(Category::Cars, "jeep");
        state
    }

    #[test]
    fn a_long_stall_still_runs_out_the_clock() {
        let mut state = hard_round();
        let effects = app().update_state(
            &mut state,
            &InputFrame::default(),
            &[],
            Duration::from_secs(90),
        );
        assert_eq!(state.screen, Screen::Lost(LossReason::TimeUp));
        assert_eq!(state.clock(), Duration::from_secs(90));
        assert_eq!(effects, vec![GameEffect::Sfx(SfxCue::Lose)]);
    }

    #[test]
    fn clicked_actions_play_the_click_cue_first() {
        let mut state = GameState::with_seed(6);
        let effects = app().update_state(
            &mut state,
            &InputFrame::default(),
            &[GameAction::Screen(ScreenEvent::Quit)],
            Duration::ZERO,
        );
        assert_eq!(
            effects,
            vec![GameEffect::Sfx(SfxCue::Click), GameEffect::Exit]
        );
    }
}
