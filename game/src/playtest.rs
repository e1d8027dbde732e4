use std::time::Duration;

use engine::GameLogic;

use crate::state::{FRAME_DT, GameAction, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    /// One 60 Hz frame with no input.
    Frame,
    Tick(Duration),
    Act(GameAction),
}

/// Headless driver for scripted playthroughs; effects are dropped since nothing plays them.
#[derive(Debug, Clone)]
pub struct HangmanLogic {
    seed: u64,
}

impl HangmanLogic {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GameLogic for HangmanLogic {
    type State = GameState;
    type Input = PlayInput;

    fn initial_state(&self) -> Self::State {
        GameState::with_seed(self.seed)
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        match input {
            PlayInput::Frame => {
                next.tick(FRAME_DT);
            }
            PlayInput::Tick(dt) => {
                next.tick(dt);
            }
            PlayInput::Act(action) => {
                next.apply(action);
            }
        }
        next
    }
}
