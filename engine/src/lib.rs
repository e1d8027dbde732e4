pub mod app;
pub mod canvas;
pub mod font;
pub mod graphics;
pub mod image;
pub mod input;
pub mod pixels_renderer;
pub mod recording;
pub mod surface;
pub mod ui;
pub mod view_tree;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
}

/// Every state a run has passed through, with a cursor that can be moved back and forth.
#[derive(Debug)]
pub struct TimeMachine<State> {
    states: Vec<State>,
    frame: usize,
}

impl<State> TimeMachine<State> {
    pub fn new(initial_state: State) -> Self {
        Self {
            states: vec![initial_state],
            frame: 0,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self) -> &State {
        &self.states[self.frame]
    }

    pub fn state_at(&self, frame: usize) -> Option<&State> {
        self.states.get(frame)
    }

    pub fn history(&self) -> &[State] {
        &self.states
    }

    pub fn rewind(&mut self, frames: usize) -> usize {
        self.frame = self.frame.saturating_sub(frames);
        self.frame
    }

    pub fn forward(&mut self, frames: usize) -> usize {
        let max_frame = self.states.len().saturating_sub(1);
        self.frame = (self.frame + frames).min(max_frame);
        self.frame
    }

    /// Appends `state` after the cursor, dropping any states that were ahead of it.
    pub fn record(&mut self, state: State) -> usize {
        if self.frame + 1 < self.states.len() {
            self.states.truncate(self.frame + 1);
        }
        self.states.push(state);
        self.frame += 1;
        self.frame
    }
}

/// A deterministic game step: the same state and input always produce the same next state.
pub trait GameLogic {
    type State;
    type Input;

    fn initial_state(&self) -> Self::State;
    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State;
}

/// Drives a `GameLogic` without a window, keeping the full state history.
#[derive(Debug)]
pub struct HeadlessRunner<G: GameLogic> {
    game: G,
    timemachine: TimeMachine<G::State>,
}

impl<G: GameLogic> HeadlessRunner<G> {
    pub fn new(game: G) -> Self {
        let initial_state = game.initial_state();
        Self {
            game,
            timemachine: TimeMachine::new(initial_state),
        }
    }

    pub fn frame(&self) -> usize {
        self.timemachine.frame()
    }

    pub fn state(&self) -> &G::State {
        self.timemachine.state()
    }

    pub fn history(&self) -> &[G::State] {
        self.timemachine.history()
    }

    pub fn timemachine(&self) -> &TimeMachine<G::State> {
        &self.timemachine
    }

    pub fn step(&mut self, input: G::Input) -> usize {
        let next_state = self.game.step(self.timemachine.state(), input);
        self.timemachine.record(next_state)
    }

    pub fn run<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = G::Input>,
    {
        let mut last_frame = self.frame();
        for input in inputs {
            last_frame = self.step(input);
        }
        last_frame
    }

    /// Feeds the same input `frames` times.
    pub fn repeat(&mut self, input: G::Input, frames: usize) -> usize
    where
        G::Input: Clone,
    {
        self.run(std::iter::repeat_n(input, frames))
    }

    pub fn rewind(&mut self, frames: usize) -> usize {
        self.timemachine.rewind(frames)
    }

    pub fn forward(&mut self, frames: usize) -> usize {
        self.timemachine.forward(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter;

    impl GameLogic for Counter {
        type State = u32;
        type Input = u32;

        fn initial_state(&self) -> Self::State {
            0
        }

        fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
            state + input
        }
    }

    #[test]
    fn recording_after_rewind_drops_the_old_future() {
        let mut tm = TimeMachine::new('a');
        tm.record('b');
        tm.record('c');
        tm.rewind(2);
        assert_eq!(tm.state(), &'a');

        tm.record('z');
        assert_eq!(tm.history(), &['a', 'z']);
        assert_eq!(tm.state_at(5), None);
    }

    #[test]
    fn runner_repeat_steps_once_per_frame() {
        let mut runner = HeadlessRunner::new(Counter);
        assert_eq!(runner.repeat(2, 5), 5);
        assert_eq!(runner.state(), &10);
        assert_eq!(runner.history().len(), 6);

        runner.rewind(3);
        assert_eq!(runner.state(), &4);
        runner.forward(99);
        assert_eq!(runner.state(), &10);
    }
}
