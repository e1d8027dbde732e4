//! Discrete input events and the per-frame queue they are collected in.
//!
//! The window loop pushes events as they arrive; the game drains the queue once per frame, so
//! input handling is synchronous with the update step.

use std::collections::VecDeque;

use crate::ui::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Always lowercase `a..=z`.
    Letter(char),
    Escape,
    Enter,
    F11,
    Other,
}

impl Key {
    /// Builds a letter key, folding case. Anything outside `a..=z` is `Other`.
    pub fn letter(ch: char) -> Self {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() {
            Key::Letter(ch)
        } else {
            Key::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Point),
    PointerDown(Point),
    KeyDown(Key),
}

#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
    pointer: Option<Point>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        if let InputEvent::PointerMoved(p) | InputEvent::PointerDown(p) = event {
            self.pointer = Some(p);
        }
        self.events.push_back(event);
    }

    /// Takes every pending event in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Last known pointer position; survives draining.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }
}
