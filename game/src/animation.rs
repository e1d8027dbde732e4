//! Frame-by-frame state for the gallows figure: part reveals and the pendulum swing.

use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::round::BODY_PARTS;

/// Scaffold segments (base, pole, top beam, rope); always drawn in full.
pub const SCAFFOLD_PARTS: usize = 4;
pub const TOTAL_PARTS: usize = SCAFFOLD_PARTS + BODY_PARTS;

/// Reveal progress added per frame; a segment takes 50 frames.
pub const REVEAL_STEP: f32 = 0.02;
const REVEAL_EPSILON: f32 = 1e-4;

pub const SWING_MAX_ANGLE: f32 = PI / 6.0;
pub const SWING_DAMPING: f32 = 1.5;
pub const SWING_PERIOD_SECS: f32 = 3.0;
pub const SWING_OMEGA: f32 = 4.0;
/// The swing stops once the damping envelope falls below this.
pub const SWING_STOP_ENVELOPE: f32 = 0.05;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartAnimation {
    pub complete: bool,
    pub progress: f32,
}

impl PartAnimation {
    fn done() -> Self {
        Self {
            complete: true,
            progress: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PendulumSwing {
    angle: f32,
    time: f32,
    swinging: bool,
}

impl PendulumSwing {
    pub fn envelope_at(t: f32) -> f32 {
        (-SWING_DAMPING * t / SWING_PERIOD_SECS).exp()
    }

    pub fn angle_at(t: f32) -> f32 {
        SWING_MAX_ANGLE * Self::envelope_at(t) * (SWING_OMEGA * t).cos()
    }

    pub fn start(&mut self) {
        self.swinging = true;
        self.time = 0.0;
        self.angle = SWING_MAX_ANGLE;
    }

    pub fn update(&mut self, dt: Duration) {
        if !self.swinging {
            return;
        }
        self.time += dt.as_secs_f32();
        if Self::envelope_at(self.time) < SWING_STOP_ENVELOPE {
            self.swinging = false;
            self.angle = 0.0;
        } else {
            self.angle = Self::angle_at(self.time);
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_swinging(&self) -> bool {
        self.swinging
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HangmanAnimation {
    parts: [PartAnimation; TOTAL_PARTS],
    revealing: Option<usize>,
    swing: PendulumSwing,
    /// Due-part count the last swing was started for.
    swung_for: usize,
}

impl Default for HangmanAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl HangmanAnimation {
    pub fn new() -> Self {
        let mut parts = [PartAnimation::default(); TOTAL_PARTS];
        for part in parts.iter_mut().take(SCAFFOLD_PARTS) {
            *part = PartAnimation::done();
        }
        Self {
            parts,
            revealing: None,
            swing: PendulumSwing::default(),
            swung_for: 0,
        }
    }

    pub fn part(&self, index: usize) -> PartAnimation {
        self.parts[index]
    }

    pub fn parts(&self) -> &[PartAnimation; TOTAL_PARTS] {
        &self.parts
    }

    pub fn revealing(&self) -> Option<usize> {
        self.revealing
    }

    pub fn swing(&self) -> &PendulumSwing {
        &self.swing
    }

    /// Advances one frame with `due` body parts owed by the round.
    pub fn update(&mut self, due: usize, dt: Duration) {
        let due = due.min(BODY_PARTS);

        if self.revealing.is_none() {
            self.revealing = (SCAFFOLD_PARTS..SCAFFOLD_PARTS + due).find(|&i| !self.parts[i].complete);
        }
        if let Some(index) = self.revealing {
            let part = &mut self.parts[index];
            part.progress += REVEAL_STEP;
            if part.progress >= 1.0 - REVEAL_EPSILON {
                *part = PartAnimation::done();
                self.revealing = None;
            }
        }

        self.swing.update(dt);

        if due > self.swung_for && self.all_due_complete(due) {
            self.swing.start();
            self.swung_for = due;
        }
    }

    pub fn all_due_complete(&self, due: usize) -> bool {
        let due = due.min(BODY_PARTS);
        self.parts[SCAFFOLD_PARTS..SCAFFOLD_PARTS + due]
            .iter()
            .all(|p| p.complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[test]
    fn scaffold_starts_complete_and_body_hidden() {
        let anim = HangmanAnimation::new();
        for i in 0..SCAFFOLD_PARTS {
            assert!(anim.part(i).complete);
        }
        for i in SCAFFOLD_PARTS..TOTAL_PARTS {
            assert_eq!(anim.part(i), PartAnimation::default());
        }
    }

    #[test]
    fn reveal_takes_fifty_frames() {
        let mut anim = HangmanAnimation::new();
        for _ in 0..49 {
            anim.update(1, FRAME);
        }
        assert!(!anim.part(SCAFFOLD_PARTS).complete);
        assert_eq!(anim.revealing(), Some(SCAFFOLD_PARTS));

        anim.update(1, FRAME);
        assert!(anim.part(SCAFFOLD_PARTS).complete);
        assert_eq!(anim.revealing(), None);
    }

    #[test]
    fn parts_reveal_one_at_a_time() {
        let mut anim = HangmanAnimation::new();
        anim.update(2, FRAME);
        assert!(anim.part(SCAFFOLD_PARTS).progress > 0.0);
        assert_eq!(anim.part(SCAFFOLD_PARTS + 1).progress, 0.0);
    }

    #[test]
    fn swing_starts_after_due_parts_finish() {
        let mut anim = HangmanAnimation::new();
        for _ in 0..49 {
            anim.update(1, FRAME);
        }
        assert!(!anim.swing().is_swinging());
        anim.update(1, FRAME);
        assert!(anim.swing().is_swinging());
        assert_eq!(anim.swing().angle(), SWING_MAX_ANGLE);
    }

    #[test]
    fn no_swing_without_due_parts() {
        let mut anim = HangmanAnimation::new();
        for _ in 0..10 {
            anim.update(0, FRAME);
        }
        assert!(!anim.swing().is_swinging());
    }

    #[test]
    fn pendulum_starts_at_thirty_degrees() {
        assert!((PendulumSwing::angle_at(0.0) - PI / 6.0).abs() < 1e-6);
    }

    #[test]
    fn pendulum_stops_and_pins_to_zero() {
        let mut swing = PendulumSwing::default();
        swing.start();
        // Envelope drops below 0.05 after ln(20) * 3 / 1.5 ≈ 5.99 s.
        for _ in 0..400 {
            swing.update(FRAME);
        }
        assert!(!swing.is_swinging());
        assert_eq!(swing.angle(), 0.0);

        let mut early = PendulumSwing::default();
        early.start();
        early.update(Duration::from_secs(5));
        assert!(early.is_swinging());
    }
}
