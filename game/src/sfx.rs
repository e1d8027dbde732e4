use std::time::Duration;

/// Shared SFX volume (0.0..=1.0) applied to every cue before the settings gain.
///
/// Used by headful clients and validated by tests.
pub const BEEP_VOLUME: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxCue {
    Correct,
    Wrong,
    Win,
    Lose,
    Click,
}

/// A plain sine beep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beep {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub volume: f32,
}

impl SfxCue {
    pub const ALL: [SfxCue; 5] = [
        SfxCue::Correct,
        SfxCue::Wrong,
        SfxCue::Win,
        SfxCue::Lose,
        SfxCue::Click,
    ];

    pub fn beep(self) -> Beep {
        let (frequency_hz, millis) = match self {
            SfxCue::Correct => (440.0, 200),
            SfxCue::Wrong => (220.0, 300),
            SfxCue::Win => (880.0, 500),
            SfxCue::Lose => (110.0, 700),
            SfxCue::Click => (660.0, 100),
        };
        Beep {
            frequency_hz,
            duration: Duration::from_millis(millis),
            volume: BEEP_VOLUME,
        }
    }
}

/// Fire-and-forget cue sink. Nothing in the game waits on playback.
pub trait SfxPlayer {
    fn play(&self, cue: SfxCue);
}

/// Used when no audio device is available or sound is muted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSfx;

impl SfxPlayer for NullSfx {
    fn play(&self, _cue: SfxCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beeps_match_the_cue_table() {
        assert_eq!(SfxCue::Correct.beep().frequency_hz, 440.0);
        assert_eq!(SfxCue::Lose.beep().duration, Duration::from_millis(700));
        assert_eq!(SfxCue::Click.beep().duration, Duration::from_millis(100));
    }

    #[test]
    fn volumes_are_in_unit_range() {
        for cue in SfxCue::ALL {
            let v = cue.beep().volume;
            assert!((0.0..=1.0).contains(&v), "{cue:?} volume {v}");
        }
    }
}
