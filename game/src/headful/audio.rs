use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;
use tracing::debug;

use crate::sfx::{SfxCue, SfxPlayer};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),
}

/// Plays each cue as a sine beep on its own detached sink.
pub struct RodioSfx {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    gain: f32,
}

impl RodioSfx {
    /// `gain` scales every cue on top of its beep volume.
    pub fn new(gain: f32) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            gain: gain.clamp(0.0, 1.0),
        })
    }
}

impl SfxPlayer for RodioSfx {
    fn play(&self, cue: SfxCue) {
        let beep = cue.beep();
        let Ok(sink) = Sink::try_new(&self.handle) else {
            debug!(?cue, "no sink for cue");
            return;
        };
        sink.set_volume(self.gain);
        sink.append(
            SineWave::new(beep.frequency_hz)
                .take_duration(beep.duration)
                .amplify(beep.volume),
        );
        sink.detach();
    }
}
