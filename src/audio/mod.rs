#[cfg(feature = "sound")]
mod speaker;
#[cfg(any(feature = "sound", test))]
mod synth;
use crate::consts;
use crate::game::Signal;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

/// A one-shot sound effect
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Effect {
    Eat,
    GameOver,
}

/// Something that can make noise
pub(crate) trait AudioBackend: fmt::Debug {
    /// Start the background loop at the given volume, replacing any loop
    /// already playing
    fn start_music(&mut self, volume: f32) -> Result<(), AudioError>;

    fn stop_music(&mut self);

    /// Change the volume of the background loop, if one is playing
    fn set_music_volume(&mut self, volume: f32);

    fn play_effect(&mut self, effect: Effect, volume: f32) -> Result<(), AudioError>;
}

/// Which [`AudioBackend`] to use, as chosen in the configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Output {
    /// The speaker if available, otherwise the terminal bell
    #[default]
    Auto,
    Speaker,
    Bell,
    None,
}

impl Output {
    /// Construct the backend for this output.  Failures to open an audio
    /// device are logged, and a quieter backend is used instead.
    pub(crate) fn open(self) -> Box<dyn AudioBackend> {
        match self {
            Output::Auto | Output::Speaker => {
                #[cfg(feature = "sound")]
                match speaker::Speaker::open() {
                    Ok(sp) => return Box::new(sp),
                    Err(e) => tracing::warn!(error = %e, "Could not open audio device"),
                }
                #[cfg(not(feature = "sound"))]
                if self == Output::Speaker {
                    tracing::warn!("Speaker output requested, but sound support was not compiled in");
                }
                if self == Output::Auto {
                    Box::new(Bell::new(io::stdout()))
                } else {
                    Box::new(Silence)
                }
            }
            Output::Bell => Box::new(Bell::new(io::stdout())),
            Output::None => Box::new(Silence),
        }
    }
}

/// Volume & mute handling in front of an [`AudioBackend`].  Errors from the
/// backend are logged and otherwise ignored.
#[derive(Debug)]
pub(crate) struct Mixer {
    backend: Box<dyn AudioBackend>,
    volume: f32,
    muted: bool,
}

impl Mixer {
    pub(crate) fn new(backend: Box<dyn AudioBackend>, volume: f32, muted: bool) -> Mixer {
        Mixer {
            backend,
            volume: volume.clamp(0.0, 1.0),
            muted,
        }
    }

    pub(crate) fn volume(&self) -> f32 {
        self.volume
    }

    pub(crate) fn muted(&self) -> bool {
        self.muted
    }

    /// React to a signal from the game
    pub(crate) fn handle(&mut self, signal: Signal) {
        match signal {
            Signal::StartMusic => {
                if !self.muted {
                    let volume = self.music_volume();
                    if let Err(e) = self.backend.start_music(volume) {
                        tracing::warn!(error = %e, "Failed to play background music");
                    }
                }
            }
            Signal::StopMusic => self.backend.stop_music(),
            Signal::Eat => self.play(Effect::Eat),
            Signal::GameOver => self.play(Effect::GameOver),
        }
    }

    fn play(&mut self, effect: Effect) {
        if !self.muted {
            if let Err(e) = self.backend.play_effect(effect, self.volume) {
                tracing::warn!(error = %e, ?effect, "Failed to play sound effect");
            }
        }
    }

    pub(crate) fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        tracing::debug!(muted = self.muted, "Toggled mute");
        self.backend.set_music_volume(self.music_volume());
    }

    /// Raise or lower the volume by `delta`, staying within 0.0 to 1.0
    pub(crate) fn adjust_volume(&mut self, delta: f32) {
        // Round to avoid creeping floating-point error from repeated steps
        self.volume = ((self.volume + delta) * 100.0).round().clamp(0.0, 100.0) / 100.0;
        tracing::debug!(volume = self.volume, "Changed volume");
        self.backend.set_music_volume(self.music_volume());
    }

    fn music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume * consts::MUSIC_VOLUME_RATIO
        }
    }
}

/// Rings the terminal bell for sound effects.  There is no background
/// music.
#[derive(Debug)]
pub(crate) struct Bell<W> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub(crate) fn new(out: W) -> Bell<W> {
        Bell { out }
    }
}

impl<W: Write + fmt::Debug> AudioBackend for Bell<W> {
    fn start_music(&mut self, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_music(&mut self) {}

    fn set_music_volume(&mut self, _volume: f32) {}

    fn play_effect(&mut self, _effect: Effect, volume: f32) -> Result<(), AudioError> {
        if volume > 0.0 {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Silence;

impl AudioBackend for Silence {
    fn start_music(&mut self, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_music(&mut self) {}

    fn set_music_volume(&mut self, _volume: f32) {}

    fn play_effect(&mut self, _effect: Effect, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
}

#[derive(Debug, Error)]
pub(crate) enum AudioError {
    #[error("failed to ring terminal bell")]
    Bell(#[from] io::Error),
    #[cfg(feature = "sound")]
    #[error("failed to open audio output stream")]
    Stream(#[from] rodio::StreamError),
    #[cfg(feature = "sound")]
    #[error("failed to start audio playback")]
    Play(#[from] rodio::PlayError),
}
