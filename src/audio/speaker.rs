use super::{synth, AudioBackend, AudioError, Effect};
use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink, Source};
use std::fmt;

/// Plays synthesized music & effects on the default audio output device
pub(crate) struct Speaker {
    // The stream stops playing when dropped, so it has to be kept around.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Option<Sink>,
}

impl Speaker {
    pub(crate) fn open() -> Result<Speaker, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Speaker {
            _stream: stream,
            handle,
            music: None,
        })
    }
}

impl AudioBackend for Speaker {
    fn start_music(&mut self, volume: f32) -> Result<(), AudioError> {
        self.stop_music();
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(volume);
        sink.append(SamplesBuffer::new(1, synth::SAMPLE_RATE, synth::music()).repeat_infinite());
        self.music = Some(sink);
        Ok(())
    }

    fn stop_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }

    fn set_music_volume(&mut self, volume: f32) {
        if let Some(sink) = self.music.as_ref() {
            sink.set_volume(volume);
        }
    }

    fn play_effect(&mut self, effect: Effect, volume: f32) -> Result<(), AudioError> {
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(volume);
        sink.append(SamplesBuffer::new(1, synth::SAMPLE_RATE, synth::effect(effect)));
        sink.detach();
        Ok(())
    }
}

impl fmt::Debug for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speaker")
            .field("music_playing", &self.music.is_some())
            .finish_non_exhaustive()
    }
}
