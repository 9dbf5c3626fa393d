//! Sound cues
//!
//! The host owns the actual sound handles; the game only tells it which
//! handle to play, pause or rewind when a lifecycle event happens.

use crate::sim::GameEvent;

/// Named sound handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Looping background music
    Background,
    Jump,
    GameOver,
}

impl Sound {
    /// Asset name of the sound
    pub fn name(&self) -> &'static str {
        match self {
            Sound::Background => "bg",
            Sound::Jump => "jump",
            Sound::GameOver => "gameOver",
        }
    }
}

/// Audio output provided by the host
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
    fn pause(&mut self, sound: Sound);
    /// Seek back to the start
    fn rewind(&mut self, sound: Sound);
}

/// A run (re)started: stop the game-over sting and restart the music
pub fn cue_run_start<A: AudioSink + ?Sized>(audio: &mut A) {
    audio.pause(Sound::GameOver);
    audio.rewind(Sound::Background);
    audio.play(Sound::Background);
}

/// Play whatever a simulation event calls for
pub fn cue_event<A: AudioSink + ?Sized>(event: &GameEvent, audio: &mut A) {
    match event {
        GameEvent::Jumped => audio.play(Sound::Jump),
        GameEvent::GameOver { .. } => {
            audio.pause(Sound::Background);
            audio.rewind(Sound::GameOver);
            audio.play(Sound::GameOver);
        }
        GameEvent::SpeedUp { .. } => {}
    }
}

/// One recorded audio call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play(Sound),
    Pause(Sound),
    Rewind(Sound),
}

/// Sink that only remembers what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plays(&self, sound: Sound) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == AudioCall::Play(sound))
            .count()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.calls.push(AudioCall::Play(sound));
    }

    fn pause(&mut self, sound: Sound) {
        self.calls.push(AudioCall::Pause(sound));
    }

    fn rewind(&mut self, sound: Sound) {
        self.calls.push(AudioCall::Rewind(sound));
    }
}
