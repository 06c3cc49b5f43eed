//! Sound cue playback.

use std::io::{self, Write};
use trash_toss::core::config::AudioConfig;
use trash_toss::game::Sound;

/// Something that can play the game's sound cues.
pub trait SoundSink {
    fn play(&mut self, sound: Sound);
}

/// Rings the terminal bell.
pub struct TerminalBell {
    bell_on_correct: bool,
}

impl SoundSink for TerminalBell {
    fn play(&mut self, sound: Sound) {
        if sound == Sound::Correct && !self.bell_on_correct {
            return;
        }
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::warn!(error = %e, "bell failed");
        }
    }
}

/// Discards every cue.
pub struct MutedSink;

impl SoundSink for MutedSink {
    fn play(&mut self, _sound: Sound) {}
}

/// Pick the sink for the configured audio settings.
pub fn sink_for(config: &AudioConfig) -> Box<dyn SoundSink> {
    if config.enabled {
        Box::new(TerminalBell {
            bell_on_correct: config.bell_on_correct,
        })
    } else {
        Box::new(MutedSink)
    }
}
