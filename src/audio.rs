use std::io::Write;

/// The game's two fire-and-forget sound effects
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum AudioCue {
    /// Food was eaten
    Score,
    /// The snake collided
    GameOver,
}

/// Output port for sound effects.  The simulation emits cues through this
/// trait so that it can be exercised headlessly.
pub(crate) trait AudioPort {
    fn play(&mut self, cue: AudioCue);

    /// Stop and rewind any still-playing game-over effect so a new run does
    /// not overlap it
    fn reset_game_over(&mut self);
}

/// Plays every cue as the terminal bell.  A terminal gives us exactly one
/// sound, so both cues map to it; the distinction is kept at the port for
/// adapters that can do better.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bell {
    enabled: bool,
}

impl Bell {
    pub(crate) fn new(enabled: bool) -> Bell {
        Bell { enabled }
    }
}

impl AudioPort for Bell {
    fn play(&mut self, _cue: AudioCue) {
        if self.enabled {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07").and_then(|()| stdout.flush());
        }
    }

    fn reset_game_over(&mut self) {
        // The bell is instantaneous; nothing to rewind.
    }
}

/// Test double that records every cue it is asked to play
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RecordingAudio {
    pub(crate) cues: Vec<AudioCue>,
    pub(crate) resets: usize,
}

#[cfg(test)]
impl AudioPort for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }

    fn reset_game_over(&mut self) {
        self.resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_audio_records() {
        let mut audio = RecordingAudio::default();
        audio.play(AudioCue::Score);
        audio.play(AudioCue::GameOver);
        audio.reset_game_over();
        assert_eq!(audio.cues, [AudioCue::Score, AudioCue::GameOver]);
        assert_eq!(audio.resets, 1);
    }

    #[test]
    fn disabled_bell_is_silent() {
        // Mostly a smoke test: playing through a disabled bell must not
        // touch stdout or panic.
        let mut bell = Bell::new(false);
        bell.play(AudioCue::Score);
        bell.reset_game_over();
    }
}
