//! Interaction mode state machine.

/// The single active interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Nothing in progress: before the first recording or after playback
    #[default]
    Idle,
    /// Canvas clicks append pins and a preview follows the pointer
    Recording,
    /// Pins are being replayed; every mutation is disabled
    Playing,
}

impl Mode {
    /// Check if currently idle
    pub fn is_idle(self) -> bool {
        matches!(self, Mode::Idle)
    }

    /// Check if recording
    pub fn is_recording(self) -> bool {
        matches!(self, Mode::Recording)
    }

    /// Check if playing
    pub fn is_playing(self) -> bool {
        matches!(self, Mode::Playing)
    }

    /// Whether table edits (label, reorder, delete) are allowed
    pub fn allows_edits(self) -> bool {
        !self.is_playing()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Idle => "idle",
            Mode::Recording => "recording",
            Mode::Playing => "playing",
        };
        f.write_str(name)
    }
}
