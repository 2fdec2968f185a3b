//! Pure state behind the two HUD controls. The front-ends own the
//! platform calls; this keeps the toggle logic testable.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullscreenState {
    active: bool,
}

impl FullscreenState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sync from a platform fullscreen-change notification.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Flip the desired state; returns the new value the platform should
    /// be asked for. A rejected request is reported back via `set_active`.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn label(&self) -> &'static str {
        if self.active {
            "Exit Fullscreen"
        } else {
            "Enter Fullscreen"
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    playing: bool,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn label(&self) -> &'static str {
        if self.playing {
            "Pause music"
        } else {
            "Play music"
        }
    }
}
