//! Sound cue vocabulary
//!
//! The simulation queues cues by name; an external player (Web Audio, Howler,
//! whatever the host has) drains and plays them. Because the queue is plain
//! data, a playback failure can never reach back into game state.

use serde::{Deserialize, Serialize};

/// Named sound cues emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ball leaves the pitcher's hand
    Pitch,
    /// Bat whooshes through the zone
    Swing,
    Hit,
    HomeRun,
    Foul,
    /// Called strike on a taken pitch
    Strike,
    /// Swing and a miss
    Miss,
    /// Crowd goes wild (stacked on top of the home run cue)
    Cheer,
}

impl SoundCue {
    /// Stable event name for subscribers
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Pitch => "pitch",
            SoundCue::Swing => "swing",
            SoundCue::Hit => "hit",
            SoundCue::HomeRun => "homeRun",
            SoundCue::Foul => "foul",
            SoundCue::Strike => "strike",
            SoundCue::Miss => "miss",
            SoundCue::Cheer => "cheer",
        }
    }
}
