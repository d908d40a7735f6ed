//! Game state and core simulation types
//!
//! All counters live in a single owned aggregate mutated only through the
//! transition functions here; everything else sees read-only snapshots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pitch::PitchDescriptor;
use crate::tuning::Tuning;

/// Current phase of an at-bat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between plays, waiting for a pitch request
    Idle,
    /// Pitcher is winding up; ball not yet released
    WindingUp,
    /// Ball is traveling, swing window open
    PitchInFlight,
    /// Result banner showing before the next at-bat
    ShowingResult,
    /// Three outs; half-inning summary showing
    InningBreak,
}

/// What the bat did to the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingOutcome {
    Miss,
    Foul,
    Hit,
    HomeRun,
}

/// Umpire's ruling on a taken pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchCall {
    Ball,
    Strike,
}

/// The applied, display-ready result of a pitch
///
/// `Strikeout` and `Walk` replace the base result when the count threshold
/// is crossed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayResult {
    Miss,
    Foul,
    Hit,
    HomeRun,
    Ball,
    Strike,
    Strikeout,
    Walk,
}

impl PlayResult {
    pub fn label(&self) -> &'static str {
        match self {
            PlayResult::Miss | PlayResult::Strike => "Strike!",
            PlayResult::Foul => "Foul Ball!",
            PlayResult::Hit => "Hit!",
            PlayResult::HomeRun => "Home Run!",
            PlayResult::Ball => "Ball!",
            PlayResult::Strikeout => "Strikeout!",
            PlayResult::Walk => "Walk!",
        }
    }
}

/// A momentary swing event, consumed immediately by the contact resolver
#[derive(Debug, Clone, Copy)]
pub struct SwingAttempt {
    pub timestamp_ms: f64,
    /// Where the swing is anchored (batter position by default)
    pub position: Vec2,
}

/// Scoreboard for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u64,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub inning: u32,
    pub is_top_inning: bool,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            score: 0,
            balls: 0,
            strikes: 0,
            outs: 0,
            inning: 1,
            is_top_inning: true,
        }
    }
}

impl GameStats {
    /// Apply a swing outcome to the count and score
    pub fn apply_swing(&mut self, outcome: SwingOutcome, tuning: &Tuning) -> PlayResult {
        let base = match outcome {
            SwingOutcome::Miss => {
                self.strikes += 1;
                PlayResult::Miss
            }
            SwingOutcome::Foul => {
                // A foul never completes a strikeout
                if self.strikes < 2 {
                    self.strikes += 1;
                }
                PlayResult::Foul
            }
            SwingOutcome::Hit => {
                self.score += tuning.hit_runs;
                PlayResult::Hit
            }
            SwingOutcome::HomeRun => {
                self.score += tuning.home_run_runs;
                PlayResult::HomeRun
            }
        };
        self.settle_count(base)
    }

    /// Apply an umpire's call on a taken pitch
    pub fn apply_call(&mut self, call: PitchCall) -> PlayResult {
        let base = match call {
            PitchCall::Ball => {
                self.balls += 1;
                PlayResult::Ball
            }
            PitchCall::Strike => {
                self.strikes += 1;
                PlayResult::Strike
            }
        };
        self.settle_count(base)
    }

    /// Resolve a count that just crossed a threshold
    fn settle_count(&mut self, base: PlayResult) -> PlayResult {
        if self.strikes >= 3 {
            self.outs += 1;
            self.balls = 0;
            self.strikes = 0;
            return PlayResult::Strikeout;
        }
        if self.balls >= 4 {
            // Walk forces a run in this little game
            self.score += 1;
            self.balls = 0;
            self.strikes = 0;
            return PlayResult::Walk;
        }
        debug_assert!(self.strikes < 3 && self.balls < 4);
        base
    }

    /// Three outs end the half-inning
    pub fn half_inning_over(&self) -> bool {
        self.outs >= 3
    }

    /// Flip the half-inning: the inning number only advances bottom -> top
    pub fn advance_half_inning(&mut self) {
        if !self.is_top_inning {
            self.inning += 1;
        }
        self.is_top_inning = !self.is_top_inning;
        self.balls = 0;
        self.strikes = 0;
        self.outs = 0;
    }
}

/// Emitted when a half-inning ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningSummary {
    pub inning: u32,
    pub is_top_inning: bool,
    pub score: u64,
}

/// Read-only view for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub stats: GameStats,
    pub pitch: Option<PitchDescriptor>,
    pub ball: Vec2,
    pub last_result: Option<PlayResult>,
}
