//! Data-driven game balance
//!
//! Every gameplay knob lives here so balance passes are a JSON edit, not a
//! code change. Defaults match the shipped feel.

use serde::{Deserialize, Serialize};

/// Gameplay constants for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball-to-bat distance below which contact is possible (px)
    pub contact_radius: f32,
    /// Contact quality above this is a home run
    pub home_run_quality: f32,
    /// Contact quality above this (up to the home run bar) is a hit
    pub hit_quality: f32,
    /// Length of the swing animation window (ms)
    pub swing_window_ms: f64,
    /// Pitcher windup before the ball is released (ms)
    pub windup_delay_ms: f64,
    /// Grace after nominal arrival before a taken pitch is called (ms)
    pub no_swing_grace_ms: f64,
    /// How long the result banner shows before the next at-bat (ms)
    pub result_display_ms: f64,
    /// How long the half-inning summary shows (ms)
    pub inning_break_ms: f64,
    /// Probability a taken pitch is called a ball
    pub no_swing_ball_prob: f64,
    /// Runs scored by a hit
    pub hit_runs: u64,
    /// Runs scored by a home run (bases loaded, naturally)
    pub home_run_runs: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            contact_radius: 30.0,
            home_run_quality: 0.8,
            hit_quality: 0.5,
            swing_window_ms: 400.0,
            windup_delay_ms: 500.0,
            no_swing_grace_ms: 300.0,
            result_display_ms: 2000.0,
            inning_break_ms: 3000.0,
            no_swing_ball_prob: 0.3,
            hit_runs: 1,
            home_run_runs: 4,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
