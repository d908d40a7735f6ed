//! Sandlot - a swing-timing softball mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pitch flight, contact, at-bat state)
//! - `audio`: Sound cue vocabulary for an external player
//! - `chants`: Dugout chatter shown while batting
//! - `tuning`: Data-driven game balance
//!
//! The simulation is pure and clock-injected: every entry point takes a
//! `now_ms` timestamp, so the whole game can be driven (and tested) without
//! wall-clock delays.

pub mod audio;
pub mod chants;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use audio::SoundCue;
pub use tuning::Tuning;

/// Field geometry constants (virtual screen-pixel space)
pub mod consts {
    use glam::Vec2;

    /// Virtual playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Where the pitcher releases the ball
    pub const PITCH_RELEASE: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT * 0.25);
    /// Where the pitch crosses the plate
    pub const PLATE: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT * 0.725);

    /// Batter's anchor point; the bat handle pivots just left of it
    pub const BATTER_POS: Vec2 = Vec2::new(FIELD_WIDTH / 2.0 + 40.0, FIELD_HEIGHT * 0.725 - 5.0);
    /// Bat length, handle to tip
    pub const BAT_LENGTH: f32 = 90.0;
    /// Resting handle offset from the batter anchor
    pub const HANDLE_OFFSET_X: f32 = -20.0;
}

/// Clamp to the unit interval
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}
