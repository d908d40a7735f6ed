//! Parametric pitch trajectory
//!
//! A pitch path is a straight lerp from release point to plate plus a
//! sinusoidal break that peaks mid-flight and vanishes at both endpoints,
//! so the ball always leaves exactly from `start` and arrives exactly at
//! `end` no matter how much it curves.

use glam::Vec2;

use super::pitch::{PitchDescriptor, PitchKind};
use crate::clamp01;

/// Pixels of break contributed by one unit of full-strength curve factor
const BREAK_SCALE: f32 = 30.0;

/// Ball position at `progress` in [0, 1] along the pitch path
///
/// Curveballs break laterally at full strength with a flipped sign; fastballs
/// and changeups get a half-strength break the other way. The vertical bulge
/// is common to all kinds. Pure function, safe to sample at any rate.
pub fn position_at(progress: f32, pitch: &PitchDescriptor, start: Vec2, end: Vec2) -> Vec2 {
    let t = clamp01(progress);
    let base = start.lerp(end, t);

    // sin(t*pi) is zero at both endpoints, maximal at t = 0.5
    let arc = (t * std::f32::consts::PI).sin();

    let (lateral_factor, dir) = match pitch.kind {
        PitchKind::Curveball => (pitch.curve / 30.0, 1.0),
        PitchKind::Fastball | PitchKind::Changeup => (pitch.curve / 60.0, -1.0),
    };
    let vertical_factor = pitch.curve / 40.0;

    let lateral = arc * dir * lateral_factor * BREAK_SCALE;
    let drop = arc * vertical_factor * BREAK_SCALE;

    Vec2::new(base.x + lateral, base.y + drop)
}
