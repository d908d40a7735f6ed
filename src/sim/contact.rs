//! Swing/contact resolution
//!
//! Geometric strategy: the bat is a swept line segment, the ball a point
//! sampled from the trajectory at the swing instant. Contact quality rewards
//! both proximity to the barrel and a near-horizontal bat.

use super::bat::{bat_pose_at, point_segment_distance};
use super::pitch::PitchFlightState;
use super::state::{SwingAttempt, SwingOutcome};
use crate::clamp01;
use crate::tuning::Tuning;

/// Swing progress through the fixed swing animation window
///
/// The window is anchored so that a swing at the nominal arrival time lands
/// at the end of the sweep; swinging `swing_window_ms` early lands at the
/// start.
pub fn swing_progress(swing_ts_ms: f64, arrival_ts_ms: f64, swing_window_ms: f64) -> f32 {
    clamp01(((swing_ts_ms - arrival_ts_ms + swing_window_ms) / swing_window_ms) as f32)
}

/// Contact quality in [0, 1]: 70% proximity, 30% bat levelness
pub fn contact_quality(distance: f32, radius: f32, bat_angle: f32) -> f32 {
    let distance_quality = 1.0 - distance / radius;
    let angle_quality = bat_angle.cos().abs();
    distance_quality * 0.7 + angle_quality * 0.3
}

/// Map a quality score to an outcome
pub fn classify(quality: f32, tuning: &Tuning) -> SwingOutcome {
    if quality > tuning.home_run_quality {
        SwingOutcome::HomeRun
    } else if quality > tuning.hit_quality {
        SwingOutcome::Hit
    } else {
        SwingOutcome::Foul
    }
}

/// Resolve one swing attempt against the pitch in flight
pub fn resolve_swing(
    swing: &SwingAttempt,
    flight: &PitchFlightState,
    tuning: &Tuning,
) -> SwingOutcome {
    let progress = swing_progress(
        swing.timestamp_ms,
        flight.arrival_time_ms(),
        tuning.swing_window_ms,
    );
    let pose = bat_pose_at(progress, swing.position);
    let ball = flight.position_at(swing.timestamp_ms);
    let distance = point_segment_distance(ball, pose.handle, pose.tip);

    if distance >= tuning.contact_radius {
        return SwingOutcome::Miss;
    }
    classify(contact_quality(distance, tuning.contact_radius, pose.angle), tuning)
}
