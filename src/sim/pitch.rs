//! Pitch generation and the in-flight pitch record

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::trajectory::position_at;

/// The three pitches in the repertoire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchKind {
    Fastball,
    Curveball,
    Changeup,
}

impl PitchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchKind::Fastball => "fastball",
            PitchKind::Curveball => "curveball",
            PitchKind::Changeup => "changeup",
        }
    }

    /// Speed range for this kind (virtual mph)
    pub fn speed_range(&self) -> RangeInclusive<f32> {
        match self {
            PitchKind::Fastball => 80.0..=100.0,
            PitchKind::Curveball => 60.0..=75.0,
            PitchKind::Changeup => 50.0..=65.0,
        }
    }

    /// Curve (break magnitude) range for this kind
    pub fn curve_range(&self) -> RangeInclusive<f32> {
        match self {
            PitchKind::Fastball => 0.0..=10.0,
            PitchKind::Curveball => 30.0..=50.0,
            PitchKind::Changeup => 10.0..=30.0,
        }
    }
}

/// A pitch as thrown - immutable once generated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchDescriptor {
    pub kind: PitchKind,
    pub speed: f32,
    pub curve: f32,
}

impl PitchDescriptor {
    /// Flight time from release to the plate
    ///
    /// `2000 - speed * 10` ms: a 100-speed fastball arrives in 1000 ms, a
    /// 50-speed changeup floats in over 1500 ms.
    pub fn flight_duration_ms(&self) -> f64 {
        2000.0 - f64::from(self.speed) * 10.0
    }
}

/// Generate a random pitch: uniform kind, then kind-specific uniform ranges
pub fn generate_pitch<R: Rng + ?Sized>(rng: &mut R) -> PitchDescriptor {
    let kind = match rng.random_range(0..3) {
        0 => PitchKind::Fastball,
        1 => PitchKind::Curveball,
        _ => PitchKind::Changeup,
    };
    PitchDescriptor {
        kind,
        speed: rng.random_range(kind.speed_range()),
        curve: rng.random_range(kind.curve_range()),
    }
}

/// A pitch in the air
///
/// Exists only between release and resolution; progress is derived from the
/// caller's clock, so the same flight can be sampled at any instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PitchFlightState {
    pub descriptor: PitchDescriptor,
    pub start: Vec2,
    pub end: Vec2,
    pub start_time_ms: f64,
    pub duration_ms: f64,
}

impl PitchFlightState {
    pub fn begin(descriptor: PitchDescriptor, start: Vec2, end: Vec2, now_ms: f64) -> Self {
        Self {
            descriptor,
            start,
            end,
            start_time_ms: now_ms,
            duration_ms: descriptor.flight_duration_ms(),
        }
    }

    /// When the ball nominally crosses the plate
    pub fn arrival_time_ms(&self) -> f64 {
        self.start_time_ms + self.duration_ms
    }

    /// Elapsed fraction of the flight, clamped to [0, 1]
    pub fn progress_at(&self, now_ms: f64) -> f32 {
        crate::clamp01(((now_ms - self.start_time_ms) / self.duration_ms) as f32)
    }

    /// Ball position at the given instant
    pub fn position_at(&self, now_ms: f64) -> Vec2 {
        position_at(self.progress_at(now_ms), &self.descriptor, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generated_pitches_stay_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let p = generate_pitch(&mut rng);
            assert!(p.kind.speed_range().contains(&p.speed), "{p:?}");
            assert!(p.kind.curve_range().contains(&p.curve), "{p:?}");
            seen[match p.kind {
                PitchKind::Fastball => 0,
                PitchKind::Curveball => 1,
                PitchKind::Changeup => 2,
            }] = true;
        }
        assert!(seen.iter().all(|&s| s), "all kinds should appear in 500 draws");
    }

    #[test]
    fn test_flight_duration_bounds() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let d = generate_pitch(&mut rng).flight_duration_ms();
            assert!((1000.0..=1500.0).contains(&d), "duration {d}");
        }
    }

    #[test]
    fn test_flight_progress_clamps() {
        let pitch = PitchDescriptor {
            kind: PitchKind::Fastball,
            speed: 100.0,
            curve: 0.0,
        };
        let flight = PitchFlightState::begin(pitch, Vec2::ZERO, Vec2::new(0.0, 100.0), 1000.0);
        assert_eq!(flight.duration_ms, 1000.0);
        assert_eq!(flight.progress_at(500.0), 0.0);
        assert_eq!(flight.progress_at(1500.0), 0.5);
        assert_eq!(flight.progress_at(9999.0), 1.0);
        assert_eq!(flight.arrival_time_ms(), 2000.0);
    }
}
