//! Bat swing geometry
//!
//! The swing is a five-segment angular sweep over swing progress: load,
//! stride, trigger, drive, follow-through. Each segment interpolates the bat
//! angle (degrees, converted at the end) and a lateral handle offset; the
//! values line up at every boundary so the sweep is continuous.

use glam::Vec2;

use crate::consts::{BAT_LENGTH, BATTER_POS, HANDLE_OFFSET_X};

/// The bat as a handle-to-tip line segment at one instant of the swing
#[derive(Debug, Clone, Copy)]
pub struct BatPose {
    pub handle: Vec2,
    pub tip: Vec2,
    /// Bat angle in radians (0 = pointing +x)
    pub angle: f32,
}

/// Bat pose at swing progress in [0, 1], anchored at `anchor`
///
/// `anchor` is normally the batter's fixed position; a pointer-driven swing
/// may supply its own.
pub fn bat_pose_at(progress: f32, anchor: Vec2) -> BatPose {
    let p = crate::clamp01(progress);

    let (angle_deg, translate_x) = if p < 0.2 {
        // Load: bat cocked back, easing down
        (45.0 - (p / 0.2) * 15.0, 0.0)
    } else if p < 0.4 {
        // Stride: level off, hands drift back
        let s = (p - 0.2) / 0.2;
        (30.0 - s * 30.0, -s * 15.0)
    } else if p < 0.5 {
        // Trigger: fast rotation through the zone
        let s = (p - 0.4) / 0.1;
        (s * 90.0, -15.0 - s * 5.0)
    } else if p < 0.7 {
        // Drive: barrel comes around
        let s = (p - 0.5) / 0.2;
        (90.0 + s * 70.0, -20.0 + s * 5.0)
    } else {
        // Follow-through
        let s = (p - 0.7) / 0.3;
        (160.0 + s * 30.0, -15.0 + s * 15.0)
    };

    let angle = angle_deg.to_radians();
    let handle = Vec2::new(anchor.x + HANDLE_OFFSET_X + translate_x, anchor.y);
    let tip = handle + Vec2::new(angle.cos(), angle.sin()) * BAT_LENGTH;
    BatPose { handle, tip, angle }
}

/// Minimum distance from `point` to the segment `a`-`b`
///
/// A zero-length segment degrades to point distance so the result is always
/// a finite number.
pub fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-6 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
