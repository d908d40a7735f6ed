//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Clock-injected only (every entry point takes `now_ms`)
//! - Seeded RNG only
//! - No rendering, audio playback, or platform dependencies

pub mod bat;
pub mod contact;
pub mod pitch;
pub mod session;
pub mod state;
pub mod trajectory;

pub use bat::{BatPose, bat_pose_at, point_segment_distance};
pub use contact::{classify, contact_quality, resolve_swing, swing_progress};
pub use pitch::{PitchDescriptor, PitchFlightState, PitchKind, generate_pitch};
pub use session::GameSession;
pub use state::{
    GamePhase, GameStats, InningSummary, PitchCall, PlayResult, Snapshot, SwingAttempt,
    SwingOutcome,
};
pub use trajectory::position_at;
