//! At-bat orchestration
//!
//! A `GameSession` is the single owner of all mutable game state. It is
//! driven entirely by the caller's clock: discrete inputs (`tap`, `swing`)
//! and a periodic `advance(now_ms)` that fires due phase timers. Timers are
//! fire-and-forget; each one carries the pitch sequence number it was
//! scheduled under and is dropped silently if the world has moved on.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::contact::resolve_swing;
use super::pitch::{PitchDescriptor, PitchFlightState, generate_pitch};
use super::state::{
    GamePhase, GameStats, InningSummary, PitchCall, PlayResult, Snapshot, SwingAttempt,
    SwingOutcome,
};
use crate::audio::SoundCue;
use crate::consts::{BATTER_POS, PITCH_RELEASE, PLATE};
use crate::tuning::Tuning;

/// Deferred phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    /// Windup done; ball leaves the pitcher's hand
    ReleaseBall,
    /// Pitch crossed the plate untouched; umpire makes the call
    CallTakenPitch,
    /// Result banner done; set up the next at-bat
    ClearResult,
    /// Half-inning summary done; flip sides
    EndInningBreak,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due_ms: f64,
    action: TimerAction,
    /// Pitch the timer was scheduled under; stale timers are no-ops
    pitch_seq: u64,
}

/// One local game session
pub struct GameSession {
    seed: u64,
    rng: Pcg32,
    tuning: Tuning,
    phase: GamePhase,
    stats: GameStats,
    /// Bumped per pitch request; guards every scheduled timer
    pitch_seq: u64,
    /// Generated pitch waiting out the windup
    pending_pitch: Option<PitchDescriptor>,
    flight: Option<PitchFlightState>,
    /// Last known ball position for phases with no flight
    ball: Vec2,
    last_result: Option<PlayResult>,
    last_summary: Option<InningSummary>,
    timers: Vec<Timer>,
    cues: Vec<SoundCue>,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Idle,
            stats: GameStats::default(),
            pitch_seq: 0,
            pending_pitch: None,
            flight: None,
            ball: PITCH_RELEASE,
            last_result: None,
            last_summary: None,
            timers: Vec::new(),
            cues: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn flight(&self) -> Option<&PitchFlightState> {
        self.flight.as_ref()
    }

    pub fn last_result(&self) -> Option<PlayResult> {
        self.last_result
    }

    pub fn last_inning_summary(&self) -> Option<InningSummary> {
        self.last_summary
    }

    /// View for the presentation layer, with the ball sampled at `now_ms`
    pub fn snapshot(&self, now_ms: f64) -> Snapshot {
        let ball = self
            .flight
            .as_ref()
            .map(|f| f.position_at(now_ms))
            .unwrap_or(self.ball);
        Snapshot {
            phase: self.phase,
            stats: self.stats,
            pitch: self.flight.map(|f| f.descriptor).or(self.pending_pitch),
            ball,
            last_result: self.last_result,
        }
    }

    /// Take all queued sound cues
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    /// Fire every timer due by `now_ms`, earliest first
    pub fn advance(&mut self, now_ms: f64) {
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= now_ms)
                .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms))
                .map(|(i, _)| i);
            let Some(i) = next else { break };
            let timer = self.timers.remove(i);
            self.fire(timer);
        }
    }

    /// Ask the pitcher for the next pitch; only valid between plays
    pub fn request_pitch(&mut self, now_ms: f64) {
        if self.phase != GamePhase::Idle {
            log::debug!("pitch request ignored in {:?}", self.phase);
            return;
        }
        let pitch = generate_pitch(&mut self.rng);
        log::info!(
            "winding up: {} speed {:.0} curve {:.0}",
            pitch.kind.as_str(),
            pitch.speed,
            pitch.curve
        );
        self.pitch_seq += 1;
        self.pending_pitch = Some(pitch);
        self.phase = GamePhase::WindingUp;
        self.schedule(TimerAction::ReleaseBall, now_ms + self.tuning.windup_delay_ms);
    }

    /// Swing at the current pitch, anchored at the batter's box
    pub fn swing(&mut self, now_ms: f64) {
        self.swing_at(now_ms, BATTER_POS);
    }

    /// Swing with an explicit anchor (pointer-driven batting)
    pub fn swing_at(&mut self, now_ms: f64, position: Vec2) {
        if self.phase != GamePhase::PitchInFlight {
            log::debug!("swing ignored in {:?}", self.phase);
            return;
        }
        let Some(flight) = self.flight.take() else {
            return;
        };
        self.cues.push(SoundCue::Swing);

        let attempt = SwingAttempt {
            timestamp_ms: now_ms,
            position,
        };
        let outcome = resolve_swing(&attempt, &flight, &self.tuning);
        // Freeze the ball where the swing met (or missed) it
        self.ball = flight.position_at(now_ms);
        self.cue_for_swing(outcome);
        let result = self.stats.apply_swing(outcome, &self.tuning);
        self.finish_play(result, now_ms);
    }

    /// Context-sensitive primary input: pitch, swing, or skip the banner
    pub fn tap(&mut self, now_ms: f64) {
        match self.phase {
            GamePhase::Idle => self.request_pitch(now_ms),
            GamePhase::PitchInFlight => self.swing(now_ms),
            GamePhase::ShowingResult => self.start_new_at_bat(),
            _ => log::debug!("tap ignored in {:?}", self.phase),
        }
    }

    fn schedule(&mut self, action: TimerAction, due_ms: f64) {
        self.timers.push(Timer {
            due_ms,
            action,
            pitch_seq: self.pitch_seq,
        });
    }

    fn fire(&mut self, timer: Timer) {
        if timer.pitch_seq != self.pitch_seq {
            log::debug!("dropping stale {:?} timer", timer.action);
            return;
        }
        match timer.action {
            TimerAction::ReleaseBall => {
                if self.phase != GamePhase::WindingUp {
                    return;
                }
                let Some(pitch) = self.pending_pitch.take() else {
                    return;
                };
                // Anchor flight timing to the scheduled release instant so a
                // late `advance` call doesn't stretch the pitch
                let flight = PitchFlightState::begin(pitch, PITCH_RELEASE, PLATE, timer.due_ms);
                self.schedule(
                    TimerAction::CallTakenPitch,
                    flight.arrival_time_ms() + self.tuning.no_swing_grace_ms,
                );
                self.flight = Some(flight);
                self.phase = GamePhase::PitchInFlight;
                self.cues.push(SoundCue::Pitch);
            }
            TimerAction::CallTakenPitch => {
                if self.phase != GamePhase::PitchInFlight {
                    return;
                }
                let Some(flight) = self.flight.take() else {
                    return;
                };
                self.ball = flight.position_at(flight.arrival_time_ms());
                let call = if self.rng.random_bool(self.tuning.no_swing_ball_prob) {
                    PitchCall::Ball
                } else {
                    self.cues.push(SoundCue::Strike);
                    PitchCall::Strike
                };
                let result = self.stats.apply_call(call);
                self.finish_play(result, timer.due_ms);
            }
            TimerAction::ClearResult => {
                if self.phase != GamePhase::ShowingResult {
                    return;
                }
                self.start_new_at_bat();
            }
            TimerAction::EndInningBreak => {
                if self.phase != GamePhase::InningBreak {
                    return;
                }
                self.stats.advance_half_inning();
                self.start_new_at_bat();
            }
        }
    }

    fn cue_for_swing(&mut self, outcome: SwingOutcome) {
        match outcome {
            SwingOutcome::Miss => self.cues.push(SoundCue::Miss),
            SwingOutcome::Foul => self.cues.push(SoundCue::Foul),
            SwingOutcome::Hit => self.cues.push(SoundCue::Hit),
            SwingOutcome::HomeRun => {
                self.cues.push(SoundCue::HomeRun);
                self.cues.push(SoundCue::Cheer);
            }
        }
    }

    /// Record the result and park in the matching display phase
    fn finish_play(&mut self, result: PlayResult, now_ms: f64) {
        log::info!("{} ({:?})", result.label(), self.stats);
        self.last_result = Some(result);
        if self.stats.half_inning_over() {
            let summary = InningSummary {
                inning: self.stats.inning,
                is_top_inning: self.stats.is_top_inning,
                score: self.stats.score,
            };
            log::info!(
                "end of the {} of inning {}, score {}",
                if summary.is_top_inning { "top" } else { "bottom" },
                summary.inning,
                summary.score
            );
            self.last_summary = Some(summary);
            self.phase = GamePhase::InningBreak;
            self.schedule(TimerAction::EndInningBreak, now_ms + self.tuning.inning_break_ms);
        } else {
            self.phase = GamePhase::ShowingResult;
            self.schedule(TimerAction::ClearResult, now_ms + self.tuning.result_display_ms);
        }
    }

    /// Reset the play area for the next pitch; safe to hit more than once
    fn start_new_at_bat(&mut self) {
        self.flight = None;
        self.pending_pitch = None;
        self.ball = PITCH_RELEASE;
        self.last_result = None;
        self.phase = GamePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Swinging right at release guarantees a miss: the ball is still at the
    /// release point, far outside the contact radius.
    fn pitch_and_whiff(session: &mut GameSession, now: &mut f64) {
        session.tap(*now);
        assert_eq!(session.phase(), GamePhase::WindingUp);
        *now += session.tuning().windup_delay_ms;
        session.advance(*now);
        assert_eq!(session.phase(), GamePhase::PitchInFlight);
        *now += 1.0;
        session.swing(*now);
    }

    #[test]
    fn test_taken_pitch_lifecycle() {
        let mut s = GameSession::new(1);
        s.tap(0.0);
        assert_eq!(s.phase(), GamePhase::WindingUp);

        s.advance(499.0);
        assert_eq!(s.phase(), GamePhase::WindingUp, "windup not done yet");
        s.advance(500.0);
        assert_eq!(s.phase(), GamePhase::PitchInFlight);
        assert!(s.drain_cues().contains(&SoundCue::Pitch));

        let arrival = s.flight().unwrap().arrival_time_ms();
        s.advance(arrival + 299.0);
        assert_eq!(s.phase(), GamePhase::PitchInFlight, "inside the grace window");

        s.advance(arrival + 300.0);
        assert_eq!(s.phase(), GamePhase::ShowingResult);
        let stats = s.stats();
        assert_eq!(stats.balls + stats.strikes, 1, "one call applied");
        assert!(matches!(
            s.last_result(),
            Some(PlayResult::Ball | PlayResult::Strike)
        ));

        s.advance(arrival + 300.0 + 2000.0);
        assert_eq!(s.phase(), GamePhase::Idle);
        assert_eq!(s.last_result(), None);
    }

    #[test]
    fn test_swing_outside_the_window_is_a_noop() {
        let mut s = GameSession::new(2);
        let before = s.snapshot(100.0);
        s.swing(100.0);
        s.advance(100.0);
        let after = s.snapshot(100.0);
        assert_eq!(before, after);
        assert_eq!(*s.stats(), GameStats::default());
    }

    #[test]
    fn test_swing_during_windup_is_a_noop() {
        let mut s = GameSession::new(2);
        s.tap(0.0);
        s.swing(10.0);
        assert_eq!(s.phase(), GamePhase::WindingUp);
        assert_eq!(*s.stats(), GameStats::default());
    }

    #[test]
    fn test_early_whiff_is_a_strike() {
        let mut s = GameSession::new(3);
        let mut now = 0.0;
        pitch_and_whiff(&mut s, &mut now);
        assert_eq!(s.phase(), GamePhase::ShowingResult);
        assert_eq!(s.stats().strikes, 1);
        assert_eq!(s.last_result(), Some(PlayResult::Miss));
        let cues = s.drain_cues();
        assert!(cues.contains(&SoundCue::Swing));
        assert!(cues.contains(&SoundCue::Miss));
    }

    #[test]
    fn test_nine_whiffs_break_the_inning_and_flip_sides() {
        let mut s = GameSession::new(4);
        let mut now = 0.0;
        for i in 0..9 {
            pitch_and_whiff(&mut s, &mut now);
            if i < 8 {
                now += s.tuning().result_display_ms;
                s.advance(now);
                assert_eq!(s.phase(), GamePhase::Idle);
            }
        }

        assert_eq!(s.phase(), GamePhase::InningBreak);
        let summary = s.last_inning_summary().expect("summary emitted");
        assert_eq!(summary.inning, 1);
        assert!(summary.is_top_inning);
        assert_eq!(s.stats().outs, 3);

        now += s.tuning().inning_break_ms;
        s.advance(now);
        assert_eq!(s.phase(), GamePhase::Idle);
        let stats = s.stats();
        assert!(!stats.is_top_inning, "flipped to the bottom half");
        assert_eq!(stats.inning, 1, "inning number holds until bottom -> top");
        assert_eq!((stats.balls, stats.strikes, stats.outs), (0, 0, 0));
    }

    #[test]
    fn test_returning_to_idle_twice_changes_nothing() {
        let mut s = GameSession::new(7);
        let mut now = 0.0;
        pitch_and_whiff(&mut s, &mut now);
        assert_eq!(s.phase(), GamePhase::ShowingResult);

        s.tap(now + 1.0); // skip the banner
        assert_eq!(s.phase(), GamePhase::Idle);
        let settled = s.snapshot(now + 2.0);

        // The banner's own clear timer still fires later; re-entering Idle
        // must not disturb anything
        s.advance(now + s.tuning().result_display_ms + 10.0);
        assert_eq!(s.snapshot(now + 2.0), settled);
        assert_eq!(s.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_stale_timers_from_a_skipped_result_are_ignored() {
        let mut s = GameSession::new(5);
        s.tap(0.0);
        s.advance(500.0);
        s.swing(510.0); // whiff; banner would clear itself at 2510
        assert_eq!(s.phase(), GamePhase::ShowingResult);

        s.tap(520.0); // skip the banner
        assert_eq!(s.phase(), GamePhase::Idle);
        s.tap(530.0); // next pitch
        s.advance(1030.0);
        assert_eq!(s.phase(), GamePhase::PitchInFlight);

        // Run past both the stale ClearResult (2510) and this pitch's call.
        // The stale timer must not clear the new play's banner.
        let call_due = s.flight().unwrap().arrival_time_ms() + s.tuning().no_swing_grace_ms;
        let t = call_due.max(2510.0) + 1.0;
        s.advance(t);
        assert_eq!(s.phase(), GamePhase::ShowingResult);

        // Only its own timer clears it
        s.advance(call_due + s.tuning().result_display_ms);
        assert_eq!(s.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_same_seed_same_script_same_game() {
        let script = |s: &mut GameSession| {
            let mut now = 0.0;
            for round in 0..6 {
                s.tap(now);
                now += s.tuning().windup_delay_ms;
                s.advance(now);
                let arrival = s.flight().map(|f| f.arrival_time_ms()).unwrap_or(now);
                if round % 2 == 0 {
                    // Swing near arrival
                    s.swing(arrival - 50.0);
                    now = arrival;
                } else {
                    // Take the pitch
                    now = arrival + s.tuning().no_swing_grace_ms;
                    s.advance(now);
                }
                now += s.tuning().inning_break_ms.max(s.tuning().result_display_ms);
                s.advance(now);
            }
        };

        let mut a = GameSession::new(0xBA5EBA11);
        let mut b = GameSession::new(0xBA5EBA11);
        script(&mut a);
        script(&mut b);
        assert_eq!(a.stats(), b.stats());
        assert_eq!(a.phase(), b.phase());
        assert_eq!(a.drain_cues(), b.drain_cues());
    }

    #[test]
    fn test_snapshot_tracks_the_ball_in_flight() {
        let mut s = GameSession::new(6);
        s.tap(0.0);
        s.advance(500.0);
        let flight = *s.flight().unwrap();
        let mid = 500.0 + flight.duration_ms / 2.0;
        let snap = s.snapshot(mid);
        assert_eq!(snap.phase, GamePhase::PitchInFlight);
        assert_eq!(snap.ball, flight.position_at(mid));
        assert!(snap.pitch.is_some());
        // Serializes for the presentation layer
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\""));
    }
}
