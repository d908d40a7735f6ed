//! Sandlot entry point
//!
//! The real game runs in the browser through the `sandlot::web` boundary.
//! The native binary autoplays two innings against a simulated frame clock,
//! which is handy for eyeballing balance changes: run with
//! `RUST_LOG=info cargo run [seed]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use sandlot::chants::pick_chant;
    use sandlot::sim::{GamePhase, GameSession};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("autoplay session, seed {seed}");

    let mut session = GameSession::new(seed);
    let mut chant_rng = Pcg32::seed_from_u64(seed.wrapping_add(1));
    let mut now = 0.0;
    let mut pitches = 0u32;

    // 16 ms frames, like a 60 fps page would drive it
    while session.stats().inning <= 2 && pitches < 120 {
        session.advance(now);
        match session.phase() {
            GamePhase::Idle => {
                log::info!("dugout: {}", pick_chant(&mut chant_rng).text);
                session.tap(now);
                pitches += 1;
            }
            GamePhase::PitchInFlight => {
                // Swing just before arrival on two of every three pitches,
                // take the rest for the umpire to call
                let arrival = session.flight().map(|f| f.arrival_time_ms());
                if let Some(arrival) = arrival {
                    if pitches % 3 != 0 && now >= arrival - 24.0 {
                        session.swing(now);
                    }
                }
            }
            _ => {}
        }
        for cue in session.drain_cues() {
            log::debug!("cue: {}", cue.as_str());
        }
        now += 16.0;
    }

    let stats = session.stats();
    log::info!(
        "done after {pitches} pitches: score {}, inning {} ({})",
        stats.score,
        stats.inning,
        if stats.is_top_inning { "top" } else { "bottom" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm entry point is `sandlot::web::start`; nothing to do here.
}
