//! Browser boundary
//!
//! A thin wasm-bindgen handle over `GameSession`. The page owns the clock:
//! it calls `frame` with `performance.now()` once per animation frame,
//! routes pointer input to `tap`/`swing`, renders from the JSON snapshot,
//! and plays the drained sound cues.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::chants::pick_chant;
use crate::sim::GameSession;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// One game session owned by the page
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
    chant_rng: Pcg32,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WebGame {
        log::info!("session seeded with {seed}");
        WebGame {
            session: GameSession::new(seed),
            chant_rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    /// Construct with a JSON tuning override (missing fields keep defaults)
    pub fn with_tuning(seed: u64, tuning_json: &str) -> Result<WebGame, JsError> {
        let tuning = Tuning::from_json(tuning_json)?;
        Ok(WebGame {
            session: GameSession::with_tuning(seed, tuning),
            chant_rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
        })
    }

    /// Fire due timers and return the snapshot as JSON
    pub fn frame(&mut self, now_ms: f64) -> Result<String, JsError> {
        self.session.advance(now_ms);
        Ok(serde_json::to_string(&self.session.snapshot(now_ms))?)
    }

    /// Context-sensitive primary input: pitch, swing, or skip the banner
    pub fn tap(&mut self, now_ms: f64) {
        self.session.tap(now_ms);
    }

    pub fn swing(&mut self, now_ms: f64) {
        self.session.swing(now_ms);
    }

    /// Swing anchored at a pointer position (virtual field coordinates)
    pub fn swing_at(&mut self, now_ms: f64, x: f32, y: f32) {
        self.session.swing_at(now_ms, Vec2::new(x, y));
    }

    /// Queued sound cue names, drained; the page maps them to audio assets
    pub fn drain_cues(&mut self) -> Vec<String> {
        self.session
            .drain_cues()
            .iter()
            .map(|c| c.as_str().to_owned())
            .collect()
    }

    /// A fresh dugout chant as JSON (`text`, `duration_ms`)
    pub fn chant(&mut self) -> Result<String, JsError> {
        Ok(serde_json::to_string(pick_chant(&mut self.chant_rng))?)
    }
}
