//! Dugout chatter
//!
//! Flavor text the presentation layer floats over the dugout while the
//! batter is up. Purely cosmetic; the picker is seeded like everything else.

use rand::Rng;
use serde::Serialize;

/// One chant and how long to show it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chant {
    pub text: &'static str,
    pub duration_ms: u32,
}

pub const CHANTS: &[Chant] = &[
    Chant { text: "We need a hit!", duration_ms: 2000 },
    Chant { text: "Hey batter batter!", duration_ms: 2000 },
    Chant { text: "Rally time!", duration_ms: 2000 },
    Chant { text: "Swing batter!", duration_ms: 1500 },
    Chant { text: "Eye on the ball!", duration_ms: 2000 },
    Chant { text: "Crush it!", duration_ms: 1500 },
    Chant { text: "Nice swing!", duration_ms: 1500 },
    Chant { text: "You got this!", duration_ms: 1500 },
    Chant { text: "Bring 'em home!", duration_ms: 2000 },
];

/// Pick a random chant from the table
pub fn pick_chant<R: Rng + ?Sized>(rng: &mut R) -> &'static Chant {
    &CHANTS[rng.random_range(0..CHANTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pick_always_from_table() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let chant = pick_chant(&mut rng);
            assert!(CHANTS.contains(chant));
            assert!(chant.duration_ms >= 1500);
        }
    }
}
