//! Seeded dice rolling.
//!
//! Callers normally pass in the faces the players actually rolled. The
//! roller is for simulations and benchmarks that need a reproducible
//! stream of legal rolls.
//!
//! ```
//! use speed_die_rules::core::DiceRng;
//!
//! let mut a = DiceRng::new(7);
//! let mut b = DiceRng::new(7);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::REGULAR_DIE_FACES;
use super::dice::{DiceRoll, SpeedDie};

/// Seeded dice roller. The same seed yields the same rolls.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
}

impl DiceRng {
    /// Create a roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Roll one regular die.
    pub fn roll_regular(&mut self) -> u8 {
        self.inner.gen_range(1..=REGULAR_DIE_FACES)
    }

    /// Roll the speed die. All six faces are equally likely.
    pub fn roll_speed(&mut self) -> SpeedDie {
        SpeedDie::FACES[self.inner.gen_range(0..SpeedDie::FACES.len())]
    }

    /// Roll all three dice.
    pub fn roll(&mut self) -> DiceRoll {
        let die1 = self.roll_regular();
        let die2 = self.roll_regular();
        let speed = self.roll_speed();
        DiceRoll { die1, die2, speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DiceRng::new(1);
        let mut rng2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_regular_dice_in_range() {
        let mut rng = DiceRng::new(9);
        for _ in 0..1000 {
            let roll = rng.roll();
            assert!((1..=6).contains(&roll.die1));
            assert!((1..=6).contains(&roll.die2));
            assert!(roll.validate().is_ok());
        }
    }

    #[test]
    fn test_every_speed_face_appears() {
        let mut rng = DiceRng::new(3);
        let faces: Vec<_> = (0..600).map(|_| rng.roll_speed()).collect();

        for face in SpeedDie::FACES {
            assert!(faces.contains(&face), "face {} never rolled", face);
        }
    }
}
