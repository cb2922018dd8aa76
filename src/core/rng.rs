//! Deterministic dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of rolls
//! - **Binomial**: A roll is four fair coin flips summed, so 2 is the most
//!   common result and 0 and 4 each come up once in sixteen
//! - **Pluggable**: The turn loop asks a `Dice` for rolls, so tests can script them
//!
//! ## Usage
//!
//! ```
//! use royal_ur::core::{Dice, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll();
//! assert!(roll <= 4);
//!
//! // Same seed, same rolls
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll(), b.roll());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of two-sided dice thrown per roll.
pub const DICE_COUNT: u8 = 4;

/// Highest possible roll.
pub const MAX_ROLL: u8 = DICE_COUNT;

/// Source of rolls for the turn loop.
pub trait Dice {
    /// Produce a roll in `0..=MAX_ROLL`.
    fn roll(&mut self) -> u8;
}

/// Seeded RNG that throws the game's dice.
///
/// Uses ChaCha8 so a game can be replayed from its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a random seed. The seed is still recorded.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Flip one fair coin.
    pub fn flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> u8 {
        (0..DICE_COUNT).map(|_| u8::from(self.flip())).sum()
    }
}

/// Dice that replay a fixed list of rolls, then roll 0 forever.
///
/// ```
/// use royal_ur::core::{Dice, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 1]);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 1);
/// assert_eq!(dice.roll(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create dice from a sequence of rolls. Values above `MAX_ROLL` are clamped.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|r| r.min(MAX_ROLL)).collect(),
        }
    }

    /// Rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.rolls.pop_front().unwrap_or(0)
    }
}
