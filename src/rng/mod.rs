//! # Random Number Facade
//!
//! Dice rolls, chance tests and weighted picks on top of a seeded generator.
//!
//! A [`Rnd`] owns its generator, so two instances created from the same seed
//! produce the same sequence of results. Game code passes `&mut Rnd` down to
//! whatever needs randomness, the same way it would pass a `StdRng`.

pub mod dice;

pub use dice::*;

use crate::{RlError, RlResult};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for seeding a [`Rnd`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngConfig {
    /// Fixed seed for reproducible runs; `None` draws one from system entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RngConfig {
    /// Creates a configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parses a configuration from JSON such as `{"seed": 42}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::RngConfig;
    ///
    /// let config = RngConfig::from_json(r#"{"seed": 42}"#).unwrap();
    /// assert_eq!(config.seed, Some(42));
    ///
    /// let config = RngConfig::from_json("{}").unwrap();
    /// assert_eq!(config.seed, None);
    /// ```
    pub fn from_json(json: &str) -> RlResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Seeded random number source with roguelike-flavoured helpers.
///
/// # Examples
///
/// ```
/// use rlutil::Rnd;
///
/// let mut a = Rnd::new(12345);
/// let mut b = Rnd::new(12345);
/// assert_eq!(a.dice(3, 6), b.dice(3, 6));
///
/// let roll = a.dice(2, 8);
/// assert!((2..=16).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct Rnd {
    inner: StdRng,
    seed: u64,
}

impl Rnd {
    /// Creates a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Creates a generator as described by the configuration.
    pub fn from_config(config: &RngConfig) -> Self {
        match config.seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Restarts the sequence from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        log::debug!("Reseeding random number generator with {}", seed);
        *self = Self::new(seed);
    }

    /// The seed this generator was last started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One roll of a die with `sides` faces: `1..=sides`.
    fn roll_die(&mut self, sides: i32) -> i32 {
        self.inner.gen_range(1..=sides)
    }

    /// Sum of `rolls` dice with `sides` faces each.
    ///
    /// Dice without faces, or no dice at all, total 0. One-sided dice always
    /// show 1 and consume no randomness. Totals beyond `i32::MAX` saturate.
    pub fn dice(&mut self, rolls: i32, sides: i32) -> i32 {
        if sides <= 0 || rolls <= 0 {
            return 0;
        }

        if sides == 1 {
            return rolls;
        }

        let total: i64 = (0..rolls).map(|_| i64::from(self.roll_die(sides))).sum();
        saturate_i32(total)
    }

    /// Fair coin: true on heads.
    pub fn coin_toss(&mut self) -> bool {
        self.dice(1, 2) == 2
    }

    /// True with probability `numer / denom`.
    ///
    /// Expects `denom >= 1` and `0 <= numer <= denom`. Anything else is logged
    /// as a failed assertion and answered with the most likely intent: a
    /// non-positive side means "never", a numerator reaching the denominator
    /// means "always".
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::Rnd;
    ///
    /// let mut rnd = Rnd::new(1);
    /// assert!(!rnd.fraction(0, 6));
    /// assert!(rnd.fraction(6, 6));
    /// ```
    pub fn fraction(&mut self, numer: i32, denom: i32) -> bool {
        rl_assert!(denom >= 1, "fraction({}, {})", numer, denom);
        rl_assert!(numer <= denom, "fraction({}, {})", numer, denom);
        rl_assert!(numer >= 0, "fraction({}, {})", numer, denom);

        if numer <= 0 || denom <= 0 {
            return false;
        }

        if numer >= denom || denom == 1 {
            return true;
        }

        self.roll_die(denom) <= numer
    }

    /// True once in `n` tries on average.
    pub fn one_in(&mut self, n: i32) -> bool {
        self.fraction(1, n)
    }

    /// Uniform value between `v1` and `v2`, both included, in either order.
    pub fn range(&mut self, v1: i32, v2: i32) -> i32 {
        let min = v1.min(v2);
        let max = v1.max(v2);
        self.inner.gen_range(min..=max)
    }

    /// A percentile roll: `1..=100`.
    pub fn percent(&mut self) -> i32 {
        self.roll_die(crate::config::PERCENT_SIDES)
    }

    /// True with a `pct` percent chance.
    pub fn percent_chance(&mut self, pct: i32) -> bool {
        pct >= self.percent()
    }

    /// Picks an index with probability proportional to its weight.
    ///
    /// Every weight must be positive and the slice must not be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::Rnd;
    ///
    /// let mut rnd = Rnd::new(3);
    /// let idx = rnd.weighted_choice(&[10, 1, 5]).unwrap();
    /// assert!(idx < 3);
    ///
    /// assert!(rnd.weighted_choice(&[]).is_err());
    /// assert!(rnd.weighted_choice(&[4, 0]).is_err());
    /// ```
    pub fn weighted_choice(&mut self, weights: &[i32]) -> RlResult<usize> {
        if weights.is_empty() {
            return Err(RlError::InvalidArgument(
                "weighted choice needs at least one weight".to_string(),
            ));
        }

        if let Some(bad) = weights.iter().find(|&&w| w <= 0) {
            return Err(RlError::InvalidArgument(format!(
                "weights must be positive, got {}",
                bad
            )));
        }

        let sum: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        let mut roll = self.inner.gen_range(0..sum);
        log::trace!("Weighted choice rolled {} of {}", roll, sum);

        for (idx, &weight) in weights.iter().enumerate() {
            let weight = i64::from(weight);
            if roll < weight {
                return Ok(idx);
            }
            roll -= weight;
        }

        // The roll is below the total, so the scan always returns
        rl_assert!(false, "weighted choice fell through with {:?}", weights);
        Ok(weights.len() - 1)
    }
}

/// Narrows a wide total back to `i32`, pinning it at the bounds.
pub(crate) fn saturate_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Default for Rnd {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SEED)
    }
}

/// Lets a [`Rnd`] drive anything in the `rand` ecosystem (shuffles, samples).
impl RngCore for Rnd {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
