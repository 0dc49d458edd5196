//! # Dice and Chance Values
//!
//! Plain data describing a random outcome, rolled later against a [`Rnd`].

use crate::rng::saturate_i32;
use crate::{RlError, RlResult, Rnd};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dice expression such as `2d6+1`.
///
/// # Examples
///
/// ```
/// use rlutil::{DiceParam, Rnd};
///
/// let damage: DiceParam = "2d6+1".parse().unwrap();
/// assert_eq!(damage, DiceParam::new(2, 6, 1));
/// assert_eq!(damage.min(), 3);
/// assert_eq!(damage.max(), 13);
///
/// let mut rnd = Rnd::new(12345);
/// let hit = damage.roll(&mut rnd);
/// assert!((3..=13).contains(&hit));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceParam {
    pub rolls: i32,
    pub sides: i32,
    pub plus: i32,
}

impl DiceParam {
    pub fn new(rolls: i32, sides: i32, plus: i32) -> Self {
        Self { rolls, sides, plus }
    }

    /// Rolls the dice and adds the modifier, saturating at the `i32` bounds.
    pub fn roll(&self, rnd: &mut Rnd) -> i32 {
        rnd.dice(self.rolls, self.sides).saturating_add(self.plus)
    }

    /// Lowest possible result.
    pub fn min(&self) -> i32 {
        if self.rolls <= 0 || self.sides <= 0 {
            return self.plus;
        }
        self.rolls.saturating_add(self.plus)
    }

    /// Highest possible result.
    pub fn max(&self) -> i32 {
        if self.rolls <= 0 || self.sides <= 0 {
            return self.plus;
        }
        saturate_i32(i64::from(self.rolls) * i64::from(self.sides) + i64::from(self.plus))
    }

    /// Whether every possible result fits in an `i32` without saturating.
    ///
    /// Dice only add non-negative amounts, so the highest total is the one
    /// that can overflow.
    pub fn fits_i32(&self) -> bool {
        let rolls = i64::from(self.rolls.max(0));
        let sides = i64::from(self.sides.max(0));
        rolls * sides + i64::from(self.plus) <= i64::from(i32::MAX)
    }
}

impl fmt::Display for DiceParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.rolls, self.sides)?;
        match self.plus {
            0 => Ok(()),
            p if p > 0 => write!(f, "+{}", p),
            p => write!(f, "{}", p),
        }
    }
}

impl FromStr for DiceParam {
    type Err = RlError;

    /// Parses `NdS`, `NdS+P`, `NdS-P` or `dS` (one die).
    ///
    /// Expressions whose total could leave the `i32` range are rejected.
    fn from_str(s: &str) -> RlResult<Self> {
        let text = s.trim().to_ascii_lowercase();
        let bad = || RlError::Parse(format!("invalid dice expression '{}'", s));

        let (rolls_part, rest) = text.split_once('d').ok_or_else(bad)?;
        let rolls = if rolls_part.is_empty() {
            1
        } else {
            rolls_part.parse::<i32>().map_err(|_| bad())?
        };

        let (sides_part, plus) = match rest.find(|c: char| c == '+' || c == '-') {
            Some(idx) => {
                let (sides, modifier) = rest.split_at(idx);
                let plus = modifier.parse::<i32>().map_err(|_| bad())?;
                (sides, plus)
            }
            None => (rest, 0),
        };
        let sides = sides_part.parse::<i32>().map_err(|_| bad())?;

        if rolls < 0 || sides < 1 {
            return Err(bad());
        }

        let dice = Self::new(rolls, sides, plus);
        if !dice.fits_i32() {
            return Err(RlError::Parse(format!(
                "dice expression '{}' can exceed the integer range",
                s
            )));
        }

        Ok(dice)
    }
}

/// A "`numer` in `denom`" chance.
///
/// # Examples
///
/// ```
/// use rlutil::{Fraction, Rnd};
///
/// let never = Fraction::new(0, 3);
/// let always = Fraction::new(3, 3);
/// let mut rnd = Rnd::new(1);
/// assert!(!never.roll(&mut rnd));
/// assert!(always.roll(&mut rnd));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numer: i32,
    pub denom: i32,
}

impl Fraction {
    pub fn new(numer: i32, denom: i32) -> Self {
        Self { numer, denom }
    }

    /// Runs the Bernoulli trial.
    pub fn roll(&self, rnd: &mut Rnd) -> bool {
        rnd.fraction(self.numer, self.denom)
    }

    /// The chance as a float, `numer / denom`.
    pub fn probability(&self) -> f64 {
        if self.denom <= 0 {
            return 0.0;
        }
        (f64::from(self.numer) / f64::from(self.denom)).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.numer, self.denom)
    }
}
