//! Dice configuration and rolling.
//!
//! A [`Dice`] is a single die with a fixed side count. Rolling draws from the
//! thread-local generator, which is seeded from the operating system; callers
//! that need reproducible results pass their own RNG to [`Dice::roll_with`].

use rand::Rng;

use crate::error::{TableError, TableResult};

/// A die with a fixed number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    sides: u32,
}

impl Dice {
    /// Six-sided die.
    pub const D6: Self = Self { sides: 6 };
    /// Eight-sided die.
    pub const D8: Self = Self { sides: 8 };
    /// Ten-sided die.
    pub const D10: Self = Self { sides: 10 };
    /// Twelve-sided die.
    pub const D12: Self = Self { sides: 12 };
    /// Twenty-sided die.
    pub const D20: Self = Self { sides: 20 };
    /// Percentile die (1-100).
    pub const D100: Self = Self { sides: 100 };

    /// Create a die with `sides` faces. Fails if `sides` is zero.
    pub fn new(sides: u32) -> TableResult<Self> {
        if sides < 1 {
            return Err(TableError::InvalidConfiguration(format!(
                "a die needs at least one side, got {sides}"
            )));
        }
        Ok(Self { sides })
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.sides
    }

    /// Parse a die from notation like "d20", "D6" or a bare side count "100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let digits = s.strip_prefix('d').unwrap_or(&s);
        let sides = digits.parse::<u32>().ok()?;
        Self::new(sides).ok()
    }

    /// Roll the die using the thread-local generator.
    pub fn roll(self) -> u32 {
        self.roll_with(&mut rand::rng())
    }

    /// Roll the die using the given RNG.
    pub fn roll_with<R: Rng>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_sides_rejected() {
        assert!(matches!(
            Dice::new(0),
            Err(TableError::InvalidConfiguration(_))
        ));
        assert_eq!(Dice::new(1).map(Dice::sides), Ok(1));
    }

    #[test]
    fn dice_from_str() {
        assert_eq!(Dice::from_str_tag("d20"), Some(Dice::D20));
        assert_eq!(Dice::from_str_tag("D6"), Some(Dice::D6));
        assert_eq!(Dice::from_str_tag("d100"), Some(Dice::D100));
        assert_eq!(Dice::from_str_tag("30").map(Dice::sides), Some(30));
        assert_eq!(Dice::from_str_tag("d0"), None);
        assert_eq!(Dice::from_str_tag("foo"), None);
    }

    #[test]
    fn dice_display() {
        assert_eq!(Dice::D20.to_string(), "d20");
        assert_eq!(Dice::D100.to_string(), "d100");
    }

    #[test]
    fn one_sided_die_always_rolls_one() {
        let die = Dice::new(1).unwrap();
        for _ in 0..50 {
            assert_eq!(die.roll(), 1);
        }
    }

    #[test]
    fn roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let v = Dice::D12.roll_with(&mut rng);
            assert!((1..=12).contains(&v));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(Dice::D20.roll_with(&mut rng1), Dice::D20.roll_with(&mut rng2));
        }
    }

    #[test]
    fn roll_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 60_000;
        let mut counts = [0u32; 6];
        for _ in 0..trials {
            counts[(Dice::D6.roll_with(&mut rng) - 1) as usize] += 1;
        }
        let expected = f64::from(trials) / 6.0;
        for count in counts {
            let deviation = (f64::from(count) - expected).abs() / expected;
            assert!(deviation < 0.05, "face count {count} too far from {expected}");
        }
    }
}
