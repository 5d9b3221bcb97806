use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Rational value type with std::ops overloads
// =============================================================================

/// A rational number compared by its real value, so `1/3 == 2/6`.
///
/// Invariant: the denominator is never zero. A constructor argument of zero
/// is coerced to one; this is the only defensive rule the type carries, and
/// every operator funnels its result through [`Fraction::new`] so the
/// invariant holds for derived values too.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

impl Fraction {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator: if denominator == 0 { 1 } else { denominator },
        }
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// The quotient as a real number. The denominator is nonzero by
    /// invariant, so this never divides by zero.
    pub fn value(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }
}

// All arithmetic is pure: operands are `Copy` and results are fresh values.

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::new(-self.numerator, self.denominator)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
    }
}

// Equality is the primitive; ordering derives from the same quotient, so the
// comparison operators agree with each other (1/3 >= 2/6 but not >).

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum ParseFractionError {
    #[error("expected `numerator/denominator`, got `{0}`")]
    InvalidFormat(String),

    #[error("invalid integer `{part}`: {source}")]
    InvalidInteger {
        part: String,
        source: ParseIntError,
    },
}

fn parse_part(part: &str) -> Result<i32, ParseFractionError> {
    part.trim()
        .parse()
        .map_err(|source| ParseFractionError::InvalidInteger {
            part: part.trim().to_string(),
            source,
        })
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Accepts `"num/denom"` or a bare `"num"` (read as `num/1`). A zero
    /// denominator follows the constructor coercion rather than erroring.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseFractionError::InvalidFormat(s.to_string()));
        }

        match trimmed.split_once('/') {
            Some((num, denom)) => Ok(Fraction::new(parse_part(num)?, parse_part(denom)?)),
            None => Ok(Fraction::new(parse_part(trimmed)?, 1)),
        }
    }
}
