//! Random value selection for template placeholders.
//!
//! Each placeholder letter resolves against a named numeric domain. The
//! mapping is a static rule: the reserved letters k, p, q, r, s draw
//! strictly positive values, every other letter draws from a symmetric
//! coefficient range. Degenerate draws for `r` and `a` are replaced with
//! fixed non-zero fallbacks so a template's leading coefficient can never
//! collapse it to a lower-degree equation.

use rand::Rng;
use std::ops::RangeInclusive;

/// Letters that draw from the strictly positive domain.
pub const POSITIVE_LETTERS: [char; 5] = ['k', 'p', 'q', 'r', 's'];

/// Named integer ranges that placeholder values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Symmetric small integers.
    Small,
    /// Symmetric coefficient range.
    Coefficient,
    /// Strictly positive small integers.
    Positive,
}

impl Domain {
    /// The domain a placeholder letter resolves against.
    pub fn for_letter(letter: char) -> Self {
        if POSITIVE_LETTERS.contains(&letter) {
            Domain::Positive
        } else {
            Domain::Coefficient
        }
    }

    /// The inclusive integer range backing this domain.
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            Domain::Small => -9..=9,
            Domain::Coefficient => -7..=7,
            Domain::Positive => 2..=8,
        }
    }

    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> i64 {
        rng.gen_range(self.range())
    }
}

/// Draw a value for `letter` from its domain.
///
/// `r` falls back to 3 if its domain ever yields zero (the positive domain
/// cannot, so this guards against a redefined range), and `a` falls back
/// to 2: `a` conventionally holds the leading coefficient.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, letter: char) -> i64 {
    let value = Domain::for_letter(letter).sample(rng);
    match letter {
        'r' if value == 0 => 3,
        'a' if value == 0 => 2,
        _ => value,
    }
}
