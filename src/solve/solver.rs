//! Lowering to polynomials and real solution sets.
//!
//! An equation is reduced to `p(unknown) = 0` with `p` over the rationals,
//! then dispatched on degree: the zero polynomial is an identity, a
//! non-zero constant is a contradiction, and after factoring out a common
//! power of the unknown the remainder must be linear or quadratic.
//! Quadratic roots stay exact: rational when the discriminant is a perfect
//! square, quadratic surds otherwise.

use super::expr::{BinaryOp, Expr};
use super::poly::{Poly, Rational, gcd};
use std::fmt;
use thiserror::Error;

/// Largest exponent the interpreter will expand.
const MAX_EXPONENT: i64 = 16;

/// Shapes the solver cannot reduce. All of them collapse to a null answer
/// at the interpreter boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("free variable '{0}' is not the unknown")]
    ForeignVariable(char),
    #[error("division by an expression containing the unknown")]
    NonConstantDivisor,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unsupported exponent")]
    UnsupportedExponent,
    #[error("cannot solve an equation of degree {0}")]
    DegreeTooHigh(usize),
    #[error("coefficients out of range")]
    CoefficientOverflow,
}

/// Lower an expression tree to a polynomial in `unknown`.
pub fn lower(expr: &Expr, unknown: char) -> Result<Poly, SolveError> {
    match expr {
        Expr::Number(n) => Ok(Poly::constant(Rational::from_int(*n))),
        Expr::Variable(name) if *name == unknown => Ok(Poly::unknown()),
        Expr::Variable(name) => Err(SolveError::ForeignVariable(*name)),
        Expr::Neg(operand) => Ok(lower(operand, unknown)?.neg()),
        Expr::BinOp { op, left, right } => match op {
            BinaryOp::Add => Ok(lower(left, unknown)?.add(&lower(right, unknown)?)),
            BinaryOp::Sub => Ok(lower(left, unknown)?.sub(&lower(right, unknown)?)),
            BinaryOp::Mul => Ok(lower(left, unknown)?.mul(&lower(right, unknown)?)),
            BinaryOp::Div => {
                let divisor = lower(right, unknown)?
                    .as_constant()
                    .ok_or(SolveError::NonConstantDivisor)?;
                let inverse = Rational::ONE
                    .checked_div(divisor)
                    .ok_or(SolveError::DivisionByZero)?;
                Ok(lower(left, unknown)?.scale(inverse))
            }
            BinaryOp::Pow => lower_pow(left, right, unknown),
        },
    }
}

fn lower_pow(base: &Expr, exponent: &Expr, unknown: char) -> Result<Poly, SolveError> {
    let exponent = lower(exponent, unknown)?
        .as_constant()
        .ok_or(SolveError::UnsupportedExponent)?;
    if !exponent.is_integer() {
        return Err(SolveError::UnsupportedExponent);
    }
    let n = exponent.numer();
    if n.abs() > MAX_EXPONENT {
        return Err(SolveError::UnsupportedExponent);
    }

    let base = lower(base, unknown)?;
    if n >= 0 {
        return Ok(base.pow(n as u32));
    }

    // Negative powers fold only on constant bases.
    let value = base.as_constant().ok_or(SolveError::UnsupportedExponent)?;
    let positive = value.pow((-n) as u32);
    Rational::ONE
        .checked_div(positive)
        .map(Poly::constant)
        .ok_or(SolveError::DivisionByZero)
}

/// A single real root in exact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    Rational(Rational),
    /// `rat + coef * sqrt(rad)`; `coef` non-zero, `rad` squarefree and >= 2.
    Surd {
        rat: Rational,
        coef: Rational,
        rad: i64,
    },
}

impl Root {
    fn approx(&self) -> f64 {
        match self {
            Root::Rational(r) => r.approx(),
            Root::Surd { rat, coef, rad } => rat.approx() + coef.approx() * (*rad as f64).sqrt(),
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Rational(r) => write!(f, "{r}"),
            Root::Surd { rat, coef, rad } => {
                let surd = surd_term(coef.abs(), *rad);
                if rat.is_zero() {
                    if coef.numer() < 0 {
                        write!(f, "-{surd}")
                    } else {
                        write!(f, "{surd}")
                    }
                } else if coef.numer() < 0 {
                    write!(f, "{rat} - {surd}")
                } else {
                    write!(f, "{rat} + {surd}")
                }
            }
        }
    }
}

/// Render `|coef| * sqrt(rad)`: `sqrt(2)`, `2*sqrt(3)`, `sqrt(5)/2`, `3*sqrt(2)/4`.
fn surd_term(coef: Rational, rad: i64) -> String {
    let mut out = String::new();
    if coef.numer() != 1 {
        out.push_str(&format!("{}*", coef.numer()));
    }
    out.push_str(&format!("sqrt({rad})"));
    if coef.denom() != 1 {
        out.push_str(&format!("/{}", coef.denom()));
    }
    out
}

/// The set of real values satisfying an equation.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionSet {
    /// No real value satisfies the equation.
    Empty,
    /// Every real value satisfies the equation.
    AllReals,
    /// Finitely many roots, sorted ascending.
    Finite(Vec<Root>),
}

impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionSet::Empty => write!(f, "∅"),
            SolutionSet::AllReals => write!(f, "ℝ"),
            SolutionSet::Finite(roots) => {
                write!(f, "{{")?;
                for (i, root) in roots.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{root}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Solve `poly = 0` over the reals.
pub fn solve_poly(poly: &Poly) -> Result<SolutionSet, SolveError> {
    if poly.is_zero() {
        return Ok(SolutionSet::AllReals);
    }
    if poly.degree() == 0 {
        return Ok(SolutionSet::Empty);
    }

    let mut roots = Vec::new();

    // Factor out the common power of the unknown; it contributes the root 0.
    let mut low = 0;
    while poly.coeff(low).is_zero() {
        low += 1;
    }
    if low > 0 {
        roots.push(Root::Rational(Rational::ZERO));
    }
    let reduced: Vec<Rational> = (low..=poly.degree()).map(|i| poly.coeff(i)).collect();

    match reduced.len() - 1 {
        0 => {} // constant remainder, no further roots
        1 => roots.push(linear_root(reduced[0], reduced[1])?),
        2 => roots.extend(quadratic_roots(reduced[0], reduced[1], reduced[2])?),
        d => return Err(SolveError::DegreeTooHigh(d + low)),
    }

    if roots.is_empty() {
        return Ok(SolutionSet::Empty);
    }
    roots.sort_by(|a, b| a.approx().total_cmp(&b.approx()));
    Ok(SolutionSet::Finite(roots))
}

/// Root of `c1 * x + c0 = 0`; `c1` is a leading coefficient, so non-zero.
fn linear_root(c0: Rational, c1: Rational) -> Result<Root, SolveError> {
    c0.neg()
        .checked_div(c1)
        .map(Root::Rational)
        .ok_or(SolveError::DivisionByZero)
}

/// Real roots of `c2 * x^2 + c1 * x + c0 = 0` with `c2` non-zero.
fn quadratic_roots(
    c0: Rational,
    c1: Rational,
    c2: Rational,
) -> Result<Vec<Root>, SolveError> {
    // Clear denominators down to integer a, b, c.
    let scale = lcm(c0.denom(), lcm(c1.denom(), c2.denom()));
    let a = c2.numer() * (scale / c2.denom());
    let b = c1.numer() * (scale / c1.denom());
    let c = c0.numer() * (scale / c0.denom());

    let disc = (b as i128) * (b as i128) - 4 * (a as i128) * (c as i128);
    if disc < 0 {
        return Ok(Vec::new());
    }
    let disc = i64::try_from(disc).map_err(|_| SolveError::CoefficientOverflow)?;

    if disc == 0 {
        return Ok(vec![Root::Rational(Rational::new(-b, 2 * a))]);
    }

    let (outer, rad) = extract_square(disc);
    if rad == 1 {
        // Perfect square discriminant: two rational roots.
        return Ok(vec![
            Root::Rational(Rational::new(-b - outer, 2 * a)),
            Root::Rational(Rational::new(-b + outer, 2 * a)),
        ]);
    }

    let rat = Rational::new(-b, 2 * a);
    let coef = Rational::new(outer, 2 * a).abs();
    Ok(vec![
        Root::Surd {
            rat,
            coef: coef.neg(),
            rad,
        },
        Root::Surd { rat, coef, rad },
    ])
}

fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

/// Decompose `n > 0` as `outer^2 * rad` with `rad` squarefree.
fn extract_square(n: i64) -> (i64, i64) {
    let mut outer = 1;
    let mut rad = n;
    let mut f = 2;
    while f * f <= rad {
        while rad % (f * f) == 0 {
            rad /= f * f;
            outer *= f;
        }
        f += 1;
    }
    (outer, rad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_square_splits_out_perfect_squares() {
        assert_eq!(extract_square(36), (6, 1));
        assert_eq!(extract_square(8), (2, 2));
        assert_eq!(extract_square(48), (4, 3));
        assert_eq!(extract_square(7), (1, 7));
    }

    #[test]
    fn surd_roots_render_compactly() {
        let root = Root::Surd {
            rat: Rational::ZERO,
            coef: Rational::new(-1, 1),
            rad: 2,
        };
        assert_eq!(root.to_string(), "-sqrt(2)");

        let root = Root::Surd {
            rat: Rational::ONE,
            coef: Rational::new(3, 4),
            rad: 2,
        };
        assert_eq!(root.to_string(), "1 + 3*sqrt(2)/4");
    }

    #[test]
    fn solution_sets_render_their_indicators() {
        assert_eq!(SolutionSet::Empty.to_string(), "∅");
        assert_eq!(SolutionSet::AllReals.to_string(), "ℝ");
        let set = SolutionSet::Finite(vec![
            Root::Rational(Rational::from_int(-3)),
            Root::Rational(Rational::from_int(3)),
        ]);
        assert_eq!(set.to_string(), "{-3, 3}");
    }
}
