//! Rational numbers as canonical numerator/denominator pairs.
//!
//! Canonical form: the denominator is positive, the numerator carries the
//! sign, and the two share no common factor. Zero is `0/1`. Every binary
//! operation computes the textbook cross-product identity and then
//! re-canonicalizes.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::int::{Int, Sign};
use crate::limb::Limb;

#[derive(Debug, Clone)]
pub struct Rat {
    num: Int,
    den: Int,
}

impl Rat {
    /// The zero rational, `0/1`.
    pub fn new() -> Self {
        Rat {
            num: Int::new(),
            den: Int::one(),
        }
    }

    pub fn from_limb(value: Limb) -> Self {
        Rat {
            num: Int::from_limb(value),
            den: Int::one(),
        }
    }

    pub fn from_int(value: Int) -> Self {
        Rat {
            num: value,
            den: Int::one(),
        }
    }

    /// Builds a rational from an already-canonical pair, taking ownership
    /// of both integers. The caller promises `den > 0` and
    /// `gcd(|num|, den) == 1`; use [`Rat::from_fraction`] otherwise.
    pub fn from_raw_parts(num: Int, den: Int) -> Self {
        debug_assert!(den.sign() == Sign::Positive);
        Rat { num, den }
    }

    /// Builds a rational from an arbitrary fraction and canonicalizes it.
    /// The denominator must be non-zero.
    pub fn from_fraction(num: Int, den: Int) -> Self {
        let mut r = Rat { num, den };
        r.normalize();
        r
    }

    #[inline]
    pub fn numerator(&self) -> &Int {
        &self.num
    }

    #[inline]
    pub fn denominator(&self) -> &Int {
        &self.den
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.num.sign()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Whether the value is an integer, i.e. the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.den == Int::one()
    }

    pub fn is_normalized(&self) -> bool {
        if self.den.sign() != Sign::Positive {
            return false;
        }
        self.den.gcd(&self.num) == Int::one()
    }

    /// Puts the pair in canonical form: positive denominator, no common
    /// factor. A zero numerator resets the denominator to one so no
    /// gcd(0, 0) is ever attempted.
    pub fn normalize(&mut self) {
        if self.num.is_zero() {
            self.den = Int::one();
            return;
        }

        if self.den.sign() == Sign::Negative {
            self.num = -&self.num;
            self.den = -&self.den;
        }

        let g = self.den.gcd(&self.num);
        if g != Int::one() {
            let (num_q, num_r) = self.num.abs().div_rem(&g);
            debug_assert!(num_r.is_zero());
            let (den_q, den_r) = self.den.div_rem(&g);
            debug_assert!(den_r.is_zero());

            self.num = if self.num.sign() == Sign::Negative {
                -num_q
            } else {
                num_q
            };
            self.den = den_q;
        }
    }

    pub fn abs(&self) -> Rat {
        Rat {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Writes the decimal representation (`num` or `num/den`) into `out`,
    /// returning the number of bytes written, or 0 when `out` cannot be
    /// proven large enough. Same buffer discipline as [`Int::write_decimal`].
    pub fn write_decimal(&self, out: &mut [u8]) -> usize {
        let written = self.num.write_decimal(out);
        if written == 0 {
            return 0;
        }

        if self.is_integer() {
            return written;
        }
        if written == out.len() {
            return 0;
        }

        out[written] = b'/';
        let den_written = self.den.write_decimal(&mut out[written + 1..]);
        if den_written == 0 {
            return 0;
        }

        written + 1 + den_written
    }
}

impl Default for Rat {
    fn default() -> Self {
        Rat::new()
    }
}

impl PartialEq for Rat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rat {}

impl PartialOrd for Rat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rat {
    /// Sign order first; within a sign, `a/b` vs `c/d` compares `a·d`
    /// against `c·b` (both denominators are positive).
    fn cmp(&self, other: &Self) -> Ordering {
        if self.sign() != other.sign() {
            return (self.sign() as i8).cmp(&(other.sign() as i8));
        }

        let ad = &self.num * &other.den;
        let cb = &other.num * &self.den;
        ad.cmp(&cb)
    }
}

impl fmt::Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            self.num.fmt(f)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// ============================================================================
// Arithmetic: cross-product identities, then canonicalize
// ============================================================================

impl Add for &Rat {
    type Output = Rat;

    /// a/b + c/d = (a·d + c·b) / (b·d)
    fn add(self, rhs: Self) -> Rat {
        let ad = &self.num * &rhs.den;
        let cb = &rhs.num * &self.den;
        Rat::from_fraction(&ad + &cb, &self.den * &rhs.den)
    }
}

impl Sub for &Rat {
    type Output = Rat;

    /// a/b - c/d = (a·d - c·b) / (b·d)
    fn sub(self, rhs: Self) -> Rat {
        let ad = &self.num * &rhs.den;
        let cb = &rhs.num * &self.den;
        Rat::from_fraction(&ad - &cb, &self.den * &rhs.den)
    }
}

impl Mul for &Rat {
    type Output = Rat;

    /// (a/b)·(c/d) = (a·c) / (b·d)
    fn mul(self, rhs: Self) -> Rat {
        Rat::from_fraction(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Div for &Rat {
    type Output = Rat;

    /// (a/b)/(c/d) = (a·d) / (b·c). The right-hand side must be non-zero.
    fn div(self, rhs: Self) -> Rat {
        if rhs.is_zero() {
            panic!("attempt to divide by zero");
        }
        Rat::from_fraction(&self.num * &rhs.den, &self.den * &rhs.num)
    }
}

impl Neg for &Rat {
    type Output = Rat;

    fn neg(self) -> Rat {
        Rat {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Add for Rat {
    type Output = Rat;

    fn add(self, rhs: Self) -> Rat {
        &self + &rhs
    }
}

impl Sub for Rat {
    type Output = Rat;

    fn sub(self, rhs: Self) -> Rat {
        &self - &rhs
    }
}

impl Mul for Rat {
    type Output = Rat;

    fn mul(self, rhs: Self) -> Rat {
        &self * &rhs
    }
}

impl Div for Rat {
    type Output = Rat;

    fn div(self, rhs: Self) -> Rat {
        &self / &rhs
    }
}

impl Neg for Rat {
    type Output = Rat;

    fn neg(self) -> Rat {
        -&self
    }
}
