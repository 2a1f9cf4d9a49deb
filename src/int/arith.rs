//! Signed integer arithmetic: add, sub, mul, Euclidean div/rem.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::limb::Limb;
use crate::ull;

use super::{Int, Sign};

fn add_signed(a: &Int, b: &Int) -> Int {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    if a.sign == b.sign {
        let mut out = vec![0 as Limb; a.limbs.len().max(b.limbs.len()) + 1];
        let n = ull::add(&a.limbs, &b.limbs, &mut out);
        return Int::from_magnitude(a.sign, out, n);
    }

    // Opposite signs: subtract the smaller magnitude from the larger and
    // keep the larger operand's sign.
    match ull::cmp(&a.limbs, &b.limbs) {
        Ordering::Equal => Int::new(),
        Ordering::Greater => {
            let mut out = vec![0 as Limb; a.limbs.len()];
            let n = ull::sub(&a.limbs, &b.limbs, &mut out);
            Int::from_magnitude(a.sign, out, n)
        }
        Ordering::Less => {
            let mut out = vec![0 as Limb; b.limbs.len()];
            let n = ull::sub(&b.limbs, &a.limbs, &mut out);
            Int::from_magnitude(b.sign, out, n)
        }
    }
}

fn sub_signed(a: &Int, b: &Int) -> Int {
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        let mut r = b.clone();
        r.sign = r.sign.flip();
        return r;
    }

    if a.sign != b.sign {
        let mut out = vec![0 as Limb; a.limbs.len().max(b.limbs.len()) + 1];
        let n = ull::add(&a.limbs, &b.limbs, &mut out);
        return Int::from_magnitude(a.sign, out, n);
    }

    match ull::cmp(&a.limbs, &b.limbs) {
        Ordering::Equal => Int::new(),
        Ordering::Greater => {
            let mut out = vec![0 as Limb; a.limbs.len()];
            let n = ull::sub(&a.limbs, &b.limbs, &mut out);
            Int::from_magnitude(a.sign, out, n)
        }
        Ordering::Less => {
            let mut out = vec![0 as Limb; b.limbs.len()];
            let n = ull::sub(&b.limbs, &a.limbs, &mut out);
            Int::from_magnitude(a.sign.flip(), out, n)
        }
    }
}

fn mul_signed(a: &Int, b: &Int) -> Int {
    if a.is_zero() || b.is_zero() {
        return Int::new();
    }

    let mut out = vec![0 as Limb; a.limbs.len() + b.limbs.len()];
    let n = ull::mul(&a.limbs, &b.limbs, &mut out);
    Int::from_magnitude(a.sign.product(b.sign), out, n)
}

impl Int {
    /// Euclidean division: the unique `(q, r)` with `a = b·q + r` and
    /// `0 <= r < |b|`.
    ///
    /// # Panics
    ///
    /// Panics when the divisor is zero.
    pub fn div_rem(&self, divisor: &Int) -> (Int, Int) {
        if divisor.is_zero() {
            panic!("attempt to divide by zero");
        }

        // Magnitude division first, sign correction after.
        let (q_mag, q_len, r_mag, r_len) = if divisor.limbs.len() > self.limbs.len() {
            (Vec::new(), 0, self.limbs.clone(), self.limbs.len())
        } else if divisor.limbs.len() == 1 {
            let mut q = vec![0 as Limb; self.limbs.len()];
            let rem = ull::limb_div(&self.limbs, divisor.limbs[0], &mut q);
            let qn = ull::norm_len(&q);
            if rem == 0 {
                (q, qn, Vec::new(), 0)
            } else {
                (q, qn, vec![rem], 1)
            }
        } else {
            let mut q = vec![0 as Limb; self.limbs.len() - divisor.limbs.len() + 1];
            let mut r = vec![0 as Limb; self.limbs.len() + 1];
            let (qn, rn) = ull::knuth_div(&self.limbs, &divisor.limbs, &mut q, &mut r);
            (q, qn, r, rn)
        };

        let mut quotient = Int::from_magnitude(Sign::Positive, q_mag, q_len);
        let mut remainder = Int::from_magnitude(Sign::Positive, r_mag, r_len);

        // The magnitude step gives |a| = |b|·q' + r'. Making the remainder
        // canonical (0 <= r < |b|) for a negative dividend costs one extra
        // step: q grows by one and r flips to |b| - r', unless r' is zero.
        if self.sign == Sign::Negative && !remainder.is_zero() {
            quotient.incr_abs(1);
            let mut flipped = vec![0 as Limb; divisor.limbs.len()];
            let n = ull::sub(&divisor.limbs, &remainder.limbs, &mut flipped);
            remainder = Int::from_magnitude(Sign::Positive, flipped, n);
        }

        if !quotient.is_zero() {
            quotient.sign = self.sign.product(divisor.sign);
        }

        (quotient, remainder)
    }

    /// Remainder of Euclidean division; always non-negative.
    pub fn rem_euclid(&self, divisor: &Int) -> Int {
        self.div_rem(divisor).1
    }
}

// ============================================================================
// Operator impls (by reference, with by-value forwarding)
// ============================================================================

impl Add for &Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Int {
        add_signed(self, rhs)
    }
}

impl Sub for &Int {
    type Output = Int;

    fn sub(self, rhs: Self) -> Int {
        sub_signed(self, rhs)
    }
}

impl Mul for &Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Int {
        mul_signed(self, rhs)
    }
}

impl Div for &Int {
    type Output = Int;

    /// Euclidean quotient; see [`Int::div_rem`].
    fn div(self, rhs: Self) -> Int {
        self.div_rem(rhs).0
    }
}

impl Rem for &Int {
    type Output = Int;

    /// Euclidean remainder, always in `[0, |rhs|)`.
    fn rem(self, rhs: Self) -> Int {
        self.div_rem(rhs).1
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        let mut r = self.clone();
        r.sign = r.sign.flip();
        r
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Int {
        &self + &rhs
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Self) -> Int {
        &self - &rhs
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Int {
        &self * &rhs
    }
}

impl Div for Int {
    type Output = Int;

    fn div(self, rhs: Self) -> Int {
        &self / &rhs
    }
}

impl Rem for Int {
    type Output = Int;

    fn rem(self, rhs: Self) -> Int {
        &self % &rhs
    }
}

impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Int {
        -&self
    }
}
