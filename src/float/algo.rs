//! Floating-point square root, integer exponentiation, and π.

use crate::int::{Int, Sign};
use crate::limb::{LIMB_BITS, Limb};

use super::Float;

impl Float {
    /// Square root at precision `prec`.
    ///
    /// The mantissa is padded or clipped to `2·prec` limbs, adjusted so
    /// the exponent comes out even, and handed to the integer square
    /// root; the result's exponent is half the adjusted one.
    ///
    /// # Panics
    ///
    /// Panics when `x` is negative.
    pub fn sqrt(x: &Float, prec: usize) -> Float {
        if x.is_zero() {
            return Float::with_prec(prec);
        }
        if x.sign == Sign::Negative {
            panic!("attempt to take the square root of a negative number");
        }

        let odd_top = ((x.exp + x.limbs.len() as i64) & 1) as usize;
        let tsize = 2 * prec - odd_top;

        let (mantissa, exp): (Vec<Limb>, i64) = if x.limbs.len() < tsize {
            let pad = tsize - x.limbs.len();
            let mut limbs = vec![0 as Limb; tsize];
            limbs[pad..].copy_from_slice(&x.limbs);
            (limbs, x.exp - pad as i64)
        } else {
            let chop = x.limbs.len() - tsize;
            (x.limbs[chop..].to_vec(), x.exp + chop as i64)
        };

        debug_assert_eq!(exp & 1, 0);

        let root = Int::from_raw_parts(Sign::Positive, mantissa).isqrt();

        let mut r = Float::from_raw_parts(Sign::Positive, root.limbs, exp / 2, prec);
        r.set_prec(prec);
        r
    }

    /// Raises `base` to an unsigned integer power by squaring, with every
    /// intermediate held at precision `prec`.
    pub fn pow_uint(base: &Float, exp: u64, prec: usize) -> Float {
        let mut e = exp;
        let mut b = base.to_prec(prec);

        let mut result = Float::with_prec(prec);
        result.set_limb(1);
        if e & 1 != 0 {
            result = b.clone();
        }

        e >>= 1;
        while e != 0 {
            b = Float::mul(&b, &b, prec);
            if e & 1 != 0 {
                result = Float::mul(&result, &b, prec);
            }
            e >>= 1;
        }

        result
    }

    /// π at precision `prec`, by the Gauss-Legendre iteration.
    pub fn pi(prec: usize) -> Float {
        // a = 1, b = 1/√2, t = 1/4, p = 1.
        let mut a = Float::with_prec(prec);
        a.set_limb(1);

        let mut two = Float::with_prec(prec);
        two.set_limb(2);
        let mut b = Float::inv(&Float::sqrt(&two, prec), prec);

        // A single high limb worth 2^(W-2) one limb down is exactly 1/4.
        let mut t = Float::with_prec(prec);
        t.set_limb(1 << (LIMB_BITS - 2));
        t.exp = -1;

        let mut p = Float::with_prec(prec);
        p.set_limb(1);

        for _ in 0..15 {
            let a_next = Float::avg(&a, &b, prec);
            let ab = Float::mul(&a, &b, prec);
            let b_next = Float::sqrt(&ab, prec);

            // t <- t - p·(a' - a)²
            let delta = Float::sub(&a_next, &a, prec);
            let delta_sq = Float::mul(&delta, &delta, prec);
            let scaled = Float::mul(&p, &delta_sq, prec);
            let t_next = Float::sub(&t, &scaled, prec);

            p.lshift_assign(1);

            // Converged when a' and b' agree above their lowest limb and
            // the previous iterates differ by at most 2^(W/4) in theirs.
            let done = drop_lowest(&a_next) == drop_lowest(&b_next)
                && limb_delta(a.limbs.first(), b.limbs.first()) <= (1 as Limb) << (LIMB_BITS / 4);

            a = a_next;
            b = b_next;
            t = t_next;

            if done {
                break;
            }
        }

        // π ≈ (a + b)² / (4t)
        let sum = Float::add(&a, &b, prec);
        let sum_sq = Float::mul(&sum, &sum, prec);
        t.lshift_assign(2);
        Float::div(&sum_sq, &t, prec)
    }
}

/// Copy of `x` without its least significant limb.
fn drop_lowest(x: &Float) -> Float {
    if x.limbs.len() <= 1 {
        return Float::with_prec(x.prec);
    }
    Float::from_raw_parts(x.sign, x.limbs[1..].to_vec(), x.exp, x.prec)
}

/// Absolute difference of two low limbs, in wrapping arithmetic.
fn limb_delta(a: Option<&Limb>, b: Option<&Limb>) -> Limb {
    let a = a.copied().unwrap_or(0);
    let b = b.copied().unwrap_or(0);
    let ab = a.wrapping_sub(b);
    let ba = b.wrapping_sub(a);
    ab.min(ba)
}
