//! Floating-point multiplication, division and inverse.

use crate::int::Sign;
use crate::limb::Limb;
use crate::ull;

use super::{Float, Window};

impl Float {
    /// Product of `a` and `b` at precision `prec`.
    pub fn mul(a: &Float, b: &Float, prec: usize) -> Float {
        if a.is_zero() || b.is_zero() {
            return Float::with_prec(prec);
        }

        let mut u = Window::of(a);
        let mut v = Window::of(b);
        u.clip_to(prec);
        v.clip_to(prec);

        let mut out = vec![0 as Limb; u.len() + v.len()];
        ull::mul(u.limbs, v.limbs, &mut out);

        let mut r = Float::from_raw_parts(a.sign.product(b.sign), out, u.exp + v.exp, prec);
        r.set_prec(prec);
        r
    }

    /// Quotient of `a` by `b` at precision `prec`.
    ///
    /// The dividend is padded (or chopped) at the low end so the quotient
    /// comes out at `prec + 1` limbs, then re-capped to `prec`.
    ///
    /// # Panics
    ///
    /// Panics when the divisor is zero.
    pub fn div(a: &Float, b: &Float, prec: usize) -> Float {
        if b.is_zero() {
            panic!("attempt to divide by zero");
        }
        if a.is_zero() {
            return Float::with_prec(prec);
        }

        let sign = a.sign.product(b.sign);
        let v = Window::of(b);

        // Bring the dividend to v.len + prec limbs so the raw quotient has
        // exactly prec + 1.
        let want = prec as i64 + 1;
        let have = a.limbs.len() as i64 - v.len() as i64 + 1;
        let zeros = want - have;

        let (u_limbs, u_exp): (Vec<Limb>, i64) = if zeros > 0 {
            let zeros = zeros as usize;
            let mut padded = vec![0 as Limb; zeros + a.limbs.len()];
            padded[zeros..].copy_from_slice(&a.limbs);
            (padded, a.exp - zeros as i64)
        } else {
            let chop = (-zeros) as usize;
            (a.limbs[chop..].to_vec(), a.exp + chop as i64)
        };

        debug_assert_eq!(u_limbs.len() - v.len() + 1, prec + 1);

        let quotient = if v.len() == 1 {
            let mut q = vec![0 as Limb; u_limbs.len()];
            ull::limb_div(&u_limbs, v.limbs[0], &mut q);
            q
        } else {
            let mut q = vec![0 as Limb; u_limbs.len() - v.len() + 1];
            let mut rem = vec![0 as Limb; u_limbs.len() + 1];
            ull::knuth_div(&u_limbs, v.limbs, &mut q, &mut rem);
            q
        };

        let mut r = Float::from_raw_parts(sign, quotient, u_exp - v.exp, prec);
        r.set_prec(prec);
        r
    }

    /// Multiplicative inverse at precision `prec`: a power-of-B numerator
    /// worth exactly 1 is divided by `x`.
    ///
    /// # Panics
    ///
    /// Panics when `x` is zero.
    pub fn inv(x: &Float, prec: usize) -> Float {
        let zeros = prec + 1 + x.limbs.len();
        let mut limbs = vec![0 as Limb; zeros + 1];
        limbs[zeros] = 1;
        let dividend = Float::from_raw_parts(Sign::Positive, limbs, -(zeros as i64), prec);

        Float::div(&dividend, x, prec)
    }
}
