//! Integer algorithms: exponentiation, integer square root, gcd and
//! Bézout coefficients, factorial.

use crate::limb::{LIMB_BITS, bit_len};

use super::{Int, Sign};

impl Int {
    pub fn square(&self) -> Int {
        self * self
    }

    /// Exponentiation by squaring over the binary expansion of `exp`.
    ///
    /// # Panics
    ///
    /// Panics when the exponent is negative.
    pub fn pow(&self, exp: &Int) -> Int {
        if exp.sign == Sign::Negative {
            panic!("attempt to raise to a negative power");
        }

        let mut e = exp.clone();
        let mut factor = self.clone();
        let mut result = Int::one();

        while !e.is_zero() {
            if e.is_odd() {
                result = &result * &factor;
            }
            factor = factor.square();
            e >>= 1;
        }

        result
    }

    /// Modular exponentiation: `self^exp mod modulus`, reducing after
    /// every product so intermediates stay below `modulus²`.
    ///
    /// # Panics
    ///
    /// Panics when the exponent is negative or the modulus is zero.
    pub fn modpow(&self, exp: &Int, modulus: &Int) -> Int {
        if exp.sign == Sign::Negative {
            panic!("attempt to raise to a negative power");
        }

        let mut e = exp.clone();
        let mut factor = self.rem_euclid(modulus);
        let mut result = Int::one();

        while !e.is_zero() {
            if e.is_odd() {
                result = (&result * &factor).rem_euclid(modulus);
            }
            factor = factor.square().rem_euclid(modulus);
            e >>= 1;
        }

        result
    }

    /// Index of the highest set bit (0-based). Must not be called on zero.
    fn highest_bit_index(&self) -> usize {
        debug_assert!(!self.limbs.is_empty());
        let top = self.limbs[self.limbs.len() - 1];
        (self.limbs.len() - 1) * LIMB_BITS + bit_len(top) - 1
    }

    /// Integer square root by Newton iteration: `isqrt(n)² <= n < (isqrt(n)+1)²`.
    ///
    /// Yields zero for any non-positive input. The initial guess
    /// `n >> floor(h/2)` (h the highest bit index) is at least the true
    /// root, so the iteration decreases monotonically; it stops as soon as
    /// a step fails to decrease, with a 15-iteration backstop.
    pub fn isqrt(&self) -> Int {
        if self.sign != Sign::Positive {
            return Int::new();
        }

        let h = self.highest_bit_index();
        let mut x = self >> (h / 2);

        for _ in 0..15 {
            let next = &(&(self / &x) + &x) >> 1;
            if next >= x {
                break;
            }
            x = next;
        }

        x
    }

    /// Positive greatest common divisor by the Euclidean algorithm.
    pub fn gcd(&self, other: &Int) -> Int {
        let mut dividend = self.abs();
        let mut divisor = other.abs();

        if divisor.is_zero() {
            return dividend;
        }

        loop {
            let (_, remainder) = dividend.div_rem(&divisor);
            if remainder.is_zero() {
                return divisor;
            }
            dividend = std::mem::replace(&mut divisor, remainder);
        }
    }

    /// Extended Euclidean algorithm: returns `(g, u, v)` with
    /// `u·self + v·other = g = gcd(self, other)` and `g >= 0`.
    ///
    /// The coefficient pairs are rotated alongside the division chain:
    /// `(u0, u1) <- (u1, u0 - q·u1)` at every step, so on exit `u0·a + v0·b`
    /// equals the last non-zero divisor.
    pub fn gcd_bezout(&self, other: &Int) -> (Int, Int, Int) {
        let mut dividend = self.clone();
        let mut divisor = other.clone();

        let mut u0 = Int::one();
        let mut u1 = Int::new();
        let mut v0 = Int::new();
        let mut v1 = Int::one();

        if divisor.is_zero() {
            return match self.sign {
                Sign::Negative => (-self, -u0, v0),
                _ => (dividend, u0, v0),
            };
        }

        loop {
            let (q, r) = dividend.div_rem(&divisor);

            let u_next = &u0 - &(&q * &u1);
            u0 = std::mem::replace(&mut u1, u_next);

            let v_next = &v0 - &(&q * &v1);
            v0 = std::mem::replace(&mut v1, v_next);

            dividend = std::mem::replace(&mut divisor, r);
            if divisor.is_zero() {
                break;
            }
        }

        let mut g = dividend;
        if g.sign == Sign::Negative {
            g.sign = Sign::Positive;
            u0 = -u0;
            v0 = -v0;
        }

        (g, u0, v0)
    }

    /// Factorial of `self`; a negative input yields zero.
    pub fn factorial(&self) -> Int {
        if self.sign == Sign::Negative {
            return Int::new();
        }

        let mut i = self.clone();
        let mut acc = Int::one();

        while !i.is_zero() {
            acc = &acc * &i;
            i.decr_abs(1);
        }

        acc
    }
}
