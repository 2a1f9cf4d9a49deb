//! Decimal printing of floating-point values.
//!
//! A value m·B^exp is rewritten as d·10^n with d an integer: 10^n is
//! computed at doubled precision and multiplied in (exp < 0) or divided
//! out (exp > 0), then residual limb shifts make the mantissa a plain
//! integer. The output is `[-]<digits>` with an `e<±n>` suffix exactly
//! when n is non-zero.

use crate::int::{Int, Sign};
use crate::limb::{LIMB_BITS, Limb};
use crate::ull;

use super::Float;

/// 10^n as a float, computed at precision `2·prec` so the rescale does
/// not eat into the digits being printed.
fn pow_ten(n: u64, prec: usize) -> Float {
    let mut ten = Float::with_prec(prec);
    ten.set_limb(10);
    Float::pow_uint(&ten, n, 2 * prec)
}

/// Decimal exponent for a binary exponent of `k` bits:
/// floor(k·log2 / log10).
fn dec_exp(k: u64) -> i64 {
    (k as f64 * std::f64::consts::LN_2 / std::f64::consts::LN_10).floor() as i64
}

impl Float {
    /// Upper bound on the byte length printed for a float of precision
    /// `prec` limbs; size [`Float::write_decimal`] buffers with this.
    pub fn digits_for_prec(prec: usize) -> usize {
        ull::print::size_bound(2 * prec + 3) + 22
    }

    /// Rewrites the value as `d·10^n` and returns `(d, n)` with `d` an
    /// integer carrying the sign.
    pub fn dec_digits(&self) -> (Int, i64) {
        if self.exp == 0 {
            // The mantissa already is the digit string.
            return (Int::from_raw_parts(self.sign, self.limbs.clone()), 0);
        }

        if self.exp < 0 {
            // x = m·2^-k = (m·10^n·2^-k)·10^-n with n = floor(k·log2/log10),
            // so multiplying by 10^n leaves an exponent near zero.
            let k = (-self.exp) as u64 * LIMB_BITS as u64;
            let n = dec_exp(k);

            let ten_n = pow_ten(n as u64, self.prec);
            let mut digits = Float::mul(self, &ten_n, 2 * self.prec);
            let sign = digits.sign;

            if digits.exp < 0 {
                // Drop the fractional limbs below B^0.
                let frac = (-digits.exp) as usize;
                if frac >= digits.limbs.len() {
                    digits.limbs.clear();
                } else {
                    digits.limbs.drain(..frac);
                }
            } else if digits.exp > 0 {
                let pad = digits.exp as usize;
                digits.lshift_assign(LIMB_BITS * pad);
            }

            (Int::from_raw_parts(sign, digits.limbs), -n)
        } else {
            // x = m·2^k = (m·2^k/10^n)·10^n.
            let k = self.exp as u64 * LIMB_BITS as u64;
            let n = dec_exp(k);

            let ten_n = pow_ten(n as u64, self.prec);
            let mut digits = Float::div(self, &ten_n, self.prec);
            let sign = digits.sign;

            if digits.exp > 0 {
                let pad = digits.exp as usize;
                digits.lshift_assign(LIMB_BITS * pad);
            } else if digits.exp < 0 {
                let frac = (-digits.exp) as usize;
                debug_assert!(frac <= digits.limbs.len());
                if frac >= digits.limbs.len() {
                    digits.limbs.clear();
                } else {
                    digits.limbs.drain(..frac);
                }
            }

            (Int::from_raw_parts(sign, digits.limbs), n)
        }
    }

    /// Decimal representation, `[-]<digits>[e<±n>]`.
    pub fn to_decimal(&self) -> String {
        let (digits, n) = self.dec_digits();
        let mut s = digits.to_string();
        if n != 0 {
            s.push('e');
            s.push_str(&n.to_string());
        }
        s
    }

    /// Writes the decimal representation into `out`, returning the number
    /// of bytes written, or 0 when `out` is smaller than the precomputed
    /// upper bound. Same buffer discipline as [`Int::write_decimal`].
    pub fn write_decimal(&self, out: &mut [u8]) -> usize {
        let (digits, n) = self.dec_digits();

        let exp_len = if n == 0 {
            0
        } else {
            1 + n.to_string().len()
        };
        let bound =
            ull::print::size_bound(digits.magnitude().len().max(1)) + 1 + exp_len;
        if out.len() < bound {
            return 0;
        }

        let mut written = 0;
        if digits.sign() == Sign::Negative {
            out[0] = b'-';
            written = 1;
        }

        let mag: &[Limb] = digits.magnitude();
        if mag.is_empty() {
            out[written] = b'0';
            written += 1;
        } else {
            written += ull::print::print(mag, &mut out[written..]);
        }

        if n != 0 {
            out[written] = b'e';
            written += 1;
            for byte in n.to_string().bytes() {
                out[written] = byte;
                written += 1;
            }
        }

        written
    }
}
