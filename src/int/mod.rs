//! Arbitrary-precision signed integer.
//!
//! `Int` pairs a three-valued sign with a normalized little-endian limb
//! magnitude. A zero magnitude always carries `Sign::Zero`; a non-zero
//! magnitude always has a non-zero top limb. All arithmetic splits on
//! signs and delegates magnitude work to the `ull` kernel.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::limb::{DECIMAL_BASE, Limb};
use crate::ull;

mod algo;
mod arith;

/// Sign of an integer, rational or floating-point value.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    #[inline]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Sign of a product.
    #[inline]
    pub fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// Arbitrary-precision signed integer.
#[derive(Debug, Clone)]
pub struct Int {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<Limb>,
}

impl Int {
    pub const fn new() -> Self {
        Int {
            sign: Sign::Zero,
            limbs: Vec::new(),
        }
    }

    pub fn from_limb(value: Limb) -> Self {
        if value == 0 {
            Int::new()
        } else {
            Int {
                sign: Sign::Positive,
                limbs: vec![value],
            }
        }
    }

    pub fn one() -> Self {
        Int::from_limb(1)
    }

    /// Builds an integer from a sign and a caller-owned magnitude buffer,
    /// taking ownership of the buffer. Trailing zero limbs are trimmed and
    /// the sign of a zero magnitude is scrubbed.
    pub fn from_raw_parts(sign: Sign, mut limbs: Vec<Limb>) -> Self {
        limbs.truncate(ull::norm_len(&limbs));
        let sign = if limbs.is_empty() { Sign::Zero } else { sign };
        Int { sign, limbs }
    }

    /// Internal constructor from a magnitude buffer of `len` significant
    /// limbs; normalizes and resolves the zero sign.
    pub(crate) fn from_magnitude(sign: Sign, mut limbs: Vec<Limb>, len: usize) -> Self {
        limbs.truncate(len);
        Int::from_raw_parts(sign, limbs)
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.limbs.is_empty() && (self.limbs[0] & 1) == 1
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Whether the representation invariants hold. The constructors keep
    /// them by construction; this is an observable check for tests.
    pub fn is_normalized(&self) -> bool {
        match self.sign {
            Sign::Zero => self.limbs.is_empty(),
            _ => self.limbs.last().is_some_and(|&top| top != 0),
        }
    }

    /// Magnitude limbs, least significant first.
    #[inline]
    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn abs(&self) -> Int {
        let mut r = self.clone();
        if r.sign == Sign::Negative {
            r.sign = Sign::Positive;
        }
        r
    }

    /// Adds `value` to the magnitude, ignoring the sign.
    pub fn incr_abs(&mut self, value: Limb) {
        let carry = ull::limb_incr(&mut self.limbs, value);
        if carry != 0 {
            self.limbs.push(carry);
        }
        if self.sign == Sign::Zero && !self.limbs.is_empty() {
            self.sign = Sign::Positive;
        }
    }

    /// Subtracts `value` from the magnitude, ignoring the sign.
    /// Assumes the magnitude is at least `value`.
    pub fn decr_abs(&mut self, value: Limb) {
        let borrow = ull::limb_decr(&mut self.limbs, value);
        debug_assert_eq!(borrow, 0);
        let len = ull::norm_len(&self.limbs);
        self.limbs.truncate(len);
        if self.limbs.is_empty() {
            self.sign = Sign::Zero;
        }
    }

    /// Upper bound on the byte length of the decimal representation,
    /// including a possible leading minus.
    pub fn decimal_len_bound(&self) -> usize {
        let sign = (self.sign == Sign::Negative) as usize;
        sign + ull::print::size_bound(self.limbs.len().max(1))
    }

    /// Writes the decimal representation into `out`, returning the number
    /// of bytes written (no terminator).
    ///
    /// When `out` is smaller than [`Int::decimal_len_bound`] nothing is
    /// written and 0 is returned, even though the buffer might actually
    /// have sufficed; callers that need certainty size with the bound.
    pub fn write_decimal(&self, out: &mut [u8]) -> usize {
        if self.is_zero() {
            if out.is_empty() {
                return 0;
            }
            out[0] = b'0';
            return 1;
        }

        if out.len() < self.decimal_len_bound() {
            return 0;
        }

        let mut written = 0;
        if self.sign == Sign::Negative {
            out[0] = b'-';
            written = 1;
        }

        written + ull::print::print(&self.limbs, &mut out[written..])
    }

    /// Parses a decimal integer, `[+-]?[0-9]+`. Parsing stops at the first
    /// non-digit; what was consumed up to that point is the value.
    pub fn parse_decimal(s: &str) -> Int {
        let bytes = s.as_bytes();
        let mut pos = 0;
        let mut sign = Sign::Positive;

        match bytes.first() {
            Some(b'-') => {
                sign = Sign::Negative;
                pos = 1;
            }
            Some(b'+') => pos = 1,
            _ => {}
        }

        let mut x = Int::new();

        // Digits are folded DECIMAL_SHIFT at a time: one limb-sized chunk
        // costs a single multiply of the accumulator.
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            let mut chunk: Limb = 0;
            let mut base: Limb = 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() && base < DECIMAL_BASE {
                chunk = chunk * 10 + (bytes[pos] - b'0') as Limb;
                base *= 10;
                pos += 1;
            }
            x = &x * &Int::from_limb(base);
            x.incr_abs(chunk);
        }

        if sign == Sign::Negative && !x.is_zero() {
            x.sign = Sign::Negative;
        }
        x
    }
}

impl Default for Int {
    fn default() -> Self {
        Int::new()
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.sign as i8, other.sign as i8);
        match a.cmp(&b) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let mag = ull::cmp(&self.limbs, &other.limbs);
        if self.sign == Sign::Negative {
            mag.reverse()
        } else {
            mag
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

fn from_u128_magnitude(sign: Sign, mut v: u128) -> Int {
    let mut limbs = Vec::new();
    while v != 0 {
        limbs.push(v as Limb);
        v >>= Limb::BITS;
    }
    Int::from_raw_parts(sign, limbs)
}

impl From<u128> for Int {
    fn from(v: u128) -> Self {
        from_u128_magnitude(Sign::Positive, v)
    }
}

impl From<i128> for Int {
    fn from(v: i128) -> Self {
        let sign = if v < 0 { Sign::Negative } else { Sign::Positive };
        from_u128_magnitude(sign, v.unsigned_abs())
    }
}

impl From<u64> for Int {
    fn from(v: u64) -> Self {
        Int::from(v as u128)
    }
}

impl From<i64> for Int {
    fn from(v: i64) -> Self {
        Int::from(v as i128)
    }
}

impl From<u32> for Int {
    fn from(v: u32) -> Self {
        Int::from(v as u128)
    }
}

impl From<i32> for Int {
    fn from(v: i32) -> Self {
        Int::from(v as i128)
    }
}

// ============================================================================
// Shifts
// ============================================================================

impl std::ops::Shr<usize> for &Int {
    type Output = Int;

    /// Shifts the magnitude right by `n` bits; the sign is untouched.
    /// For non-negative values this is floor division by 2^n.
    fn shr(self, n: usize) -> Int {
        let limb_shift = n / crate::limb::LIMB_BITS;

        if limb_shift >= self.limbs.len() {
            return Int::new();
        }

        let bits = (n - limb_shift * crate::limb::LIMB_BITS) as u32;
        let len = self.limbs.len() - limb_shift;
        let mut out = vec![0 as Limb; len];
        ull::shift::rshift(&self.limbs[limb_shift..], bits, &mut out);

        Int::from_magnitude(self.sign, out, len)
    }
}

impl std::ops::Shr<usize> for Int {
    type Output = Int;

    fn shr(self, n: usize) -> Int {
        &self >> n
    }
}

impl std::ops::ShrAssign<usize> for Int {
    /// In-place magnitude right shift through the overlapping-window
    /// kernel variant.
    fn shr_assign(&mut self, n: usize) {
        let limb_shift = n / crate::limb::LIMB_BITS;

        if limb_shift >= self.limbs.len() {
            *self = Int::new();
            return;
        }

        let bits = (n - limb_shift * crate::limb::LIMB_BITS) as u32;
        let len = self.limbs.len() - limb_shift;
        ull::shift::rshift_offset(&mut self.limbs, limb_shift, len, bits);
        self.limbs.truncate(ull::norm_len(&self.limbs[..len]));
        if self.limbs.is_empty() {
            self.sign = Sign::Zero;
        }
    }
}

// ============================================================================
// Decimal formatting and parsing
// ============================================================================

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = vec![0u8; self.decimal_len_bound()];
        let n = self.write_decimal(&mut buf);
        f.write_str(&String::from_utf8_lossy(&buf[..n]))
    }
}

/// Error returned when a string holds no leading decimal integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntError;

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no digits to parse")
    }
}

impl std::error::Error for ParseIntError {}

impl FromStr for Int {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = match s.as_bytes().first() {
            Some(b'+' | b'-') => &s[1..],
            _ => s,
        };
        if !digits.as_bytes().first().is_some_and(u8::is_ascii_digit) {
            return Err(ParseIntError);
        }
        Ok(Int::parse_decimal(s))
    }
}
