//! Binary floating-point numbers of configurable precision.
//!
//! A value is `sign · mantissa · B^exp` where the mantissa is a
//! little-endian limb vector and B is the limb radix. `prec` caps the
//! mantissa length in limbs: every operation takes a target precision,
//! truncates its inputs from the low end so at most `prec` limbs
//! participate, and re-caps its result. There is no hidden rounding,
//! only truncation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use crate::int::Sign;
use crate::limb::{LIMB_BITS, Limb};
use crate::ull;

mod algo;
mod arith;
mod muldiv;
mod print;

/// Process-wide default precision, in limbs. Plain relaxed accesses: the
/// register is a single word and carries no other data.
static DEFAULT_PREC: AtomicUsize = AtomicUsize::new(16 / size_of::<Limb>());

/// Returns the default precision used by [`Float::new`], in limbs.
pub fn default_prec() -> usize {
    DEFAULT_PREC.load(AtomicOrdering::Relaxed)
}

/// Sets the default precision, returning the previous value.
pub fn set_default_prec(prec: usize) -> usize {
    DEFAULT_PREC.swap(prec, AtomicOrdering::Relaxed)
}

/// Precision, in limbs, able to hold at least `bits` bits.
pub fn prec_bits(bits: usize) -> usize {
    bits.div_ceil(LIMB_BITS)
}

/// Precision, in limbs, able to hold at least `bytes` bytes.
pub fn prec_bytes(bytes: usize) -> usize {
    bytes.div_ceil(size_of::<Limb>())
}

/// Arbitrary-precision binary floating-point number.
#[derive(Debug, Clone)]
pub struct Float {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<Limb>,
    pub(crate) exp: i64,
    pub(crate) prec: usize,
}

impl Float {
    /// Zero, at the process-wide default precision.
    pub fn new() -> Self {
        Float::with_prec(default_prec())
    }

    /// Zero, at the given precision in limbs.
    pub fn with_prec(prec: usize) -> Self {
        Float {
            sign: Sign::Zero,
            limbs: Vec::new(),
            exp: 0,
            prec,
        }
    }

    /// Builds a float from its raw parts, taking ownership of the
    /// mantissa buffer. Trailing zero limbs are trimmed and the sign of an
    /// empty mantissa is scrubbed; the mantissa is not capped to `prec`.
    pub fn from_raw_parts(sign: Sign, mut limbs: Vec<Limb>, exp: i64, prec: usize) -> Self {
        limbs.truncate(ull::norm_len(&limbs));
        let sign = if limbs.is_empty() { Sign::Zero } else { sign };
        let exp = if limbs.is_empty() { 0 } else { exp };
        Float {
            sign,
            limbs,
            exp,
            prec,
        }
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
    pub fn precision(&self) -> usize {
        self.prec
    }

    #[inline]
    pub fn exp(&self) -> i64 {
        self.exp
    }

    /// Sets the precision cap. When the mantissa is longer than `prec`
    /// limbs, its lowest limbs are dropped and the exponent advances to
    /// compensate.
    pub fn set_prec(&mut self, prec: usize) {
        self.prec = prec;

        if self.limbs.len() > prec {
            let diff = self.limbs.len() - prec;
            self.limbs.drain(..diff);
            self.exp += diff as i64;
            if self.limbs.is_empty() {
                self.sign = Sign::Zero;
                self.exp = 0;
            }
        }
    }

    /// Copy truncated to precision `prec`. `clone` is the exact copy;
    /// this is the assigning copy that honors a destination precision.
    pub fn to_prec(&self, prec: usize) -> Float {
        let mut r = self.clone();
        r.set_prec(prec);
        r
    }

    pub fn set_zero(&mut self) {
        self.sign = Sign::Zero;
        self.limbs.clear();
        self.exp = 0;
    }

    /// Assigns a single-limb integer value, keeping the precision.
    pub fn set_limb(&mut self, value: Limb) {
        if value == 0 {
            self.set_zero();
            return;
        }
        self.sign = Sign::Positive;
        self.limbs.clear();
        self.limbs.push(value);
        self.exp = 0;
    }

    /// Multiplies the value by 2^n in place by widening the mantissa; the
    /// exponent is untouched, so whole-limb shifts materialize as zero
    /// limbs below the old ones.
    pub fn lshift_assign(&mut self, n: usize) {
        if self.is_zero() || n == 0 {
            return;
        }

        let limb_shift = n / LIMB_BITS;
        let bits = (n - limb_shift * LIMB_BITS) as u32;

        let old = self.limbs.len();
        let mut limbs = vec![0 as Limb; limb_shift + old];
        limbs[limb_shift..].copy_from_slice(&self.limbs);

        let carry = ull::shift::lshift_in_place(&mut limbs[limb_shift..], bits);
        if carry != 0 {
            limbs.push(carry);
        }

        self.limbs = limbs;
    }

    /// Average of two floats, computed exactly: the sum's mantissa is
    /// widened by W-1 bits while the exponent drops one limb, which halves
    /// the value without losing the low bit.
    pub fn avg(a: &Float, b: &Float, prec: usize) -> Float {
        let mut sum = Float::add(a, b, prec + 1);
        if sum.is_zero() {
            sum.prec = prec;
            return sum;
        }

        let old = sum.limbs.len();
        let mut limbs = vec![0 as Limb; old + 1];
        let carry = ull::shift::lshift(&sum.limbs, (LIMB_BITS - 1) as u32, &mut limbs[..old]);
        limbs[old] = carry;

        let mut r = Float::from_raw_parts(sum.sign, limbs, sum.exp - 1, prec);
        r.set_prec(prec);
        r
    }
}

impl Default for Float {
    fn default() -> Self {
        Float::new()
    }
}

impl Neg for &Float {
    type Output = Float;

    fn neg(self) -> Float {
        let mut r = self.clone();
        r.sign = r.sign.flip();
        r
    }
}

impl Neg for Float {
    type Output = Float;

    fn neg(self) -> Float {
        -&self
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Float {}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    /// Numeric order: sign first, then the exponent of the most
    /// significant limb, then the overlapping mantissa windows; equality
    /// additionally requires the non-overlapping tail to be zero.
    fn cmp(&self, other: &Self) -> Ordering {
        let (sa, sb) = (self.sign as i8, other.sign as i8);
        match sa.cmp(&sb) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.sign == Sign::Zero {
            return Ordering::Equal;
        }

        let flip = self.sign == Sign::Negative;
        let magnitude = cmp_magnitude(&self.limbs, self.exp, &other.limbs, other.exp);
        if flip { magnitude.reverse() } else { magnitude }
    }
}

/// Compares two non-empty mantissa/exponent pairs by value.
pub(crate) fn cmp_magnitude(a: &[Limb], a_exp: i64, b: &[Limb], b_exp: i64) -> Ordering {
    let a_top = a_exp + a.len() as i64;
    let b_top = b_exp + b.len() as i64;

    match a_top.cmp(&b_top) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Tops align; compare the overlapping windows, then require the
    // longer tail to be zero for equality.
    if a.len() > b.len() {
        let skip = a.len() - b.len();
        match ull::cmp(&a[skip..], b) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if a[..skip].iter().any(|&d| d != 0) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    } else if a.len() < b.len() {
        let skip = b.len() - a.len();
        match ull::cmp(a, &b[skip..]) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if b[..skip].iter().any(|&d| d != 0) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    } else {
        ull::cmp(a, b)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

// ============================================================================
// Clipped windows over a mantissa
// ============================================================================

/// Borrowed view of a mantissa with its exponent; arithmetic clips these
/// to the target precision by dropping low limbs.
#[derive(Clone, Copy)]
pub(crate) struct Window<'a> {
    pub limbs: &'a [Limb],
    pub exp: i64,
}

impl<'a> Window<'a> {
    pub fn of(x: &'a Float) -> Self {
        Window {
            limbs: &x.limbs,
            exp: x.exp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Exponent one past the most significant limb.
    #[inline]
    pub fn top(&self) -> i64 {
        self.exp + self.limbs.len() as i64
    }

    #[inline]
    pub fn top_limb(&self) -> Limb {
        self.limbs[self.limbs.len() - 1]
    }

    /// Drops low limbs so at most `prec` remain, advancing the exponent.
    pub fn clip_to(&mut self, prec: usize) {
        if self.limbs.len() > prec {
            let diff = self.limbs.len() - prec;
            self.limbs = &self.limbs[diff..];
            self.exp += diff as i64;
        }
    }

    /// Drops the `n` most significant limbs.
    pub fn shrink_top(&mut self, n: usize) {
        self.limbs = &self.limbs[..self.limbs.len() - n];
    }
}
