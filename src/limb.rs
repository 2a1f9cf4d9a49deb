//! Limb configuration.
//!
//! The internal radix is B = 2^W where W is the limb width in bits,
//! selected at build time through the `limb-8`/`limb-16`/`limb-32`/`limb-64`
//! cargo features (64 by default). Every width has a double-width `Wide`
//! type available for products and two-limb dividends; for 64-bit limbs
//! that is `u128`.

#[cfg(feature = "limb-8")]
pub type Limb = u8;
#[cfg(feature = "limb-8")]
pub type Wide = u16;

#[cfg(all(feature = "limb-16", not(feature = "limb-8")))]
pub type Limb = u16;
#[cfg(all(feature = "limb-16", not(feature = "limb-8")))]
pub type Wide = u32;

#[cfg(all(feature = "limb-32", not(feature = "limb-8"), not(feature = "limb-16")))]
pub type Limb = u32;
#[cfg(all(feature = "limb-32", not(feature = "limb-8"), not(feature = "limb-16")))]
pub type Wide = u64;

#[cfg(not(any(feature = "limb-8", feature = "limb-16", feature = "limb-32")))]
pub type Limb = u64;
#[cfg(not(any(feature = "limb-8", feature = "limb-16", feature = "limb-32")))]
pub type Wide = u128;

/// Limb width W in bits.
pub const LIMB_BITS: usize = Limb::BITS as usize;

/// Largest power of ten that fits in a single limb, and its exponent.
/// These drive decimal conversion in both directions: digits are moved
/// `DECIMAL_SHIFT` at a time so each step is one limb-sized operation.
#[cfg(feature = "limb-8")]
pub const DECIMAL_BASE: Limb = 100;
#[cfg(feature = "limb-8")]
pub const DECIMAL_SHIFT: usize = 2;

#[cfg(all(feature = "limb-16", not(feature = "limb-8")))]
pub const DECIMAL_BASE: Limb = 10_000;
#[cfg(all(feature = "limb-16", not(feature = "limb-8")))]
pub const DECIMAL_SHIFT: usize = 4;

#[cfg(all(feature = "limb-32", not(feature = "limb-8"), not(feature = "limb-16")))]
pub const DECIMAL_BASE: Limb = 1_000_000_000;
#[cfg(all(feature = "limb-32", not(feature = "limb-8"), not(feature = "limb-16")))]
pub const DECIMAL_SHIFT: usize = 9;

#[cfg(not(any(feature = "limb-8", feature = "limb-16", feature = "limb-32")))]
pub const DECIMAL_BASE: Limb = 10_000_000_000_000_000_000;
#[cfg(not(any(feature = "limb-8", feature = "limb-16", feature = "limb-32")))]
pub const DECIMAL_SHIFT: usize = 19;

/// Number of significant bits in a limb value (0 for 0).
#[inline]
pub fn bit_len(d: Limb) -> usize {
    (Limb::BITS - d.leading_zeros()) as usize
}
