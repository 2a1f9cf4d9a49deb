//! Arbitrary-precision arithmetic.
//!
//! Three numeric kinds built on one multi-limb kernel:
//!
//! - [`Int`]: signed big integers with Euclidean division, gcd/Bézout,
//!   integer square root, exponentiation and factorial.
//! - [`Rat`]: rational numbers kept in canonical form over [`Int`].
//! - [`Float`]: binary floating-point numbers whose mantissa length is
//!   capped by a per-value precision, with truncating arithmetic, decimal
//!   printing, and π by the Gauss-Legendre iteration.
//!
//! The limb width is a build-time choice (`limb-8` through `limb-64`
//! cargo features); all algorithms are written against the [`limb::Limb`]
//! and [`limb::Wide`] pair.

pub mod limb;
pub mod ull;

mod float;
mod int;
mod rat;

#[cfg(test)]
mod tests;

pub use float::{Float, default_prec, prec_bits, prec_bytes, set_default_prec};
pub use int::{Int, ParseIntError, Sign};
pub use limb::{LIMB_BITS, Limb};
pub use rat::Rat;
