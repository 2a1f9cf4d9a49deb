//! Knuth Algorithm D division and the single-limb fast path.

use crate::limb::{LIMB_BITS, Limb, Wide, bit_len};
use crate::ull::shift;

const BASE: Wide = 1 << LIMB_BITS;

/// Divides `a` by `b` using Knuth's Algorithm D (TAOCP vol. 2, §4.3.1).
///
/// Works like gradeschool long division: each step divides the divisor
/// length plus one top limbs of the running window by the divisor, which
/// yields one quotient limb and a partial remainder. The quotient limb is
/// estimated from the top two limbs of the window and the top limb of the
/// (normalized) divisor, then corrected.
///
/// Assumes `a.len() >= b.len() >= 2`. `quo` must hold at least
/// `a.len() - b.len() + 1` limbs. `rem` must hold `a.len() + 1` limbs even
/// though the remainder fits in `b.len()`: the normalized copy of the
/// dividend lives there during the computation.
///
/// Returns the normalized lengths `(quotient, remainder)`.
pub fn knuth_div(a: &[Limb], b: &[Limb], quo: &mut [Limb], rem: &mut [Limb]) -> (usize, usize) {
    let bs = b.len();
    debug_assert!(a.len() >= bs && bs >= 2);

    // D1: shift dividend and divisor left so the divisor's top bit is set
    // (the quotient is unchanged). If the dividend's top limb is still at
    // least the divisor's, append a leading zero so the first estimation
    // window is valid.
    let d = (LIMB_BITS - bit_len(b[bs - 1])) as u32;
    let mut v = vec![0 as Limb; bs];
    let carry = shift::lshift(b, d, &mut v);
    debug_assert_eq!(carry, 0);

    let mut size_u = a.len();
    let carry = shift::lshift(a, d, rem);
    if carry != 0 || rem[size_u - 1] >= v[bs - 1] {
        rem[size_u] = carry;
        size_u += 1;
    }

    let size_diff = size_u - bs;
    let vm1 = v[bs - 1] as Wide;
    let vm2 = v[bs - 2] as Wide;

    // D2-D7: one quotient limb per window, highest first.
    for j in (0..size_diff).rev() {
        // D3: estimate the quotient limb from the top two window limbs;
        // the estimate is at most one too large after the correction loop.
        let utop = rem[j + bs];
        debug_assert!((utop as Wide) <= vm1);
        let uu = ((utop as Wide) << LIMB_BITS) | rem[j + bs - 1] as Wide;
        let mut q_tilde = uu / vm1;
        let mut r = uu - vm1 * q_tilde;

        while vm2 * q_tilde > ((r << LIMB_BITS) | rem[j + bs - 2] as Wide) {
            q_tilde -= 1;
            r += vm1;
            if r >= BASE {
                break;
            }
        }
        if q_tilde == BASE {
            q_tilde -= 1;
        }
        debug_assert!(q_tilde < BASE);

        // D4: subtract q̃·v from the window.
        let mut zhi: Wide = 0;
        for i in 0..bs {
            let z = zhi + q_tilde * v[i] as Wide;
            zhi = z >> LIMB_BITS;
            let zlo = z as Limb;
            if rem[j + i] < zlo {
                zhi += 1;
            }
            rem[j + i] = rem[j + i].wrapping_sub(zlo);
        }

        // D5/D6: the untouched top limb detects an over-estimate; add the
        // divisor back and decrement the quotient limb when it happens.
        if (utop as Wide) < zhi {
            let mut carry: Wide = 0;
            for i in 0..bs {
                carry += rem[j + i] as Wide + v[i] as Wide;
                rem[j + i] = carry as Limb;
                carry >>= LIMB_BITS;
            }
            q_tilde -= 1;
        }

        // The window's top limb has been consumed either way.
        rem[j + bs] = 0;

        quo[j] = q_tilde as Limb;
    }

    // D8: undo the normalization shift to recover the true remainder.
    shift::rshift_offset(rem, 0, bs, d);

    let mut rems = size_u;
    while rems > 0 && rem[rems - 1] == 0 {
        rems -= 1;
    }
    let mut quos = size_diff;
    while quos > 0 && quo[quos - 1] == 0 {
        quos -= 1;
    }

    (quos, rems)
}

/// Divides `a` by the single limb `b`, writing the quotient limbs and
/// returning the remainder. `quo` may be the same storage as `a` was read
/// from when the caller owns it; limbs are consumed from the top down.
pub fn limb_div(a: &[Limb], b: Limb, quo: &mut [Limb]) -> Limb {
    let mut rem: Wide = 0;

    for i in (0..a.len()).rev() {
        rem = (rem << LIMB_BITS) | a[i] as Wide;
        let hi = (rem / b as Wide) as Limb;
        quo[i] = hi;
        rem -= hi as Wide * b as Wide;
    }

    rem as Limb
}

/// In-place single-limb division; returns the remainder.
pub fn limb_div_in_place(a: &mut [Limb], b: Limb) -> Limb {
    let mut rem: Wide = 0;

    for i in (0..a.len()).rev() {
        rem = (rem << LIMB_BITS) | a[i] as Wide;
        let hi = (rem / b as Wide) as Limb;
        a[i] = hi;
        rem -= hi as Wide * b as Wide;
    }

    rem as Limb
}
