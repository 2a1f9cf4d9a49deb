//! Floating-point addition and subtraction.
//!
//! Both reduce to magnitude operations on aligned windows: operands are
//! clipped to the target precision from the low end, materialized into
//! the result span, and combined with a rippling kernel pass. The one
//! genuinely hard case is subtraction with cancellation at the high end,
//! which gets a dedicated path so the precision lost to cancelled limbs
//! is recovered from below the naive clipping point.

use crate::int::Sign;
use crate::limb::Limb;
use crate::ull;

use super::{Float, Window, cmp_magnitude};

impl Float {
    /// Sum of `a` and `b` at precision `prec`.
    pub fn add(a: &Float, b: &Float, prec: usize) -> Float {
        if a.is_zero() {
            return b.to_prec(prec);
        }
        if b.is_zero() {
            return a.to_prec(prec);
        }

        if a.sign == b.sign {
            add_mag(Window::of(a), Window::of(b), a.sign, prec)
        } else {
            sub_mag(Window::of(a), Window::of(b), a.sign, prec)
        }
    }

    /// Difference of `a` and `b` at precision `prec`.
    pub fn sub(a: &Float, b: &Float, prec: usize) -> Float {
        if b.is_zero() {
            return a.to_prec(prec);
        }
        if a.is_zero() {
            let mut r = b.to_prec(prec);
            r.sign = r.sign.flip();
            return r;
        }

        if a.sign != b.sign {
            add_mag(Window::of(a), Window::of(b), a.sign, prec)
        } else {
            sub_mag(Window::of(a), Window::of(b), a.sign, prec)
        }
    }
}

/// Magnitude addition; the result carries `sign`.
fn add_mag(a: Window, b: Window, sign: Sign, prec: usize) -> Float {
    // u is the operand whose top limb sits highest.
    let (mut u, mut v) = if a.top() < b.top() { (b, a) } else { (a, b) };

    let hediff = u.top() - v.top();

    u.clip_to(prec);
    if hediff >= prec as i64 {
        // v lies entirely under u's clipped tail.
        return Float::from_raw_parts(sign, u.limbs.to_vec(), u.exp, prec);
    }
    v.clip_to(prec - hediff as usize);

    // Materialize u over the joint span and ripple v in; one extra limb
    // catches the carry out of the top.
    let span_bot = u.exp.min(v.exp);
    let len = (u.top() - span_bot) as usize;
    let mut buf = vec![0 as Limb; len + 1];
    let u_at = (u.exp - span_bot) as usize;
    buf[u_at..u_at + u.len()].copy_from_slice(u.limbs);

    ull::add_assign_at(&mut buf, v.limbs, (v.exp - span_bot) as usize);

    let mut r = Float::from_raw_parts(sign, buf, span_bot, prec);
    r.set_prec(prec);
    r
}

/// Magnitude subtraction `|a| - |b|`; the result carries `sign` when
/// `|a| > |b|`, the flipped sign when `|a| < |b|`, and is zero otherwise.
fn sub_mag(a: Window, b: Window, sign: Sign, prec: usize) -> Float {
    let (mut u, mut v, sign) = match cmp_magnitude(a.limbs, a.exp, b.limbs, b.exp) {
        std::cmp::Ordering::Equal => return Float::with_prec(prec),
        std::cmp::Ordering::Greater => (a, b, sign),
        std::cmp::Ordering::Less => (b, a, sign.flip()),
    };

    if u.top() - v.top() <= 1 {
        // The leading limbs are close enough to cancel.
        if let Some(r) = sub_cancellation(&mut u, &mut v, sign, prec) {
            return r;
        }
    }

    sub_general(u, v, sign, prec)
}

/// General-case subtraction: clip to `prec`, materialize `u` over the
/// joint span and subtract `v` in place. Valid only when no high-end
/// cancellation can occur (the cancellation path has run first).
fn sub_general(mut u: Window, mut v: Window, sign: Sign, prec: usize) -> Float {
    let hediff = u.top() - v.top();

    u.clip_to(prec);
    if hediff >= prec as i64 {
        return Float::from_raw_parts(sign, u.limbs.to_vec(), u.exp, prec);
    }
    v.clip_to(prec - hediff as usize);

    let span_bot = u.exp.min(v.exp);
    let len = (u.top() - span_bot) as usize;
    let mut buf = vec![0 as Limb; len];
    let u_at = (u.exp - span_bot) as usize;
    buf[u_at..u_at + u.len()].copy_from_slice(u.limbs);

    let borrow = ull::sub_assign_at(&mut buf, v.limbs, (v.exp - span_bot) as usize);
    debug_assert_eq!(borrow, 0);

    let mut r = Float::from_raw_parts(sign, buf, span_bot, prec);
    r.set_prec(prec);
    r
}

/// Subtraction with high-end cancellation, `u > v` and their top limbs at
/// most one position apart.
///
/// Equal top limbs are peeled off; the surviving pattern
/// `u = x+1, 0...0, ...` against `v = x, F...F, ...` reduces to a difference whose
/// low-order structure is rebuilt from the common tails: two's-complement
/// the v-only prefix, subtract the aligned tails, correct by the ±1
/// carries, and restore the leading 1 when no borrow escaped.
///
/// Returns `None` when no cancellation pattern applies; `u` and `v` are
/// left stripped of their equal top limbs for the general path.
fn sub_cancellation(u: &mut Window, v: &mut Window, sign: Sign, prec: usize) -> Option<Float> {
    let hediff = u.top() - v.top();
    debug_assert!((0..=1).contains(&hediff));

    if hediff == 0 {
        // Peel equal top limbs.
        while !u.is_empty() && !v.is_empty() && u.top_limb() == v.top_limb() {
            u.shrink_top(1);
            v.shrink_top(1);
        }

        // u > v, so u cannot be cancelled completely.
        debug_assert!(!u.is_empty());

        if v.is_empty() {
            // The high limbs of u cancel all of v; the difference is u's
            // remaining low limbs.
            let mut r = Float::from_raw_parts(sign, u.limbs.to_vec(), u.exp, prec);
            r.set_prec(prec);
            return Some(r);
        }

        // Only the pattern  x+1 0... / x F...  needs the rebuild below.
        if u.top_limb() != v.top_limb().wrapping_add(1) {
            return None;
        }
        u.shrink_top(1);
        v.shrink_top(1);
    } else {
        // Tops one limb apart: only  1 0... / F...  cancels.
        if u.top_limb() != 1
            || v.top_limb() != Limb::MAX
            || (u.len() >= 2 && u.limbs[u.len() - 2] != 0)
        {
            return None;
        }
        u.shrink_top(1);
    }

    // Peel 0/F limb pairs under the cancelled top.
    while !v.is_empty() && !u.is_empty() && u.top_limb() == 0 && v.top_limb() == Limb::MAX {
        u.shrink_top(1);
        v.shrink_top(1);
    }

    if u.is_empty() {
        while !v.is_empty() && v.top_limb() == Limb::MAX {
            v.shrink_top(1);
        }
        u.exp = v.exp;
    }

    if v.is_empty() {
        // Nothing left below: the difference is u's tail with the
        // cancelled borrow re-materialized as a leading 1.
        let mut limbs = u.limbs.to_vec();
        limbs.push(1);
        let mut r = Float::from_raw_parts(sign, limbs, u.exp, prec);
        r.set_prec(prec);
        return Some(r);
    }

    u.clip_to(prec.saturating_sub(1));
    v.clip_to(prec.saturating_sub(1));

    let (mut limbs, exp, borrow) = if u.is_empty() {
        // 1 0000 / 0 ffff vv...  the difference is the two's complement
        // of v's remaining limbs.
        let mut r: Vec<Limb> = v.limbs.iter().map(|&d| !d).collect();
        let carry = ull::limb_incr(&mut r, 1);
        (r, v.exp, 1 - carry as i64)
    } else if u.len() >= v.len() {
        // 1 0000 uuuu / 0 ffff vv: u's low limbs pass through, the
        // aligned tops subtract.
        let mut r = u.limbs.to_vec();
        let at = u.len() - v.len();
        let b = ull::sub_assign_at(&mut r, v.limbs, at);
        (r, u.exp, b as i64)
    } else {
        // 1 0000 uuuu / 0 ffff vvvvvvv: v extends below u, so complement
        // the v-only prefix, subtract the aligned tails, fix the carries.
        let at = v.len() - u.len();
        let mut r = vec![0 as Limb; v.len()];
        for i in 0..at {
            r[i] = !v.limbs[i];
        }
        r[at..].copy_from_slice(u.limbs);
        let b1 = ull::sub_assign_at(&mut r, &v.limbs[at..], at);
        let b2 = ull::limb_decr(&mut r[at..], 1);
        let c = ull::limb_incr(&mut r, 1);
        (r, v.exp, b1 as i64 + b2 as i64 - c as i64)
    };

    if borrow == 0 {
        limbs.push(1);
    }

    let mut r = Float::from_raw_parts(sign, limbs, exp, prec);
    r.set_prec(prec);
    Some(r)
}
