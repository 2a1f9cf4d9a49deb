//! Property-based tests using quickcheck.
//!
//! Small values are checked against native `i128`/`u128` behavior; values
//! that outgrow the native widths are checked against `ethnum` or against
//! algebraic identities that must hold exactly.

use quickcheck_macros::quickcheck;
use std::str::FromStr;

use crate::{Float, Int, Limb, Rat, Sign, prec_bits};

fn int_from_parts(hi: u128, lo: u128) -> Int {
    let mut limbs = Vec::new();
    let mut v = lo;
    for _ in 0..(128 / Limb::BITS as usize) {
        limbs.push(v as Limb);
        v >>= Limb::BITS;
    }
    let mut v = hi;
    for _ in 0..(128 / Limb::BITS as usize) {
        limbs.push(v as Limb);
        v >>= Limb::BITS;
    }
    Int::from_raw_parts(Sign::Positive, limbs)
}

fn flt(v: u128, prec: usize) -> Float {
    let mut limbs = Vec::new();
    let mut v = v;
    while v != 0 {
        limbs.push(v as Limb);
        v >>= Limb::BITS;
    }
    Float::from_raw_parts(Sign::Positive, limbs, 0, prec)
}

// ============================================================================
// Int vs native i128
// ============================================================================

#[quickcheck]
fn int_roundtrip_i128(v: i128) -> bool {
    Int::from(v).to_string() == v.to_string()
}

#[quickcheck]
fn int_add_i128(a: i64, b: i64) -> bool {
    let expected = a as i128 + b as i128;
    (&Int::from(a) + &Int::from(b)) == Int::from(expected)
}

#[quickcheck]
fn int_sub_i128(a: i64, b: i64) -> bool {
    let expected = a as i128 - b as i128;
    (&Int::from(a) - &Int::from(b)) == Int::from(expected)
}

#[quickcheck]
fn int_mul_i128(a: i64, b: i64) -> bool {
    let expected = a as i128 * b as i128;
    (&Int::from(a) * &Int::from(b)) == Int::from(expected)
}

#[quickcheck]
fn int_div_euclid_i128(a: i128, b: i128) -> bool {
    if b == 0 || (a == i128::MIN && b == -1) {
        return true;
    }
    let (q, r) = Int::from(a).div_rem(&Int::from(b));
    q == Int::from(a.div_euclid(b)) && r == Int::from(a.rem_euclid(b))
}

#[quickcheck]
fn int_cmp_i128(a: i128, b: i128) -> bool {
    Int::from(a).cmp(&Int::from(b)) == a.cmp(&b)
}

#[quickcheck]
fn int_neg_i128(a: i128) -> bool {
    if a == i128::MIN {
        return true;
    }
    -&Int::from(a) == Int::from(-a)
}

#[quickcheck]
fn int_abs_i128(a: i128) -> bool {
    if a == i128::MIN {
        return true;
    }
    Int::from(a).abs() == Int::from(a.abs())
}

#[quickcheck]
fn int_parity_i128(a: i128) -> bool {
    let x = Int::from(a);
    x.is_odd() == (a % 2 != 0) && x.is_even() == (a % 2 == 0)
}

#[quickcheck]
fn int_shr_u128(a: u128, shift: u8) -> bool {
    let shift = (shift % 128) as usize;
    (&Int::from(a) >> shift) == Int::from(a >> shift)
}

// ============================================================================
// Int vs ethnum beyond 128 bits
// ============================================================================

#[quickcheck]
fn int_mul_ethnum(a: i128, b: i128) -> bool {
    let expected = ethnum::I256::from(a) * ethnum::I256::from(b);
    (&Int::from(a) * &Int::from(b)).to_string() == expected.to_string()
}

#[quickcheck]
fn int_add_ethnum(a: i128, b: i128) -> bool {
    let expected = ethnum::I256::from(a) + ethnum::I256::from(b);
    (&Int::from(a) + &Int::from(b)).to_string() == expected.to_string()
}

// ============================================================================
// Int algebraic laws (exact, no oracle needed)
// ============================================================================

#[quickcheck]
fn int_add_commutative(a: i128, b: i128) -> bool {
    let (a, b) = (Int::from(a), Int::from(b));
    &a + &b == &b + &a
}

#[quickcheck]
fn int_add_associative(a: i128, b: i128, c: i128) -> bool {
    let (a, b, c) = (Int::from(a), Int::from(b), Int::from(c));
    &(&a + &b) + &c == &a + &(&b + &c)
}

#[quickcheck]
fn int_mul_commutative(a: i128, b: i128) -> bool {
    let (a, b) = (Int::from(a), Int::from(b));
    &a * &b == &b * &a
}

#[quickcheck]
fn int_distributive(a: i128, b: i128, c: i128) -> bool {
    let (a, b, c) = (Int::from(a), Int::from(b), Int::from(c));
    &a * &(&b + &c) == &(&a * &b) + &(&a * &c)
}

#[quickcheck]
fn int_add_neg_is_zero(a: i128) -> bool {
    let a = Int::from(a);
    &a + &(-&a) == Int::new()
}

#[quickcheck]
fn int_mul_zero_one(a: i128) -> bool {
    let a = Int::from(a);
    &a * &Int::new() == Int::new() && &a * &Int::one() == a
}

#[quickcheck]
fn int_add_sub_identity(a: i128, b: i128) -> bool {
    let (a, b) = (Int::from(a), Int::from(b));
    &(&a + &b) - &b == a
}

// ============================================================================
// Euclidean identity on multi-limb operands (drives the Knuth-D path)
// ============================================================================

#[quickcheck]
fn int_div_rem_identity_wide(a_hi: u128, a_lo: u128, b: u128, negate: bool) -> bool {
    if b == 0 {
        return true;
    }
    let mut a = int_from_parts(a_hi, a_lo);
    if negate {
        a = -a;
    }
    let b = Int::from(b);

    let (q, r) = a.div_rem(&b);
    let identity = &(&b * &q) + &r == a;
    let range = r >= Int::new() && r < b.abs();
    identity && range
}

#[quickcheck]
fn int_div_rem_identity_wide_divisor(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> bool {
    let a = int_from_parts(a_hi, a_lo);
    let b = int_from_parts(b_hi, b_lo);
    if b.is_zero() {
        return true;
    }

    let (q, r) = a.div_rem(&b);
    &(&b * &q) + &r == a && r >= Int::new() && r < b.abs()
}

#[quickcheck]
fn int_normalized_after_ops(a: i128, b: i128) -> bool {
    let (a, b) = (Int::from(a), Int::from(b));
    let mut all = (&a + &b).is_normalized()
        && (&a - &b).is_normalized()
        && (&a * &b).is_normalized();
    if !b.is_zero() {
        let (q, r) = a.div_rem(&b);
        all = all && q.is_normalized() && r.is_normalized();
    }
    all
}

// ============================================================================
// Exponentiation, isqrt, gcd, factorial
// ============================================================================

#[quickcheck]
fn int_pow_sum_of_exponents(x: i64, n: u8, m: u8) -> bool {
    let x = Int::from(x);
    let (n, m) = ((n % 6) as u32, (m % 6) as u32);
    let lhs = &x.pow(&Int::from(n)) * &x.pow(&Int::from(m));
    lhs == x.pow(&Int::from(n + m))
}

#[quickcheck]
fn int_square_is_self_product(x: i128) -> bool {
    let x = Int::from(x);
    x.square() == &x * &x
}

#[quickcheck]
fn int_modpow_matches_pow(base: i64, exp: u8, m: i64) -> bool {
    if m == 0 {
        return true;
    }
    let (b, m) = (Int::from(base), Int::from(m));
    let e = Int::from((exp % 16) as u32);
    b.modpow(&e, &m) == b.pow(&e).rem_euclid(&m)
}

#[quickcheck]
fn int_isqrt_invariant(n: u128) -> bool {
    let n = Int::from(n);
    let r = n.isqrt();
    let r1 = &r + &Int::one();
    r.square() <= n && n < r1.square()
}

#[quickcheck]
fn int_gcd_commutative(a: i128, b: i128) -> bool {
    let (a, b) = (Int::from(a), Int::from(b));
    a.gcd(&b) == b.gcd(&a)
}

#[quickcheck]
fn int_gcd_divides_both(a: i128, b: i128) -> bool {
    let (a, b) = (Int::from(a), Int::from(b));
    let g = a.gcd(&b);
    if g.is_zero() {
        return a.is_zero() && b.is_zero();
    }
    a.rem_euclid(&g).is_zero() && b.rem_euclid(&g).is_zero()
}

#[quickcheck]
fn int_bezout_identity(a: i128, b: i128) -> bool {
    let (a, b) = (Int::from(a), Int::from(b));
    let (g, u, v) = a.gcd_bezout(&b);
    &(&u * &a) + &(&v * &b) == g && g.sign() != Sign::Negative
}

// ============================================================================
// Decimal round-trips
// ============================================================================

#[quickcheck]
fn int_string_roundtrip(a: i128) -> bool {
    let x = Int::from(a);
    Int::from_str(&x.to_string()) == Ok(x)
}

#[quickcheck]
fn int_string_roundtrip_wide(hi: u128, lo: u128) -> bool {
    let x = int_from_parts(hi, lo);
    Int::parse_decimal(&x.to_string()) == x
}

#[quickcheck]
fn int_print_buffer_contract(a: i128) -> bool {
    let x = Int::from(a);
    let mut exact = vec![0u8; x.decimal_len_bound()];
    let n = x.write_decimal(&mut exact);
    if n == 0 {
        return false;
    }
    // A buffer below the bound writes nothing unless the value is zero.
    let mut small = [0u8; 1];
    x.is_zero() || x.write_decimal(&mut small) == 0
}

// ============================================================================
// Rat
// ============================================================================

#[quickcheck]
fn rat_mul_by_reciprocal_is_one(a: i64, b: i64) -> bool {
    if a == 0 || b == 0 {
        return true;
    }
    let x = Rat::from_fraction(Int::from(a), Int::from(b));
    let y = Rat::from_fraction(Int::from(b), Int::from(a));
    &x * &y == Rat::from_limb(1)
}

#[quickcheck]
fn rat_add_cross_product(a: i64, b: i64, c: i64, d: i64) -> bool {
    if b == 0 || d == 0 {
        return true;
    }
    let x = Rat::from_fraction(Int::from(a), Int::from(b));
    let y = Rat::from_fraction(Int::from(c), Int::from(d));
    let sum = &x + &y;
    let expected = Rat::from_fraction(
        &(&Int::from(a) * &Int::from(d)) + &(&Int::from(c) * &Int::from(b)),
        &Int::from(b) * &Int::from(d),
    );
    sum == expected && sum.is_normalized()
}

#[quickcheck]
fn rat_sub_self_is_zero(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let x = Rat::from_fraction(Int::from(a), Int::from(b));
    let zero = &x - &x;
    zero.is_zero() && zero.denominator() == &Int::one()
}

#[quickcheck]
fn rat_cmp_matches_cross_products(a: i32, b: i32, c: i32, d: i32) -> bool {
    if b == 0 || d == 0 {
        return true;
    }
    let x = Rat::from_fraction(Int::from(a), Int::from(b));
    let y = Rat::from_fraction(Int::from(c), Int::from(d));
    // a/b < c/d  iff  a·d < c·b once both denominators are positive.
    let lhs = i64::from(a) * i64::from(d) * i64::from(b.signum()) * i64::from(d.signum());
    let rhs = i64::from(c) * i64::from(b) * i64::from(b.signum()) * i64::from(d.signum());
    x.cmp(&y) == lhs.cmp(&rhs)
}

#[quickcheck]
fn rat_print_buffer_contract(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let x = Rat::from_fraction(Int::from(a), Int::from(b));

    // A buffer covering both components and the slash always succeeds,
    // and the bytes agree with the Display rendering.
    let bound = x.numerator().decimal_len_bound() + 1 + x.denominator().decimal_len_bound();
    let mut sized = vec![0u8; bound];
    let written = x.write_decimal(&mut sized);
    if written == 0 || sized[..written] != *x.to_string().as_bytes() {
        return false;
    }

    // A buffer below the numerator's bound writes nothing, except for the
    // zero rational which needs a single byte.
    let mut small = [0u8; 1];
    x.is_zero() || x.write_decimal(&mut small) == 0
}

#[quickcheck]
fn rat_normalized_after_ops(a: i64, b: i64, c: i64, d: i64) -> bool {
    if b == 0 || d == 0 {
        return true;
    }
    let x = Rat::from_fraction(Int::from(a), Int::from(b));
    let y = Rat::from_fraction(Int::from(c), Int::from(d));
    let mut all = (&x + &y).is_normalized() && (&x - &y).is_normalized() && (&x * &y).is_normalized();
    if !y.is_zero() {
        all = all && (&x / &y).is_normalized();
    }
    all
}

// ============================================================================
// Float
// ============================================================================

#[quickcheck]
fn float_add_exact_integers(a: u64, b: u64) -> bool {
    let prec = 256 / Limb::BITS as usize;
    Float::add(&flt(a as u128, prec), &flt(b as u128, prec), prec) == flt(a as u128 + b as u128, prec)
}

#[quickcheck]
fn float_sub_exact_integers(a: u64, b: u64) -> bool {
    let prec = 256 / Limb::BITS as usize;
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    Float::sub(&flt(hi as u128, prec), &flt(lo as u128, prec), prec)
        == flt((hi - lo) as u128, prec)
}

#[quickcheck]
fn float_mul_exact_integers(a: u64, b: u64) -> bool {
    let prec = 256 / Limb::BITS as usize;
    Float::mul(&flt(a as u128, prec), &flt(b as u128, prec), prec)
        == flt(a as u128 * b as u128, prec)
}

#[quickcheck]
fn float_div_recovers_factor(a: u64, b: u64) -> bool {
    if a == 0 || b == 0 {
        return true;
    }
    let prec = 256 / Limb::BITS as usize;
    let product = flt(a as u128 * b as u128, prec);
    Float::div(&product, &flt(b as u128, prec), prec) == flt(a as u128, prec)
}

#[quickcheck]
fn float_avg_doubles_back(a: u64, b: u64) -> bool {
    let prec = 256 / Limb::BITS as usize;
    let (x, y) = (flt(a as u128, prec), flt(b as u128, prec));
    let mid = Float::avg(&x, &y, prec);
    Float::add(&mid, &mid, prec) == Float::add(&x, &y, prec)
}

#[quickcheck]
fn float_sqrt_of_square(a: u32) -> bool {
    let prec = 256 / Limb::BITS as usize;
    let square = flt(a as u128 * a as u128, prec);
    Float::sqrt(&square, prec) == flt(a as u128, prec)
}

#[quickcheck]
fn float_assign_roundtrip(a: u64) -> bool {
    let prec = 256 / Limb::BITS as usize;
    let x = flt(a as u128, prec);
    let y = x.to_prec(prec);
    y == x
}

#[quickcheck]
fn float_cmp_matches_u128(a: u128, b: u128) -> bool {
    let prec = 256 / Limb::BITS as usize;
    flt(a, prec).cmp(&flt(b, prec)) == a.cmp(&b)
}

#[quickcheck]
fn float_print_buffer_contract(a: u64, exp_sel: u8) -> bool {
    let prec = 256 / Limb::BITS as usize;

    // Cover all three exponent regimes of dec_digits, including the
    // rescale paths that grow the digit mantissa.
    let exp: i64 = match exp_sel % 3 {
        0 => 0,
        1 => -1,
        _ => 1,
    };
    let mut limbs = Vec::new();
    let mut v = (a as u128) | 1;
    while v != 0 {
        limbs.push(v as Limb);
        v >>= Limb::BITS;
    }
    let x = Float::from_raw_parts(Sign::Positive, limbs, exp, prec);

    // A buffer sized by digits_for_prec always succeeds, and the bytes
    // agree with the Display rendering.
    let mut sized = vec![0u8; Float::digits_for_prec(prec)];
    let written = x.write_decimal(&mut sized);
    if written == 0 || sized[..written] != *x.to_decimal().as_bytes() {
        return false;
    }

    // A one-byte buffer is below any bound for a non-zero value.
    let mut small = [0u8; 1];
    x.write_decimal(&mut small) == 0
}

#[quickcheck]
fn float_neg_orders_below_zero(a: u64) -> bool {
    if a == 0 {
        return true;
    }
    let prec = 128 / Limb::BITS as usize;
    let x = flt(a as u128, prec);
    -&x < Float::with_prec(prec) && Float::with_prec(prec) < x
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn factorial_of_30() {
    let f = Int::from(30u32).factorial();
    assert_eq!(f.to_string(), "265252859812191058636308480000000");
}

#[test]
fn factorial_of_negative_is_zero() {
    assert!(Int::from(-4).factorial().is_zero());
}

#[test]
fn repeated_squaring_of_128() {
    let mut x = Int::from(128u32);
    for _ in 0..3 {
        x = &x * &x;
    }
    assert_eq!(x.to_string(), "72057594037927936");
}

#[test]
fn euclidean_division_sign_table() {
    let cases = [
        (7i64, 3i64, 2i64, 1i64),
        (-7, 3, -3, 2),
        (7, -3, -2, 1),
        (-7, -3, 3, 2),
    ];
    for (a, b, q, r) in cases {
        let (quo, rem) = Int::from(a).div_rem(&Int::from(b));
        assert_eq!(quo, Int::from(q), "{a} / {b}");
        assert_eq!(rem, Int::from(r), "{a} % {b}");
    }
}

#[test]
fn bezout_of_12_and_28() {
    let (g, u, v) = Int::from(12).gcd_bezout(&Int::from(28));
    assert_eq!(g, Int::from(4));
    assert_eq!(u, Int::from(-2));
    assert_eq!(v, Int::from(1));
}

#[test]
fn isqrt_small_values() {
    assert_eq!(Int::from(144u32).isqrt(), Int::from(12u32));
    assert_eq!(Int::from(44u32).isqrt(), Int::from(6u32));
    assert_eq!(Int::new().isqrt(), Int::new());
}

#[test]
fn modpow_two_to_32_mod_3() {
    let r = Int::from(2).modpow(&Int::from(32u32), &Int::from(3));
    assert_eq!(r, Int::one());
}

#[test]
fn rational_arithmetic_prints() {
    let half = Rat::from_fraction(Int::one(), Int::from(2));
    let quarter = Rat::from_fraction(Int::one(), Int::from(4));

    assert_eq!((&half + &half).to_string(), "1");
    assert_eq!((&half * &half).to_string(), "1/4");
    assert_eq!((&quarter - &half).to_string(), "-1/4");
}

#[test]
fn parse_stops_at_first_non_digit() {
    assert_eq!(Int::parse_decimal("123abc"), Int::from(123u32));
    assert_eq!(Int::parse_decimal("-45 6"), Int::from(-45));
    assert!(Int::from_str("abc").is_err());
    assert!(Int::from_str("-").is_err());
}

#[test]
fn float_cancellation_keeps_low_structure() {
    let prec = 256 / Limb::BITS as usize;

    // B^2 - (B^2 - 1) exercises the 1/F...F pattern.
    let hi = Float::from_raw_parts(Sign::Positive, {
        let mut v = vec![0 as Limb; 3];
        v[2] = 1;
        v
    }, 0, prec);
    let lo = flt(u128::MAX >> (128 - 2 * Limb::BITS as usize), prec);
    let diff = Float::sub(&hi, &lo, prec);
    assert_eq!(diff, flt(1, prec));

    // (3B² + 5) - (3B² - B + 6) = B - 1 exercises the x+1/x peel.
    let a = Float::from_raw_parts(Sign::Positive, vec![5, 0, 3], 0, prec);
    let b = Float::from_raw_parts(Sign::Positive, vec![6, Limb::MAX, 2], 0, prec);
    let diff = Float::sub(&a, &b, prec);
    assert_eq!(diff, flt(Limb::MAX as u128, prec));
}

#[test]
fn float_pow_of_two() {
    let prec = 256 / Limb::BITS as usize;
    let two = flt(2, prec);
    assert_eq!(Float::pow_uint(&two, 20, prec), flt(1 << 20, prec));
    assert_eq!(Float::pow_uint(&two, 0, prec), flt(1, prec));
}

#[test]
fn float_inv_of_two_is_half() {
    let prec = 256 / Limb::BITS as usize;
    let half = Float::inv(&flt(2, prec), prec);
    assert_eq!(Float::add(&half, &half, prec), flt(1, prec));
}

#[test]
fn float_prints_small_integers() {
    let prec = 128 / Limb::BITS as usize;
    assert_eq!(flt(5, prec).to_decimal(), "5");
    assert_eq!((-&flt(42, prec)).to_decimal(), "-42");
    assert_eq!(Float::with_prec(prec).to_decimal(), "0");
}

#[test]
fn pi_first_thirty_digits() {
    let pi = Float::pi(prec_bits(128));
    let printed = pi.to_decimal();
    assert!(
        printed.starts_with("314159265358979323846264338327"),
        "got {printed}"
    );
}

#[test]
fn default_precision_register() {
    let old = crate::set_default_prec(7);
    assert_eq!(crate::default_prec(), 7);
    assert_eq!(Float::new().precision(), 7);
    crate::set_default_prec(old);
}

#[test]
fn precision_helpers_round_up() {
    assert_eq!(prec_bits(Limb::BITS as usize), 1);
    assert_eq!(prec_bits(Limb::BITS as usize + 1), 2);
    assert_eq!(crate::prec_bytes(1), 1);
}

// ============================================================================
// Kernel-level checks
// ============================================================================

#[quickcheck]
fn kernel_shift_roundtrip(a: u128, n: u8) -> bool {
    let n = (n as u32) % Limb::BITS;
    let limbs = {
        let mut v = Vec::new();
        let mut a = a;
        while a != 0 {
            v.push(a as Limb);
            a >>= Limb::BITS;
        }
        v.push(0); // room for the shifted-out bits
        v
    };

    let mut shifted = vec![0 as Limb; limbs.len()];
    let carry = crate::ull::shift::lshift(&limbs, n, &mut shifted);
    if carry != 0 {
        return false; // the spare top limb absorbs everything
    }

    let mut back = vec![0 as Limb; limbs.len()];
    crate::ull::shift::rshift(&shifted, n, &mut back);
    back == limbs
}

#[quickcheck]
fn kernel_offset_shifts_match_plain(a: u64, b: u64, n: u8) -> bool {
    let n = (n as u32) % Limb::BITS;
    let src: Vec<Limb> = {
        let mut v = Vec::new();
        let mut x = ((a as u128) << 64) | b as u128;
        for _ in 0..(128 / Limb::BITS as usize) {
            v.push(x as Limb);
            x >>= Limb::BITS;
        }
        v
    };
    let len = src.len();

    // Right shift reading one limb up equals a plain shift of that window.
    let mut buf = vec![0 as Limb; len + 1];
    buf[1..].copy_from_slice(&src);
    crate::ull::shift::rshift_offset(&mut buf, 1, len, n);
    let mut expected = vec![0 as Limb; len];
    crate::ull::shift::rshift(&src, n, &mut expected);
    if buf[..len] != expected[..] {
        return false;
    }

    // Left shift writing one limb up equals a plain shift of that window.
    let mut buf = vec![0 as Limb; len + 1];
    buf[..len].copy_from_slice(&src);
    crate::ull::shift::lshift_offset(&mut buf, 1, len, n);
    let mut expected = vec![0 as Limb; len];
    crate::ull::shift::lshift(&src, n, &mut expected);
    buf[1..] == expected[..] && buf[0] == 0
}

#[quickcheck]
fn kernel_limb_incr_decr_roundtrip(a: u128, b: u64) -> bool {
    let mut limbs = Vec::new();
    let mut v = a | 1; // keep at least one limb
    while v != 0 {
        limbs.push(v as Limb);
        v >>= Limb::BITS;
    }

    let step = b as Limb;
    let before = limbs.clone();
    let carry = crate::ull::limb_incr(&mut limbs, step);
    if carry != 0 {
        limbs.push(carry);
    }
    let borrow = crate::ull::limb_decr(&mut limbs, step);
    if borrow != 0 {
        return false;
    }
    let n = crate::ull::norm_len(&limbs);
    limbs[..n] == before[..]
}

#[test]
fn kernel_knuth_division_add_back_case() {
    // Divisor just above the normalization boundary keeps the quotient
    // estimate on the overshooting edge; the Euclidean identity pins the
    // multiply-subtract and add-back machinery either way.
    let a = int_from_parts(
        0x8000_0000_0000_0000_0000_0000_0000_0000,
        0x0000_0000_0000_0000_ffff_ffff_ffff_ffff,
    );
    let b = int_from_parts(0, 0x8000_0000_0000_0000_0000_0000_0000_0001);
    let (q, r) = a.div_rem(&b);
    assert_eq!(&(&b * &q) + &r, a);
    assert!(r >= Int::new() && r < b);
}
