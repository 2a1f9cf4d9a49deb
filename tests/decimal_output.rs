//! Snapshot tests of decimal output.
//!
//! Printing is the library's observable text artifact; these pin the
//! exact bytes produced for the arithmetic walked through here.

use regex::Regex;
use std::str::FromStr;

use apnum::{Float, Int, Rat, prec_bits};

/// Validate the printed float shape before snapshotting the digits, so a
/// formatting regression fails with a readable message.
fn checked_float_print(x: &Float) -> String {
    let re = Regex::new(r"^-?[0-9]+(e-?[0-9]+)?$").unwrap();
    let printed = x.to_decimal();
    assert!(re.is_match(&printed), "malformed float output: {printed}");
    printed
}

#[test]
fn factorial_thirty() {
    let f = Int::from(30u32).factorial();
    insta::assert_snapshot!(f.to_string(), @"265252859812191058636308480000000");
}

#[test]
fn eight_factors_of_128_by_squaring() {
    let mut x = Int::from(128u32);
    for _ in 0..3 {
        x = &x * &x;
    }
    insta::assert_snapshot!(x.to_string(), @"72057594037927936");
}

#[test]
fn large_parse_and_reprint() {
    let x = Int::from_str("-170141183460469231731687303715884105728123456789").unwrap();
    insta::assert_snapshot!(x.to_string(), @"-170141183460469231731687303715884105728123456789");
}

#[test]
fn rational_halves_and_quarters() {
    let half = Rat::from_fraction(Int::one(), Int::from(2));
    let quarter = Rat::from_fraction(Int::one(), Int::from(4));

    insta::assert_snapshot!((&half + &half).to_string(), @"1");
    insta::assert_snapshot!((&half * &half).to_string(), @"1/4");
    insta::assert_snapshot!((&quarter - &half).to_string(), @"-1/4");
}

#[test]
fn powers_of_two_as_floats() {
    let prec = prec_bits(256);
    let mut two = Float::with_prec(prec);
    two.set_limb(2);

    let kilo = Float::pow_uint(&two, 10, prec);
    insta::assert_snapshot!(checked_float_print(&kilo), @"1024");

    let mega = Float::pow_uint(&two, 20, prec);
    insta::assert_snapshot!(checked_float_print(&mega), @"1048576");
}

#[test]
fn pi_at_128_bits() {
    let pi = Float::pi(prec_bits(128));
    let printed = checked_float_print(&pi);

    let first_thirty: String = printed.chars().take(30).collect();
    insta::assert_snapshot!(first_thirty, @"314159265358979323846264338327");
}
