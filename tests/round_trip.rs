//! Random doubles from the reproducible generator, through text and back.

use dconv::rng::Lcg;
use dconv::{CANONICAL_NAN, Conversion, Flags, FormatSpec, OutputCursor, Precision};

fn format_to_string(num: f64, spec: &FormatSpec) -> String {
    let mut buf = [0u8; 1200];
    let mut cursor = OutputCursor::new(&mut buf);
    let capacity = cursor.capacity();
    dconv::format(&mut cursor, num, spec).unwrap();
    assert_eq!(cursor.position() + cursor.remaining(), capacity);
    cursor.as_str().to_string()
}

fn spec(conversion: Conversion, precision: Precision) -> FormatSpec {
    FormatSpec::new(conversion, Flags::empty(), 0, precision)
}

#[test]
fn exp20_is_exact() {
    let spec = spec(Conversion::Exponential, Precision::Digits(20));
    let mut rng = Lcg::new(0);
    for _ in 0..1 << 18 {
        let state = rng.state();
        let num = rng.next_canonical_f64();
        let text = format_to_string(num, &spec);
        let scanned = dconv::scan_double(&text).unwrap();
        assert_eq!(scanned.value.to_bits(), num.to_bits(), "{text:?}, RNG state {state}");
        assert_eq!(scanned.end, text.len(), "{text:?}, RNG state {state}");
        assert!(!scanned.range_exceeded, "{text:?}, RNG state {state}");
    }
}

#[test]
fn canonical_nan_round_trips() {
    let text = format_to_string(f64::from_bits(CANONICAL_NAN), &spec(Conversion::Exponential, Precision::Digits(20)));
    assert_eq!(text, "nan");
    assert_eq!(dconv::scan_double(&text).unwrap().value.to_bits(), CANONICAL_NAN);
}

#[test]
fn reformat_is_idempotent() {
    let mut rng = Lcg::new(12345);
    for _ in 0..1 << 14 {
        let num = rng.next_finite_f64();
        for p in [0, 1, 5, 16, 17, 30] {
            for conversion in [Conversion::Exponential, Conversion::Fixed, Conversion::General] {
                if conversion == Conversion::Fixed && num.abs() > 1e60 {
                    continue
                }
                let spec = spec(conversion, Precision::Digits(p));
                let text = format_to_string(num, &spec);
                let again = format_to_string(dconv::scan_double(&text).unwrap().value, &spec);
                assert_eq!(again, text, "{num:e} with precision {p}");
            }
        }
    }
}

#[test]
fn fewer_digits_round_to_nearest() {
    // `%.{p}e` must agree with the standard library's exact formatting for every precision.
    let mut rng = Lcg::new(99);
    for _ in 0..1 << 12 {
        let num = rng.next_finite_f64();
        for p in 0..=25 {
            let text = format_to_string(num, &spec(Conversion::Exponential, Precision::Digits(p)));
            let reference = format!("{num:.*e}", p as usize);
            let (mant, exp) = reference.split_once('e').unwrap();
            let exp: i32 = exp.parse().unwrap();
            let reference = format!("{mant}e{}{:02}", if exp < 0 { '-' } else { '+' }, exp.unsigned_abs());
            assert_eq!(text, reference);
        }
    }
}

#[test]
fn shortest_matches_ryu() {
    let spec = spec(Conversion::Exponential, Precision::Shortest);
    let mut rng = Lcg::new(7);
    let mut ryu_buf = ryu::Buffer::new();
    for _ in 0..1 << 16 {
        let num = rng.next_finite_f64();
        let text = format_to_string(num, &spec);
        assert_eq!(dconv::scan_double(&text).unwrap().value.to_bits(), num.to_bits());

        // same significant digits as ryu, which prints e.g. `1.5e-7` or `123.0`
        let ours: String = text.split('e').next().unwrap().chars().filter(char::is_ascii_digit).collect();
        let reference = ryu_buf.format_finite(num);
        let reference = reference.split('e').next().unwrap();
        let theirs: String = reference.chars().filter(char::is_ascii_digit).collect();
        let theirs = theirs.trim_start_matches('0').trim_end_matches('0');
        let ours = ours.trim_end_matches('0');
        if num != 0.0 {
            assert_eq!(ours, theirs, "{num:e}");
        }
    }
}

#[test]
fn range_flags() {
    let mut rng = Lcg::new(3);
    for _ in 0..1 << 12 {
        let mant = rng.next_u64() % 1_000_000 + 1;
        let small = format!("{mant}e-{}", 400 + rng.next_u64() % 1000);
        let scanned = dconv::scan_double(&small).unwrap();
        assert_eq!(scanned.value, 0.0);
        assert!(scanned.range_exceeded, "{small}");

        let large = format!("-{mant}e{}", 400 + rng.next_u64() % 1000);
        let scanned = dconv::scan_double(&large).unwrap();
        assert_eq!(scanned.value, f64::NEG_INFINITY);
        assert!(scanned.range_exceeded, "{large}");
    }
}
