//! Checks formatting against a table of printf results, then round-trips random doubles through
//! `%.20e` until interrupted (or for `--iterations`). Prints the RNG state that reproduces any
//! failure.
//!
//! Needs the `cli` feature: `cargo run --release --features cli --bin dconv-test -- [seed]`.

use std::io::Write;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::{debug, info};

use dconv::rng::Lcg;
use dconv::{CANONICAL_NAN, Conversion, Flags, FormatSpec, OutputCursor, Precision};

#[derive(Parser, Debug)]
#[command(author, version, about = "Checks that f64 -> text -> f64 is exact", long_about = None)]
struct Args {
    /// Initial RNG state.
    #[arg(default_value_t = 0)]
    seed: u64,

    /// Stop the stress test after this many doubles instead of running forever.
    #[arg(long)]
    iterations: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

/// Directive, expected text, value, and whether the text must also scan back to the value.
const STATIC_CASES: &[(&str, &str, f64, bool)] = &[
    ("%17.17f", "1.00000000000000000", 1.0, true),
    ("%17.17f", "-1.00000000000000000", -1.0, true),
    ("%17.17f", "10.00000000000000000", 10.0, true),
    ("%17.17f", "-10.00000000000000000", -10.0, true),
    ("%17.17f", "11.00000000000000000", 11.0, true),

    ("%+#22.15e", "+7.894561230000000e+08", 789456123.0, true),
    ("%-#22.15e", "7.894561230000000e+08 ", 789456123.0, false),
    ("%#22.15e", " 7.894561230000000e+08", 789456123.0, true),
    ("%#1.1g", "8.e+08", 789456123.0, false),
    ("%.0f", "1", 0.6, false),
    ("%2.4e", "8.6000e+00", 8.6, true),
    ("%2.4g", "8.6", 8.6, true),
    ("%e", "-inf", f64::NEG_INFINITY, true),

    ("%e", "1.234000e+01", 12.34, true),
    ("%e", "1.234000e-01", 0.1234, true),
    ("%e", "1.234000e-03", 0.001234, true),
    ("%.60e", "1.000000000000000000000000000000000000000000000000000000000000e+20", 1e20, true),
    ("%e", "1.000000e-01", 0.1, true),
    ("%f", "12.340000", 12.34, true),
    ("%f", "0.123400", 0.1234, true),
    ("%f", "0.001234", 0.001234, true),
    ("%g", "12.34", 12.34, true),
    ("%g", "0.1234", 0.1234, true),
    ("%g", "0.001234", 0.001234, true),
    ("%.60g", "100000000000000000000", 1e20, true),

    ("%6.5f", "0.10000", 0.099999999860301614, false),
    ("%6.5f", "0.10000", 0.1, true),
    ("%5.4f", "0.5000", 0.5, true),
    ("%15.5e", "   4.94066e-324", 4.9406564584124654e-324, false),
    ("%15.5e", "   1.79769e+308", f64::MAX, false),
    ("%e", "1.234568e+06", 1234567.8, false),
    ("%f", "1234567.800000", 1234567.8, true),
    ("%g", "1.23457e+06", 1234567.8, false),
    ("%g", "123.456", 123.456, true),
    ("%g", "1e+06", 1000000.0, true),
    ("%g", "10", 10.0, true),
    ("%g", "0.02", 0.02, true),
];

fn static_case(directive: &str, expected: &str, num: f64, reverse: bool) -> Result<()> {
    let spec: FormatSpec = directive.parse()
        .with_context(|| format!("Can't parse format directive {directive:?}"))?;

    let mut buf = [0u8; 128];
    let mut cursor = OutputCursor::new(&mut buf);
    dconv::format(&mut cursor, num, &spec)
        .with_context(|| format!("Can't format {num:.17e} with {directive}"))?;
    ensure!(
        cursor.as_str() == expected,
        "Formatting {num:.17e} with {directive}: expected {expected:?}, got {:?}",
        cursor.as_str(),
    );

    if reverse {
        let scanned = dconv::scan_double(expected)
            .with_context(|| format!("Can't scan {expected:?} back"))?;
        ensure!(!scanned.range_exceeded, "Unexpected range error scanning {expected:?}");
        ensure!(scanned.end == expected.len(), "Scanning {expected:?} stopped at byte {}", scanned.end);
        ensure!(
            scanned.value.to_bits() == num.to_bits(),
            "Scanning {expected:?}: expected {num:.17e}, got {:.17e}",
            scanned.value,
        );
    }
    debug!("{directive} {num:.17e} -> {expected:?}");
    Ok(())
}

/// Formats `num` with `%.20e` and scans it back, checking that nothing is lost.
fn round_trip(num: f64, spec: &FormatSpec) -> Result<()> {
    let mut buf = [0u8; 128];
    let mut cursor = OutputCursor::new(&mut buf);
    let capacity = cursor.capacity();
    dconv::format(&mut cursor, num, spec).context("Can't convert double to string")?;
    ensure!(
        cursor.position() + cursor.remaining() == capacity,
        "Unexpected cursor state after converting double to string",
    );

    let text = cursor.as_str();
    let scanned = dconv::scan_double(text)
        .with_context(|| format!("Can't convert {text:?} back to double"))?;
    ensure!(!scanned.range_exceeded, "Unexpected range error scanning {text:?}");
    ensure!(scanned.end == cursor.position(), "Scanning {text:?} stopped at byte {}", scanned.end);
    ensure!(
        scanned.value.to_bits() == num.to_bits(),
        "Strict equality failed: {num:.20e} (raw: {:#018x}) printed as {text:?} scans to {:.20e} (raw: {:#018x})",
        num.to_bits(),
        scanned.value,
        scanned.value.to_bits(),
    );
    Ok(())
}

fn stress_test(rng: &mut Lcg, iterations: Option<u64>) -> Result<()> {
    info!("Running stress test...");
    let spec = FormatSpec::new(Conversion::Exponential, Flags::empty(), 0, Precision::Digits(20));
    let mut stderr = std::io::stderr();
    let mut i = 0u64;
    while iterations.is_none_or(|n| i < n) {
        let initial_state = rng.state();
        let num = rng.next_canonical_f64();
        debug_assert!(!num.is_nan() || num.to_bits() == CANONICAL_NAN);
        round_trip(num, &spec)
            .with_context(|| format!("RNG state to reproduce this condition: {initial_state}"))?;

        i += 1;
        if i % 0x100000 == 0 {
            write!(stderr, ".")?;
            stderr.flush()?;
        }
    }
    writeln!(stderr)?;
    info!("{i} doubles round-tripped");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).init();

    info!("Running static tests...");
    for &(directive, expected, num, reverse) in STATIC_CASES {
        static_case(directive, expected, num, reverse)?;
    }
    info!("{} static tests passed", STATIC_CASES.len());

    let mut rng = Lcg::new(args.seed);
    stress_test(&mut rng, args.iterations)
}
