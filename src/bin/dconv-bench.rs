//! Times `%.20e` formatting and scanning of random finite doubles against the standard library,
//! checking every round trip on the way.
//!
//! Needs the `cli` feature: `cargo run --release --features cli --bin dconv-bench -- [seed]`.

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::{debug, info};

use dconv::rng::Lcg;
use dconv::{Conversion, Flags, FormatSpec, OutputCursor, Precision};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compares dconv with std on f64 <-> text", long_about = None)]
struct Args {
    /// Initial RNG state.
    #[arg(default_value_t = 0)]
    seed: u64,

    /// Number of doubles to convert.
    #[arg(long, default_value_t = 1 << 24)]
    iterations: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Timings {
    dconv_format: Duration,
    dconv_scan: Duration,
    std_format: Duration,
    std_scan: Duration,
}

fn ratio(std: Duration, dconv: Duration) -> f64 {
    std.as_secs_f64() / dconv.as_secs_f64()
}

fn benchmark(rng: &mut Lcg, iterations: u64) -> Result<Timings> {
    info!("Running benchmark, please wait...");
    let spec = FormatSpec::new(Conversion::Exponential, Flags::empty(), 0, Precision::Digits(20));
    let mut timings = Timings::default();
    let mut buf = [0u8; 128];
    let mut text = String::with_capacity(128);

    for _ in 0..iterations {
        let initial_state = rng.state();
        let num = rng.next_finite_f64();

        let mut cursor = OutputCursor::new(&mut buf);
        let t0 = Instant::now();
        let formatted = dconv::format(&mut cursor, black_box(num), &spec);
        timings.dconv_format += t0.elapsed();
        formatted.with_context(|| format!("Formatting failed, RNG state {initial_state}"))?;

        let t0 = Instant::now();
        let scanned = dconv::scan_bytes(black_box(cursor.as_bytes()));
        timings.dconv_scan += t0.elapsed();
        let scanned = scanned.with_context(|| format!("Scanning failed, RNG state {initial_state}"))?;
        ensure!(
            !scanned.range_exceeded
                && scanned.end == cursor.position()
                && scanned.value.to_bits() == num.to_bits(),
            "Round trip of {num:e} through {:?} failed, RNG state {initial_state}",
            cursor.as_str(),
        );

        text.clear();
        let t0 = Instant::now();
        write!(text, "{:.20e}", black_box(num))?;
        timings.std_format += t0.elapsed();

        let t0 = Instant::now();
        let parsed = black_box(text.as_str()).parse::<f64>();
        timings.std_scan += t0.elapsed();
        let parsed = parsed.with_context(|| format!("std can't parse {text:?}"))?;
        ensure!(parsed.to_bits() == num.to_bits(), "std round trip of {text:?} failed");
    }
    debug!("{timings:?}");
    Ok(timings)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).init();

    let mut rng = Lcg::new(args.seed);
    let timings = benchmark(&mut rng, args.iterations)?;
    if timings.dconv_format.is_zero() || timings.dconv_scan.is_zero() {
        info!("Too few iterations to compare timings");
        return Ok(())
    }
    eprintln!("Double-to-string conversion: time ratio = {}", ratio(timings.std_format, timings.dconv_format));
    eprintln!("String-to-double conversion: time ratio = {}", ratio(timings.std_scan, timings.dconv_scan));
    Ok(())
}
