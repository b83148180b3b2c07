//! Conversion between `f64` and printf-style decimal text, without heap allocation or bignums.
//!
//! Formatting supports the `%e`, `%f` and `%g` conversions with printf's flags, width and
//! precision, plus a [shortest](Precision::Shortest) precision that prints the fewest digits that
//! read back as the same number (using [Tejú Jaguá](https://github.com/cassioneri/teju_jagua)).
//! Other precisions print the exact decimal expansion, correctly rounded. Scanning is correctly
//! rounded for any number of digits, and reports results that overflow or underflow.
//!
//! Output goes into a caller-owned buffer through an [OutputCursor]; a number that does not fit
//! is not written at all.
//!
//! ## Example
//!
//! ```
//! use dconv::{Flags, OutputCursor, Precision};
//!
//! let mut buf = [0u8; 64];
//! let mut cursor = OutputCursor::new(&mut buf);
//! dconv::format_double(&mut cursor, 789456123.0, 'e', Flags::FORCE_SIGN | Flags::ALTERNATE, 22, Precision::Digits(15)).unwrap();
//! assert_eq!(cursor.as_str(), "+7.894561230000000e+08");
//!
//! let scanned = dconv::scan_double(cursor.as_str()).unwrap();
//! assert_eq!(scanned.value, 789456123.0);
//! assert_eq!(scanned.end, 22);
//! ```

#![cfg_attr(not(test), no_std)]

mod common;
mod cursor;
mod digits;
mod exact;
mod float;
mod fmt;
mod format;
mod lut;
mod scan;
mod shortest;
mod wide;
pub mod rng;

pub use cursor::OutputCursor;
pub use fmt::{FormatError, format};
pub use format::{Conversion, DirectiveError, Flags, FormatSpec, Precision};
pub use scan::{CANONICAL_NAN, ScanError, Scanned, scan_bytes, scan_double};

/// Digit generators, for benchmarking them on their own.
#[cfg(feature = "bench")]
pub mod internals {
    pub use crate::digits::DigitSequence;
    pub use crate::exact::format_exact;
    pub use crate::float::Binary;
    pub use crate::shortest::{Decimal, teju_jagua};
}

/// Formats `num` at `cursor` as printf would with the directive
/// `%{flags}{width}.{precision}{conversion}`, returning the number of bytes written.
///
/// `conversion` is one of `eEfFgG`; the uppercase forms add [Flags::UPPERCASE]. Nothing is written
/// if the field does not fit in `cursor.remaining()`.
pub fn format_double(
    cursor: &mut OutputCursor,
    num: f64,
    conversion: char,
    flags: Flags,
    width: u32,
    precision: Precision,
) -> Result<usize, FormatError> {
    let (conversion_kind, uppercase) = Conversion::from_char(conversion)
        .ok_or(FormatError::InvalidConversion(conversion))?;
    let flags = if uppercase { flags | Flags::UPPERCASE } else { flags };
    format(cursor, num, &FormatSpec::new(conversion_kind, flags, width, precision))
}
