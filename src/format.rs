//! printf-style format directives: `%[flags][width][.precision]conversion`.

use core::str::FromStr;

use bitflags::bitflags;
use displaydoc::Display;

bitflags! {
    /// printf flags, plus [Flags::UPPERCASE] (implied by `E`, `F` and `G`) and [Flags::HAS_WIDTH].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// `#`: always print a decimal point, and keep trailing zeros in `%g`.
        const ALTERNATE = 1 << 0;
        /// `-`: pad on the right.
        const LEFT_JUSTIFY = 1 << 1;
        /// `+`: print `+` for non-negative values.
        const FORCE_SIGN = 1 << 2;
        /// ` `: print a space for non-negative values.
        const SPACE_SIGN = 1 << 3;
        /// `0`: pad with zeros between the sign and the digits.
        const ZERO_PAD = 1 << 4;
        const UPPERCASE = 1 << 5;
        /// Set by [FormatSpec::new] exactly when the width is nonzero. Padding itself is driven
        /// by [FormatSpec::width], so passing this flag in has no effect.
        const HAS_WIDTH = 1 << 6;
    }
}

/// The three floating point conversions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `%e`: `d.ddde±dd`.
    Exponential,
    /// `%f`: `ddd.ddd`.
    Fixed,
    /// `%g`: whichever of the other two suits the magnitude, without trailing zeros.
    General,
}

impl Conversion {
    /// Maps a conversion character to its conversion and whether it asks for uppercase output.
    pub fn from_char(c: char) -> Option<(Self, bool)> {
        match c {
            'e' => Some((Self::Exponential, false)),
            'E' => Some((Self::Exponential, true)),
            'f' => Some((Self::Fixed, false)),
            'F' => Some((Self::Fixed, true)),
            'g' => Some((Self::General, false)),
            'G' => Some((Self::General, true)),
            _ => None,
        }
    }
}

/// How many digits to print.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// As many as needed for the text to read back as the same `f64`, and no more.
    Shortest,
    /// An exact count, interpreted per [Conversion] as in printf.
    Digits(u32),
}

impl Default for Precision {
    /// printf's default precision.
    fn default() -> Self {
        Precision::Digits(6)
    }
}

/// A complete formatting request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    conversion: Conversion,
    flags: Flags,
    width: u32,
    precision: Precision,
}

impl FormatSpec {
    /// Builds a spec, resolving conflicting flags the way printf does: `-` overrides `0` and `+`
    /// overrides ` `. A nonzero `width` sets [Flags::HAS_WIDTH].
    pub fn new(conversion: Conversion, flags: Flags, width: u32, precision: Precision) -> Self {
        let mut flags = flags;
        if flags.contains(Flags::LEFT_JUSTIFY) {
            flags.remove(Flags::ZERO_PAD);
        }
        if flags.contains(Flags::FORCE_SIGN) {
            flags.remove(Flags::SPACE_SIGN);
        }
        flags.set(Flags::HAS_WIDTH, width > 0);
        FormatSpec{ conversion, flags, width, precision }
    }

    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

/// An error parsing a format directive.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveError {
    /// Format directive must start with `%`.
    MissingPercent,

    /// Format directive ends before its conversion character.
    MissingConversion,

    /// Unexpected character {0:?} in format directive.
    UnexpectedChar(char),

    /// Width or precision in format directive is too large.
    Overflow,
}

impl core::error::Error for DirectiveError {}

/// Accumulates a decimal field, failing on overflow.
fn parse_decimal(rest: &mut &str) -> Result<Option<u32>, DirectiveError> {
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return Ok(None)
    }
    let (digits, tail) = rest.split_at(end);
    *rest = tail;
    digits.bytes().try_fold(0u32, |acc, b| {
        acc.checked_mul(10)?.checked_add((b - b'0') as u32)
    }).map(Some).ok_or(DirectiveError::Overflow)
}

impl FromStr for FormatSpec {
    type Err = DirectiveError;

    /// Parses a single directive such as `%+#22.15e`. A missing precision is printf's default of
    /// 6; a bare `.` is precision 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.strip_prefix('%').ok_or(DirectiveError::MissingPercent)?;

        let mut flags = Flags::empty();
        loop {
            let flag = match rest.chars().next() {
                Some('#') => Flags::ALTERNATE,
                Some('-') => Flags::LEFT_JUSTIFY,
                Some('+') => Flags::FORCE_SIGN,
                Some(' ') => Flags::SPACE_SIGN,
                Some('0') => Flags::ZERO_PAD,
                _ => break,
            };
            flags |= flag;
            rest = &rest[1..];
        }

        let width = parse_decimal(&mut rest)?.unwrap_or(0);

        let precision = match rest.strip_prefix('.') {
            Some(tail) => {
                rest = tail;
                Precision::Digits(parse_decimal(&mut rest)?.unwrap_or(0))
            }
            None => Precision::default(),
        };

        let mut chars = rest.chars();
        let c = chars.next().ok_or(DirectiveError::MissingConversion)?;
        let (conversion, uppercase) = Conversion::from_char(c)
            .ok_or(DirectiveError::UnexpectedChar(c))?;
        if let Some(extra) = chars.next() {
            return Err(DirectiveError::UnexpectedChar(extra))
        }
        if uppercase {
            flags |= Flags::UPPERCASE;
        }

        Ok(FormatSpec::new(conversion, flags, width, precision))
    }
}
