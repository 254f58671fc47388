//! # Amount Patterns
//!
//! Hosts describe how a plain amount is shown with a printf-style template
//! taking two arguments: the amount and the currency name, e.g. `"%.2f %s"`.
//! Patterns are parsed once and rendered many times.
//!
//! Supported syntax:
//!
//! ```text
//! %%                      literal percent
//! %n                      newline
//! %[index$][-][0][width][.precision](f|s)
//! ```
//!
//! Sequential conversions take the amount first and the name second.
//! `1$` and `2$` select them explicitly. Width and precision are at most
//! [`MAX_FIELD`].
//!
//! `%f` rounds half up on the shortest decimal form of the amount, so
//! `0.125` shows as `0.13` and `2.675` as `2.68`, agreeing with how amounts
//! are converted to cents. `%s` on the amount keeps a trailing `.0` for
//! whole numbers (`3.0`); very large or small amounts may use exponent
//! notation (`1e20`).

use std::fmt;
use std::str::FromStr;

use crate::error::{EconomyError, EconomyResult};

/// Precision used by `%f` when none is given.
const DEFAULT_PRECISION: usize = 6;

/// Largest accepted width or precision.
pub const MAX_FIELD: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arg {
    Amount,
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conversion {
    Fixed,
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Slot {
    arg: Arg,
    conversion: Conversion,
    left_align: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed two-slot amount template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountPattern {
    source: String,
    segments: Vec<Segment>,
}

impl AmountPattern {
    /// Parses a pattern.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidPattern` for a dangling `%`, an unknown
    /// conversion, an argument index other than 1 or 2, a third sequential
    /// conversion, `%f` applied to the name, or a width or precision above
    /// [`MAX_FIELD`].
    pub fn parse(source: &str) -> EconomyResult<Self> {
        let chars: Vec<char> = source.chars().collect();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut next_arg = 0usize;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            i += 1;
            if c != '%' {
                literal.push(c);
                continue;
            }

            match chars.get(i) {
                None => return Err(invalid(source, "dangling '%'")),
                Some('%') => {
                    literal.push('%');
                    i += 1;
                    continue;
                }
                Some('n') => {
                    literal.push('\n');
                    i += 1;
                    continue;
                }
                Some(_) => {}
            }

            let mut index = None;
            let digits_end = scan_digits(&chars, i);
            if digits_end > i && chars.get(digits_end) == Some(&'$') {
                index = Some(parse_number(&chars[i..digits_end], source)?);
                i = digits_end + 1;
            }

            let mut left_align = false;
            let mut zero_pad = false;
            loop {
                match chars.get(i) {
                    Some('-') => left_align = true,
                    Some('0') => zero_pad = true,
                    _ => break,
                }
                i += 1;
            }

            let width_end = scan_digits(&chars, i);
            let width = if width_end > i {
                Some(parse_field(&chars[i..width_end], source, "width")?)
            } else {
                None
            };
            i = width_end;

            let mut precision = None;
            if chars.get(i) == Some(&'.') {
                let precision_end = scan_digits(&chars, i + 1);
                if precision_end == i + 1 {
                    return Err(invalid(source, "missing precision after '.'"));
                }
                precision = Some(parse_field(&chars[i + 1..precision_end], source, "precision")?);
                i = precision_end;
            }

            let conversion = match chars.get(i) {
                Some('f') => Conversion::Fixed,
                Some('s') => Conversion::Text,
                Some(other) => {
                    return Err(invalid(source, &format!("unsupported conversion '{other}'")))
                }
                None => return Err(invalid(source, "unterminated conversion")),
            };
            i += 1;

            let arg = match index {
                Some(1) => Arg::Amount,
                Some(2) => Arg::Name,
                Some(n) => return Err(invalid(source, &format!("argument index {n} out of range"))),
                None => {
                    let arg = match next_arg {
                        0 => Arg::Amount,
                        1 => Arg::Name,
                        _ => return Err(invalid(source, "more than two arguments")),
                    };
                    next_arg += 1;
                    arg
                }
            };

            if conversion == Conversion::Fixed && arg == Arg::Name {
                return Err(invalid(source, "'%f' cannot format the currency name"));
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Slot(Slot {
                arg,
                conversion,
                left_align,
                zero_pad,
                width,
                precision,
            }));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The text this pattern was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders the pattern with the given amount and currency name.
    #[must_use]
    pub fn render(&self, amount: f64, name: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => render_slot(&mut out, slot, amount, name),
            }
        }
        out
    }
}

fn render_slot(out: &mut String, slot: &Slot, amount: f64, name: &str) {
    let body = match (slot.conversion, slot.arg) {
        (Conversion::Fixed, _) => {
            fixed_half_up(amount, slot.precision.unwrap_or(DEFAULT_PRECISION))
        }
        (Conversion::Text, Arg::Amount) => truncate(format!("{amount:?}"), slot.precision),
        (Conversion::Text, Arg::Name) => truncate(name.to_string(), slot.precision),
    };

    let len = body.chars().count();
    let pad = slot.width.map_or(0, |w| w.saturating_sub(len));
    if pad == 0 {
        out.push_str(&body);
    } else if slot.left_align {
        out.push_str(&body);
        out.extend(std::iter::repeat(' ').take(pad));
    } else if slot.zero_pad && slot.conversion == Conversion::Fixed {
        // zeros go between the sign and the digits
        let digits = body.strip_prefix('-').map_or(body.as_str(), |rest| {
            out.push('-');
            rest
        });
        out.extend(std::iter::repeat('0').take(pad));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(&body);
    }
}

/// `amount` with exactly `precision` fractional digits, ties rounded away
/// from zero.
fn fixed_half_up(amount: f64, precision: usize) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    // Display never uses exponent notation and yields the shortest digits
    // that read back as `amount`.
    let plain = amount.abs().to_string();
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(precision).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if amount.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(b'0' + d)));
    if precision > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
        _ => text,
    }
}

fn scan_digits(chars: &[char], from: usize) -> usize {
    let mut end = from;
    while chars.get(end).is_some_and(char::is_ascii_digit) {
        end += 1;
    }
    end
}

fn parse_number(digits: &[char], source: &str) -> EconomyResult<usize> {
    digits
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| invalid(source, "number too large"))
}

fn parse_field(digits: &[char], source: &str, what: &str) -> EconomyResult<usize> {
    match parse_number(digits, source)? {
        n if n <= MAX_FIELD => Ok(n),
        n => Err(invalid(source, &format!("{what} {n} exceeds {MAX_FIELD}"))),
    }
}

fn invalid(source: &str, reason: &str) -> EconomyError {
    EconomyError::InvalidPattern(format!("{reason} in {source:?}"))
}

impl FromStr for AmountPattern {
    type Err = EconomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AmountPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
