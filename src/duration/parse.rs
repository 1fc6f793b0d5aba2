/// Nanoseconds per unit symbol.
///
/// `d`, `w` and `y` are approximations (24h days, 7 day weeks,
/// 365 day years), not calendar accurate.
const UNIT_TABLE: &[(&str, i64)] = &[
	("ns", 1),
	("us", 1_000),
	("µs", 1_000), // U+00B5 = micro symbol
	("μs", 1_000), // U+03BC = Greek letter mu
	("ms", 1_000_000),
	("s", 1_000_000_000),
	("m", 60 * 1_000_000_000),
	("h", 3_600 * 1_000_000_000),
	("d", 24 * 3_600 * 1_000_000_000),
	("w", 7 * 24 * 3_600 * 1_000_000_000),
	("y", 365 * 24 * 3_600 * 1_000_000_000),
];

fn unit_nanos(unit: &str) -> Option<i64> {
	UNIT_TABLE.iter().find(|(u, _)| *u == unit).map(|(_, n)| *n)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
	#[error("invalid duration {0:?}")]
	Invalid(String),

	#[error("missing unit in duration {0:?}")]
	MissingUnit(String),

	#[error("unknown unit {unit:?} in duration {input:?}")]
	UnknownUnit { unit: String, input: String },

	#[error("expected a number (seconds) or a string, got {0}")]
	UnsupportedValue(String),
}

/// Consumes the leading run of ascii digits from `s`.
///
/// Returns `None` if the value would overflow an i64.
fn leading_int(s: &str) -> Option<(i64, &str)> {
	let mut x: i64 = 0;
	let mut i = 0;
	for &c in s.as_bytes() {
		if !c.is_ascii_digit() {
			break;
		}
		x = x.checked_mul(10)?.checked_add((c - b'0') as i64)?;
		i += 1;
	}
	Some((x, &s[i..]))
}

/// Parses a duration expression into nanoseconds.
///
/// The expression is a possibly signed sequence of decimal numbers,
/// each with an optional fraction and a unit suffix, such as
/// `"300ms"`, `"-1.5h"` or `"2h45m"`.
pub(super) fn parse(input: &str) -> Result<i64, ParseError> {
	// [-+]?([0-9]*(\.[0-9]*)?[a-z]+)+
	let mut s = input;
	let mut total: i64 = 0;
	let mut neg = false;

	if s.starts_with(['-', '+']) {
		neg = s.starts_with('-');
		s = &s[1..];
	}
	// special case: a bare zero needs no unit
	if s == "0" {
		return Ok(0);
	}
	if s.is_empty() {
		return Err(ParseError::Invalid(input.into()));
	}

	while !s.is_empty() {
		// the next character must be [0-9.]
		if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
			return Err(ParseError::Invalid(input.into()));
		}

		// integer part
		let len = s.len();
		let (int_part, rest) = leading_int(s)
			.ok_or_else(|| ParseError::Invalid(input.into()))?;
		s = rest;
		let pre = s.len() != len;

		// optional fractional part, scale counts the decimal places
		let mut frac: i64 = 0;
		let mut scale: f64 = 1.0;
		let mut post = false;
		if let Some(rest) = s.strip_prefix('.') {
			let len = rest.len();
			let (f, rest) = leading_int(rest)
				.ok_or_else(|| ParseError::Invalid(input.into()))?;
			frac = f;
			s = rest;
			for _ in 0..len - s.len() {
				scale *= 10.0;
			}
			post = s.len() != len;
		}
		if !pre && !post {
			// no digits (e.g. ".s" or "-.s")
			return Err(ParseError::Invalid(input.into()));
		}

		// the unit runs until the next digit or dot
		let end = s
			.find(|c: char| c == '.' || c.is_ascii_digit())
			.unwrap_or(s.len());
		if end == 0 {
			return Err(ParseError::MissingUnit(input.into()));
		}
		let (unit, rest) = s.split_at(end);
		s = rest;
		let nanos = unit_nanos(unit).ok_or_else(|| ParseError::UnknownUnit {
			unit: unit.into(),
			input: input.into(),
		})?;

		let mut v = int_part
			.checked_mul(nanos)
			.ok_or_else(|| ParseError::Invalid(input.into()))?;
		if frac > 0 {
			// f64 is needed to stay nanosecond accurate for
			// fractions of the largest units
			let f = (frac as f64 * (nanos as f64 / scale)) as i64;
			v = v
				.checked_add(f)
				.ok_or_else(|| ParseError::Invalid(input.into()))?;
		}
		total = total
			.checked_add(v)
			.ok_or_else(|| ParseError::Invalid(input.into()))?;
	}

	Ok(if neg { -total } else { total })
}
