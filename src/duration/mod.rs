//! Signed nanosecond durations with a config friendly string form.
//!
//! Values are parsed from expressions like `"300ms"`, `"-1.5h"` or
//! `"2h45m"` and always serialize back to the exact nanosecond count
//! with an `ns` suffix, so every value round trips without loss.

mod parse;
mod serde;

pub use parse::ParseError;

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A signed elapsed time, counted in nanoseconds.
///
/// Unlike [`std::time::Duration`] this can be negative, which stands
/// for a reversed / in-the-past duration. Valid units when parsing are
/// `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h` and the approximations
/// `d` (24h), `w` (7d) and `y` (365d).
///
/// When used in a config struct, a plain number is read as a count of
/// seconds while a string goes through [`Duration::parse`]:
///
/// ```
/// use commons::Duration;
///
/// let d: Duration = serde_json::from_str("\"2h45m\"").unwrap();
/// assert_eq!(d.as_nanos(), (2 * 3600 + 45 * 60) * 1_000_000_000);
///
/// let d: Duration = serde_json::from_str("2.5").unwrap();
/// assert_eq!(d.as_nanos(), 2_500_000_000);
/// ```
#[derive(
	Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Duration(i64); // nanos

impl Duration {
	pub const ZERO: Self = Self(0);

	pub const fn from_nanos(nanos: i64) -> Self {
		Self(nanos)
	}

	pub fn from_secs(secs: i64) -> Self {
		Self(secs.saturating_mul(NANOS_PER_SEC))
	}

	/// Parses a duration expression, see the type docs for the format.
	pub fn parse(s: &str) -> Result<Self, ParseError> {
		parse::parse(s).map(Self)
	}

	pub const fn as_nanos(&self) -> i64 {
		self.0
	}

	pub fn as_secs_f64(&self) -> f64 {
		self.0 as f64 / NANOS_PER_SEC as f64
	}

	pub const fn is_zero(&self) -> bool {
		self.0 == 0
	}

	pub const fn is_negative(&self) -> bool {
		self.0 < 0
	}

	/// Returns `None` if the duration is negative.
	pub fn to_std(self) -> Option<StdDuration> {
		u64::try_from(self.0).ok().map(StdDuration::from_nanos)
	}

	/// Returns `None` if the duration does not fit into an i64 of
	/// nanoseconds.
	pub fn from_std(d: StdDuration) -> Option<Self> {
		i64::try_from(d.as_nanos()).ok().map(Self)
	}
}

impl fmt::Display for Duration {
	/// Always the raw nanosecond count with an `ns` suffix. Not
	/// pretty, but parses back to the exact same value.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}ns", self.0)
	}
}

impl FromStr for Duration {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_round_trip() {
		for nanos in [0, 1, -1, 5400 * NANOS_PER_SEC, i64::MAX, i64::MIN + 1] {
			let d = Duration::from_nanos(nanos);
			assert_eq!(d.to_string().parse::<Duration>(), Ok(d));
		}
	}

	#[test]
	fn std_conversions() {
		let d = Duration::from_secs(5);
		assert_eq!(d.to_std(), Some(StdDuration::from_secs(5)));
		assert_eq!(Duration::from_std(StdDuration::from_secs(5)), Some(d));

		assert_eq!(Duration::from_nanos(-1).to_std(), None);
		assert_eq!(Duration::from_std(StdDuration::from_secs(u64::MAX)), None);
	}

	#[test]
	fn accessors() {
		assert!(Duration::ZERO.is_zero());
		assert!(Duration::from_secs(-1).is_negative());
		assert_eq!(Duration::from_nanos(2_500_000_000).as_secs_f64(), 2.5);
	}
}
