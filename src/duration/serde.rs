//! Serde integration for [`Duration`].
//!
//! The generic [`Serialize`]/[`Deserialize`] impls cover every self
//! describing format; [`Duration::from_yaml`] additionally dispatches
//! on explicit yaml tags.

use super::{Duration, ParseError, NANOS_PER_SEC};

use std::fmt;

use serde::de::{Deserializer, Error, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_yaml::value::TaggedValue;
use serde_yaml::Value;

/// A bare number in a config is a count of seconds, fractions allowed.
fn from_config_secs(secs: f64) -> Duration {
	Duration::from_nanos((secs * NANOS_PER_SEC as f64) as i64)
}

impl Serialize for Duration {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
	type Value = Duration;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		write!(formatter, "a duration string or a number of seconds")
	}

	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Duration::parse(v).map_err(E::custom)
	}

	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Ok(from_config_secs(v as f64))
	}

	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Ok(from_config_secs(v as f64))
	}

	fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Ok(from_config_secs(v))
	}
}

impl<'de> Deserialize<'de> for Duration {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(DurationVisitor)
	}
}

fn shape_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a bool",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Sequence(_) => "a sequence",
		Value::Mapping(_) => "a mapping",
		Value::Tagged(_) => "a tagged value",
	}
}

impl Duration {
	/// Decodes a yaml node, dispatching on its tag.
	///
	/// Numbers (plain or tagged `!!int`/`!!float`) are a count of
	/// seconds, strings (plain, untagged or tagged `!!str`) go
	/// through [`Duration::parse`]. Every other tag or shape is
	/// rejected.
	pub fn from_yaml(value: &Value) -> Result<Self, ParseError> {
		match value {
			Value::Number(n) => Ok(from_config_secs(n.as_f64().unwrap_or(0.0))),
			Value::String(s) => Self::parse(s),
			Value::Tagged(tagged) => Self::from_tagged_yaml(tagged),
			other => {
				Err(ParseError::UnsupportedValue(shape_name(other).into()))
			}
		}
	}

	fn from_tagged_yaml(tagged: &TaggedValue) -> Result<Self, ParseError> {
		let tag = tagged.tag.to_string();
		// libyaml reports core schema tags in their long form
		match tag.trim_start_matches('!') {
			"int" | "float" | "tag:yaml.org,2002:int"
			| "tag:yaml.org,2002:float" => match &tagged.value {
				Value::Number(n) => {
					Ok(from_config_secs(n.as_f64().unwrap_or(0.0)))
				}
				other => {
					Err(ParseError::UnsupportedValue(shape_name(other).into()))
				}
			},
			"str" | "tag:yaml.org,2002:str" | "" => match &tagged.value {
				Value::String(s) => Self::parse(s),
				other => {
					Err(ParseError::UnsupportedValue(shape_name(other).into()))
				}
			},
			_ => Err(ParseError::UnsupportedValue(format!("tag {}", tag))),
		}
	}

	/// Encodes to a yaml string node of the form `<nanos>ns`.
	pub fn to_yaml(&self) -> Value {
		Value::String(self.to_string())
	}
}
