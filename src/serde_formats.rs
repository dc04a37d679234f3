//! Serde representation of [`MatchPattern`]: a bare string is an exact match, a
//! `{ "regex": "..." }` map is a regex, mirroring the `string | RegExp` shape this rule
//! format has in JavaScript-side configs.

use std::fmt;

use serde::{
	de::{Error as _, MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};

use crate::MatchPattern;

impl Serialize for MatchPattern {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Exact(exact) => serializer.serialize_str(exact),
			Self::Regex(regex) => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry("regex", regex.as_str())?;
				map.end()
			}
		}
	}
}

impl<'de> Deserialize<'de> for MatchPattern {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(MatchPatternVisitor)
	}
}

struct MatchPatternVisitor;

impl<'de> Visitor<'de> for MatchPatternVisitor {
	type Value = MatchPattern;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an exact path string or a map with a `regex` key")
	}

	fn visit_str<E>(self, exact: &str) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		Ok(MatchPattern::Exact(exact.to_string()))
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut pattern = None;
		while let Some(key) = map.next_key::<String>()? {
			if key == "regex" {
				if pattern.is_some() {
					return Err(A::Error::duplicate_field("regex"));
				}
				pattern = Some(map.next_value::<String>()?);
			} else {
				return Err(A::Error::unknown_field(&key, &["regex"]));
			}
		}

		let pattern = pattern.ok_or_else(|| A::Error::missing_field("regex"))?;
		MatchPattern::regex(&pattern).map_err(A::Error::custom)
	}
}
