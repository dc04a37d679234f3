use regex::Regex;
use tracing::trace;

use crate::PatternError;

/// A prerender rule: a path selector plus the disposition to apply when it matches.
///
/// Rules are plain data and are read-only to the resolver. The order they are supplied in
/// carries no semantic weight, except as the final tie-break between rules that are equally
/// specific (see [`PatternResolver`][crate::PatternResolver]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Rule {
	/// The conditions a path must satisfy for this rule to apply.
	#[cfg_attr(feature = "serde", serde(flatten))]
	pub selector: Selector,

	/// Whether a matching page should be prerendered.
	pub prerender: bool,
}

impl Rule {
	/// A rule that turns prerendering on for paths matching the selector.
	#[must_use]
	pub fn prerender(selector: Selector) -> Self {
		Self {
			selector,
			prerender: true,
		}
	}

	/// A rule that turns prerendering off for paths matching the selector.
	#[must_use]
	pub fn no_prerender(selector: Selector) -> Self {
		Self {
			selector,
			prerender: false,
		}
	}
}

/// A conjunctive set of optional path conditions.
///
/// Every condition that is present must hold for a path to match; absent conditions do not
/// constrain the result. A selector with no conditions at all matches nothing, rather than
/// everything, so a malformed rule falls back to "no override" instead of overriding every
/// page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Selector {
	/// Path prefix. A leading `/` on the condition value is ignored, so rules may be written
	/// root-relative or bare and behave identically.
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
	pub starts_with: Option<String>,

	/// Path suffix, compared verbatim.
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
	pub ends_with: Option<String>,

	/// Substring anywhere in the path, compared verbatim.
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
	pub includes: Option<String>,

	/// Whole-path match, either exact or by regex.
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
	pub matches: Option<MatchPattern>,
}

impl Selector {
	/// Whether no conditions are present.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.starts_with.is_none()
			&& self.ends_with.is_none()
			&& self.includes.is_none()
			&& self.matches.is_none()
	}

	/// Matches the selector against a page path.
	///
	/// The path is expected to be relative to the pages root; stripping the root prefix is
	/// the resolver's job (or the caller's, when using this directly).
	#[must_use]
	pub fn matches(&self, path: &str) -> bool {
		if self.is_empty() {
			trace!(?path, "selector has no conditions, never matches");
			return false;
		}

		let s = self
			.starts_with
			.as_deref()
			.map_or(true, |pre| path.starts_with(strip_root(pre)));
		let e = self
			.ends_with
			.as_deref()
			.map_or(true, |suf| path.ends_with(suf));
		let i = self
			.includes
			.as_deref()
			.map_or(true, |sub| path.contains(sub));
		let m = self.matches.as_ref().map_or(true, |pat| match pat {
			MatchPattern::Exact(exact) => path == strip_root(exact),
			MatchPattern::Regex(regex) => regex.is_match(path),
		});

		trace!(?path, selector=?self, starts=%s, ends=%e, includes=%i, matches=%m, "performed selector match");
		s && e && i && m
	}

	/// Specificity score of this selector, higher is more specific.
	///
	/// One point per condition present, plus four for an exact `matches`: an exact whole-path
	/// match outranks any combination of the other three conditions.
	#[must_use]
	pub fn score(&self) -> u32 {
		let slots = [
			self.starts_with.is_some(),
			self.ends_with.is_some(),
			self.includes.is_some(),
			self.matches.is_some(),
		];
		let count = slots.iter().filter(|p| **p).count() as u32;

		if matches!(self.matches, Some(MatchPattern::Exact(_))) {
			count + 4
		} else {
			count
		}
	}

	/// Total character length of the condition values, used to break score ties.
	///
	/// Longer condition text is taken as more specific. Only the four condition values count;
	/// for a regex this is the length of its source text.
	#[must_use]
	pub fn tie_break_len(&self) -> usize {
		self.starts_with.as_deref().map_or(0, str::len)
			+ self.ends_with.as_deref().map_or(0, str::len)
			+ self.includes.as_deref().map_or(0, str::len)
			+ self.matches.as_ref().map_or(0, |pat| match pat {
				MatchPattern::Exact(exact) => exact.len(),
				MatchPattern::Regex(regex) => regex.as_str().len(),
			})
	}
}

/// The pattern of a whole-path `matches` condition.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum MatchPattern {
	/// An exact path. A leading `/` on the pattern is ignored, as for `starts_with`.
	Exact(String),

	/// A regex, tested against the full path.
	Regex(Regex),
}

impl MatchPattern {
	/// Create a regex pattern from its source text.
	pub fn regex(pattern: &str) -> Result<Self, PatternError> {
		Regex::new(pattern)
			.map(Self::Regex)
			.map_err(PatternError::RegexParse)
	}
}

impl From<&str> for MatchPattern {
	fn from(exact: &str) -> Self {
		Self::Exact(exact.to_string())
	}
}

impl From<String> for MatchPattern {
	fn from(exact: String) -> Self {
		Self::Exact(exact)
	}
}

impl From<Regex> for MatchPattern {
	fn from(regex: Regex) -> Self {
		Self::Regex(regex)
	}
}

impl PartialEq<Self> for MatchPattern {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Exact(l), Self::Exact(r)) => l == r,
			(Self::Regex(l), Self::Regex(r)) => l.as_str() == r.as_str(),
			_ => false,
		}
	}
}

impl Eq for MatchPattern {}

/// Rules may be written with or without a leading slash.
fn strip_root(condition: &str) -> &str {
	condition.strip_prefix('/').unwrap_or(condition)
}
