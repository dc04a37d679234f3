use tracing::{debug, trace, trace_span};

use crate::Rule;

/// Resolves prerender overrides for page paths against a set of rules.
///
/// Resolution is a pure function of the path and the rule set: no state is kept between
/// calls, so a resolver can be shared freely across threads and calls may happen in any
/// order. When several rules match the same path, the most specific one wins; see the
/// crate-level documentation for the exact ranking.
#[derive(Debug, Clone, Default)]
pub struct PatternResolver {
	path_prefix: Option<String>,
	rules: Vec<Rule>,
}

impl PatternResolver {
	/// Create a resolver over a set of rules.
	pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
		Self {
			path_prefix: None,
			rules: rules.into_iter().collect(),
		}
	}

	/// Set the pages root prefix.
	///
	/// Paths handed to [`resolve`][PatternResolver::resolve] that start with this prefix
	/// have it removed, along with one following `/`, before any rule is consulted. Paths
	/// not under the prefix are matched as-is.
	#[must_use]
	pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.path_prefix = Some(prefix.into());
		self
	}

	/// The rules this resolver was built with, in input order.
	#[must_use]
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Resolve the prerender override for one page path.
	///
	/// Returns `None` when no rule matches, meaning the host should keep its own default
	/// for the page. Otherwise returns the disposition of the winning rule: all matching
	/// rules are ranked by specificity score, then by condition text length, both
	/// descending, with a stable sort, so rules that are still tied fall back to input
	/// order. That residual ordering is a defined contract, not a failure.
	#[must_use]
	pub fn resolve(&self, path: &str) -> Option<bool> {
		let _span = trace_span!("resolve", ?path).entered();

		let path = self.strip_path_prefix(path);

		let mut matching: Vec<&Rule> = self
			.rules
			.iter()
			.filter(|rule| rule.selector.matches(path))
			.collect();

		if matching.is_empty() {
			trace!("no rule matches, keeping the host's default");
			return None;
		}

		trace!(matching=%matching.len(), "ranking matching rules by specificity");
		matching.sort_by(|a, b| {
			(b.selector.score(), b.selector.tie_break_len())
				.cmp(&(a.selector.score(), a.selector.tie_break_len()))
		});

		let winner = matching[0];
		debug!(
			?path,
			prerender = %winner.prerender,
			"overriding prerender preference"
		);
		Some(winner.prerender)
	}

	/// Strips the pages root from a path so rules match on page-relative paths.
	fn strip_path_prefix<'p>(&self, path: &'p str) -> &'p str {
		match &self.path_prefix {
			Some(prefix) => match path.strip_prefix(prefix.as_str()) {
				Some(rest) => {
					let rest = rest.strip_prefix('/').unwrap_or(rest);
					trace!(?prefix, ?rest, "stripped pages root from path");
					rest
				}
				None => path,
			},
			None => path,
		}
	}
}
