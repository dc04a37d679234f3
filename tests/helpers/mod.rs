#![allow(dead_code)]

use std::sync::Once;

use prerender_patterns::{MatchPattern, PatternResolver, Rule, Selector};

pub fn filt(rules: impl IntoIterator<Item = Rule>) -> PatternResolver {
	tracing_init();
	PatternResolver::new(rules)
}

fn tracing_init() {
	static ONCE: Once = Once::new();
	ONCE.call_once(|| {
		tracing_subscriber::fmt()
			.with_max_level(tracing::Level::TRACE)
			.with_test_writer()
			.init();
	});
}

pub fn starts_with(prefix: &str) -> Selector {
	Selector {
		starts_with: Some(prefix.to_string()),
		..Default::default()
	}
}

pub fn ends_with(suffix: &str) -> Selector {
	Selector {
		ends_with: Some(suffix.to_string()),
		..Default::default()
	}
}

pub fn includes(substring: &str) -> Selector {
	Selector {
		includes: Some(substring.to_string()),
		..Default::default()
	}
}

pub fn matches_exact(path: &str) -> Selector {
	Selector {
		matches: Some(MatchPattern::Exact(path.to_string())),
		..Default::default()
	}
}

pub fn matches_regex(pattern: &str) -> Selector {
	Selector {
		matches: Some(MatchPattern::regex(pattern).expect("test regex must be valid")),
		..Default::default()
	}
}

pub trait ResolveHarness {
	fn resolve_path(&self, path: &str) -> Option<bool>;

	fn override_pass(&self, path: &str, expected: Option<bool>) {
		tracing::info!(?path, ?expected, "check");

		assert_eq!(
			self.resolve_path(path),
			expected,
			"{path:?} (expected {})",
			match expected {
				Some(true) => "prerender on",
				Some(false) => "prerender off",
				None => "no override",
			}
		);
	}

	fn does_prerender(&self, path: &str) {
		self.override_pass(path, Some(true));
	}

	fn doesnt_prerender(&self, path: &str) {
		self.override_pass(path, Some(false));
	}

	fn no_override(&self, path: &str) {
		self.override_pass(path, None);
	}
}

impl ResolveHarness for PatternResolver {
	fn resolve_path(&self, path: &str) -> Option<bool> {
		self.resolve(path)
	}
}
