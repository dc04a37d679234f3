//! Declarative prerender overrides for build-time pages.
//!
//! A host build pipeline knows its pages and a default prerender setting for each; this
//! crate decides, per page path, whether to override that default. Overrides are expressed
//! as [rules][Rule]: a [selector][Selector] over the page path plus the prerender
//! disposition to apply when it matches.
//!
//! A selector is a conjunction of up to four optional conditions:
//!
//! - `starts_with`: path prefix (a leading `/` on the rule is ignored);
//! - `ends_with`: path suffix;
//! - `includes`: substring;
//! - `matches`: the whole path, either [exactly][MatchPattern::Exact] or by
//!   [regex][MatchPattern::Regex].
//!
//! When several rules match a path, the [resolver][PatternResolver] picks the most
//! specific one: each rule scores one point per condition present, plus four when
//! `matches` is an exact path, so an exact match always beats any combination of the
//! other conditions. Rules with equal scores are ranked by the total length of their
//! condition text, and rules still tied after that resolve in input order.
//!
//! ```
//! use prerender_patterns::{PatternResolver, Rule, Selector};
//!
//! let resolver = PatternResolver::new([
//! 	Rule::prerender(Selector {
//! 		starts_with: Some("blog/".into()),
//! 		..Default::default()
//! 	}),
//! 	Rule::no_prerender(Selector {
//! 		matches: Some("blog/index".into()),
//! 		..Default::default()
//! 	}),
//! ]);
//!
//! assert_eq!(resolver.resolve("blog/2024-roundup"), Some(true));
//! assert_eq!(resolver.resolve("blog/index"), Some(false)); // exact match wins
//! assert_eq!(resolver.resolve("about"), None); // no rule applies, host keeps its default
//! ```
//!
//! A selector with no conditions matches nothing, so an empty rule can never take over
//! every page. `None` from the resolver means no rule applied; the host should keep
//! whatever setting the page already had.
//!
//! With the `serde` feature, rules deserialize from the camelCase shape hosts tend to keep
//! in config files: `{ "startsWith": "blog/", "prerender": true }`, with `matches` as
//! either a bare string or `{ "regex": "..." }`.

#![warn(clippy::unwrap_used, missing_docs)]
#![deny(rust_2018_idioms)]

// to build regex matches patterns
pub use regex::Regex;

pub use error::*;
pub use resolver::*;
pub use rule::*;

mod error;
mod resolver;
mod rule;

#[cfg(feature = "serde")]
mod serde_formats;
