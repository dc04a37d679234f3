use miette::Diagnostic;
use thiserror::Error;

/// Errors emitted when building prerender rules.
///
/// Matching and resolution themselves never fail: a selector that cannot apply simply
/// matches nothing.
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
#[diagnostic(url(docsrs))]
pub enum PatternError {
	/// Error received when a regex pattern cannot be compiled.
	#[error("cannot parse regex pattern: {0}")]
	#[diagnostic(code(prerender_patterns::rule::regex_parse))]
	RegexParse(#[source] regex::Error),
}
