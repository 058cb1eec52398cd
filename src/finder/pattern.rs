//! Pattern utilities for name filters.
//!
//! A pattern is a list of literal names separated by `|`. Every other regex metacharacter is
//! escaped, so `operator()|size` matches exactly those two names.

use regex::Regex;

use crate::error::Result;

/// Escape every alternative of a `|`-separated name list, keeping the separators.
pub fn escape_name_alternatives(pattern: &str) -> String {
	pattern
		.split('|')
		.map(|alternative| regex::escape(alternative.trim()))
		.collect::<Vec<_>>()
		.join("|")
}

/// Compile a `|`-separated list of literal names into a regex matching any whole name.
pub fn compile_name_pattern(pattern: &str, case_sensitive: bool) -> Result<Regex> {
	let escaped = escape_name_alternatives(pattern.trim());
	let flags = if case_sensitive { "" } else { "(?i)" };
	Ok(Regex::new(&format!("{flags}^(?:{escaped})$"))?)
}
