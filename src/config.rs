//! Session configuration.

use std::path::{Path, PathBuf};

/// Environment variable that disables anchor registration when set to a truthy value.
pub const NO_LINK_ENV: &str = "DOXYQUERY_NO_LINK";

/// Identity and location of one Doxygen XML export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
	/// Project name, used to prefix every anchor id.
	name: String,
	/// Directory holding `index.xml` and the compound fragments.
	path: PathBuf,
}

impl ProjectInfo {
	/// Describe a project whose XML export lives in `path`.
	pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
		}
	}

	/// Project name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// XML directory.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Anchor id for a refid inside this project.
	pub fn anchor(&self, refid: &str) -> String {
		format!("{}{}", self.name, refid)
	}
}

/// Options that control how nodes are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
	/// Skip anchor registration and emit no target nodes.
	pub no_link: bool,
}

impl RenderOptions {
	/// Default options, with `no_link` taken from `DOXYQUERY_NO_LINK`.
	///
	/// `1`, `true`, `yes` and `on` (any case) enable it; anything else leaves it off.
	pub fn from_env() -> Self {
		let raw = std::env::var(NO_LINK_ENV).unwrap_or_default();
		Self {
			no_link: is_truthy(&raw),
		}
	}

	/// Enables or disables anchor registration.
	pub fn with_no_link(mut self, no_link: bool) -> Self {
		self.no_link = no_link;
		self
	}
}

fn is_truthy(raw: &str) -> bool {
	let v = raw.trim().to_ascii_lowercase();
	matches!(v.as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn anchor_prefixes_project_name() {
		let project = ProjectInfo::new("proj", "/tmp/xml");
		assert_eq!(project.anchor("classFoo"), "projclassFoo");
		assert_eq!(project.path(), Path::new("/tmp/xml"));
	}

	#[test]
	fn truthy_values() {
		for value in ["1", "true", " YES ", "On"] {
			assert!(is_truthy(value), "{value}");
		}
		for value in ["", "0", "false", "no-link"] {
			assert!(!is_truthy(value), "{value}");
		}
	}

	#[test]
	fn builder_sets_no_link() {
		assert!(RenderOptions::default().with_no_link(true).no_link);
		assert!(!RenderOptions::default().no_link);
	}
}
