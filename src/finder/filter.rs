use regex::Regex;

use super::pattern::compile_name_pattern;
use crate::error::Result;
use crate::node::{Node, NodeKinds};

/// Predicate used by [`Finder::filter`](super::Finder::filter), given each node and its parent.
pub trait NodeFilter {
	/// Whether `node`, reached from `parent`, should be collected.
	fn allow(&self, parent: &Node, node: &Node) -> bool;
}

impl<F> NodeFilter for F
where
	F: Fn(&Node, &Node) -> bool,
{
	fn allow(&self, parent: &Node, node: &Node) -> bool {
		self(parent, node)
	}
}

/// Selects nodes by kind, optionally also requiring a Doxygen kind label.
#[derive(Debug, Clone)]
pub struct KindFilter {
	kinds: NodeKinds,
	label: Option<String>,
}

impl KindFilter {
	/// Accept every node whose kind is in `kinds`.
	pub fn new(kinds: NodeKinds) -> Self {
		Self { kinds, label: None }
	}

	/// Additionally require the kind label, e.g. `class` or `function`.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

impl NodeFilter for KindFilter {
	fn allow(&self, _parent: &Node, node: &Node) -> bool {
		self.kinds.contains(node.kind().into())
			&& self
				.label
				.as_deref()
				.is_none_or(|label| node.kind_label() == label)
	}
}

/// Selects nodes whose name is one of a `|`-separated list of literal names.
#[derive(Debug, Clone)]
pub struct NamePatternFilter {
	pattern: Regex,
}

impl NamePatternFilter {
	/// Compile the pattern. Matching is case sensitive unless `case_sensitive` is false.
	pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self> {
		Ok(Self {
			pattern: compile_name_pattern(pattern, case_sensitive)?,
		})
	}
}

impl NodeFilter for NamePatternFilter {
	fn allow(&self, _parent: &Node, node: &Node) -> bool {
		self.pattern.is_match(node.name())
	}
}

/// Restricts another filter to nodes whose parent has one of the given kinds and, optionally,
/// a given name.
pub struct ParentFilter<F> {
	inner: F,
	kinds: NodeKinds,
	name: Option<String>,
}

impl<F: NodeFilter> ParentFilter<F> {
	/// Wrap `inner`, requiring the parent's kind to be in `kinds`.
	pub fn new(inner: F, kinds: NodeKinds) -> Self {
		Self {
			inner,
			kinds,
			name: None,
		}
	}

	/// Additionally require the parent's name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

impl<F: NodeFilter> NodeFilter for ParentFilter<F> {
	fn allow(&self, parent: &Node, node: &Node) -> bool {
		self.kinds.contains(parent.kind().into())
			&& self.name.as_deref().is_none_or(|name| parent.name() == name)
			&& self.inner.allow(parent, node)
	}
}
