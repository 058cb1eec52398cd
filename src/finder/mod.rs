//! Structural queries over the document forest.
//!
//! A [`Finder`] is rooted at the parsed index. Queries are described by a [`MatcherStack`]
//! and resolved by one traversal strategy per [`Node`] kind. Compound detail fragments are
//! only loaded when one of the compound's member stubs matches the member-level predicate.

mod compound;
/// Node filters for unconditional traversals.
pub mod filter;
mod index;
/// Matchers, matcher stacks and the factory that builds them.
pub mod matcher;
/// Name pattern compilation used by [`NamePatternFilter`].
pub mod pattern;

use std::sync::Arc;

pub use self::filter::{KindFilter, NamePatternFilter, NodeFilter, ParentFilter};
pub use self::matcher::{Level, Matcher, MatcherFactory, MatcherStack};
use crate::error::{Error, Result};
use crate::node::{Index, Node};
use crate::parser::DocumentStore;

/// Dispatches each node kind to its traversal strategy.
///
/// Holds the document store so that compound strategies can load detail fragments, and a
/// shared [`MatcherFactory`] so they can build ref-scoped stacks for the detail tree.
#[derive(Debug, Clone, Copy)]
pub struct ItemFinderFactory<'a> {
	store: &'a DocumentStore,
	matchers: MatcherFactory,
}

impl<'a> ItemFinderFactory<'a> {
	/// Create a dispatcher over the given store.
	pub fn new(store: &'a DocumentStore, matchers: MatcherFactory) -> Self {
		Self { store, matchers }
	}

	/// Store used for on-demand fragment loads.
	pub fn store(&self) -> &'a DocumentStore {
		self.store
	}

	/// Shared matcher factory.
	pub fn matchers(&self) -> MatcherFactory {
		self.matchers
	}

	/// Resolve `stack` against the subtree rooted at `node`, in document order.
	pub fn find(&self, node: &Node, stack: &MatcherStack) -> Result<Vec<Node>> {
		match node {
			Node::Index(data) => index::find_in_index(self, data, stack),
			Node::Compound(data) => index::find_in_compound(self, data, stack),
			Node::Member(data) => index::find_in_member(data, stack),
			Node::CompoundDef(data) => compound::find_in_compound_def(self, data, stack),
			Node::SectionDef(data) => compound::find_in_section(self, data, stack),
			Node::MemberDef(data) => compound::find_in_member_def(data, stack),
		}
	}

	/// Test `node` against `filter`, then walk everything reachable below it.
	pub fn filter(
		&self,
		parent: &Node,
		node: &Node,
		filter: &dyn NodeFilter,
		matches: &mut Vec<Node>,
	) -> Result<()> {
		if filter.allow(parent, node) {
			matches.push(node.clone());
		}
		self.filter_children(node, filter, matches)
	}

	/// Walk everything reachable below `node` without testing `node` itself.
	///
	/// Compounds continue into their detail fragment, loading it if needed. Index member stubs
	/// are not visited; their definitions are reached through the detail fragment instead.
	pub fn filter_children(
		&self,
		node: &Node,
		filter: &dyn NodeFilter,
		matches: &mut Vec<Node>,
	) -> Result<()> {
		match node {
			Node::Index(data) => index::filter_index(self, node, data, filter, matches),
			Node::Compound(data) => index::filter_compound(self, node, data, filter, matches),
			Node::CompoundDef(data) => compound::filter_compound_def(self, node, data, filter, matches),
			Node::SectionDef(data) => compound::filter_section(self, node, data, filter, matches),
			Node::Member(_) | Node::MemberDef(_) => Ok(()),
		}
	}
}

/// Query entry point rooted at a parsed index.
#[derive(Debug, Clone)]
pub struct Finder<'a> {
	root: Arc<Index>,
	factory: ItemFinderFactory<'a>,
}

impl<'a> Finder<'a> {
	/// Parse (or reuse) the store's index and root a finder at it.
	pub fn new(store: &'a DocumentStore) -> Result<Self> {
		Ok(Self {
			root: store.index()?,
			factory: ItemFinderFactory::new(store, MatcherFactory),
		})
	}

	/// The index root.
	pub fn root(&self) -> Node {
		Node::Index(Arc::clone(&self.root))
	}

	/// Dispatcher used by this finder.
	pub fn factory(&self) -> &ItemFinderFactory<'a> {
		&self.factory
	}

	/// Every node matching `stack`, in document order. Zero results is not an error.
	pub fn find(&self, stack: &MatcherStack) -> Result<Vec<Node>> {
		self.factory.find(&self.root(), stack)
	}

	/// Like [`Finder::find`], but rooted at an arbitrary node.
	pub fn find_in(&self, node: &Node, stack: &MatcherStack) -> Result<Vec<Node>> {
		self.factory.find(node, stack)
	}

	/// The first node matching `stack`.
	///
	/// More than one result is expected: the same symbol is often listed in both a file and a
	/// group view. The first result in document order wins. Zero results fails with
	/// [`Error::NoMatches`].
	pub fn find_one(&self, stack: &MatcherStack) -> Result<Node> {
		let results = self.find(stack)?;
		if results.len() > 1 {
			tracing::debug!(count = results.len(), query = %stack, "multiple matches, using the first");
		}
		results
			.into_iter()
			.next()
			.ok_or_else(|| Error::NoMatches(stack.to_string()))
	}

	/// Append every reachable node accepted by `filter`, forcing every compound detail load.
	///
	/// There is no deduplication: a node reachable through several paths is appended once
	/// per path.
	pub fn filter(&self, filter: &dyn NodeFilter, matches: &mut Vec<Node>) -> Result<()> {
		self.factory.filter_children(&self.root(), filter, matches)
	}
}
