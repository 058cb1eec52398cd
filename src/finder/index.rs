use std::sync::Arc;

use super::filter::NodeFilter;
use super::{ItemFinderFactory, Level, MatcherStack};
use crate::error::Result;
use crate::node::{Compound, Index, Member, Node};

pub(super) fn find_in_index(
	factory: &ItemFinderFactory<'_>,
	index: &Index,
	stack: &MatcherStack,
) -> Result<Vec<Node>> {
	let mut results = Vec::new();
	for compound in &index.compounds {
		let node = Node::Compound(Arc::clone(compound));
		if stack.matches(Level::Compound, &node) {
			results.extend(factory.find(&node, stack)?);
		}
	}
	Ok(results)
}

pub(super) fn filter_index(
	factory: &ItemFinderFactory<'_>,
	node: &Node,
	index: &Index,
	filter: &dyn NodeFilter,
	matches: &mut Vec<Node>,
) -> Result<()> {
	for compound in &index.compounds {
		factory.filter(node, &Node::Compound(Arc::clone(compound)), filter, matches)?;
	}
	Ok(())
}

/// Member stubs are checked first so that the detail fragment is only parsed when the query
/// actually needs to look inside this compound. The detail is then searched once for every
/// matched refid, so results follow the detail fragment's order and repeated stubs collapse.
pub(super) fn find_in_compound(
	factory: &ItemFinderFactory<'_>,
	compound: &Arc<Compound>,
	stack: &MatcherStack,
) -> Result<Vec<Node>> {
	let mut matched_stubs = Vec::new();
	for member in &compound.members {
		let stub = Node::Member(Arc::clone(member));
		if stack.matches(Level::Member, &stub) {
			matched_stubs.extend(factory.find(&stub, stack)?);
		}
	}

	if matched_stubs.is_empty() {
		let node = Node::Compound(Arc::clone(compound));
		return Ok(if stack.full_match(Level::Compound, &node)? {
			vec![node]
		} else {
			Vec::new()
		});
	}

	let detail = Node::CompoundDef(factory.store().compound(&compound.refid)?);
	let scoped = factory
		.matchers()
		.ref_set_matcher_stack(matched_stubs.iter().map(Node::refid));
	factory.find(&detail, &scoped)
}

pub(super) fn filter_compound(
	factory: &ItemFinderFactory<'_>,
	node: &Node,
	compound: &Compound,
	filter: &dyn NodeFilter,
	matches: &mut Vec<Node>,
) -> Result<()> {
	let detail = Node::CompoundDef(factory.store().compound(&compound.refid)?);
	factory.filter(node, &detail, filter, matches)
}

pub(super) fn find_in_member(member: &Arc<Member>, stack: &MatcherStack) -> Result<Vec<Node>> {
	let node = Node::Member(Arc::clone(member));
	Ok(if stack.full_match(Level::Member, &node)? {
		vec![node]
	} else {
		Vec::new()
	})
}
