use std::sync::Arc;

use super::filter::NodeFilter;
use super::{ItemFinderFactory, Level, MatcherStack};
use crate::error::Result;
use crate::node::{CompoundDef, MemberDef, Node, SectionDef};

/// Every section is searched; public and protected sections may both hold matches.
pub(super) fn find_in_compound_def(
	factory: &ItemFinderFactory<'_>,
	def: &CompoundDef,
	stack: &MatcherStack,
) -> Result<Vec<Node>> {
	let mut results = Vec::new();
	for section in &def.sections {
		results.extend(factory.find(&Node::SectionDef(Arc::clone(section)), stack)?);
	}
	Ok(results)
}

pub(super) fn filter_compound_def(
	factory: &ItemFinderFactory<'_>,
	node: &Node,
	def: &CompoundDef,
	filter: &dyn NodeFilter,
	matches: &mut Vec<Node>,
) -> Result<()> {
	for section in &def.sections {
		factory.filter(node, &Node::SectionDef(Arc::clone(section)), filter, matches)?;
	}
	Ok(())
}

pub(super) fn find_in_section(
	factory: &ItemFinderFactory<'_>,
	section: &SectionDef,
	stack: &MatcherStack,
) -> Result<Vec<Node>> {
	let mut results = Vec::new();
	for member in &section.members {
		results.extend(factory.find(&Node::MemberDef(Arc::clone(member)), stack)?);
	}
	Ok(results)
}

pub(super) fn filter_section(
	factory: &ItemFinderFactory<'_>,
	node: &Node,
	section: &SectionDef,
	filter: &dyn NodeFilter,
	matches: &mut Vec<Node>,
) -> Result<()> {
	for member in &section.members {
		factory.filter(node, &Node::MemberDef(Arc::clone(member)), filter, matches)?;
	}
	Ok(())
}

pub(super) fn find_in_member_def(member: &Arc<MemberDef>, stack: &MatcherStack) -> Result<Vec<Node>> {
	let node = Node::MemberDef(Arc::clone(member));
	Ok(if stack.full_match(Level::Member, &node)? {
		vec![node]
	} else {
		Vec::new()
	})
}
