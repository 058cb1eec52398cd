/// Compound detail, section and member definition rendering.
pub mod compound;
/// Index, compound stub and member stub rendering.
pub mod index;

pub use compound::{render_compound_def, render_member_def, render_section, section_title};
pub use index::{render_compound, render_index, render_member};

use super::content::ContentNode;
use super::state::RenderState;
use crate::error::Result;
use crate::node::{Node, TemplateParam};

/// Dispatch a node to the renderer for its kind.
pub fn render_node(state: &mut RenderState<'_, '_>, node: &Node) -> Result<Vec<ContentNode>> {
	match node {
		Node::Index(index) => render_index(state, index),
		Node::Compound(compound) => render_compound(state, compound),
		Node::Member(member) => render_member(state, member),
		Node::CompoundDef(def) => render_compound_def(state, def),
		Node::SectionDef(section) => render_section(state, section),
		Node::MemberDef(member) => render_member_def(state, member),
	}
}

/// `template < typename T, int N = 3 >`
pub(crate) fn template_line(params: &[TemplateParam]) -> ContentNode {
	let declarations: Vec<String> = params.iter().map(TemplateParam::declaration).collect();
	ContentNode::line(vec![
		ContentNode::text("template < "),
		ContentNode::text(declarations.join(", ")),
		ContentNode::text(" >"),
	])
}

/// Brief description as a paragraph, or nothing when it is empty.
pub(crate) fn brief_paragraph(brief: &str) -> Option<ContentNode> {
	(!brief.is_empty()).then(|| ContentNode::paragraph(vec![ContentNode::text(brief)]))
}
