use super::{brief_paragraph, template_line};
use crate::error::Result;
use crate::node::{CompoundDef, MemberDef, SectionDef};
use crate::render::content::ContentNode;
use crate::render::state::{RenderState, scope_name};

/// Heading for well-known section kinds.
pub fn section_title(kind: &str) -> Option<&'static str> {
	Some(match kind {
		"public-type" => "Public Types",
		"public-func" => "Public Functions",
		"public-attrib" => "Public Members",
		"public-slot" => "Public Slots",
		"signal" => "Signals",
		"public-static-func" => "Public Static Functions",
		"public-static-attrib" => "Public Static Attributes",
		"protected-type" => "Protected Types",
		"protected-func" => "Protected Functions",
		"protected-attrib" => "Protected Attributes",
		"protected-slot" => "Protected Slots",
		"protected-static-func" => "Protected Static Functions",
		"protected-static-attrib" => "Protected Static Attributes",
		"package-type" => "Package Types",
		"package-func" => "Package Functions",
		"package-attrib" => "Package Attributes",
		"package-static-func" => "Package Static Functions",
		"package-static-attrib" => "Package Static Attributes",
		"private-type" => "Private Types",
		"private-func" => "Private Functions",
		"private-attrib" => "Private Members",
		"private-slot" => "Private Slots",
		"private-static-func" => "Private Static Functions",
		"private-static-attrib" => "Private Static Attributes",
		"friend" => "Friends",
		"related" => "Related",
		"define" => "Defines",
		"typedef" => "Typedefs",
		"enum" => "Enums",
		"func" => "Functions",
		"var" => "Variables",
		_ => return None,
	})
}

/// Brief description, then every section.
pub fn render_compound_def(state: &mut RenderState<'_, '_>, def: &CompoundDef) -> Result<Vec<ContentNode>> {
	let mut nodes: Vec<ContentNode> = brief_paragraph(&def.brief).into_iter().collect();
	for section in &def.sections {
		nodes.extend(render_section(state, section)?);
	}
	Ok(nodes)
}

/// Rubric, then every member. A user-defined header wins over the kind's title.
pub fn render_section(state: &mut RenderState<'_, '_>, section: &SectionDef) -> Result<Vec<ContentNode>> {
	let title = match &section.header {
		Some(header) => header.clone(),
		None => section_title(&section.kind)
			.map(str::to_string)
			.unwrap_or_else(|| section.kind.clone()),
	};
	let mut nodes = vec![ContentNode::rubric(title)];
	for member in &section.members {
		nodes.extend(render_member_def(state, member)?);
	}
	Ok(nodes)
}

/// Anchor, signature block, then the brief description.
///
/// Outside any compound scope the owning compound is loaded so that the name is qualified
/// the same way whether the member is rendered on its own or through its compound.
pub fn render_member_def(state: &mut RenderState<'_, '_>, member: &MemberDef) -> Result<Vec<ContentNode>> {
	if state.scope().is_empty() && !member.compound_refid.is_empty() {
		let owner = state.store.compound(&member.compound_refid)?;
		return state.scoped(scope_name(&owner.kind, &owner.name), |state| {
			render_member_body(state, member)
		});
	}
	render_member_body(state, member)
}

fn render_member_body(state: &mut RenderState<'_, '_>, member: &MemberDef) -> Result<Vec<ContentNode>> {
	let mut nodes = state.create_target(&member.refid);

	let mut lines = Vec::new();
	if let Some(params) = &member.template_params {
		lines.push(template_line(params));
	}
	let mut signature = Vec::new();
	if member.is_static {
		signature.push(ContentNode::text("static "));
	}
	if !member.type_.is_empty() {
		signature.push(ContentNode::text(format!("{} ", member.type_)));
	}
	signature.push(ContentNode::strong(state.qualified(&member.name)));
	if !member.args.is_empty() {
		signature.push(ContentNode::text(member.args.as_str()));
	}
	lines.push(ContentNode::line(signature));
	nodes.push(ContentNode::line_block(lines));

	nodes.extend(brief_paragraph(&member.brief));
	Ok(nodes)
}
