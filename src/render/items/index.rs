use std::sync::Arc;

use tracing::debug;

use super::{render_compound_def, render_member_def, template_line};
use crate::error::Result;
use crate::node::{Compound, Index, Member};
use crate::render::content::ContentNode;
use crate::render::document::Diagnostic;
use crate::render::domain::is_class_like;
use crate::render::state::{RenderState, scope_name};

/// Render every compound of the index in document order.
pub fn render_index(state: &mut RenderState<'_, '_>, index: &Index) -> Result<Vec<ContentNode>> {
	let mut nodes = Vec::new();
	for compound in &index.compounds {
		nodes.extend(render_compound(state, compound)?);
	}
	Ok(nodes)
}

/// Render a compound: anchor, title block, then its loaded detail.
///
/// The title block holds an optional template line, a `kind Name` line and one line per
/// include directive. Class-like compounds are also registered with the domain handler.
/// Nothing is registered when the detail fragment fails to load.
pub fn render_compound(state: &mut RenderState<'_, '_>, compound: &Arc<Compound>) -> Result<Vec<ContentNode>> {
	let def = state.store.compound(&compound.refid)?;

	if is_class_like(&compound.kind) {
		state.create_class_target(compound);
	}
	let mut nodes = state.create_target(&compound.refid);

	let mut lines = Vec::new();
	if let Some(params) = &def.template_params {
		lines.push(template_line(params));
	}
	lines.push(ContentNode::line(vec![
		ContentNode::text(""),
		ContentNode::emphasis(compound.kind.as_str()),
		ContentNode::text(" "),
		ContentNode::strong(compound.name.as_str()),
	]));
	for include in &def.includes {
		lines.push(ContentNode::line(vec![ContentNode::literal(include.directive())]));
	}
	nodes.push(ContentNode::line_block(lines));

	let body = state.scoped(scope_name(&compound.kind, &compound.name), |state| {
		render_compound_def(state, &def)
	})?;
	nodes.extend(body);
	Ok(nodes)
}

/// Render a member stub as the definition it refers to.
pub fn render_member(state: &mut RenderState<'_, '_>, member: &Member) -> Result<Vec<ContentNode>> {
	let def = state.store.compound(&member.compound_refid)?;
	let found = def
		.sections
		.iter()
		.flat_map(|section| section.members.iter())
		.find(|candidate| candidate.refid == member.refid)
		.cloned();

	let Some(found) = found else {
		debug!(refid = %member.refid, compound = %member.compound_refid, "member stub has no definition");
		state.document.report(Diagnostic::MissingDefinition {
			refid: member.refid.clone(),
		});
		return Ok(Vec::new());
	};

	state.scoped(scope_name(&def.kind, &def.name), |state| render_member_def(state, &found))
}
