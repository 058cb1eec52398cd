use std::fs;
use std::path::Path;
use std::sync::Arc;

use roxmltree::{Document, Node as XmlNode};

use super::xml::{
	attr, child, child_text, elements, flatten_text, optional_child_text, required_attr,
	template_params,
};
use crate::error::{Error, Result};
use crate::node::{CompoundDef, Include, MemberDef, SectionDef};

/// Read and parse a `<refid>.xml` compound detail fragment.
pub(crate) fn parse_compound(path: &Path) -> Result<CompoundDef> {
	let text = fs::read_to_string(path).map_err(|err| Error::parse(path, err))?;
	parse_compound_str(path, &text)
}

/// Parse compound XML already held in memory. `path` is only used for error reporting.
pub(crate) fn parse_compound_str(path: &Path, text: &str) -> Result<CompoundDef> {
	let doc = Document::parse(text).map_err(|err| Error::parse(path, err))?;
	let root = doc.root_element();
	if !root.has_tag_name("doxygen") {
		return Err(Error::schema(
			path,
			format!("expected <doxygen> root, found <{}>", root.tag_name().name()),
		));
	}
	let def = child(root, "compounddef")
		.ok_or_else(|| Error::schema(path, "fragment has no <compounddef>"))?;

	let refid = required_attr(path, def, "id")?;
	let sections = elements(def, "sectiondef")
		.map(|section| parse_section(path, section, &refid).map(Arc::new))
		.collect::<Result<Vec<_>>>()?;

	Ok(CompoundDef {
		name: child_text(def, "compoundname"),
		refid,
		kind: attr(def, "kind").unwrap_or_default(),
		language: attr(def, "language"),
		template_params: child(def, "templateparamlist").map(template_params),
		includes: elements(def, "includes").map(parse_include).collect(),
		brief: child_text(def, "briefdescription"),
		sections,
	})
}

fn parse_include(node: XmlNode<'_, '_>) -> Include {
	Include {
		name: flatten_text(node),
		refid: attr(node, "refid"),
		local: node.attribute("local") == Some("yes"),
	}
}

fn parse_section(path: &Path, node: XmlNode<'_, '_>, compound_refid: &str) -> Result<SectionDef> {
	let members = elements(node, "memberdef")
		.map(|member| parse_member(path, member, compound_refid).map(Arc::new))
		.collect::<Result<Vec<_>>>()?;

	Ok(SectionDef {
		kind: attr(node, "kind").unwrap_or_default(),
		header: optional_child_text(node, "header"),
		members,
	})
}

fn parse_member(path: &Path, node: XmlNode<'_, '_>, compound_refid: &str) -> Result<MemberDef> {
	Ok(MemberDef {
		name: child_text(node, "name"),
		refid: required_attr(path, node, "id")?,
		kind: attr(node, "kind").unwrap_or_default(),
		prot: attr(node, "prot"),
		is_static: node.attribute("static") == Some("yes"),
		type_: child_text(node, "type"),
		args: child_text(node, "argsstring"),
		template_params: child(node, "templateparamlist").map(template_params),
		brief: child_text(node, "briefdescription"),
		compound_refid: compound_refid.to_string(),
	})
}
