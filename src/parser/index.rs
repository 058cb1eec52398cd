use std::fs;
use std::path::Path;
use std::sync::Arc;

use roxmltree::{Document, Node as XmlNode};

use super::xml::{attr, child_text, elements, required_attr};
use crate::error::{Error, Result};
use crate::node::{Compound, Index, Member};

/// Read and parse an `index.xml` fragment.
pub(crate) fn parse_index(path: &Path) -> Result<Index> {
	let text = fs::read_to_string(path).map_err(|err| Error::parse(path, err))?;
	parse_index_str(path, &text)
}

/// Parse index XML already held in memory. `path` is only used for error reporting.
pub(crate) fn parse_index_str(path: &Path, text: &str) -> Result<Index> {
	let doc = Document::parse(text).map_err(|err| Error::parse(path, err))?;
	let root = doc.root_element();
	if !root.has_tag_name("doxygenindex") {
		return Err(Error::schema(
			path,
			format!("expected <doxygenindex> root, found <{}>", root.tag_name().name()),
		));
	}

	let compounds = elements(root, "compound")
		.map(|node| parse_compound_entry(path, node).map(Arc::new))
		.collect::<Result<Vec<_>>>()?;

	Ok(Index {
		version: attr(root, "version"),
		compounds,
	})
}

fn parse_compound_entry(path: &Path, node: XmlNode<'_, '_>) -> Result<Compound> {
	let refid = required_attr(path, node, "refid")?;
	let members = elements(node, "member")
		.map(|member| {
			Ok(Arc::new(Member {
				name: child_text(member, "name"),
				refid: required_attr(path, member, "refid")?,
				kind: attr(member, "kind").unwrap_or_default(),
				compound_refid: refid.clone(),
			}))
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(Compound {
		name: child_text(node, "name"),
		kind: attr(node, "kind").unwrap_or_default(),
		refid,
		members,
	})
}
