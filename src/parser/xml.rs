//! Small helpers over the `roxmltree` DOM shared by the index and compound parsers.

use std::path::Path;

use roxmltree::Node as XmlNode;

use crate::error::{Error, Result};
use crate::node::TemplateParam;

/// Direct element children with the given tag name, in document order.
pub(crate) fn elements<'a, 'input>(
	node: XmlNode<'a, 'input>,
	name: &'static str,
) -> impl Iterator<Item = XmlNode<'a, 'input>> {
	node.children().filter(move |child| child.has_tag_name(name))
}

/// First direct element child with the given tag name.
pub(crate) fn child<'a, 'input>(node: XmlNode<'a, 'input>, name: &'static str) -> Option<XmlNode<'a, 'input>> {
	elements(node, name).next()
}

/// Flattened text of the first child with the given tag name, or an empty string.
pub(crate) fn child_text(node: XmlNode<'_, '_>, name: &'static str) -> String {
	child(node, name).map(flatten_text).unwrap_or_default()
}

/// Like [`child_text`], but `None` when the child is absent or blank.
pub(crate) fn optional_child_text(node: XmlNode<'_, '_>, name: &'static str) -> Option<String> {
	child(node, name)
		.map(flatten_text)
		.filter(|text| !text.is_empty())
}

/// Concatenate every descendant text node and collapse runs of whitespace.
///
/// Mixed content such as `<type>const <ref refid="..">Foo</ref> &amp;</type>` becomes
/// `const Foo &`.
pub(crate) fn flatten_text(node: XmlNode<'_, '_>) -> String {
	let raw: String = node
		.descendants()
		.filter(|d| d.is_text())
		.filter_map(|d| d.text())
		.collect();
	raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Attribute value, failing with a schema error naming the fragment when absent.
pub(crate) fn required_attr(path: &Path, node: XmlNode<'_, '_>, name: &str) -> Result<String> {
	node.attribute(name).map(str::to_string).ok_or_else(|| {
		Error::schema(
			path,
			format!(
				"<{}> is missing required attribute `{name}`",
				node.tag_name().name()
			),
		)
	})
}

/// Optional attribute as an owned string.
pub(crate) fn attr(node: XmlNode<'_, '_>, name: &str) -> Option<String> {
	node.attribute(name).map(str::to_string)
}

/// Parse a `<templateparamlist>` element into its parameters.
pub(crate) fn template_params(list: XmlNode<'_, '_>) -> Vec<TemplateParam> {
	elements(list, "param")
		.map(|param| TemplateParam {
			type_: child_text(param, "type"),
			declname: optional_child_text(param, "declname"),
			defval: optional_child_text(param, "defval"),
		})
		.collect()
}
