use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;
use crate::config::{ProjectInfo, RenderOptions};
use crate::node::Node;
use crate::parser::DocumentStore;

const INDEX: &str = r#"<doxygenindex version="1.9.8">
  <compound refid="classns_1_1Stack" kind="class"><name>ns::Stack</name>
    <member refid="classns_1_1Stack_1push" kind="function"><name>push</name></member>
    <member refid="classns_1_1Stack_1gone" kind="function"><name>gone</name></member>
  </compound>
  <compound refid="util_8h" kind="file"><name>util.h</name>
    <member refid="util_8h_1clamp" kind="function"><name>clamp</name></member>
  </compound>
</doxygenindex>
"#;

const STACK: &str = r#"<doxygen version="1.9.8">
  <compounddef id="classns_1_1Stack" kind="class" language="C++">
    <compoundname>ns::Stack</compoundname>
    <includes local="no">stack.h</includes>
    <templateparamlist>
      <param><type>typename</type><declname>T</declname></param>
      <param><type>int</type><declname>N</declname><defval>8</defval></param>
    </templateparamlist>
    <briefdescription><para>Fixed capacity stack.</para></briefdescription>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classns_1_1Stack_1push" prot="public" static="no">
        <type>void</type><name>push</name><argsstring>(T value)</argsstring>
        <briefdescription><para>Push a value.</para></briefdescription>
      </memberdef>
    </sectiondef>
    <sectiondef kind="user-defined">
      <header>Helpers</header>
      <memberdef kind="function" id="classns_1_1Stack_1make" prot="public" static="yes">
        <type>Stack</type><name>make</name><argsstring>()</argsstring>
      </memberdef>
    </sectiondef>
  </compounddef>
</doxygen>
"#;

const UTIL_H: &str = r#"<doxygen version="1.9.8">
  <compounddef id="util_8h" kind="file">
    <compoundname>util.h</compoundname>
    <sectiondef kind="func">
      <memberdef kind="function" id="util_8h_1clamp"><type>int</type><name>clamp</name><argsstring>(int v)</argsstring></memberdef>
    </sectiondef>
  </compounddef>
</doxygen>
"#;

fn fixture() -> (TempDir, DocumentStore) {
	let dir = TempDir::new().unwrap();
	for (name, content) in [
		("index.xml", INDEX),
		("classns_1_1Stack.xml", STACK),
		("util_8h.xml", UTIL_H),
	] {
		fs::write(dir.path().join(name), content).unwrap();
	}
	let store = DocumentStore::new(dir.path());
	(dir, store)
}

fn renderer(no_link: bool) -> Renderer {
	Renderer::new(
		ProjectInfo::new("proj", "unused"),
		RenderOptions::default().with_no_link(no_link),
	)
}

fn compound(store: &DocumentStore, position: usize) -> Node {
	Node::Compound(store.index().unwrap().compounds[position].clone())
}

#[test]
fn class_renders_title_block_and_detail() {
	let (_dir, store) = fixture();
	let mut doc = OutputDocument::new();
	let nodes = renderer(false)
		.render(&store, &compound(&store, 0), &mut doc)
		.unwrap();

	assert_eq!(nodes[0], ContentNode::target("projclassns_1_1Stack"));
	assert_eq!(
		plain_text(&nodes),
		[
			"template < typename T, int N = 8 >",
			"class ns::Stack",
			"#include <stack.h>",
			"Fixed capacity stack.",
			"Public Functions",
			"void ns::Stack::push(T value)",
			"Push a value.",
			"Helpers",
			"static Stack ns::Stack::make()",
		]
		.join("\n")
	);
	assert_eq!(
		doc.anchors(),
		[
			"projclassns_1_1Stack".to_string(),
			"projclassns_1_1Stack_1push".to_string(),
			"projclassns_1_1Stack_1make".to_string(),
		]
	);
	assert_eq!(doc.domain_objects().len(), 1);
	assert_eq!(doc.domain_objects()[0].id, "proj::ns::Stack");
}

#[test]
fn title_line_starts_with_empty_text() {
	let (_dir, store) = fixture();
	let mut doc = OutputDocument::new();
	let nodes = renderer(true)
		.render(&store, &compound(&store, 1), &mut doc)
		.unwrap();

	let ContentNode::LineBlock { children } = &nodes[0] else {
		panic!("expected a line block first, got {:?}", nodes[0]);
	};
	assert_eq!(
		children[0],
		ContentNode::line(vec![
			ContentNode::text(""),
			ContentNode::emphasis("file"),
			ContentNode::text(" "),
			ContentNode::strong("util.h"),
		])
	);
}

#[test]
fn no_link_emits_no_targets_and_registers_nothing() {
	let (_dir, store) = fixture();
	let mut doc = OutputDocument::new();
	let nodes = renderer(true)
		.render(&store, &compound(&store, 0), &mut doc)
		.unwrap();

	assert!(!nodes.iter().any(|node| matches!(node, ContentNode::Target { .. })));
	assert!(doc.anchors().is_empty());
	assert!(doc.domain_objects().is_empty());
}

#[test]
fn file_members_are_not_qualified() {
	let (_dir, store) = fixture();
	let mut doc = OutputDocument::new();
	let nodes = renderer(false)
		.render(&store, &compound(&store, 1), &mut doc)
		.unwrap();

	assert!(plain_text(&nodes).contains("int clamp(int v)"));
	assert!(doc.domain_objects().is_empty());
}

#[test]
fn rendering_twice_into_one_document_reports_conflicts() {
	let (_dir, store) = fixture();
	let renderer = renderer(false);
	let node = compound(&store, 1);
	let mut doc = OutputDocument::new();

	let first = renderer.render(&store, &node, &mut doc).unwrap();
	let second = renderer.render(&store, &node, &mut doc).unwrap();
	assert_eq!(first, second);
	assert_eq!(
		doc.diagnostics(),
		[
			Diagnostic::DuplicateAnchor {
				id: "projutil_8h".into()
			},
			Diagnostic::DuplicateAnchor {
				id: "projutil_8h_1clamp".into()
			},
		]
	);
}

#[test]
fn member_stub_renders_its_definition() {
	let (_dir, store) = fixture();
	let stub = Node::Member(store.index().unwrap().compounds[0].members[0].clone());
	let mut doc = OutputDocument::new();
	let nodes = renderer(false).render(&store, &stub, &mut doc).unwrap();

	assert_eq!(nodes[0], ContentNode::target("projclassns_1_1Stack_1push"));
	assert_eq!(plain_text(&nodes), "void ns::Stack::push(T value)\nPush a value.");
}

#[test]
fn dangling_member_stub_renders_nothing() {
	let (_dir, store) = fixture();
	let stub = Node::Member(store.index().unwrap().compounds[0].members[1].clone());
	let mut doc = OutputDocument::new();
	let nodes = renderer(false).render(&store, &stub, &mut doc).unwrap();

	assert!(nodes.is_empty());
	assert_eq!(
		doc.diagnostics(),
		[Diagnostic::MissingDefinition {
			refid: "classns_1_1Stack_1gone".into()
		}]
	);
}

#[test]
fn section_titles() {
	assert_eq!(items::section_title("public-func"), Some("Public Functions"));
	assert_eq!(items::section_title("private-attrib"), Some("Private Members"));
	assert_eq!(items::section_title("user-defined"), None);
}

#[test]
fn custom_handlers_replace_defaults() {
	let (_dir, store) = fixture();
	let renderer = renderer(false)
		.with_target_handler(NullTargetHandler)
		.with_domain_handler(NullDomainHandler);
	let mut doc = OutputDocument::new();
	renderer.render(&store, &compound(&store, 0), &mut doc).unwrap();
	assert!(doc.anchors().is_empty());
	assert!(doc.domain_objects().is_empty());
}

#[test]
fn definition_rendered_alone_is_qualified_like_its_stub() {
	let (_dir, store) = fixture();
	let renderer = renderer(true);
	let def = store.compound("classns_1_1Stack").unwrap();
	let push = Node::MemberDef(def.sections[0].members[0].clone());
	let stub = Node::Member(store.index().unwrap().compounds[0].members[0].clone());

	let alone = renderer.render(&store, &push, &mut OutputDocument::new()).unwrap();
	let through_stub = renderer.render(&store, &stub, &mut OutputDocument::new()).unwrap();
	assert_eq!(alone, through_stub);
	assert!(plain_text(&alone).starts_with("void ns::Stack::push(T value)"));
}

#[test]
fn failed_detail_load_registers_nothing() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("index.xml"), INDEX).unwrap();
	let store = DocumentStore::new(dir.path());
	let mut doc = OutputDocument::new();

	let err = renderer(false)
		.render(&store, &compound(&store, 0), &mut doc)
		.unwrap_err();
	assert!(matches!(err, crate::error::Error::Parse { .. }));
	assert!(doc.anchors().is_empty());
	assert!(doc.domain_objects().is_empty());
}
