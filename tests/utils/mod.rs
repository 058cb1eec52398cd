#![allow(dead_code)]

use std::fs;

use doxyquery::ProjectInfo;
use tempfile::TempDir;

/// Index with one class `Foo` (members `bar`, `baz_helper`) and one file `foo.h`.
pub const INDEX: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygenindex version="1.9.8">
  <compound refid="classFoo" kind="class"><name>Foo</name>
    <member refid="classFoo_1bar" kind="function"><name>bar</name></member>
    <member refid="classFoo_1baz_helper" kind="function"><name>baz_helper</name></member>
  </compound>
  <compound refid="foo_8h" kind="file"><name>foo.h</name>
    <member refid="foo_8h_1make_foo" kind="function"><name>make_foo</name></member>
  </compound>
</doxygenindex>
"#;

/// Detail fragment for `Foo`.
pub const CLASS_FOO: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
  <compounddef id="classFoo" kind="class" language="C++" prot="public">
    <compoundname>Foo</compoundname>
    <includes refid="foo_8h" local="no">foo.h</includes>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classFoo_1bar" prot="public" static="no">
        <type>int</type><name>bar</name><argsstring>(int x) const</argsstring>
        <briefdescription><para>Compute the bar.</para></briefdescription>
      </memberdef>
      <memberdef kind="function" id="classFoo_1baz_helper" prot="public" static="no">
        <type>void</type><name>baz_helper</name><argsstring>()</argsstring>
      </memberdef>
    </sectiondef>
    <briefdescription><para>A foo.</para></briefdescription>
  </compounddef>
</doxygen>
"#;

/// Detail fragment for `foo.h`.
pub const FOO_H: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
  <compounddef id="foo_8h" kind="file" language="C++">
    <compoundname>foo.h</compoundname>
    <sectiondef kind="func">
      <memberdef kind="function" id="foo_8h_1make_foo" prot="public" static="no">
        <type>Foo</type><name>make_foo</name><argsstring>()</argsstring>
      </memberdef>
    </sectiondef>
  </compounddef>
</doxygen>
"#;

/// Write `files` into a fresh directory and describe it as project `proj`.
pub fn create_test_project(files: &[(&str, &str)]) -> (TempDir, ProjectInfo) {
	let dir = TempDir::new().expect("create temp dir");
	for (name, content) in files {
		fs::write(dir.path().join(name), content).expect("write fragment");
	}
	let project = ProjectInfo::new("proj", dir.path());
	(dir, project)
}

/// The standard `Foo` project.
pub fn foo_project() -> (TempDir, ProjectInfo) {
	create_test_project(&[
		("index.xml", INDEX),
		("classFoo.xml", CLASS_FOO),
		("foo_8h.xml", FOO_H),
	])
}
