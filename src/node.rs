//! Typed, kind-tagged node tree produced by parsing Doxygen XML fragments.
//!
//! Trees are immutable once built. Every record sits behind an [`Arc`] so that finder
//! results and render inputs are cheap handles into the trees cached by the
//! [`DocumentStore`](crate::parser::DocumentStore).

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

/// Classification of a node in the document forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
	/// Root of `index.xml`.
	Index,
	/// Forward reference to a compound detail fragment.
	Compound,
	/// Lightweight member stub listed under a compound in the index.
	Member,
	/// Root of a compound detail fragment.
	CompoundDef,
	/// Section within a compound definition.
	SectionDef,
	/// Member definition within a section.
	MemberDef,
}

impl NodeKind {
	/// Human-friendly label describing the node kind.
	pub fn label(self) -> &'static str {
		match self {
			Self::Index => "index",
			Self::Compound => "compound",
			Self::Member => "member",
			Self::CompoundDef => "compounddef",
			Self::SectionDef => "sectiondef",
			Self::MemberDef => "memberdef",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

bitflags! {
	/// Set of node kinds, used by filters that select nodes by kind.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct NodeKinds: u32 {
		/// Index root.
		const INDEX = 1 << 0;
		/// Compound forward references.
		const COMPOUND = 1 << 1;
		/// Index member stubs.
		const MEMBER = 1 << 2;
		/// Compound definitions.
		const COMPOUND_DEF = 1 << 3;
		/// Section definitions.
		const SECTION_DEF = 1 << 4;
		/// Member definitions.
		const MEMBER_DEF = 1 << 5;
	}
}

impl From<NodeKind> for NodeKinds {
	fn from(kind: NodeKind) -> Self {
		match kind {
			NodeKind::Index => Self::INDEX,
			NodeKind::Compound => Self::COMPOUND,
			NodeKind::Member => Self::MEMBER,
			NodeKind::CompoundDef => Self::COMPOUND_DEF,
			NodeKind::SectionDef => Self::SECTION_DEF,
			NodeKind::MemberDef => Self::MEMBER_DEF,
		}
	}
}

/// Root of the index fragment.
#[derive(Debug, Clone, Default)]
pub struct Index {
	/// Doxygen schema version recorded on the root element.
	pub version: Option<String>,
	/// Compounds in document order.
	pub compounds: Vec<Arc<Compound>>,
}

/// A top-level entity listed in the index whose detail lives in its own fragment.
#[derive(Debug, Clone, Default)]
pub struct Compound {
	/// Fully qualified compound name.
	pub name: String,
	/// Identifier of the detail fragment (`<refid>.xml`).
	pub refid: String,
	/// Raw Doxygen kind such as `class` or `file`.
	pub kind: String,
	/// Member stubs in document order.
	pub members: Vec<Arc<Member>>,
}

/// Member stub listed under a compound in the index.
#[derive(Debug, Clone, Default)]
pub struct Member {
	/// Unqualified member name.
	pub name: String,
	/// Identifier of the member definition inside the compound fragment.
	pub refid: String,
	/// Raw Doxygen kind such as `function`.
	pub kind: String,
	/// Refid of the owning compound.
	pub compound_refid: String,
}

/// One parameter of a template parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParam {
	/// Parameter type, e.g. `typename` or `int`.
	pub type_: String,
	/// Declared name, if any.
	pub declname: Option<String>,
	/// Default value, if any.
	pub defval: Option<String>,
}

impl TemplateParam {
	/// Render the parameter as it would appear in a declaration.
	pub fn declaration(&self) -> String {
		let mut out = self.type_.clone();
		if let Some(name) = &self.declname {
			if !out.is_empty() {
				out.push(' ');
			}
			out.push_str(name);
		}
		if let Some(default) = &self.defval {
			out.push_str(" = ");
			out.push_str(default);
		}
		out
	}
}

/// An include directive attached to a compound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Include {
	/// Included file name as written.
	pub name: String,
	/// Refid of the included file compound, when Doxygen resolved it.
	pub refid: Option<String>,
	/// Whether the include uses quotes instead of angle brackets.
	pub local: bool,
}

impl Include {
	/// Render as a preprocessor directive.
	pub fn directive(&self) -> String {
		if self.local {
			format!("#include \"{}\"", self.name)
		} else {
			format!("#include <{}>", self.name)
		}
	}
}

/// Root of a compound detail fragment.
#[derive(Debug, Clone, Default)]
pub struct CompoundDef {
	/// Fully qualified compound name.
	pub name: String,
	/// Compound identifier.
	pub refid: String,
	/// Raw Doxygen kind.
	pub kind: String,
	/// Source language reported by Doxygen.
	pub language: Option<String>,
	/// Template parameters, if the compound is a template.
	pub template_params: Option<Vec<TemplateParam>>,
	/// Include directives in document order.
	pub includes: Vec<Include>,
	/// Flattened brief description.
	pub brief: String,
	/// Sections in document order.
	pub sections: Vec<Arc<SectionDef>>,
}

/// Section of a compound definition, e.g. public functions.
#[derive(Debug, Clone, Default)]
pub struct SectionDef {
	/// Raw section kind such as `public-func`.
	pub kind: String,
	/// User-defined section header, if any.
	pub header: Option<String>,
	/// Member definitions in document order.
	pub members: Vec<Arc<MemberDef>>,
}

/// A member definition inside a section.
#[derive(Debug, Clone, Default)]
pub struct MemberDef {
	/// Unqualified member name.
	pub name: String,
	/// Member identifier.
	pub refid: String,
	/// Raw Doxygen kind.
	pub kind: String,
	/// Protection level (`public`, `protected`, `private`).
	pub prot: Option<String>,
	/// Whether the member is static.
	pub is_static: bool,
	/// Flattened type text.
	pub type_: String,
	/// Argument string including parentheses and qualifiers.
	pub args: String,
	/// Template parameters, if the member is a template.
	pub template_params: Option<Vec<TemplateParam>>,
	/// Flattened brief description.
	pub brief: String,
	/// Refid of the compound definition that owns this member.
	pub compound_refid: String,
}

/// A handle to any node in the document forest.
#[derive(Debug, Clone)]
pub enum Node {
	/// Index root.
	Index(Arc<Index>),
	/// Compound forward reference.
	Compound(Arc<Compound>),
	/// Index member stub.
	Member(Arc<Member>),
	/// Compound definition.
	CompoundDef(Arc<CompoundDef>),
	/// Section definition.
	SectionDef(Arc<SectionDef>),
	/// Member definition.
	MemberDef(Arc<MemberDef>),
}

impl Node {
	/// Kind tag of this node.
	pub fn kind(&self) -> NodeKind {
		match self {
			Self::Index(_) => NodeKind::Index,
			Self::Compound(_) => NodeKind::Compound,
			Self::Member(_) => NodeKind::Member,
			Self::CompoundDef(_) => NodeKind::CompoundDef,
			Self::SectionDef(_) => NodeKind::SectionDef,
			Self::MemberDef(_) => NodeKind::MemberDef,
		}
	}

	/// Name of the node. Sections report their header, or nothing.
	pub fn name(&self) -> &str {
		match self {
			Self::Index(_) => "",
			Self::Compound(c) => &c.name,
			Self::Member(m) => &m.name,
			Self::CompoundDef(c) => &c.name,
			Self::SectionDef(s) => s.header.as_deref().unwrap_or(""),
			Self::MemberDef(m) => &m.name,
		}
	}

	/// Fragment-local identifier; empty for the index and for sections.
	pub fn refid(&self) -> &str {
		match self {
			Self::Index(_) | Self::SectionDef(_) => "",
			Self::Compound(c) => &c.refid,
			Self::Member(m) => &m.refid,
			Self::CompoundDef(c) => &c.refid,
			Self::MemberDef(m) => &m.refid,
		}
	}

	/// Raw Doxygen kind attribute, compared for equality only.
	pub fn kind_label(&self) -> &str {
		match self {
			Self::Index(_) => "",
			Self::Compound(c) => &c.kind,
			Self::Member(m) => &m.kind,
			Self::CompoundDef(c) => &c.kind,
			Self::SectionDef(s) => &s.kind,
			Self::MemberDef(m) => &m.kind,
		}
	}

	/// Children in document order.
	pub fn children(&self) -> Vec<Node> {
		match self {
			Self::Index(index) => index.compounds.iter().cloned().map(Self::Compound).collect(),
			Self::Compound(compound) => compound.members.iter().cloned().map(Self::Member).collect(),
			Self::CompoundDef(def) => def.sections.iter().cloned().map(Self::SectionDef).collect(),
			Self::SectionDef(section) => section.members.iter().cloned().map(Self::MemberDef).collect(),
			Self::Member(_) | Self::MemberDef(_) => Vec::new(),
		}
	}

	/// Whether both handles point at the same node.
	pub fn ptr_eq(&self, other: &Node) -> bool {
		match (self, other) {
			(Self::Index(a), Self::Index(b)) => Arc::ptr_eq(a, b),
			(Self::Compound(a), Self::Compound(b)) => Arc::ptr_eq(a, b),
			(Self::Member(a), Self::Member(b)) => Arc::ptr_eq(a, b),
			(Self::CompoundDef(a), Self::CompoundDef(b)) => Arc::ptr_eq(a, b),
			(Self::SectionDef(a), Self::SectionDef(b)) => Arc::ptr_eq(a, b),
			(Self::MemberDef(a), Self::MemberDef(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.refid() {
			"" => write!(f, "{} `{}`", self.kind(), self.name()),
			refid => write!(f, "{} `{}` ({refid})", self.kind(), self.name()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn template_param_declaration() {
		let param = TemplateParam {
			type_: "typename".into(),
			declname: Some("T".into()),
			defval: Some("int".into()),
		};
		assert_eq!(param.declaration(), "typename T = int");

		let bare = TemplateParam {
			type_: "class U".into(),
			declname: None,
			defval: None,
		};
		assert_eq!(bare.declaration(), "class U");
	}

	#[test]
	fn include_directive_respects_local_flag() {
		let system = Include {
			name: "vector".into(),
			refid: None,
			local: false,
		};
		let local = Include {
			name: "foo.h".into(),
			refid: Some("foo_8h".into()),
			local: true,
		};
		assert_eq!(system.directive(), "#include <vector>");
		assert_eq!(local.directive(), "#include \"foo.h\"");
	}

	#[test]
	fn children_follow_kind() {
		let member = Arc::new(Member {
			name: "bar".into(),
			refid: "classFoo_1bar".into(),
			kind: "function".into(),
			compound_refid: "classFoo".into(),
		});
		let compound = Arc::new(Compound {
			name: "Foo".into(),
			refid: "classFoo".into(),
			kind: "class".into(),
			members: vec![member.clone()],
		});
		let node = Node::Compound(compound);
		let children = node.children();
		assert_eq!(children.len(), 1);
		assert!(children[0].ptr_eq(&Node::Member(member)));
		assert_eq!(children[0].kind(), NodeKind::Member);
		assert!(Node::Member(Arc::new(Member::default())).children().is_empty());
	}

	#[test]
	fn ptr_eq_distinguishes_equal_values() {
		let a = Arc::new(MemberDef {
			name: "bar".into(),
			..MemberDef::default()
		});
		let b = Arc::new((*a).clone());
		assert!(Node::MemberDef(a.clone()).ptr_eq(&Node::MemberDef(a.clone())));
		assert!(!Node::MemberDef(a).ptr_eq(&Node::MemberDef(b)));
	}

	#[test]
	fn kind_flags_convert() {
		let kinds = NodeKinds::from(NodeKind::MemberDef) | NodeKinds::COMPOUND;
		assert!(kinds.contains(NodeKind::Compound.into()));
		assert!(!kinds.contains(NodeKind::SectionDef.into()));
	}
}
