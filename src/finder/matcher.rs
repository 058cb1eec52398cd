use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::node::Node;

/// Level of the document hierarchy a matcher applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
	/// Compounds listed in the index.
	Compound,
	/// Members of a compound, both index stubs and definitions.
	Member,
}

impl Level {
	/// Name of the level as used in query descriptions.
	pub fn name(self) -> &'static str {
		match self {
			Self::Compound => "compound",
			Self::Member => "member",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Level {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"compound" => Ok(Self::Compound),
			"member" => Ok(Self::Member),
			other => Err(Error::UnknownLevel(other.to_string())),
		}
	}
}

/// Predicate over a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
	/// Name and kind label must both be equal.
	NameKind {
		/// Expected name.
		name: String,
		/// Expected kind label, e.g. `class`.
		kind: String,
	},
	/// Name must be equal.
	Name(String),
	/// Refid must be equal.
	Ref(String),
	/// Refid must be one of the set.
	Refs(BTreeSet<String>),
	/// Accepts every node.
	Any,
}

impl Matcher {
	/// Whether the node satisfies this predicate.
	pub fn matches(&self, node: &Node) -> bool {
		match self {
			Self::NameKind { name, kind } => {
				node.name() == name.as_str() && node.kind_label() == kind.as_str()
			}
			Self::Name(name) => node.name() == name.as_str(),
			Self::Ref(refid) => node.refid() == refid.as_str(),
			Self::Refs(refids) => refids.contains(node.refid()),
			Self::Any => true,
		}
	}
}

impl fmt::Display for Matcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NameKind { name, kind } => write!(f, "{kind} `{name}`"),
			Self::Name(name) => write!(f, "`{name}`"),
			Self::Ref(refid) => write!(f, "refid `{refid}`"),
			Self::Refs(refids) => {
				let list: Vec<&str> = refids.iter().map(String::as_str).collect();
				write!(f, "refid in [{}]", list.join(", "))
			}
			Self::Any => f.write_str("any"),
		}
	}
}

/// Per-level predicates plus the level whose matches are complete results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherStack {
	matchers: HashMap<Level, Matcher>,
	lowest_level: Level,
}

impl MatcherStack {
	/// Create a stack from level predicates and the target level.
	pub fn new(matchers: impl IntoIterator<Item = (Level, Matcher)>, lowest_level: Level) -> Self {
		Self {
			matchers: matchers.into_iter().collect(),
			lowest_level,
		}
	}

	/// Level whose matches are returned as results.
	pub fn lowest_level(&self) -> Level {
		self.lowest_level
	}

	/// Predicate registered for a level, if any.
	pub fn matcher(&self, level: Level) -> Option<&Matcher> {
		self.matchers.get(&level)
	}

	/// Whether the node satisfies the predicate for `level`. An absent level never matches.
	pub fn matches(&self, level: Level, node: &Node) -> bool {
		self.matchers
			.get(&level)
			.is_some_and(|matcher| matcher.matches(node))
	}

	/// Whether the node matches at `level` and `level` is the target level.
	///
	/// Fails with [`Error::MissingLevel`] when the stack has no predicate for `level`, which
	/// means the query was built wrongly rather than that nothing matched.
	pub fn full_match(&self, level: Level, node: &Node) -> Result<bool> {
		let matcher = self.matchers.get(&level).ok_or(Error::MissingLevel(level))?;
		Ok(matcher.matches(node) && level == self.lowest_level)
	}
}

impl fmt::Display for MatcherStack {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for level in [Level::Compound, Level::Member] {
			if let Some(matcher) = self.matchers.get(&level) {
				if !first {
					f.write_str(", ")?;
				}
				write!(f, "{level}: {matcher}")?;
				first = false;
			}
		}
		write!(f, " (lowest level: {})", self.lowest_level)
	}
}

/// Builds matchers and matcher stacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatcherFactory;

impl MatcherFactory {
	/// Match on name and kind label.
	pub fn name_kind(&self, name: impl Into<String>, kind: impl Into<String>) -> Matcher {
		Matcher::NameKind {
			name: name.into(),
			kind: kind.into(),
		}
	}

	/// Match on name; an empty name matches anything.
	pub fn name(&self, name: &str) -> Matcher {
		if name.is_empty() {
			Matcher::Any
		} else {
			Matcher::Name(name.to_string())
		}
	}

	/// Match on refid.
	pub fn refid(&self, refid: impl Into<String>) -> Matcher {
		Matcher::Ref(refid.into())
	}

	/// Match any of the given refids.
	pub fn refids<I, S>(&self, refids: I) -> Matcher
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Matcher::Refs(refids.into_iter().map(Into::into).collect())
	}

	/// Match anything.
	pub fn any(&self) -> Matcher {
		Matcher::Any
	}

	/// Build a stack from level predicates.
	pub fn matcher_stack(
		&self,
		matchers: impl IntoIterator<Item = (Level, Matcher)>,
		lowest_level: Level,
	) -> MatcherStack {
		MatcherStack::new(matchers, lowest_level)
	}

	/// Stack selecting the member with `refid`, optionally inside the class named `class`.
	pub fn ref_matcher_stack(&self, class: &str, refid: &str) -> MatcherStack {
		let compound = if class.is_empty() {
			Matcher::Any
		} else {
			self.name_kind(class, "class")
		};
		MatcherStack::new(
			[(Level::Compound, compound), (Level::Member, self.refid(refid))],
			Level::Member,
		)
	}

	/// Stack selecting every member whose refid is in `refids`, in any compound.
	pub fn ref_set_matcher_stack<I, S>(&self, refids: I) -> MatcherStack
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		MatcherStack::new(
			[(Level::Compound, Matcher::Any), (Level::Member, self.refids(refids))],
			Level::Member,
		)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::node::{Compound, MemberDef};

	fn compound(name: &str, kind: &str) -> Node {
		Node::Compound(Arc::new(Compound {
			name: name.into(),
			refid: format!("{kind}{name}"),
			kind: kind.into(),
			members: Vec::new(),
		}))
	}

	fn member(name: &str, refid: &str) -> Node {
		Node::MemberDef(Arc::new(MemberDef {
			name: name.into(),
			refid: refid.into(),
			kind: "function".into(),
			..MemberDef::default()
		}))
	}

	#[test]
	fn matcher_variants() {
		let factory = MatcherFactory;
		let foo = compound("Foo", "class");
		assert!(factory.name_kind("Foo", "class").matches(&foo));
		assert!(!factory.name_kind("Foo", "struct").matches(&foo));
		assert!(factory.name("Foo").matches(&foo));
		assert!(!factory.name("Bar").matches(&foo));
		assert!(factory.refid("classFoo").matches(&foo));
		assert!(factory.any().matches(&foo));
		assert_eq!(factory.name(""), Matcher::Any);
	}

	#[test]
	fn absent_level_does_not_match() {
		let stack = MatcherStack::new([(Level::Compound, Matcher::Any)], Level::Compound);
		assert!(!stack.matches(Level::Member, &member("bar", "x")));
		assert!(stack.matches(Level::Compound, &compound("Foo", "class")));
	}

	#[test]
	fn full_match_requires_lowest_level() {
		let stack = MatcherStack::new(
			[(Level::Compound, Matcher::Any), (Level::Member, Matcher::Any)],
			Level::Member,
		);
		let foo = compound("Foo", "class");
		assert!(stack.matches(Level::Compound, &foo));
		assert!(!stack.full_match(Level::Compound, &foo).unwrap());
		assert!(stack.full_match(Level::Member, &member("bar", "x")).unwrap());
	}

	#[test]
	fn full_match_on_missing_level_errors() {
		let stack = MatcherStack::new([(Level::Compound, Matcher::Any)], Level::Compound);
		let err = stack.full_match(Level::Member, &member("bar", "x")).unwrap_err();
		assert!(matches!(err, Error::MissingLevel(Level::Member)));
	}

	#[test]
	fn ref_stack_scopes_to_class() {
		let factory = MatcherFactory;
		let scoped = factory.ref_matcher_stack("Foo", "classFoo_1bar");
		assert_eq!(scoped.lowest_level(), Level::Member);
		assert!(scoped.matches(Level::Compound, &compound("Foo", "class")));
		assert!(!scoped.matches(Level::Compound, &compound("Foo", "struct")));
		assert!(scoped.full_match(Level::Member, &member("bar", "classFoo_1bar")).unwrap());

		let unscoped = factory.ref_matcher_stack("", "classFoo_1bar");
		assert_eq!(unscoped.matcher(Level::Compound), Some(&Matcher::Any));
	}

	#[test]
	fn ref_set_stack_accepts_each_refid() {
		let stack = MatcherFactory.ref_set_matcher_stack(["classFoo_1b", "classFoo_1a"]);
		assert!(stack.full_match(Level::Member, &member("a", "classFoo_1a")).unwrap());
		assert!(stack.full_match(Level::Member, &member("b", "classFoo_1b")).unwrap());
		assert!(!stack.full_match(Level::Member, &member("c", "classFoo_1c")).unwrap());
		assert_eq!(
			stack.to_string(),
			"compound: any, member: refid in [classFoo_1a, classFoo_1b] (lowest level: member)"
		);
	}

	#[test]
	fn level_names_round_trip() {
		assert_eq!("member".parse::<Level>().unwrap(), Level::Member);
		assert!(matches!(
			"namespace".parse::<Level>(),
			Err(Error::UnknownLevel(name)) if name == "namespace"
		));
	}

	#[test]
	fn stack_display_lists_levels_in_order() {
		let factory = MatcherFactory;
		let stack = factory.matcher_stack(
			[
				(Level::Member, factory.name("bar")),
				(Level::Compound, factory.any()),
			],
			Level::Member,
		);
		assert_eq!(
			stack.to_string(),
			"compound: any, member: `bar` (lowest level: member)"
		);
	}
}
