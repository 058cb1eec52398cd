//! Query and render Doxygen XML exports.
//!
//! A project's export is a directory holding `index.xml` plus one fragment per compound.
//! The [`Session`] API parses fragments lazily through a shared [`DocumentStore`], resolves
//! structural queries described by a [`MatcherStack`], and renders the nodes it finds into a
//! neutral [`ContentNode`] tree while registering anchors in an [`OutputDocument`].

/// Session configuration: project identity and render options.
pub mod config;

/// Error types shared by every stage.
pub mod error;

/// Matcher stacks and the per-kind finder traversal.
pub mod finder;

/// Immutable document nodes.
pub mod node;

/// Lazy, memoizing fragment parser.
pub mod parser;

/// Rendering of nodes into content trees.
pub mod render;

/// High-level entry point.
pub mod session;

pub use crate::config::{ProjectInfo, RenderOptions};
pub use crate::error::{Error, ParseFailure, Result};
pub use crate::finder::{
	Finder, KindFilter, Level, Matcher, MatcherFactory, MatcherStack, NamePatternFilter, NodeFilter, ParentFilter,
};
pub use crate::node::{Node, NodeKind, NodeKinds};
pub use crate::parser::{DocumentStore, FragmentRef};
pub use crate::render::{ContentNode, Diagnostic, OutputDocument, Renderer};
pub use crate::session::Session;
