use serde::Serialize;

use crate::error::Result;

/// One node of the rendered output tree handed to the document-assembly layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
	/// Plain text.
	Text {
		/// Content.
		text: String,
	},
	/// Emphasized text.
	Emphasis {
		/// Content.
		text: String,
	},
	/// Strong text.
	Strong {
		/// Content.
		text: String,
	},
	/// Inline code.
	Literal {
		/// Content.
		text: String,
	},
	/// Cross-reference anchor.
	Target {
		/// Anchor id.
		refid: String,
	},
	/// A single line of inline nodes.
	Line {
		/// Inline children.
		children: Vec<ContentNode>,
	},
	/// A block of lines.
	LineBlock {
		/// Lines.
		children: Vec<ContentNode>,
	},
	/// Informal heading.
	Rubric {
		/// Heading text.
		text: String,
	},
	/// Paragraph of inline nodes.
	Paragraph {
		/// Inline children.
		children: Vec<ContentNode>,
	},
}

impl ContentNode {
	/// Plain text node.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text { text: text.into() }
	}

	/// Emphasis node.
	pub fn emphasis(text: impl Into<String>) -> Self {
		Self::Emphasis { text: text.into() }
	}

	/// Strong node.
	pub fn strong(text: impl Into<String>) -> Self {
		Self::Strong { text: text.into() }
	}

	/// Literal node.
	pub fn literal(text: impl Into<String>) -> Self {
		Self::Literal { text: text.into() }
	}

	/// Target node.
	pub fn target(refid: impl Into<String>) -> Self {
		Self::Target {
			refid: refid.into(),
		}
	}

	/// Line node.
	pub fn line(children: Vec<ContentNode>) -> Self {
		Self::Line { children }
	}

	/// Line block node.
	pub fn line_block(children: Vec<ContentNode>) -> Self {
		Self::LineBlock { children }
	}

	/// Rubric node.
	pub fn rubric(text: impl Into<String>) -> Self {
		Self::Rubric { text: text.into() }
	}

	/// Paragraph node.
	pub fn paragraph(children: Vec<ContentNode>) -> Self {
		Self::Paragraph { children }
	}

	/// Flatten to plain text. Targets produce nothing; blocks put each child on its own line.
	pub fn plain_text(&self) -> String {
		match self {
			Self::Text { text }
			| Self::Emphasis { text }
			| Self::Strong { text }
			| Self::Literal { text }
			| Self::Rubric { text } => text.clone(),
			Self::Target { .. } => String::new(),
			Self::Line { children } => children.iter().map(Self::plain_text).collect(),
			Self::LineBlock { children } | Self::Paragraph { children } => plain_text(children),
		}
	}
}

/// Flatten a sequence of nodes, one non-empty node per line.
pub fn plain_text(nodes: &[ContentNode]) -> String {
	nodes
		.iter()
		.map(ContentNode::plain_text)
		.filter(|text| !text.is_empty())
		.collect::<Vec<_>>()
		.join("\n")
}

/// Serialize a rendered tree as pretty-printed JSON.
pub fn to_json(nodes: &[ContentNode]) -> Result<String> {
	Ok(serde_json::to_string_pretty(nodes)?)
}
