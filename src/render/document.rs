use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// An anchor id was registered twice in the same output document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate anchor `{id}`")]
pub struct AnchorConflict {
	/// The conflicting id.
	pub id: String,
}

/// A symbol registered with a language domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainObject {
	/// Domain identifier.
	pub id: String,
	/// Qualified symbol name.
	pub name: String,
	/// Raw Doxygen kind.
	pub kind: String,
	/// Refid of the compound that registered it.
	pub refid: String,
}

/// Non-fatal problem encountered while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
	/// Two targets claimed the same anchor id.
	DuplicateAnchor {
		/// The conflicting id.
		id: String,
	},
	/// Two symbols claimed the same domain id.
	DuplicateDomainObject {
		/// The conflicting id.
		id: String,
	},
	/// A member stub pointed at a definition its compound does not contain.
	MissingDefinition {
		/// Refid of the stub.
		refid: String,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateAnchor { id } => write!(f, "duplicate anchor `{id}`"),
			Self::DuplicateDomainObject { id } => write!(f, "duplicate domain object `{id}`"),
			Self::MissingDefinition { refid } => write!(f, "no definition found for `{refid}`"),
		}
	}
}

impl From<AnchorConflict> for Diagnostic {
	fn from(conflict: AnchorConflict) -> Self {
		Self::DuplicateAnchor { id: conflict.id }
	}
}

/// Collector for everything a render pass registers outside the returned content tree.
///
/// One document corresponds to one output page: anchor ids must be unique within it.
#[derive(Debug, Default)]
pub struct OutputDocument {
	anchors: Vec<String>,
	anchor_set: HashSet<String>,
	domain_objects: Vec<DomainObject>,
	domain_ids: HashSet<String>,
	diagnostics: Vec<Diagnostic>,
}

impl OutputDocument {
	/// Empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an explicit anchor. Fails if the id is already taken.
	pub fn note_explicit_target(&mut self, id: &str) -> Result<(), AnchorConflict> {
		if !self.anchor_set.insert(id.to_string()) {
			return Err(AnchorConflict { id: id.to_string() });
		}
		self.anchors.push(id.to_string());
		Ok(())
	}

	/// Register a domain symbol. Returns `false` and records a diagnostic on a duplicate id.
	pub fn note_domain_object(&mut self, object: DomainObject) -> bool {
		if !self.domain_ids.insert(object.id.clone()) {
			self.report(Diagnostic::DuplicateDomainObject { id: object.id });
			return false;
		}
		self.domain_objects.push(object);
		true
	}

	/// Record a diagnostic.
	pub fn report(&mut self, diagnostic: Diagnostic) {
		self.diagnostics.push(diagnostic);
	}

	/// Anchors in registration order.
	pub fn anchors(&self) -> &[String] {
		&self.anchors
	}

	/// Whether an anchor id is registered.
	pub fn has_anchor(&self, id: &str) -> bool {
		self.anchor_set.contains(id)
	}

	/// Domain symbols in registration order.
	pub fn domain_objects(&self) -> &[DomainObject] {
		&self.domain_objects
	}

	/// Diagnostics in the order they were reported.
	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}
}
