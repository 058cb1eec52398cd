use super::document::{DomainObject, OutputDocument};
use crate::node::Compound;

/// Compound kinds rendered through the class-like path.
pub const CLASS_LIKE_KINDS: &[&str] = &["class", "struct"];

/// Whether a raw compound kind is class-like.
pub fn is_class_like(kind: &str) -> bool {
	CLASS_LIKE_KINDS.contains(&kind)
}

/// Registers class-like compounds with a language domain.
pub trait DomainHandler: Send + Sync {
	/// Register `compound` in `document`.
	fn create_class_target(&self, compound: &Compound, document: &mut OutputDocument);

	/// Domain identifier for `compound`.
	fn create_class_id(&self, compound: &Compound) -> String;
}

/// C++ domain: ids are `<project>::<qualified name>`.
#[derive(Debug, Clone)]
pub struct CppDomainHandler {
	project: String,
}

impl CppDomainHandler {
	/// Handler for the given project.
	pub fn new(project: impl Into<String>) -> Self {
		Self {
			project: project.into(),
		}
	}
}

impl DomainHandler for CppDomainHandler {
	fn create_class_target(&self, compound: &Compound, document: &mut OutputDocument) {
		let id = self.create_class_id(compound);
		if !document.note_domain_object(DomainObject {
			id: id.clone(),
			name: compound.name.clone(),
			kind: compound.kind.clone(),
			refid: compound.refid.clone(),
		}) {
			tracing::warn!(%id, "duplicate domain object");
		}
	}

	fn create_class_id(&self, compound: &Compound) -> String {
		format!("{}::{}", self.project, compound.name)
	}
}

/// Registers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDomainHandler;

impl DomainHandler for NullDomainHandler {
	fn create_class_target(&self, _compound: &Compound, _document: &mut OutputDocument) {}

	fn create_class_id(&self, compound: &Compound) -> String {
		compound.name.clone()
	}
}
