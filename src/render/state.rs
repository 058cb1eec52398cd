use super::content::ContentNode;
use super::core::Renderer;
use super::document::OutputDocument;
use crate::error::Result;
use crate::node::{Compound, Node};
use crate::parser::DocumentStore;

/// Mutable rendering context shared across the per-kind renderers.
pub struct RenderState<'a, 'b> {
	/// Reference to the immutable renderer configuration.
	pub config: &'a Renderer,
	/// Store used to load compound detail on demand.
	pub store: &'a DocumentStore,
	/// Collector for anchors, domain objects and diagnostics.
	pub document: &'b mut OutputDocument,
	/// Enclosing compound names, innermost last.
	scope: Vec<String>,
}

impl<'a, 'b> RenderState<'a, 'b> {
	/// Create a new render state.
	pub fn new(config: &'a Renderer, store: &'a DocumentStore, document: &'b mut OutputDocument) -> Self {
		Self {
			config,
			store,
			document,
			scope: Vec::new(),
		}
	}

	/// Render a node through the kind dispatch.
	pub fn render(&mut self, node: &Node) -> Result<Vec<ContentNode>> {
		super::items::render_node(self, node)
	}

	/// Anchor nodes for `refid`, prefixed with the project name.
	pub fn create_target(&mut self, refid: &str) -> Vec<ContentNode> {
		let id = self.config.project.anchor(refid);
		self.config.targets.create_target(&id, self.document)
	}

	/// Register a class-like compound with the domain handler.
	pub fn create_class_target(&mut self, compound: &Compound) {
		self.config.domain.create_class_target(compound, self.document);
	}

	/// Run `f` with `name` pushed onto the scope; the scope is restored even when `f` fails.
	pub fn scoped<T>(&mut self, name: Option<&str>, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		let Some(name) = name else {
			return f(self);
		};
		self.scope.push(name.to_string());
		let result = f(self);
		self.scope.pop();
		result
	}

	/// Enclosing compound names, innermost last.
	pub fn scope(&self) -> &[String] {
		&self.scope
	}

	/// Qualify `name` with the innermost scope.
	pub fn qualified(&self, name: &str) -> String {
		match self.scope.last() {
			Some(scope) => format!("{scope}::{name}"),
			None => name.to_string(),
		}
	}
}

/// Compound kinds whose names qualify their members.
pub(crate) fn scope_name<'n>(kind: &str, name: &'n str) -> Option<&'n str> {
	matches!(kind, "class" | "struct" | "union" | "namespace" | "interface").then_some(name)
}
