use super::content::ContentNode;
use super::document::OutputDocument;
use super::domain::{CppDomainHandler, DomainHandler, NullDomainHandler};
use super::state::RenderState;
use super::target::{TargetHandler, target_handler};
use crate::config::{ProjectInfo, RenderOptions};
use crate::error::Result;
use crate::node::Node;
use crate::parser::DocumentStore;

/// Configuration for a render pass: project identity plus the anchor and domain handlers.
pub struct Renderer {
	/// Project whose name prefixes every anchor.
	pub(crate) project: ProjectInfo,
	/// Options the handlers were chosen from.
	pub(crate) options: RenderOptions,
	/// Anchor creation strategy.
	pub(crate) targets: Box<dyn TargetHandler>,
	/// Domain registration strategy for class-like compounds.
	pub(crate) domain: Box<dyn DomainHandler>,
}

impl Renderer {
	/// Renderer for `project`, with handlers chosen from `options`.
	///
	/// With `no_link` set, both anchors and domain registration are disabled.
	pub fn new(project: ProjectInfo, options: RenderOptions) -> Self {
		let domain: Box<dyn DomainHandler> = if options.no_link {
			Box::new(NullDomainHandler)
		} else {
			Box::new(CppDomainHandler::new(project.name()))
		};
		Self {
			targets: target_handler(&options),
			domain,
			project,
			options,
		}
	}

	/// Replace the anchor handler.
	pub fn with_target_handler(mut self, handler: impl TargetHandler + 'static) -> Self {
		self.targets = Box::new(handler);
		self
	}

	/// Replace the domain handler.
	pub fn with_domain_handler(mut self, handler: impl DomainHandler + 'static) -> Self {
		self.domain = Box::new(handler);
		self
	}

	/// Project being rendered.
	pub fn project(&self) -> &ProjectInfo {
		&self.project
	}

	/// Options in effect.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Render `node`, loading detail fragments from `store` as needed.
	pub fn render(
		&self,
		store: &DocumentStore,
		node: &Node,
		document: &mut OutputDocument,
	) -> Result<Vec<ContentNode>> {
		RenderState::new(self, store, document).render(node)
	}
}

impl std::fmt::Debug for Renderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Renderer")
			.field("project", &self.project)
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}
