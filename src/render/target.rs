use tracing::warn;

use super::content::ContentNode;
use super::document::{Diagnostic, OutputDocument};
use crate::config::RenderOptions;

/// Creates cross-reference anchors for rendered entities.
pub trait TargetHandler: Send + Sync {
	/// Produce the nodes that anchor `id` in `document`.
	fn create_target(&self, id: &str, document: &mut OutputDocument) -> Vec<ContentNode>;
}

/// Registers every anchor with the output document and emits a target node for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTargetHandler;

impl TargetHandler for DocumentTargetHandler {
	fn create_target(&self, id: &str, document: &mut OutputDocument) -> Vec<ContentNode> {
		if let Err(conflict) = document.note_explicit_target(id) {
			warn!(id, "duplicate anchor; target emitted without registration");
			document.report(Diagnostic::from(conflict));
		}
		vec![ContentNode::target(id)]
	}
}

/// Emits nothing and registers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTargetHandler;

impl TargetHandler for NullTargetHandler {
	fn create_target(&self, _id: &str, _document: &mut OutputDocument) -> Vec<ContentNode> {
		Vec::new()
	}
}

/// Pick the handler matching `options.no_link`.
pub fn target_handler(options: &RenderOptions) -> Box<dyn TargetHandler> {
	if options.no_link {
		Box::new(NullTargetHandler)
	} else {
		Box::new(DocumentTargetHandler)
	}
}
