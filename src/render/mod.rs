//! Conversion of document nodes into a neutral content tree.
//!
//! A [`Renderer`] holds the project identity and the anchor and domain handlers. Each call to
//! [`Renderer::render`] creates a [`RenderState`] that dispatches on the node kind, loads
//! compound detail through the [`DocumentStore`](crate::parser::DocumentStore) when needed and
//! records anchors, domain objects and diagnostics in an [`OutputDocument`].

/// Output content nodes and their plain-text and JSON forms.
pub mod content;
/// Renderer configuration.
pub mod core;
/// Per-page collector for anchors, domain objects and diagnostics.
pub mod document;
/// Domain registration for class-like compounds.
pub mod domain;
/// Per-kind renderers.
pub mod items;
/// Mutable state of a single render pass.
pub mod state;
/// Anchor creation strategies.
pub mod target;

pub use self::content::{ContentNode, plain_text, to_json};
pub use self::core::Renderer;
pub use self::document::{AnchorConflict, Diagnostic, DomainObject, OutputDocument};
pub use self::domain::{CppDomainHandler, DomainHandler, NullDomainHandler, is_class_like};
pub use self::state::RenderState;
pub use self::target::{DocumentTargetHandler, NullTargetHandler, TargetHandler, target_handler};

#[cfg(test)]
mod tests;
