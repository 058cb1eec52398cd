use tracing::debug;

use crate::config::{ProjectInfo, RenderOptions};
use crate::error::Result;
use crate::finder::{Finder, MatcherFactory, MatcherStack, NodeFilter};
use crate::node::Node;
use crate::parser::DocumentStore;
use crate::render::{ContentNode, OutputDocument, Renderer};

/// Entry point tying one project's document store to the finder and renderer.
///
/// All queries share the session's store, so fragments parsed by one query are reused by the
/// next.
///
/// ```no_run
/// use doxyquery::{Level, OutputDocument, ProjectInfo, Session};
///
/// let session = Session::new(ProjectInfo::new("proj", "docs/xml"));
/// let factory = session.matchers();
/// let stack = factory.matcher_stack(
/// 	[(Level::Compound, factory.name("Foo")), (Level::Member, factory.name("bar"))],
/// 	Level::Member,
/// );
/// let node = session.find_one(&stack)?;
/// let mut document = OutputDocument::new();
/// let content = session.render(&node, &mut document)?;
/// println!("{}", doxyquery::render::plain_text(&content));
/// # Ok::<(), doxyquery::Error>(())
/// ```
#[derive(Debug)]
pub struct Session {
	store: DocumentStore,
	renderer: Renderer,
}

impl Session {
	/// Session over `project` with default render options.
	///
	/// Use [`Session::with_options`] with [`RenderOptions::from_env`] to honour
	/// `DOXYQUERY_NO_LINK`.
	pub fn new(project: ProjectInfo) -> Self {
		Self::with_options(project, RenderOptions::default())
	}

	/// Session over `project` with explicit render options.
	pub fn with_options(project: ProjectInfo, options: RenderOptions) -> Self {
		debug!(project = project.name(), path = %project.path().display(), "opening session");
		Self {
			store: DocumentStore::new(project.path()),
			renderer: Renderer::new(project, options),
		}
	}

	/// Replace the renderer, e.g. to install custom handlers.
	pub fn with_renderer(mut self, renderer: Renderer) -> Self {
		self.renderer = renderer;
		self
	}

	/// Project this session reads.
	pub fn project(&self) -> &ProjectInfo {
		self.renderer.project()
	}

	/// Shared fragment cache.
	pub fn store(&self) -> &DocumentStore {
		&self.store
	}

	/// Renderer used by [`Session::render`].
	pub fn renderer(&self) -> &Renderer {
		&self.renderer
	}

	/// Factory for building matcher stacks.
	pub fn matchers(&self) -> MatcherFactory {
		MatcherFactory
	}

	/// Finder rooted at the project index. Parses `index.xml` on first use.
	pub fn finder(&self) -> Result<Finder<'_>> {
		Finder::new(&self.store)
	}

	/// Every node satisfying `stack`, in document order.
	pub fn find(&self, stack: &MatcherStack) -> Result<Vec<Node>> {
		self.finder()?.find(stack)
	}

	/// First node satisfying `stack`.
	pub fn find_one(&self, stack: &MatcherStack) -> Result<Node> {
		self.finder()?.find_one(stack)
	}

	/// The definition with `refid`, optionally restricted to the class named `class`.
	pub fn find_ref(&self, class: &str, refid: &str) -> Result<Node> {
		self.find_one(&MatcherFactory.ref_matcher_stack(class, refid))
	}

	/// Every node accepted by `filter`, loading every compound.
	pub fn filter(&self, filter: &dyn NodeFilter) -> Result<Vec<Node>> {
		let mut matches = Vec::new();
		self.finder()?.filter(filter, &mut matches)?;
		Ok(matches)
	}

	/// Render `node` into `document`.
	pub fn render(&self, node: &Node, document: &mut OutputDocument) -> Result<Vec<ContentNode>> {
		self.renderer.render(&self.store, node, document)
	}
}
