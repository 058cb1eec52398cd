//! Document store: parses Doxygen XML fragments on demand and memoizes them.
//!
//! A store is scoped to one query session. Each resolved path is parsed at most once; later
//! requests return the same shared tree. Entries are never invalidated, so a fragment that
//! changes on disk mid-session keeps its first parsed content.

mod compound;
mod index;
mod xml;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::node::{CompoundDef, Index, Node};

/// Identifies a fragment of the export relative to the project's XML directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FragmentRef {
	/// The top-level `index.xml`.
	Index,
	/// The detail fragment `<refid>.xml` of a compound.
	Compound(String),
}

impl FragmentRef {
	/// Reference the detail fragment of the compound with the given refid.
	pub fn compound(refid: impl Into<String>) -> Self {
		Self::Compound(refid.into())
	}

	/// File name of the fragment inside the XML directory.
	pub fn file_name(&self) -> String {
		match self {
			Self::Index => "index.xml".to_string(),
			Self::Compound(refid) => format!("{refid}.xml"),
		}
	}
}

/// A parsed fragment and its single root node.
#[derive(Debug, Clone)]
pub struct Fragment {
	path: PathBuf,
	root: Node,
}

impl Fragment {
	/// Resolved path the fragment was parsed from.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Root node: [`Node::Index`] for the index, [`Node::CompoundDef`] for compound fragments.
	pub fn root(&self) -> &Node {
		&self.root
	}
}

#[derive(Debug, Default)]
struct StoreState {
	fragments: HashMap<PathBuf, Fragment>,
	parses: usize,
}

/// Owns every fragment parsed during a session.
#[derive(Debug)]
pub struct DocumentStore {
	root: PathBuf,
	state: Mutex<StoreState>,
}

impl DocumentStore {
	/// Create an empty store reading fragments from the given XML directory.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			root: path.into(),
			state: Mutex::new(StoreState::default()),
		}
	}

	/// Directory fragments are resolved against.
	pub fn path(&self) -> &Path {
		&self.root
	}

	/// Resolve a fragment reference to the path used as its cache key.
	pub fn resolve(&self, fragment: &FragmentRef) -> PathBuf {
		self.root.join(fragment.file_name())
	}

	/// Parse a fragment, or return the cached one if this path was parsed before.
	///
	/// The lock is held across the check, the parse and the insert, so two callers can never
	/// parse the same path concurrently. Failures are not cached.
	pub fn parse(&self, fragment: &FragmentRef) -> Result<Fragment> {
		let path = self.resolve(fragment);
		let mut state = self.lock();
		if let Some(cached) = state.fragments.get(&path) {
			tracing::trace!(path = %path.display(), "fragment cache hit");
			return Ok(cached.clone());
		}

		state.parses += 1;
		let root = match fragment {
			FragmentRef::Index => Node::Index(Arc::new(index::parse_index(&path)?)),
			FragmentRef::Compound(_) => Node::CompoundDef(Arc::new(compound::parse_compound(&path)?)),
		};
		tracing::debug!(path = %path.display(), kind = %root.kind(), "parsed fragment");

		let parsed = Fragment {
			path: path.clone(),
			root,
		};
		state.fragments.insert(path, parsed.clone());
		Ok(parsed)
	}

	/// Parse (or reuse) the index fragment.
	pub fn index(&self) -> Result<Arc<Index>> {
		let fragment = self.parse(&FragmentRef::Index)?;
		match fragment.root {
			Node::Index(index) => Ok(index),
			other => Err(Error::schema(
				fragment.path,
				format!("expected an index fragment, found {}", other.kind()),
			)),
		}
	}

	/// Parse (or reuse) the detail fragment of a compound.
	pub fn compound(&self, refid: &str) -> Result<Arc<CompoundDef>> {
		let fragment = self.parse(&FragmentRef::compound(refid))?;
		match fragment.root {
			Node::CompoundDef(def) => Ok(def),
			other => Err(Error::schema(
				fragment.path,
				format!("expected a compound fragment, found {}", other.kind()),
			)),
		}
	}

	/// Whether the fragment has already been parsed into the cache.
	pub fn is_loaded(&self, fragment: &FragmentRef) -> bool {
		let path = self.resolve(fragment);
		self.lock().fragments.contains_key(&path)
	}

	/// Number of fragments currently cached.
	pub fn loaded_count(&self) -> usize {
		self.lock().fragments.len()
	}

	/// Number of times the underlying parse routine ran, including failed attempts.
	pub fn parse_count(&self) -> usize {
		self.lock().parses
	}

	fn lock(&self) -> MutexGuard<'_, StoreState> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
