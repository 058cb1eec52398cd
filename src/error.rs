use std::path::PathBuf;

use thiserror::Error;

use crate::finder::Level;

/// Reason a fragment could not be turned into a node tree.
#[derive(Debug, Error)]
pub enum ParseFailure {
	/// The fragment file could not be read.
	#[error("{0}")]
	Io(#[from] std::io::Error),
	/// The fragment is not well-formed XML.
	#[error("{0}")]
	Xml(#[from] roxmltree::Error),
	/// The XML is well-formed but does not have the expected Doxygen shape.
	#[error("{0}")]
	Schema(String),
}

/// Aggregate errors produced by the query and render pipeline.
#[derive(Debug, Error)]
pub enum Error {
	/// A fragment was missing or malformed. Never retried.
	#[error("failed to parse `{}`: {source}", path.display())]
	Parse {
		/// Resolved path of the offending fragment.
		path: PathBuf,
		/// Underlying failure.
		#[source]
		source: ParseFailure,
	},
	/// A matcher stack has no entry for a level the finder needed to test.
	#[error("matcher stack has no entry for level `{0}`")]
	MissingLevel(Level),
	/// `find_one` produced zero results.
	#[error("no matches found for {0}")]
	NoMatches(String),
	/// A level name did not correspond to any known level.
	#[error("unknown matcher level `{0}`")]
	UnknownLevel(String),
	/// A name pattern could not be compiled.
	#[error("invalid name pattern: {0}")]
	Pattern(#[from] regex::Error),
	/// Rendered content could not be serialized.
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl Error {
	pub(crate) fn parse(path: impl Into<PathBuf>, source: impl Into<ParseFailure>) -> Self {
		Self::Parse {
			path: path.into(),
			source: source.into(),
		}
	}

	pub(crate) fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
		Self::Parse {
			path: path.into(),
			source: ParseFailure::Schema(message.into()),
		}
	}
}

/// Result type returned by the doxyquery library.
pub type Result<T> = std::result::Result<T, Error>;
