//! Typed errors for the content engines and the tool boundary.
//!
//! None of these cross an operation boundary as a fault: [`crate::Site`]
//! renders them into the textual results hosts expect.

use thiserror::Error;

/// Errors raised while fetching content from a [`crate::PageSource`].
#[derive(Debug, Error)]
pub enum SourceError {
	/// Path is absent, not a file, or escapes the content root.
	#[error("file not found: {path}")]
	NotFound { path: String },

	#[error("failed to read {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("{path} is not valid UTF-8")]
	Encoding { path: String },

	/// Content root cannot be turned into a listing pattern.
	#[error("invalid content root {root}: {reason}")]
	InvalidRoot { root: String, reason: String },
}

/// Sitemap could not be parsed as XML.
#[derive(Debug, Error)]
pub enum SitemapError {
	#[error("{0}")]
	Malformed(String),
}

/// Errors raised while mapping a named call onto an operation.
#[derive(Debug, Error)]
pub enum InvokeError {
	#[error("unknown tool: {name}")]
	UnknownTool { name: String },

	#[error("{tool} requires the '{argument}' argument")]
	MissingArgument { tool: &'static str, argument: &'static str },

	#[error("invalid arguments: {0}")]
	InvalidArguments(#[from] serde_json::Error),
}
