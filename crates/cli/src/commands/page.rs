//! Argument types for the per-operation subcommands.
//!
//! Each serializes to the JSON arguments object its tool accepts.

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug, Clone, Default, Serialize)]
pub struct ListPagesRaw {}

#[derive(Args, Debug, Clone, Default, Serialize)]
pub struct SitemapRaw {}

#[derive(Args, Debug, Clone, Serialize)]
pub struct FilepathRaw {
	/// Page path relative to the content root (e.g. index.html)
	pub filepath: String,
}

#[derive(Args, Debug, Clone, Serialize)]
pub struct SearchRaw {
	/// Substring to search for (case-insensitive)
	pub query: String,

	/// Search only this page
	#[arg(long = "file", value_name = "FILEPATH")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filepath: Option<String>,
}
