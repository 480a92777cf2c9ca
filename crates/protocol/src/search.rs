use serde::{Deserialize, Serialize};

/// One matching line and the lines around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
	/// 1-based line number of the matching line.
	pub line_number: usize,
	pub context: String,
}

/// Matches for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMatches {
	pub file: String,
	/// Matches in line order, capped per file.
	pub matches: Vec<SearchMatch>,
	/// Matching lines before the per-file cap.
	pub total_matches: usize,
}
