use serde::{Deserialize, Serialize};

/// Truncation and windowing limits applied by the engines and renderers.
///
/// Defaults match the output contract hosts rely on; overriding them is
/// meant for embedding and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Limits {
	/// Extracted text shown by `readPage` before it is cut with `...`.
	pub read_chars: usize,
	/// Lines kept on each side of a search match.
	pub context_lines: usize,
	/// Stored length of a search context window.
	pub context_chars: usize,
	pub matches_per_file: usize,
	/// Links kept by the metadata extractor.
	pub stored_links: usize,
	/// Headings per level and links shown by `getMetadata`.
	pub display_items: usize,
	/// Context length shown per match by `searchContent`.
	pub display_context_chars: usize,
	pub sitemap_entries: usize,
}

impl Default for Limits {
	fn default() -> Self {
		Self {
			read_chars: 5000,
			context_lines: 2,
			context_chars: 500,
			matches_per_file: 5,
			stored_links: 20,
			display_items: 10,
			display_context_chars: 200,
			sitemap_entries: 50,
		}
	}
}
