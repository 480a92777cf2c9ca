//! Case-insensitive substring search with line context.

use sitepages_protocol::{Document, FileMatches, SearchMatch};
use tracing::debug;

use crate::Limits;
use crate::chars::truncate_chars;

/// Searches every document in `corpus` for `query`.
///
/// Documents without a match are left out. Results are ordered by file
/// name; each holds its matches in line order.
pub fn search(query: &str, corpus: &[Document], limits: &Limits) -> Vec<FileMatches> {
	let mut results: Vec<FileMatches> = corpus.iter().filter_map(|doc| search_document(query, doc, limits)).collect();
	results.sort_by(|a, b| a.file.cmp(&b.file));
	results
}

/// Searches a single document, returning `None` when nothing matches.
///
/// The whole content is checked first; only then is it split on `\n` and
/// scanned line by line. A query that only matches across a line break
/// passes the first check but yields no line match, and the document is
/// reported as not matching.
pub fn search_document(query: &str, doc: &Document, limits: &Limits) -> Option<FileMatches> {
	let needle = query.to_lowercase();
	if !doc.content.to_lowercase().contains(&needle) {
		return None;
	}

	let lines: Vec<&str> = doc.content.split('\n').collect();
	let last = lines.len() - 1;
	let mut matches = Vec::new();
	let mut total_matches = 0;

	for (idx, line) in lines.iter().enumerate() {
		if !line.to_lowercase().contains(&needle) {
			continue;
		}
		total_matches += 1;
		if matches.len() >= limits.matches_per_file {
			continue;
		}

		let start = idx.saturating_sub(limits.context_lines);
		let end = (idx + limits.context_lines).min(last);
		let window = lines[start..=end].join("\n");
		matches.push(SearchMatch {
			line_number: idx + 1,
			context: truncate_chars(&window, limits.context_chars).to_string(),
		});
	}

	debug!(target = "sitepages", file = %doc.path, total_matches, kept = matches.len(), "searched document");

	if matches.is_empty() {
		return None;
	}
	Some(FileMatches {
		file: doc.path.clone(),
		matches,
		total_matches,
	})
}
