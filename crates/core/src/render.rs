//! Text rendering for operation results.
//!
//! Every function here returns the exact string handed back to hosts. The
//! layouts are part of the output contract.

use std::fmt::{Display, Write as _};

use sitepages_protocol::{FileMatches, NOT_AVAILABLE, PageMetadata, SitemapEntry};

use crate::Limits;
use crate::chars::{char_len, truncate_chars};

/// Result for a sitemap that does not exist at the content root.
pub const SITEMAP_NOT_FOUND: &str = "Sitemap.xml not found.";

/// Result for a page that cannot be read.
pub fn missing_file(path: &str) -> String {
	format!("Error: Could not read file '{path}' or file does not exist.")
}

pub fn page_list(pages: &[String]) -> String {
	let mut out = format!("=== Available HTML Pages ({}) ===\n\n", pages.len());
	for (idx, page) in pages.iter().enumerate() {
		let _ = writeln!(out, "{}. {page}", idx + 1);
	}
	out
}

/// Renders a page's extracted text, cut to `limits.read_chars` chars.
///
/// A cut page also reports the length of its raw markup.
pub fn page_content(path: &str, html: &str, text: &str, limits: &Limits) -> String {
	if char_len(text) <= limits.read_chars {
		return format!("=== Content of {path} ===\n\n{text}");
	}
	format!(
		"=== Content of {path} ===\n\nHTML Content Length: {} characters\n\nExtracted Text:\n{}...",
		char_len(html),
		truncate_chars(text, limits.read_chars)
	)
}

pub fn metadata(path: &str, meta: &PageMetadata, limits: &Limits) -> String {
	let or_na = |value: &Option<String>| value.as_deref().unwrap_or(NOT_AVAILABLE).to_string();

	let mut out = format!("=== Metadata for {path} ===\n\n");
	let _ = write!(out, "Title: {}\n\n", or_na(&meta.title));
	let _ = write!(out, "Description: {}\n\n", or_na(&meta.description));
	let _ = write!(out, "Keywords: {}\n\n", or_na(&meta.keywords));

	out.push_str("Headings:\n");
	for (label, headings) in meta.headings.levels() {
		if headings.is_empty() {
			continue;
		}
		let shown = &headings[..headings.len().min(limits.display_items)];
		let _ = writeln!(out, "  {label}: {}", shown.join(", "));
	}

	match meta.omitted_links() {
		0 => {
			let _ = writeln!(out, "\nLinks ({} found):", meta.links.len());
		}
		omitted => {
			let _ = writeln!(out, "\nLinks ({} found, {omitted} more not stored):", meta.links.len());
		}
	}
	for link in meta.links.iter().take(limits.display_items) {
		let _ = writeln!(out, "  - {}: {}", link.text, link.href);
	}
	out
}

pub fn search_results(query: &str, results: &[FileMatches], limits: &Limits) -> String {
	if results.is_empty() {
		return format!("No matches found for '{query}'");
	}

	let mut out = format!("=== Search Results for '{query}' ===\n\n");
	for file in results {
		let _ = writeln!(out, "File: {}", file.file);
		if file.total_matches > file.matches.len() {
			let _ = writeln!(out, "Matches found: {} ({} total)", file.matches.len(), file.total_matches);
		} else {
			let _ = writeln!(out, "Matches found: {}", file.matches.len());
		}
		for hit in &file.matches {
			let _ = write!(
				out,
				"  Line {}:\n  {}...\n\n",
				hit.line_number,
				truncate_chars(&hit.context, limits.display_context_chars)
			);
		}
	}
	out
}

/// Renders ranked entries, keeping the first `limits.sitemap_entries`.
pub fn sitemap(ranked: &[SitemapEntry], limits: &Limits) -> String {
	let mut out = String::from("=== Sitemap Information ===\n\n");
	for entry in ranked.iter().take(limits.sitemap_entries) {
		let _ = writeln!(
			out,
			"{} (Priority: {}, Last Modified: {})",
			entry.filename, entry.priority, entry.lastmod
		);
	}
	if ranked.len() > limits.sitemap_entries {
		let _ = write!(out, "\n... and {} more pages", ranked.len() - limits.sitemap_entries);
	}
	out
}

/// Result for a sitemap that exists but cannot be read or parsed.
pub fn sitemap_error(err: impl Display) -> String {
	format!("Error reading sitemap: {err}")
}
