use sitepages_protocol::FileMatches;
use tracing::{debug, warn};

use crate::source::{FsSource, PageSource};
use crate::{Limits, readable, render, search, sitemap};

/// The six site operations bound to one content source.
///
/// Each method reads what it needs from the source, runs one engine and
/// renders the outcome. Failures come back as result text, never as
/// errors, so every method is total.
#[derive(Debug, Clone)]
pub struct Site<S: PageSource = FsSource> {
	source: S,
	limits: Limits,
}

impl<S: PageSource> Site<S> {
	pub fn new(source: S) -> Self {
		Self::with_limits(source, Limits::default())
	}

	pub fn with_limits(source: S, limits: Limits) -> Self {
		Self { source, limits }
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	pub fn limits(&self) -> &Limits {
		&self.limits
	}

	pub fn list_pages(&self) -> String {
		let pages = self.source.list_pages().unwrap_or_else(|err| {
			warn!(target = "sitepages", error = %err, "cannot list pages");
			Vec::new()
		});
		render::page_list(&pages)
	}

	pub fn read_page(&self, path: &str) -> String {
		let Some(html) = self.load(path) else {
			return render::missing_file(path);
		};
		let text = readable::extract_text(&html);
		render::page_content(path, &html, &text, &self.limits)
	}

	/// Full extracted text of a page, without the read-page cut.
	pub fn extract_text(&self, path: &str) -> String {
		match self.load(path) {
			Some(html) => readable::extract_text(&html),
			None => render::missing_file(path),
		}
	}

	pub fn get_metadata(&self, path: &str) -> String {
		let Some(html) = self.load(path) else {
			return render::missing_file(path);
		};
		let meta = readable::extract_metadata_capped(&html, self.limits.stored_links);
		render::metadata(path, &meta, &self.limits)
	}

	/// Structured search over one page, or every listed page when `path`
	/// is `None`.
	///
	/// Pages that fail to read are left out of a site-wide search.
	pub fn search(&self, query: &str, path: Option<&str>) -> Vec<FileMatches> {
		let names = match path {
			Some(path) => vec![path.to_string()],
			None => self.source.list_pages().unwrap_or_else(|err| {
				warn!(target = "sitepages", error = %err, "cannot list pages for search");
				Vec::new()
			}),
		};

		let mut corpus = Vec::with_capacity(names.len());
		for name in names {
			match self.source.read(&name) {
				Ok(content) => corpus.push(sitepages_protocol::Document::new(name, content)),
				Err(err) if path.is_some() => debug!(target = "sitepages", error = %err, "search target unreadable"),
				Err(err) => warn!(target = "sitepages", error = %err, "skipping page in search"),
			}
		}
		search::search(query, &corpus, &self.limits)
	}

	pub fn search_content(&self, query: &str, path: Option<&str>) -> String {
		render::search_results(query, &self.search(query, path), &self.limits)
	}

	pub fn get_sitemap(&self) -> String {
		let xml = match self.source.read_sitemap() {
			Ok(Some(xml)) => xml,
			Ok(None) => return render::SITEMAP_NOT_FOUND.to_string(),
			Err(err) => return render::sitemap_error(err),
		};
		match sitemap::rank_sitemap(&xml) {
			Ok(ranked) => render::sitemap(&ranked, &self.limits),
			Err(err) => render::sitemap_error(err),
		}
	}

	fn load(&self, path: &str) -> Option<String> {
		match self.source.read(path) {
			Ok(html) => Some(html),
			Err(err) => {
				debug!(target = "sitepages", error = %err, "page unavailable");
				None
			}
		}
	}
}
