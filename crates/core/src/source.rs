//! Document repositories the operations read pages and the sitemap from.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::SourceError;

/// Sitemap file name looked up at the content root unless overridden.
pub const DEFAULT_SITEMAP: &str = "sitemap.xml";

/// Read-only access to a site's pages and sitemap.
///
/// Paths are relative to the source's content root. Implementations must
/// be stateless across calls.
pub trait PageSource {
	/// Returns the text of the page at `path`.
	fn read(&self, path: &str) -> Result<String, SourceError>;

	/// Names of the `.html` pages at the root, sorted.
	fn list_pages(&self) -> Result<Vec<String>, SourceError>;

	/// Returns the sitemap XML, or `None` when the site has none.
	fn read_sitemap(&self) -> Result<Option<String>, SourceError>;
}

/// Pages served from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
	root: PathBuf,
	sitemap: String,
}

impl FsSource {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			sitemap: DEFAULT_SITEMAP.to_string(),
		}
	}

	/// Overrides the sitemap file name, relative to the root.
	pub fn with_sitemap(mut self, name: impl Into<String>) -> Self {
		self.sitemap = name.into();
		self
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Maps a caller path onto a file under the root.
	///
	/// Absolute paths and `..` components never resolve.
	fn resolve(&self, path: &str) -> Option<PathBuf> {
		let relative = Path::new(path);
		let contained = relative.components().all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
		if !contained {
			return None;
		}
		let full = self.root.join(relative);
		full.is_file().then_some(full)
	}

	fn read_file(path: &str, full: &Path) -> Result<String, SourceError> {
		let bytes = std::fs::read(full).map_err(|source| match source.kind() {
			std::io::ErrorKind::NotFound => SourceError::NotFound { path: path.to_string() },
			_ => SourceError::Io {
				path: path.to_string(),
				source,
			},
		})?;
		String::from_utf8(bytes).map_err(|_| SourceError::Encoding { path: path.to_string() })
	}
}

impl PageSource for FsSource {
	fn read(&self, path: &str) -> Result<String, SourceError> {
		let Some(full) = self.resolve(path) else {
			return Err(SourceError::NotFound { path: path.to_string() });
		};
		let content = Self::read_file(path, &full)?;
		debug!(target = "sitepages", path, bytes = content.len(), "read page");
		Ok(content)
	}

	/// Lists regular `*.html` files directly under the root. Hidden files
	/// such as `.draft.html` are not listed, though they can still be read
	/// by name.
	fn list_pages(&self) -> Result<Vec<String>, SourceError> {
		let root = self.root.to_str().ok_or_else(|| SourceError::InvalidRoot {
			root: self.root.display().to_string(),
			reason: "path is not valid UTF-8".to_string(),
		})?;
		let pattern = format!("{}/*.html", Pattern::escape(root));
		let options = MatchOptions {
			case_sensitive: true,
			require_literal_separator: true,
			require_literal_leading_dot: true,
		};
		let paths = glob::glob_with(&pattern, options).map_err(|err| SourceError::InvalidRoot {
			root: root.to_string(),
			reason: err.to_string(),
		})?;

		let mut pages = Vec::new();
		for entry in paths {
			let path = match entry {
				Ok(path) => path,
				Err(err) => {
					warn!(target = "sitepages", error = %err, "skipping unreadable directory entry");
					continue;
				}
			};
			if !path.is_file() {
				continue;
			}
			if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
				pages.push(name.to_string());
			}
		}
		pages.sort();
		debug!(target = "sitepages", count = pages.len(), "listed pages");
		Ok(pages)
	}

	fn read_sitemap(&self) -> Result<Option<String>, SourceError> {
		match self.resolve(&self.sitemap) {
			Some(full) => Self::read_file(&self.sitemap, &full).map(Some),
			None => Ok(None),
		}
	}
}

/// Pages held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	pages: BTreeMap<String, String>,
	sitemap: Option<String>,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_page(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
		self.pages.insert(path.into(), content.into());
		self
	}

	pub fn with_sitemap(mut self, xml: impl Into<String>) -> Self {
		self.sitemap = Some(xml.into());
		self
	}
}

impl PageSource for MemorySource {
	fn read(&self, path: &str) -> Result<String, SourceError> {
		self.pages.get(path).cloned().ok_or_else(|| SourceError::NotFound { path: path.to_string() })
	}

	fn list_pages(&self) -> Result<Vec<String>, SourceError> {
		Ok(self.pages.keys().filter(|path| path.ends_with(".html") && !path.contains('/')).cloned().collect())
	}

	fn read_sitemap(&self) -> Result<Option<String>, SourceError> {
		Ok(self.sitemap.clone())
	}
}
