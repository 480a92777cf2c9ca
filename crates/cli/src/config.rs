//! Site configuration: content root, sitemap name and engine limits.
//!
//! Settings come from an optional JSON file. The content root is chosen by
//! precedence: `--root` flag, then `SITEPAGES_ROOT`, then the config file,
//! then the current directory. A relative root in a config file is taken
//! relative to that file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sitepages::{FsSource, Limits, Site};
use tracing::debug;

use crate::error::{CliError, Result};

/// Config file name inside the per-user config directory.
const CONFIG_FILE: &str = "config.json";
const APP_DIR: &str = "sitepages";

/// Contents of a config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
	pub root: Option<PathBuf>,
	/// Sitemap file name relative to the root.
	pub sitemap: Option<String>,
	pub limits: Limits,
}

impl SiteConfig {
	pub fn from_file(path: &Path) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		serde_json::from_slice(&bytes).map_err(|source| CliError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})
	}
}

/// `<config_dir>/sitepages/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Settings resolved from flags, environment and config file.
#[derive(Debug, Clone)]
pub struct Settings {
	pub root: PathBuf,
	pub sitemap: Option<String>,
	pub limits: Limits,
	/// Config file the settings were read from, if any.
	pub config_path: Option<PathBuf>,
}

impl Settings {
	/// Resolves settings.
	///
	/// `root` is the flag or environment value. An explicit `config` must
	/// exist; the default config file is used only when present.
	pub fn resolve(root: Option<PathBuf>, config: Option<&Path>, no_config: bool) -> Result<Self> {
		let config_path = match (no_config, config) {
			(true, _) => None,
			(false, Some(path)) => {
				if !path.is_file() {
					return Err(CliError::ConfigMissing { path: path.to_path_buf() });
				}
				Some(path.to_path_buf())
			}
			(false, None) => default_config_path().filter(|path| path.is_file()),
		};

		let file = match &config_path {
			Some(path) => SiteConfig::from_file(path)?,
			None => SiteConfig::default(),
		};

		let root = match (root, file.root) {
			(Some(root), _) => root,
			(None, Some(configured)) => relative_to_config(configured, config_path.as_deref()),
			(None, None) => PathBuf::from("."),
		};
		debug!(target = "sitepages", root = %root.display(), config = ?config_path, "resolved settings");

		Ok(Self {
			root,
			sitemap: file.sitemap,
			limits: file.limits,
			config_path,
		})
	}

	pub fn site(&self) -> Site<FsSource> {
		let mut source = FsSource::new(&self.root);
		if let Some(sitemap) = &self.sitemap {
			source = source.with_sitemap(sitemap.clone());
		}
		Site::with_limits(source, self.limits)
	}
}

fn relative_to_config(root: PathBuf, config_path: Option<&Path>) -> PathBuf {
	if root.is_absolute() {
		return root;
	}
	match config_path.and_then(Path::parent) {
		Some(dir) => dir.join(root),
		None => root,
	}
}
