use serde::{Deserialize, Serialize};

/// Placeholder used when a sitemap field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// A `url` element from a sitemap, reduced to what the ranking needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
	/// Last `/`-delimited segment of the declared location.
	pub filename: String,
	/// Declared priority text, or [`NOT_AVAILABLE`].
	pub priority: String,
	/// Declared last modification text, or [`NOT_AVAILABLE`].
	pub lastmod: String,
}

impl SitemapEntry {
	/// Ranking weight: the priority as a float, 0.0 when absent or not numeric.
	pub fn weight(&self) -> f64 {
		self.priority.trim().parse::<f64>().ok().filter(|value| value.is_finite()).unwrap_or(0.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(priority: &str) -> SitemapEntry {
		SitemapEntry {
			filename: "index.html".to_string(),
			priority: priority.to_string(),
			lastmod: NOT_AVAILABLE.to_string(),
		}
	}

	#[test]
	fn weight_parses_numeric_priority() {
		assert_eq!(entry("0.8").weight(), 0.8);
		assert_eq!(entry(" 1.0 ").weight(), 1.0);
	}

	#[test]
	fn weight_defaults_to_zero() {
		assert_eq!(entry(NOT_AVAILABLE).weight(), 0.0);
		assert_eq!(entry("high").weight(), 0.0);
		assert_eq!(entry("NaN").weight(), 0.0);
	}
}
