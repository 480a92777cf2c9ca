use serde::{Deserialize, Serialize};

/// Structural metadata pulled from a page's markup.
///
/// Singular fields hold the first match in document order and stay `None`
/// when the page has no such element. They are never `Some("")` for a
/// missing element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub keywords: Option<String>,
	pub headings: Headings,
	/// First links in document order, capped by the extractor.
	pub links: Vec<Link>,
	/// Number of links found before the cap was applied.
	pub link_total: usize,
}

impl PageMetadata {
	/// Links found on the page but not stored in [`Self::links`].
	pub fn omitted_links(&self) -> usize {
		self.link_total.saturating_sub(self.links.len())
	}
}

/// Heading bodies by level, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
	pub h1: Vec<String>,
	pub h2: Vec<String>,
	pub h3: Vec<String>,
}

impl Headings {
	/// Levels paired with their display label (`H1`..`H3`).
	pub fn levels(&self) -> [(&'static str, &[String]); 3] {
		[("H1", &self.h1), ("H2", &self.h2), ("H3", &self.h3)]
	}
}

/// An anchor with its target and tag-stripped text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
	pub href: String,
	pub text: String,
}
