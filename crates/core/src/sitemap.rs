//! Sitemap parsing and priority ranking.

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use sitepages_protocol::{NOT_AVAILABLE, SitemapEntry};
use tracing::debug;

use crate::error::SitemapError;

/// Namespace of the sitemap protocol.
pub const SITEMAP_NAMESPACE: &[u8] = b"http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
	Loc,
	Priority,
	Lastmod,
}

impl Field {
	fn from_local_name(name: &[u8]) -> Option<Self> {
		match name {
			b"loc" => Some(Self::Loc),
			b"priority" => Some(Self::Priority),
			b"lastmod" => Some(Self::Lastmod),
			_ => None,
		}
	}
}

/// A `url` element being read.
#[derive(Debug, Default)]
struct PendingUrl {
	depth: usize,
	loc: Option<String>,
	priority: Option<String>,
	lastmod: Option<String>,
}

impl PendingUrl {
	fn set(&mut self, field: Field, text: &str) {
		let slot = match field {
			Field::Loc => &mut self.loc,
			Field::Priority => &mut self.priority,
			Field::Lastmod => &mut self.lastmod,
		};
		if slot.is_none() {
			*slot = Some(text.trim().to_string());
		}
	}

	fn into_entry(self) -> Option<SitemapEntry> {
		let loc = self.loc.filter(|loc| !loc.is_empty())?;
		let filename = match loc.rfind('/') {
			Some(idx) => loc[idx + 1..].to_string(),
			None => loc,
		};
		let or_placeholder = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| NOT_AVAILABLE.to_string());
		Some(SitemapEntry {
			filename,
			priority: or_placeholder(self.priority),
			lastmod: or_placeholder(self.lastmod),
		})
	}
}

/// A child field of the current `url` whose text is being collected.
struct PendingField {
	field: Field,
	depth: usize,
	text: String,
}

/// Reads every namespaced `url` entry with a location, in document order.
pub fn parse_sitemap(xml: &str) -> Result<Vec<SitemapEntry>, SitemapError> {
	let mut reader = NsReader::from_str(xml);
	let mut entries = Vec::new();
	let mut depth = 0usize;
	let mut saw_root = false;
	let mut url: Option<PendingUrl> = None;
	let mut field: Option<PendingField> = None;

	loop {
		let (ns, event) = reader.read_resolved_event().map_err(|err| SitemapError::Malformed(err.to_string()))?;
		let in_sitemap_ns = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == SITEMAP_NAMESPACE);

		match event {
			Event::Start(start) => {
				depth += 1;
				saw_root = true;
				let local = start.local_name();
				match url.as_ref().map(|pending| pending.depth) {
					None if in_sitemap_ns && local.as_ref() == b"url" => {
						url = Some(PendingUrl { depth, ..Default::default() });
					}
					Some(url_depth) if field.is_none() && in_sitemap_ns && depth == url_depth + 1 => {
						field = Field::from_local_name(local.as_ref()).map(|kind| PendingField {
							field: kind,
							depth,
							text: String::new(),
						});
					}
					_ => {}
				}
			}
			Event::Empty(_) => saw_root = true,
			Event::Text(text) => {
				if let Some(pending) = field.as_mut() {
					let unescaped = text.unescape().map_err(|err| SitemapError::Malformed(err.to_string()))?;
					pending.text.push_str(&unescaped);
				}
			}
			Event::CData(cdata) => {
				if let Some(pending) = field.as_mut() {
					pending.text.push_str(&String::from_utf8_lossy(&cdata));
				}
			}
			Event::End(_) => {
				if field.as_ref().is_some_and(|pending| pending.depth == depth) {
					if let (Some(done), Some(pending_url)) = (field.take(), url.as_mut()) {
						pending_url.set(done.field, &done.text);
					}
				}
				if url.as_ref().is_some_and(|pending| pending.depth == depth) {
					if let Some(entry) = url.take().and_then(PendingUrl::into_entry) {
						entries.push(entry);
					}
				}
				depth = depth.saturating_sub(1);
			}
			Event::Eof => break,
			_ => {}
		}
	}

	if !saw_root {
		return Err(SitemapError::Malformed("no element found".to_string()));
	}
	if depth != 0 {
		return Err(SitemapError::Malformed(format!("document ended with {depth} unclosed element(s)")));
	}

	debug!(target = "sitepages", entries = entries.len(), "parsed sitemap");
	Ok(entries)
}

/// Parses `xml` and orders its entries by descending priority.
///
/// Entries without a numeric priority weigh 0.0. The sort is stable, so
/// equal weights keep document order.
pub fn rank_sitemap(xml: &str) -> Result<Vec<SitemapEntry>, SitemapError> {
	let mut entries = parse_sitemap(xml)?;
	entries.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
	Ok(entries)
}
