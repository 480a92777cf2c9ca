//! Metadata extraction from source HTML.

use sitepages_protocol::{Link, PageMetadata};
use tracing::debug;

use crate::readable::entities::decode_html_entities;
use crate::readable::tokenizer::{StartTag, Token, Tokenizer};

/// Links kept by [`extract_metadata`].
pub const MAX_STORED_LINKS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureKind {
	Title,
	H1,
	H2,
	H3,
	Anchor,
}

impl CaptureKind {
	fn from_tag(name: &str) -> Option<Self> {
		match name {
			"title" => Some(Self::Title),
			"h1" => Some(Self::H1),
			"h2" => Some(Self::H2),
			"h3" => Some(Self::H3),
			"a" => Some(Self::Anchor),
			_ => None,
		}
	}
}

/// An element whose text is being collected until its close tag.
#[derive(Debug)]
struct Capture<'a> {
	kind: CaptureKind,
	href: &'a str,
	text: String,
}

/// Extracts title, description, keywords, headings and links from `html`,
/// keeping the first [`MAX_STORED_LINKS`] links.
pub fn extract_metadata(html: &str) -> PageMetadata {
	extract_metadata_capped(html, MAX_STORED_LINKS)
}

/// Like [`extract_metadata`] with an explicit link cap.
///
/// An element's text runs from its start tag to the first matching close
/// tag; a second opening of the same element inside it is ignored and an
/// element never closed contributes nothing. Tags nested in a body are
/// stripped. Title, description and keywords keep the first match.
pub fn extract_metadata_capped(html: &str, max_links: usize) -> PageMetadata {
	let mut meta = PageMetadata::default();
	let mut open: Vec<Capture<'_>> = Vec::new();

	for token in Tokenizer::new(html) {
		match token {
			Token::StartTag(tag) => {
				if tag.name == "meta" {
					read_meta_tag(&tag, &mut meta);
					continue;
				}
				let Some(kind) = CaptureKind::from_tag(&tag.name) else {
					continue;
				};
				if open.iter().any(|capture| capture.kind == kind) || tag.self_closing {
					continue;
				}
				let href = match kind {
					CaptureKind::Anchor => match tag.attr("href") {
						Some(href) if !href.trim().is_empty() => href,
						_ => continue,
					},
					_ => "",
				};
				open.push(Capture {
					kind,
					href,
					text: String::new(),
				});
			}
			Token::Text { text, raw: false } => {
				for capture in &mut open {
					capture.text.push_str(text);
				}
			}
			Token::Text { raw: true, .. } => {}
			Token::EndTag { name } => {
				let Some(kind) = CaptureKind::from_tag(&name) else {
					continue;
				};
				let Some(idx) = open.iter().position(|capture| capture.kind == kind) else {
					continue;
				};
				let capture = open.remove(idx);
				finish_capture(capture, &mut meta, max_links);
			}
		}
	}

	debug!(
		target = "sitepages",
		title = meta.title.is_some(),
		headings = meta.headings.h1.len() + meta.headings.h2.len() + meta.headings.h3.len(),
		links = meta.links.len(),
		link_total = meta.link_total,
		"extracted metadata"
	);
	meta
}

fn finish_capture(capture: Capture<'_>, meta: &mut PageMetadata, max_links: usize) {
	let text = clean(&capture.text);
	match capture.kind {
		CaptureKind::Title => {
			if meta.title.is_none() && !text.is_empty() {
				meta.title = Some(text);
			}
		}
		CaptureKind::H1 => meta.headings.h1.push(text),
		CaptureKind::H2 => meta.headings.h2.push(text),
		CaptureKind::H3 => meta.headings.h3.push(text),
		CaptureKind::Anchor => {
			meta.link_total += 1;
			if meta.links.len() < max_links {
				meta.links.push(Link {
					href: clean(capture.href),
					text,
				});
			}
		}
	}
}

fn read_meta_tag(tag: &StartTag<'_>, meta: &mut PageMetadata) {
	let Some(name) = tag.attr("name") else {
		return;
	};
	let slot = if name.trim().eq_ignore_ascii_case("description") {
		&mut meta.description
	} else if name.trim().eq_ignore_ascii_case("keywords") {
		&mut meta.keywords
	} else {
		return;
	};
	if slot.is_some() {
		return;
	}
	if let Some(content) = tag.attr("content") {
		*slot = Some(clean(content));
	}
}

fn clean(raw: &str) -> String {
	decode_html_entities(raw).trim().to_string()
}
