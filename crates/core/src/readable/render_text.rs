//! HTML-to-text flattening.

use tracing::debug;

use crate::readable::entities::decode_html_entities;
use crate::readable::tokenizer::{Token, Tokenizer};

/// Tags whose close starts a new paragraph in the flattened text.
const BLOCK_TAGS: [&str; 10] = ["p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "br"];

/// Tags whose body never reaches the text.
const SUPPRESSED_TAGS: [&str; 2] = ["script", "style"];

const PARAGRAPH_BREAK: &str = "\n";

/// Flattens `html` into plain text.
///
/// Text runs are trimmed and joined with single spaces; closing a block tag
/// adds a newline fragment. `script` and `style` bodies never reach the
/// output. A `title` body is held back and dropped when `</title>` closes
/// it; a title left open at end of input is kept as ordinary text. Any
/// input is accepted: broken markup only affects the text near the break.
pub fn extract_text(html: &str) -> String {
	let mut fragments: Vec<String> = Vec::new();
	let mut title: Option<Vec<String>> = None;
	let mut suppressed: Option<String> = None;

	for token in Tokenizer::new(html) {
		let out = title.as_mut().unwrap_or(&mut fragments);
		match token {
			Token::StartTag(tag) => {
				if tag.self_closing {
					if is_block(&tag.name) {
						out.push(PARAGRAPH_BREAK.to_string());
					}
				} else if tag.name == "title" {
					if title.is_none() {
						title = Some(Vec::new());
					}
				} else if SUPPRESSED_TAGS.contains(&tag.name.as_str()) {
					suppressed = Some(tag.name);
				}
			}
			Token::EndTag { name } => {
				if name == "title" {
					title = None;
					continue;
				}
				if suppressed.as_deref() == Some(name.as_str()) {
					suppressed = None;
				}
				if is_block(&name) {
					out.push(PARAGRAPH_BREAK.to_string());
				}
			}
			Token::Text { text, raw } => {
				if raw || suppressed.is_some() {
					continue;
				}
				let decoded = decode_html_entities(text);
				let cleaned = decoded.trim();
				if !cleaned.is_empty() {
					out.push(cleaned.to_string());
				}
			}
		}
	}
	if let Some(unclosed) = title {
		fragments.extend(unclosed);
	}

	let text = fragments.join(" ").trim().to_string();
	debug!(target = "sitepages", html_len = html.len(), text_len = text.len(), fragments = fragments.len(), "extracted text");
	text
}

fn is_block(name: &str) -> bool {
	BLOCK_TAGS.contains(&name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flattens_inline_markup() {
		let html = "<title>Home</title><p>Hello <b>World</b></p>";
		assert_eq!(extract_text(html), "Hello World");
	}

	#[test]
	fn unclosed_title_keeps_the_page_text() {
		assert_eq!(extract_text("<title>Home<p>Body</p>"), "Home Body");
		let text = extract_text("<title>Home<p>Body text here</p><div>More</div>");
		assert_eq!(text, "Home Body text here \n More");
	}

	#[test]
	fn only_the_closed_title_is_dropped() {
		assert_eq!(extract_text("<p>Before</p><title>Tab</title>After"), "Before \n After");
	}

	#[test]
	fn paragraph_closes_insert_breaks() {
		let html = "<h1>Title</h1><p>First</p><div>Second</div>";
		assert_eq!(extract_text(html), "Title \n First \n Second");
	}

	#[test]
	fn self_closing_br_breaks_but_bare_br_does_not() {
		assert_eq!(extract_text("one<br/>two"), "one \n two");
		assert_eq!(extract_text("one<br>two"), "one two");
	}

	#[test]
	fn suppresses_script_and_style_bodies() {
		let html = "<style>.x { color: red }</style><p>Visible</p><script>var secret = 1;</script><p>Also</p>";
		let text = extract_text(html);
		assert_eq!(text, "Visible \n Also");
		assert!(!text.contains("secret"));
		assert!(!text.contains("color"));
	}

	#[test]
	fn case_insensitive_tags() {
		let html = "<SCRIPT>hidden()</Script><P>Shown</P>";
		assert_eq!(extract_text(html), "Shown");
	}

	#[test]
	fn tolerates_malformed_markup() {
		assert_eq!(extract_text("<div><p>Unclosed <b>bold"), "Unclosed bold");
		assert_eq!(extract_text("text <a href='x"), "text");
		assert_eq!(extract_text("</p></div>"), "");
		assert_eq!(extract_text(""), "");
	}

	#[test]
	fn decodes_entities_in_text() {
		assert_eq!(extract_text("<p>Fish &amp; Chips&nbsp;</p>"), "Fish & Chips");
		assert_eq!(extract_text("<p>&lt;tag&gt;</p>"), "&lt;tag>");
		assert_eq!(extract_text("<p>5 &gt; 3 and a &lt; b</p>"), "5 > 3 and a < b");
		assert_eq!(extract_text("<p>Caf&eacute;</p>"), "Café");
	}
}
