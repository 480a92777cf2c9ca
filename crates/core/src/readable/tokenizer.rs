//! Lenient tag-boundary scanner shared by the text and metadata extractors.
//!
//! The scanner never builds a tree and never fails. It splits markup into
//! text runs, start tags and end tags; comments, doctypes and processing
//! instructions are consumed silently. A tag or comment left unterminated at
//! the end of input is dropped rather than surfaced as text.

/// Elements whose content is raw text up to the matching close tag.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// A lexical unit of an HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
	/// Character data between tags. `raw` is set for `script`/`style` bodies.
	Text { text: &'a str, raw: bool },
	StartTag(StartTag<'a>),
	EndTag { name: String },
}

/// An opening (or self-closing) tag with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartTag<'a> {
	/// Lowercased tag name.
	pub(crate) name: String,
	pub(crate) attrs: Vec<Attribute<'a>>,
	pub(crate) self_closing: bool,
}

impl<'a> StartTag<'a> {
	/// First attribute named `name` (case-insensitive), undecoded.
	pub(crate) fn attr(&self, name: &str) -> Option<&'a str> {
		self.attrs.iter().find(|attr| attr.name == name).map(|attr| attr.value)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Attribute<'a> {
	/// Lowercased attribute name.
	pub(crate) name: String,
	/// Raw value with quotes removed; empty for bare attributes.
	pub(crate) value: &'a str,
}

/// Iterator over the [`Token`]s of an HTML string.
pub(crate) struct Tokenizer<'a> {
	src: &'a str,
	pos: usize,
	raw_text: Option<&'static str>,
}

impl<'a> Tokenizer<'a> {
	pub(crate) fn new(src: &'a str) -> Self {
		Self { src, pos: 0, raw_text: None }
	}

	fn rest(&self) -> &'a str {
		&self.src[self.pos..]
	}

	fn finish(&mut self) -> Option<Token<'a>> {
		self.pos = self.src.len();
		None
	}

	fn raw_text_token(&mut self, tag: &str) -> Option<Token<'a>> {
		let rest = self.rest();
		let end = find_close_tag(rest, tag).unwrap_or(rest.len());
		self.pos += end;
		(end > 0).then_some(Token::Text { text: &rest[..end], raw: true })
	}

	fn text_token(&mut self) -> Token<'a> {
		let rest = self.rest();
		let end = next_markup_start(rest).unwrap_or(rest.len());
		self.pos += end;
		Token::Text { text: &rest[..end], raw: false }
	}

	/// Skips past `terminator`, or to end of input when it never appears.
	fn skip_past(&mut self, from: usize, terminator: &str) -> bool {
		match self.rest()[from..].find(terminator) {
			Some(idx) => {
				self.pos += from + idx + terminator.len();
				true
			}
			None => {
				self.pos = self.src.len();
				false
			}
		}
	}

	fn end_tag(&mut self) -> Option<Token<'a>> {
		let rest = self.rest();
		let bytes = rest.as_bytes();
		let name_end = scan_name(bytes, 2);
		let name = rest[2..name_end].to_ascii_lowercase();
		let Some(close) = scan_attributes(rest, name_end).map(|(_, _, close)| close) else {
			return self.finish();
		};
		self.pos += close;
		Some(Token::EndTag { name })
	}

	fn start_tag(&mut self) -> Option<Token<'a>> {
		let rest = self.rest();
		let bytes = rest.as_bytes();
		let name_end = scan_name(bytes, 1);
		let name = rest[1..name_end].to_ascii_lowercase();
		let Some((attrs, self_closing, close)) = scan_attributes(rest, name_end) else {
			return self.finish();
		};
		self.pos += close;

		if !self_closing {
			self.raw_text = RAW_TEXT_TAGS.iter().copied().find(|tag| *tag == name);
		}
		Some(Token::StartTag(StartTag { name, attrs, self_closing }))
	}
}

impl<'a> Iterator for Tokenizer<'a> {
	type Item = Token<'a>;

	fn next(&mut self) -> Option<Token<'a>> {
		loop {
			if self.pos >= self.src.len() {
				return None;
			}

			if let Some(tag) = self.raw_text.take() {
				if let Some(token) = self.raw_text_token(tag) {
					return Some(token);
				}
				continue;
			}

			let rest = self.rest();
			if !is_markup_start(rest.as_bytes(), 0) {
				return Some(self.text_token());
			}

			if rest.starts_with("<!--") {
				if !self.skip_past(4, "-->") {
					return None;
				}
				continue;
			}
			if rest.starts_with("<!") || rest.starts_with("<?") {
				if !self.skip_past(2, ">") {
					return None;
				}
				continue;
			}
			if rest.starts_with("</") {
				return self.end_tag();
			}
			return self.start_tag();
		}
	}
}

/// Whether the `<` at `at` opens markup rather than being literal text.
fn is_markup_start(bytes: &[u8], at: usize) -> bool {
	if bytes.get(at) != Some(&b'<') {
		return false;
	}
	match bytes.get(at + 1) {
		Some(b) if b.is_ascii_alphabetic() => true,
		Some(b'!' | b'?') => true,
		Some(b'/') => bytes.get(at + 2).is_some_and(u8::is_ascii_alphabetic),
		_ => false,
	}
}

fn next_markup_start(s: &str) -> Option<usize> {
	let bytes = s.as_bytes();
	s.match_indices('<').map(|(idx, _)| idx).find(|&idx| is_markup_start(bytes, idx))
}

/// Returns the offset of the first `</tag` closing a raw-text element.
fn find_close_tag(s: &str, tag: &str) -> Option<usize> {
	let bytes = s.as_bytes();
	let tag = tag.as_bytes();
	s.match_indices("</").map(|(idx, _)| idx).find(|&idx| {
		let name_start = idx + 2;
		let name_end = name_start + tag.len();
		bytes.get(name_start..name_end).is_some_and(|name| name.eq_ignore_ascii_case(tag))
			&& bytes.get(name_end).is_none_or(|b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/')
	})
}

fn scan_name(bytes: &[u8], from: usize) -> usize {
	let mut idx = from;
	while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() && bytes[idx] != b'>' && bytes[idx] != b'/' {
		idx += 1;
	}
	idx
}

/// Parses attributes after the tag name up to the closing `>`.
///
/// Returns the attributes, whether the tag self-closes, and the offset just
/// past `>`. `None` means the tag runs to end of input.
fn scan_attributes(s: &str, from: usize) -> Option<(Vec<Attribute<'_>>, bool, usize)> {
	let bytes = s.as_bytes();
	let mut attrs = Vec::new();
	let mut idx = from;

	loop {
		while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
			idx += 1;
		}
		match bytes.get(idx)? {
			b'>' => return Some((attrs, false, idx + 1)),
			b'/' => {
				if bytes.get(idx + 1) == Some(&b'>') {
					return Some((attrs, true, idx + 2));
				}
				idx += 1;
				continue;
			}
			_ => {}
		}

		let name_start = idx;
		while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() && !matches!(bytes[idx], b'=' | b'>' | b'/') {
			idx += 1;
		}
		if idx == name_start {
			// Stray `=` with no name before it.
			idx += 1;
			continue;
		}
		let name = s[name_start..idx].to_ascii_lowercase();

		while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
			idx += 1;
		}
		if bytes.get(idx) != Some(&b'=') {
			attrs.push(Attribute { name, value: "" });
			continue;
		}
		idx += 1;
		while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
			idx += 1;
		}

		let value = match bytes.get(idx)? {
			quote @ (b'"' | b'\'') => {
				let value_start = idx + 1;
				let len = bytes[value_start..].iter().position(|b| b == quote)?;
				idx = value_start + len + 1;
				&s[value_start..value_start + len]
			}
			_ => {
				let value_start = idx;
				while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() && bytes[idx] != b'>' {
					idx += 1;
				}
				&s[value_start..idx]
			}
		};
		attrs.push(Attribute { name, value });
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(html: &str) -> Vec<Token<'_>> {
		Tokenizer::new(html).collect()
	}

	fn text(text: &str) -> Token<'_> {
		Token::Text { text, raw: false }
	}

	fn end(name: &str) -> Token<'static> {
		Token::EndTag { name: name.to_string() }
	}

	#[test]
	fn splits_text_and_tags() {
		let toks = tokens("<P class=x>Hello <b>World</b></p>");
		assert_eq!(toks.len(), 6);
		let Token::StartTag(p) = &toks[0] else {
			panic!("expected start tag, got {:?}", toks[0]);
		};
		assert_eq!(p.name, "p");
		assert_eq!(p.attr("class"), Some("x"));
		assert_eq!(toks[1], text("Hello "));
		assert_eq!(toks[3], text("World"));
		assert_eq!(toks[4], end("b"));
		assert_eq!(toks[5], end("p"));
	}

	#[test]
	fn quoted_attribute_may_contain_angle_bracket() {
		let toks = tokens(r#"<a title="a > b" href='/x'>go</a>"#);
		let Token::StartTag(a) = &toks[0] else {
			panic!("expected start tag");
		};
		assert_eq!(a.attr("title"), Some("a > b"));
		assert_eq!(a.attr("href"), Some("/x"));
		assert_eq!(toks[1], text("go"));
	}

	#[test]
	fn script_body_is_raw_text() {
		let toks = tokens("<script>if (a < b) { x = '<p>'; }</SCRIPT>after");
		assert_eq!(
			toks[1],
			Token::Text {
				text: "if (a < b) { x = '<p>'; }",
				raw: true
			}
		);
		assert_eq!(toks[2], end("script"));
		assert_eq!(toks[3], text("after"));
	}

	#[test]
	fn unclosed_script_swallows_rest() {
		let toks = tokens("<style>body { color: red }");
		assert_eq!(toks.len(), 2);
		assert!(matches!(toks[1], Token::Text { raw: true, .. }));
	}

	#[test]
	fn self_closing_script_does_not_enter_raw_text() {
		let toks = tokens("<script src='x.js'/><p>text</p>");
		let Token::StartTag(script) = &toks[0] else {
			panic!("expected start tag");
		};
		assert!(script.self_closing);
		assert_eq!(toks[2], text("text"));
	}

	#[test]
	fn comments_and_doctype_are_skipped() {
		let toks = tokens("<!DOCTYPE html><!-- <p>hidden</p> -->shown<?xml version='1.0'?>");
		assert_eq!(toks, vec![text("shown")]);
	}

	#[test]
	fn literal_angle_brackets_stay_text() {
		assert_eq!(tokens("1 < 2 and 3 > 2"), vec![text("1 < 2 and 3 > 2")]);
		assert_eq!(tokens("a </ b"), vec![text("a </ b")]);
	}

	#[test]
	fn unterminated_tag_is_dropped() {
		assert_eq!(tokens("before<div class='open"), vec![text("before")]);
		assert_eq!(tokens("before<!-- never closed"), vec![text("before")]);
	}

	#[test]
	fn handles_multibyte_text() {
		let toks = tokens("<h1>Café – 日本</h1>");
		assert_eq!(toks[1], text("Café – 日本"));
	}
}
