//! Character reference decoding for extracted text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

static CHAR_REF_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]{2,8});").expect("CHAR_REF_RE should compile"));

/// Decode the character references that commonly appear in page text.
///
/// Decoding is a single pass, so `&amp;lt;` becomes `&lt;` and stops there.
/// A reference is left encoded when its character would start a tag:
/// a `<` followed by a name, `/`, `!`, `?` or another reference, or a
/// name character right after a literal `<`. Decoded text therefore never
/// reads as markup. Unknown names pass through untouched.
pub(crate) fn decode_html_entities(s: &str) -> Cow<'_, str> {
	if !s.contains('&') {
		return Cow::Borrowed(s);
	}

	let mut out = String::with_capacity(s.len());
	let mut last = 0;
	for caps in CHAR_REF_RE.captures_iter(s) {
		let (Some(whole), Some(reference)) = (caps.get(0), caps.get(1)) else {
			continue;
		};
		out.push_str(&s[last..whole.start()]);
		last = whole.end();

		let reference = reference.as_str();
		let decoded = match reference.strip_prefix('#') {
			Some(numeric) => numeric_reference(numeric),
			None => named_reference(reference),
		};
		match decoded {
			Some(ch) if !opens_tag(&out, ch, &s[whole.end()..]) => out.push(ch),
			_ => out.push_str(whole.as_str()),
		}
	}
	out.push_str(&s[last..]);
	Cow::Owned(out)
}

/// Whether writing `ch` between `before` and `after` would complete a
/// markup opener.
fn opens_tag(before: &str, ch: char, after: &str) -> bool {
	if ch == '<' {
		return after.chars().next().is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?' | '&'));
	}
	if before.ends_with("</") {
		return ch.is_ascii_alphabetic();
	}
	before.ends_with('<') && (ch.is_ascii_alphabetic() || matches!(ch, '/' | '!' | '?'))
}

fn numeric_reference(numeric: &str) -> Option<char> {
	let code = match numeric.strip_prefix(['x', 'X']) {
		Some(hex) => u32::from_str_radix(hex, 16).ok()?,
		None => numeric.parse::<u32>().ok()?,
	};
	char::from_u32(code).filter(|ch| *ch != '\0')
}

fn named_reference(name: &str) -> Option<char> {
	let ch = match name {
		"amp" => '&',
		"lt" => '<',
		"gt" => '>',
		"quot" => '"',
		"apos" => '\'',
		"nbsp" => ' ',
		"copy" => '©',
		"reg" => '®',
		"trade" => '™',
		"euro" => '€',
		"ndash" => '–',
		"mdash" => '—',
		"hellip" => '…',
		"lsquo" => '‘',
		"rsquo" => '’',
		"ldquo" => '“',
		"rdquo" => '”',
		"laquo" => '«',
		"raquo" => '»',
		"bull" => '•',
		"middot" => '·',
		"deg" => '°',
		"times" => '×',
		"divide" => '÷',
		"plusmn" => '±',
		"sect" => '§',
		"para" => '¶',
		"cent" => '¢',
		"pound" => '£',
		"yen" => '¥',
		"iexcl" => '¡',
		"iquest" => '¿',
		"aacute" => 'á',
		"agrave" => 'à',
		"acirc" => 'â',
		"auml" => 'ä',
		"aring" => 'å',
		"ccedil" => 'ç',
		"eacute" => 'é',
		"egrave" => 'è',
		"ecirc" => 'ê',
		"euml" => 'ë',
		"iacute" => 'í',
		"igrave" => 'ì',
		"icirc" => 'î',
		"iuml" => 'ï',
		"ntilde" => 'ñ',
		"oacute" => 'ó',
		"ograve" => 'ò',
		"ocirc" => 'ô',
		"ouml" => 'ö',
		"oslash" => 'ø',
		"uacute" => 'ú',
		"ugrave" => 'ù',
		"ucirc" => 'û',
		"uuml" => 'ü',
		"yacute" => 'ý',
		"szlig" => 'ß',
		"Aacute" => 'Á',
		"Agrave" => 'À',
		"Auml" => 'Ä',
		"Ccedil" => 'Ç',
		"Eacute" => 'É',
		"Egrave" => 'È',
		"Ntilde" => 'Ñ',
		"Oacute" => 'Ó',
		"Ouml" => 'Ö',
		"Uacute" => 'Ú',
		"Uuml" => 'Ü',
		_ => return None,
	};
	Some(ch)
}
