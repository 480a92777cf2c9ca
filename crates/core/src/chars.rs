//! Character-count helpers. Limits are counted in chars, never bytes.

/// Returns the prefix of `s` holding at most `max` chars.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
	match s.char_indices().nth(max) {
		Some((end, _)) => &s[..end],
		None => s,
	}
}

pub(crate) fn char_len(s: &str) -> usize {
	s.chars().count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncates_on_char_boundaries() {
		assert_eq!(truncate_chars("héllo", 2), "hé");
		assert_eq!(truncate_chars("abc", 10), "abc");
		assert_eq!(truncate_chars("abc", 0), "");
	}

	#[test]
	fn counts_chars_not_bytes() {
		assert_eq!(char_len("日本語"), 3);
	}
}
