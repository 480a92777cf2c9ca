use proptest::prelude::*;
use sitepages::protocol::Document;
use sitepages::{Limits, extract_metadata, extract_text, rank_sitemap, search};

/// Whether `text` holds something a browser would read as markup.
fn has_markup(text: &str) -> bool {
	let bytes = text.as_bytes();
	bytes.iter().enumerate().any(|(idx, b)| {
		if *b != b'<' {
			return false;
		}
		match bytes.get(idx + 1) {
			Some(next) if next.is_ascii_alphabetic() || *next == b'!' || *next == b'?' => true,
			Some(b'/') => bytes.get(idx + 2).is_some_and(u8::is_ascii_alphabetic),
			_ => false,
		}
	})
}

fn html_piece() -> impl Strategy<Value = String> {
	let tags = prop_oneof![
		"<[a-zA-Z]{1,6}( [a-z]{1,4}=\"[^\"]{0,6}\")?/?>",
		"</[a-zA-Z]{1,6}>",
		Just("<script>".to_string()),
		Just("</script>".to_string()),
		Just("<style>".to_string()),
		Just("<br/>".to_string()),
		Just("<!--".to_string()),
		Just("-->".to_string()),
	];
	let text = prop_oneof![
		"[a-zA-Z0-9 .,\n]{0,12}",
		Just("<".to_string()),
		Just(">".to_string()),
		Just("</".to_string()),
		"&#[0-9]{1,3};",
		"&#x[0-9a-f]{1,2};",
		Just("&lt;".to_string()),
	];
	prop_oneof![tags, text]
}

fn html_soup() -> impl Strategy<Value = String> {
	prop::collection::vec(html_piece(), 0..40).prop_map(|pieces| pieces.concat())
}

proptest! {
	#[test]
	fn extracted_text_never_contains_markup(html in html_soup()) {
		let text = extract_text(&html);
		prop_assert!(!has_markup(&text), "markup in {:?} from {:?}", text, html);
	}

	#[test]
	fn extraction_accepts_arbitrary_input(html in ".{0,300}") {
		let text = extract_text(&html);
		prop_assert!(!has_markup(&text));
		let _ = extract_metadata(&html);
	}

	#[test]
	fn script_and_style_bodies_are_suppressed(
		before in "[a-z ]{0,20}",
		between in "[a-z ]{0,20}",
		code in "[0-9]{3}",
		tag in prop_oneof![Just("script"), Just("style"), Just("SCRIPT")],
	) {
		let html = format!("<p>{before}</p><{tag}>SECRET{code}</{tag}>{between}<style>HIDDEN{code}</style>");
		let text = extract_text(&html);
		prop_assert!(!text.contains("SECRET"));
		prop_assert!(!text.contains("HIDDEN"));
	}

	#[test]
	fn stored_links_are_capped_in_document_order(count in 0usize..60) {
		let html: String = (0..count).map(|i| format!("<a href=\"/p{i}.html\">Page {i}</a>\n")).collect();
		let meta = extract_metadata(&html);
		prop_assert_eq!(meta.links.len(), count.min(20));
		prop_assert_eq!(meta.link_total, count);
		for (i, link) in meta.links.iter().enumerate() {
			prop_assert_eq!(&link.href, &format!("/p{i}.html"));
		}
	}

	#[test]
	fn sitemap_ranking_is_descending_and_stable(priorities in prop::collection::vec(prop::option::of(0u8..=10), 0..30)) {
		let urls: String = priorities
			.iter()
			.enumerate()
			.map(|(i, priority)| match priority {
				Some(p) => format!("<url><loc>https://x.org/{i}</loc><priority>{:.1}</priority></url>", f64::from(*p) / 10.0),
				None => format!("<url><loc>https://x.org/{i}</loc></url>"),
			})
			.collect();
		let xml = format!("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">{urls}</urlset>");
		let ranked = rank_sitemap(&xml).unwrap();
		prop_assert_eq!(ranked.len(), priorities.len());

		for pair in ranked.windows(2) {
			let (a, b) = (&pair[0], &pair[1]);
			prop_assert!(a.weight() >= b.weight());
			if a.weight() == b.weight() {
				let ia: usize = a.filename.parse().unwrap();
				let ib: usize = b.filename.parse().unwrap();
				prop_assert!(ia < ib, "tie broke input order: {} before {}", ia, ib);
			}
		}
	}

	#[test]
	fn absent_token_yields_no_results(contents in prop::collection::vec("[a-z \n]{0,200}", 0..5)) {
		let corpus: Vec<Document> = contents.into_iter().enumerate().map(|(i, c)| Document::new(format!("{i}.html"), c)).collect();
		prop_assert!(search("missing-token", &corpus, &Limits::default()).is_empty());
	}

	#[test]
	fn search_contexts_respect_limits(
		lines in prop::collection::vec("[a-z]{0,300}", 1..40),
		query in "[a-z]{1,2}",
	) {
		let doc = Document::new("page.html", lines.join("\n"));
		for result in search(&query, &[doc], &Limits::default()) {
			prop_assert!(result.matches.len() <= 5);
			prop_assert!(result.total_matches >= result.matches.len());
			for hit in &result.matches {
				prop_assert!(hit.context.chars().count() <= 500);
				prop_assert!(hit.context.lines().count() <= 5);
			}
		}
	}
}
