//! Readable content extraction from HTML pages.
//!
//! Both extractors run over the same lenient tokenizer, so they agree on
//! where tags start and end, how `script`/`style` bodies are skipped, and
//! how broken markup degrades.

mod entities;
mod metadata;
mod render_text;
mod tokenizer;

pub use metadata::{MAX_STORED_LINKS, extract_metadata, extract_metadata_capped};
pub use render_text::extract_text;
