//! Content engines for a static HTML site.
//!
//! `sitepages` answers a fixed set of read-only questions about a directory
//! of HTML pages and its `sitemap.xml`: which pages exist, what text a page
//! holds, what structural metadata it declares, where a substring occurs,
//! and how the sitemap ranks its pages.
//!
//! The engines are pure functions over strings:
//!
//! * [`extract_text`] flattens markup into text, never failing on bad input
//! * [`extract_metadata`] collects title, meta tags, headings and links
//! * [`search`] finds case-insensitive substring matches with line context
//! * [`rank_sitemap`] orders sitemap entries by declared priority
//!
//! [`Site`] binds them to a [`PageSource`] and renders every operation to
//! the text format hosts expect. [`tools`] maps operation names onto `Site`.

mod chars;
pub mod error;
mod limits;
pub mod readable;
pub mod render;
pub mod search;
mod site;
pub mod sitemap;
pub mod source;
pub mod tools;

pub use error::{InvokeError, SitemapError, SourceError};
pub use limits::Limits;
pub use readable::{extract_metadata, extract_metadata_capped, extract_text};
pub use search::{search, search_document};
pub use site::Site;
pub use sitemap::{parse_sitemap, rank_sitemap};
pub use sitepages_protocol as protocol;
pub use source::{FsSource, MemorySource, PageSource};
