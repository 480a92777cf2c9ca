//! Data types for the sitepages content engines.
//!
//! This crate contains the serde-serializable records produced by the
//! extraction, search and sitemap engines in `sitepages`, plus the tool
//! descriptors handed to hosts that dispatch operations by name.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * Owned: Every record owns its strings so it can outlive the source text
//! * Stable: Field names are part of the JSON output contract
//!
//! Parsing, ranking and rendering live in `sitepages`.

pub mod document;
pub mod metadata;
pub mod search;
pub mod sitemap;
pub mod tool;

pub use document::*;
pub use metadata::*;
pub use search::*;
pub use sitemap::*;
pub use tool::*;
