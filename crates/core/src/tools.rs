//! Tool registry: named operations hosts can invoke with JSON arguments.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use sitepages_protocol::ToolDescriptor;
use tracing::info;

use crate::error::InvokeError;
use crate::site::Site;
use crate::source::PageSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
	ListPages,
	ReadPage,
	ExtractText,
	GetMetadata,
	SearchContent,
	GetSitemap,
}

/// Static description of one tool.
struct ToolSpec {
	id: ToolId,
	name: &'static str,
	alias: &'static str,
	description: &'static str,
	required: &'static [&'static str],
	optional: &'static [&'static str],
}

static TOOLS: [ToolSpec; 6] = [
	ToolSpec {
		id: ToolId::ListPages,
		name: "listPages",
		alias: "list_pages",
		description: "List all available HTML pages in the website.",
		required: &[],
		optional: &[],
	},
	ToolSpec {
		id: ToolId::ReadPage,
		name: "readPage",
		alias: "read_page",
		description: "Read an HTML page and return its extracted text, cut to 5000 characters.",
		required: &["filepath"],
		optional: &[],
	},
	ToolSpec {
		id: ToolId::ExtractText,
		name: "extractText",
		alias: "extract_text",
		description: "Extract plain text from an HTML page, removing all HTML tags.",
		required: &["filepath"],
		optional: &[],
	},
	ToolSpec {
		id: ToolId::GetMetadata,
		name: "getMetadata",
		alias: "get_metadata",
		description: "Extract metadata from an HTML page (title, description, keywords, headings, links).",
		required: &["filepath"],
		optional: &[],
	},
	ToolSpec {
		id: ToolId::SearchContent,
		name: "searchContent",
		alias: "search_content",
		description: "Search for a query string across HTML files. Returns files and line numbers where matches are found.",
		required: &["query"],
		optional: &["filepath"],
	},
	ToolSpec {
		id: ToolId::GetSitemap,
		name: "getSitemap",
		alias: "get_sitemap",
		description: "Get the sitemap information showing all pages and their priorities.",
		required: &[],
		optional: &[],
	},
];

fn spec(id: ToolId) -> &'static ToolSpec {
	match id {
		ToolId::ListPages => &TOOLS[0],
		ToolId::ReadPage => &TOOLS[1],
		ToolId::ExtractText => &TOOLS[2],
		ToolId::GetMetadata => &TOOLS[3],
		ToolId::SearchContent => &TOOLS[4],
		ToolId::GetSitemap => &TOOLS[5],
	}
}

/// Resolves a tool by its camelCase name or snake_case alias.
pub fn lookup_tool(name: &str) -> Option<ToolId> {
	TOOLS.iter().find(|tool| tool.name == name || tool.alias == name).map(|tool| tool.id)
}

pub fn tool_name(id: ToolId) -> &'static str {
	spec(id).name
}

fn argument_schema(name: &str) -> Value {
	match name {
		"filepath" => json!({
			"type": "string",
			"description": "Path to the HTML file, relative to the content root (e.g. 'index.html')"
		}),
		"query" => json!({
			"type": "string",
			"description": "Case-insensitive substring to search for"
		}),
		_ => json!({ "type": "string" }),
	}
}

/// Descriptors for every tool, in registry order.
pub fn tool_catalog() -> Vec<ToolDescriptor> {
	TOOLS
		.iter()
		.map(|tool| {
			let properties: Map<String, Value> = tool
				.required
				.iter()
				.chain(tool.optional)
				.map(|arg| (arg.to_string(), argument_schema(arg)))
				.collect();
			ToolDescriptor {
				name: tool.name.to_string(),
				description: tool.description.to_string(),
				input_schema: json!({
					"type": "object",
					"properties": properties,
					"required": tool.required,
				}),
			}
		})
		.collect()
}

/// Arguments accepted by the tools. Unused fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolArgs {
	pub filepath: Option<String>,
	pub query: Option<String>,
}

impl ToolArgs {
	/// Reads arguments from a JSON object. `null` is treated as no arguments.
	pub fn from_value(args: Value) -> Result<Self, InvokeError> {
		if args.is_null() {
			return Ok(Self::default());
		}
		Ok(serde_json::from_value(args)?)
	}
}

fn require<'a>(value: &'a Option<String>, tool: ToolId, argument: &'static str) -> Result<&'a str, InvokeError> {
	value.as_deref().ok_or(InvokeError::MissingArgument {
		tool: tool_name(tool),
		argument,
	})
}

/// Runs a tool against `site`.
///
/// Only argument problems are errors. Missing pages, absent sitemaps and
/// empty searches are reported in the returned text.
pub fn invoke<S: PageSource>(site: &Site<S>, id: ToolId, args: Value) -> Result<String, InvokeError> {
	let args = ToolArgs::from_value(args)?;
	info!(target = "sitepages", tool = tool_name(id), "invoking tool");

	let text = match id {
		ToolId::ListPages => site.list_pages(),
		ToolId::ReadPage => site.read_page(require(&args.filepath, id, "filepath")?),
		ToolId::ExtractText => site.extract_text(require(&args.filepath, id, "filepath")?),
		ToolId::GetMetadata => site.get_metadata(require(&args.filepath, id, "filepath")?),
		ToolId::SearchContent => site.search_content(require(&args.query, id, "query")?, args.filepath.as_deref()),
		ToolId::GetSitemap => site.get_sitemap(),
	};
	Ok(text)
}

/// Looks up `name` and runs it.
pub fn invoke_by_name<S: PageSource>(site: &Site<S>, name: &str, args: Value) -> Result<String, InvokeError> {
	let id = lookup_tool(name).ok_or_else(|| InvokeError::UnknownTool { name: name.to_string() })?;
	invoke(site, id, args)
}
