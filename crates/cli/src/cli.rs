use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::page::{FilepathRaw, ListPagesRaw, SearchRaw, SitemapRaw};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sitepages")]
#[command(about = "Read-only text, metadata, search and sitemap tools for a static HTML site")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbose: u8,

	/// Output format
	#[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Content root holding the HTML pages and sitemap
	#[arg(short, long, global = true, env = "SITEPAGES_ROOT", value_name = "DIR")]
	pub root: Option<PathBuf>,

	/// Config file (defaults to <config dir>/sitepages/config.json when present)
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Ignore config files
	#[arg(long, global = true)]
	pub no_config: bool,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// List the HTML pages at the content root
	#[command(alias = "ls")]
	ListPages(ListPagesRaw),

	/// Show a page's extracted text, cut to 5000 characters
	#[command(alias = "read")]
	ReadPage(FilepathRaw),

	/// Print a page's full extracted text
	#[command(alias = "text")]
	ExtractText(FilepathRaw),

	/// Show a page's title, meta tags, headings and links
	#[command(alias = "meta")]
	Metadata(FilepathRaw),

	/// Search pages for a case-insensitive substring
	Search(SearchRaw),

	/// Show sitemap entries ranked by priority
	Sitemap(SitemapRaw),

	/// Invoke a tool by name with JSON arguments
	Call {
		/// Tool name (e.g. readPage or read_page)
		tool: String,

		/// Arguments object as JSON
		#[arg(long, default_value = "{}")]
		args: String,
	},

	/// List the available tools and their argument schemas
	Tools,

	/// Serve tools over line-delimited JSON-RPC on stdin/stdout
	Serve,
}

impl Commands {
	/// Name reported in result envelopes.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::ListPages(_) => "listPages",
			Commands::ReadPage(_) => "readPage",
			Commands::ExtractText(_) => "extractText",
			Commands::Metadata(_) => "getMetadata",
			Commands::Search(_) => "searchContent",
			Commands::Sitemap(_) => "getSitemap",
			Commands::Call { .. } => "call",
			Commands::Tools => "tools",
			Commands::Serve => "serve",
		}
	}
}
