//! Command invocation adapter for CLI enum variants.
//!
//! Converts clap-parsed CLI enums into tool IDs plus JSON argument objects
//! using each subcommand's `Raw` argument type.

use serde::Serialize;
use sitepages::tools::{ToolId, lookup_tool};

use crate::cli::Commands;
use crate::error::{CliError, Result};

/// Tool target with serialized arguments.
#[derive(Debug, Clone)]
pub(crate) struct CommandInvocation {
	pub(crate) id: ToolId,
	pub(crate) args: serde_json::Value,
}

fn invocation<T: Serialize>(id: ToolId, raw: T) -> Result<CommandInvocation> {
	Ok(CommandInvocation {
		id,
		args: serde_json::to_value(raw)?,
	})
}

/// Converts a parsed CLI command into a tool invocation.
///
/// Returns `Ok(None)` for commands that are not tools (`tools`, `serve`).
pub(crate) fn from_cli_command(command: Commands) -> Result<Option<CommandInvocation>> {
	use ToolId as Id;

	let invocation = match command {
		Commands::ListPages(raw) => invocation(Id::ListPages, raw)?,
		Commands::ReadPage(raw) => invocation(Id::ReadPage, raw)?,
		Commands::ExtractText(raw) => invocation(Id::ExtractText, raw)?,
		Commands::Metadata(raw) => invocation(Id::GetMetadata, raw)?,
		Commands::Search(raw) => invocation(Id::SearchContent, raw)?,
		Commands::Sitemap(raw) => invocation(Id::GetSitemap, raw)?,
		Commands::Call { tool, args } => from_call(&tool, &args)?,
		Commands::Tools | Commands::Serve => return Ok(None),
	};

	Ok(Some(invocation))
}

fn from_call(tool: &str, args: &str) -> Result<CommandInvocation> {
	let id = lookup_tool(tool).ok_or_else(|| sitepages::InvokeError::UnknownTool { name: tool.to_string() })?;
	let args = serde_json::from_str(args).map_err(CliError::InvalidArgs)?;
	Ok(CommandInvocation { id, args })
}
