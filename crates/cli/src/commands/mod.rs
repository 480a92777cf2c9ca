pub(crate) mod invocation;
pub mod page;
pub(crate) mod registry;

use tracing::info;

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::server;

pub fn dispatch(cli: Cli) -> Result<()> {
	let settings = Settings::resolve(cli.root, cli.config.as_deref(), cli.no_config)?;
	info!(target = "sitepages", root = %settings.root.display(), command = cli.command.name(), "dispatching");

	if matches!(cli.command, Commands::Tools) {
		registry::list_tools(cli.format);
		return Ok(());
	}
	if matches!(cli.command, Commands::Serve) {
		let stdin = std::io::stdin();
		return server::serve(&settings.site(), stdin.lock(), std::io::stdout());
	}

	if let Some(invocation) = invocation::from_cli_command(cli.command)? {
		registry::run_tool(&settings.site(), invocation.id, invocation.args, cli.format)?;
	}

	Ok(())
}
