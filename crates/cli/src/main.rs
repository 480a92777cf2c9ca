use std::process::ExitCode;

use clap::Parser;
use sitepages_cli::cli::Cli;
use sitepages_cli::output::print_failure;
use sitepages_cli::{commands, logging};

fn main() -> ExitCode {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();
	match commands::dispatch(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			tracing::debug!(target = "sitepages", code = %err.code(), "{err}");
			print_failure(command, &err.to_command_error(), format);
			ExitCode::FAILURE
		}
	}
}
