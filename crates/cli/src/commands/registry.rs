//! Tool dispatch glue between the CLI and the tool registry.

use std::io::{self, Write};
use std::time::Instant;

use sitepages::tools::{ToolId, invoke, tool_catalog, tool_name};
use sitepages::{PageSource, Site};
use sitepages_protocol::ToolDescriptor;

use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, ResultBuilder, TextOutput, print_result};

/// Runs a tool and prints its result.
pub fn run_tool<S: PageSource>(site: &Site<S>, id: ToolId, args: serde_json::Value, format: OutputFormat) -> Result<()> {
	let start = Instant::now();
	let inputs = CommandInputs::from_args(&args);
	let text = invoke(site, id, args)?;
	emit_success(tool_name(id), inputs, text, format, start);
	Ok(())
}

/// Print a rendered tool result in the given format.
///
/// `Text` writes the rendered string verbatim, adding a final newline
/// only when it lacks one.
pub fn emit_success(command: &'static str, inputs: CommandInputs, text: String, format: OutputFormat, start: Instant) {
	if !format.is_structured() {
		let _ = write_text(&mut io::stdout().lock(), &text);
		return;
	}
	let result = ResultBuilder::new(command).started_at(start).inputs(inputs).data(TextOutput { text }).build();
	print_result(&result, format);
}

fn write_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
	out.write_all(text.as_bytes())?;
	if !text.ends_with('\n') {
		out.write_all(b"\n")?;
	}
	out.flush()
}

/// Prints the tool catalog.
pub fn list_tools(format: OutputFormat) {
	let catalog = tool_catalog();
	if format.is_structured() {
		let result = ResultBuilder::<Vec<ToolDescriptor>>::new("tools").data(catalog).build();
		print_result(&result, format);
		return;
	}
	for tool in &catalog {
		println!("{}: {}", tool.name, tool.description);
	}
}
