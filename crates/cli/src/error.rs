//! CLI error type and its mapping onto result envelope codes.

use std::path::PathBuf;

use sitepages::InvokeError;
use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("config file not found: {}", path.display())]
	ConfigMissing { path: PathBuf },

	#[error("invalid config file {}: {source}", path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid --args JSON: {0}")]
	InvalidArgs(#[source] serde_json::Error),

	#[error(transparent)]
	Invoke(#[from] InvokeError),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("serialization error: {0}")]
	Json(#[from] serde_json::Error),
}

impl CliError {
	pub fn code(&self) -> ErrorCode {
		match self {
			CliError::ConfigMissing { .. } | CliError::ConfigParse { .. } => ErrorCode::ConfigError,
			CliError::InvalidArgs(_) => ErrorCode::InvalidInput,
			CliError::Invoke(InvokeError::UnknownTool { .. }) => ErrorCode::UnknownTool,
			CliError::Invoke(_) => ErrorCode::InvalidInput,
			CliError::Io(_) => ErrorCode::IoError,
			CliError::Json(_) => ErrorCode::InternalError,
		}
	}

	pub fn to_command_error(&self) -> CommandError {
		CommandError {
			code: self.code(),
			message: self.to_string(),
			details: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_tool_maps_to_its_own_code() {
		let err = CliError::from(InvokeError::UnknownTool { name: "nope".to_string() });
		assert_eq!(err.code(), ErrorCode::UnknownTool);
		assert_eq!(err.to_command_error().message, "unknown tool: nope");
	}

	#[test]
	fn missing_argument_is_invalid_input() {
		let err = CliError::from(InvokeError::MissingArgument {
			tool: "readPage",
			argument: "filepath",
		});
		assert_eq!(err.code(), ErrorCode::InvalidInput);
		assert_eq!(err.to_string(), "readPage requires the 'filepath' argument");
	}

	#[test]
	fn config_errors_name_the_file() {
		let err = CliError::ConfigMissing {
			path: PathBuf::from("/tmp/none.json"),
		};
		assert_eq!(err.code(), ErrorCode::ConfigError);
		assert!(err.to_string().contains("/tmp/none.json"));
	}
}
