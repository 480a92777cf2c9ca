use serde::{Deserialize, Serialize};

/// Catalog entry describing one invocable operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
	pub name: String,
	pub description: String,
	/// JSON Schema for the operation's arguments object.
	pub input_schema: serde_json::Value,
}
