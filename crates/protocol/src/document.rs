use serde::{Deserialize, Serialize};

/// A page loaded from the content root for the duration of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	/// Path relative to the content root, as requested by the caller.
	pub path: String,
	pub content: String,
}

impl Document {
	pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			content: content.into(),
		}
	}
}
