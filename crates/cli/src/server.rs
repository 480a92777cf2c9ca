//! Line-delimited JSON-RPC 2.0 server over stdio.
//!
//! Each input line is one request; each request with an `id` gets exactly
//! one response line. Notifications (no `id`) are processed and never
//! answered. Nothing is kept between requests.

use std::io::{BufRead, Write};

use serde::Deserialize;
use serde_json::{Value, json};
use sitepages::tools::{invoke_by_name, tool_catalog};
use sitepages::{InvokeError, PageSource, Site};
use tracing::{debug, warn};

use crate::error::Result;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "sitepages";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct Request {
	#[serde(default)]
	id: Option<Value>,
	method: String,
	#[serde(default)]
	params: Value,
}

#[derive(Debug, Default, Deserialize)]
struct CallParams {
	name: String,
	#[serde(default)]
	arguments: Value,
}

/// Serves requests from `input` until end of input.
pub fn serve<S: PageSource>(site: &Site<S>, input: impl BufRead, mut output: impl Write) -> Result<()> {
	for line in input.lines() {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}
		if let Some(response) = handle_line(site, &line) {
			writeln!(output, "{}", serde_json::to_string(&response)?)?;
			output.flush()?;
		}
	}
	debug!(target = "sitepages", "stdin closed, server exiting");
	Ok(())
}

/// Handles one request line, returning the response to write, if any.
pub fn handle_line<S: PageSource>(site: &Site<S>, line: &str) -> Option<Value> {
	let message: Value = match serde_json::from_str(line) {
		Ok(message) => message,
		Err(err) => {
			warn!(target = "sitepages", error = %err, "unparsable request line");
			return Some(error_response(Value::Null, PARSE_ERROR, &format!("Parse error: {err}")));
		}
	};

	let request: Request = match serde_json::from_value(message.clone()) {
		Ok(request) => request,
		Err(err) => {
			let id = message.get("id").cloned().unwrap_or(Value::Null);
			return Some(error_response(id, INVALID_REQUEST, &format!("Invalid request: {err}")));
		}
	};

	debug!(target = "sitepages", method = %request.method, "request");
	let outcome = handle_request(site, &request.method, request.params);
	let id = request.id?;
	Some(match outcome {
		Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
		Err((code, message)) => error_response(id, code, &message),
	})
}

fn handle_request<S: PageSource>(site: &Site<S>, method: &str, params: Value) -> std::result::Result<Value, (i64, String)> {
	match method {
		"initialize" => Ok(json!({
			"protocolVersion": PROTOCOL_VERSION,
			"capabilities": { "tools": {} },
			"serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") },
		})),
		"notifications/initialized" | "ping" => Ok(json!({})),
		"tools/list" => Ok(json!({ "tools": tool_catalog() })),
		"tools/call" => {
			let params: CallParams = serde_json::from_value(params).map_err(|err| (INVALID_PARAMS, format!("Invalid params: {err}")))?;
			let text = invoke_by_name(site, &params.name, params.arguments).map_err(|err: InvokeError| (INVALID_PARAMS, err.to_string()))?;
			Ok(json!({ "content": [{ "type": "text", "text": text }] }))
		}
		_ => Err((METHOD_NOT_FOUND, format!("Method not found: {method}"))),
	}
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
	json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}

#[cfg(test)]
mod tests {
	use super::*;
	use sitepages::MemorySource;

	fn site() -> Site<MemorySource> {
		Site::new(MemorySource::new().with_page("index.html", "<title>Home</title><p>Hello <b>World</b></p>"))
	}

	fn call(line: &str) -> Value {
		handle_line(&site(), line).expect("request should be answered")
	}

	#[test]
	fn initialize_reports_server_info() {
		let response = call(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#);
		assert_eq!(response["id"], 1);
		assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
		assert_eq!(response["result"]["serverInfo"]["name"], "sitepages");
		assert!(response["result"]["capabilities"]["tools"].is_object());
	}

	#[test]
	fn tools_list_returns_catalog() {
		let response = call(r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#);
		let tools = response["result"]["tools"].as_array().unwrap();
		assert_eq!(tools.len(), 6);
		assert!(tools.iter().any(|t| t["name"] == "readPage" && t["inputSchema"]["type"] == "object"));
	}

	#[test]
	fn tools_call_returns_text_content() {
		let response = call(r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"extract_text","arguments":{"filepath":"index.html"}}}"#);
		assert_eq!(response["result"]["content"][0]["type"], "text");
		assert_eq!(response["result"]["content"][0]["text"], "Hello World");
	}

	#[test]
	fn missing_file_is_a_successful_call() {
		let response = call(r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"readPage","arguments":{"filepath":"missing.html"}}}"#);
		assert!(response.get("error").is_none());
		assert_eq!(
			response["result"]["content"][0]["text"],
			"Error: Could not read file 'missing.html' or file does not exist."
		);
	}

	#[test]
	fn bad_tool_calls_are_invalid_params() {
		let response = call(r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"dropTables","arguments":{}}}"#);
		assert_eq!(response["error"]["code"], INVALID_PARAMS);

		let response = call(r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"readPage","arguments":{}}}"#);
		assert_eq!(response["error"]["code"], INVALID_PARAMS);
		assert_eq!(response["id"], 5);
	}

	#[test]
	fn unknown_method_is_not_found() {
		let response = call(r#"{"jsonrpc":"2.0","id":6,"method":"resources/list"}"#);
		assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
	}

	#[test]
	fn garbage_is_a_parse_error_with_null_id() {
		let response = call("{not json");
		assert_eq!(response["error"]["code"], PARSE_ERROR);
		assert!(response["id"].is_null());
	}

	#[test]
	fn request_without_method_is_invalid() {
		let response = call(r#"{"jsonrpc":"2.0","id":7}"#);
		assert_eq!(response["error"]["code"], INVALID_REQUEST);
		assert_eq!(response["id"], 7);
	}

	#[test]
	fn notifications_get_no_response() {
		assert!(handle_line(&site(), r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).is_none());
		assert!(handle_line(&site(), r#"{"jsonrpc":"2.0","method":"tools/list"}"#).is_none());
	}

	#[test]
	fn serve_answers_each_request_line() {
		let input = concat!(
			r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
			"\n\n",
			r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
			"\n",
			r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"listPages"}}"#,
			"\n",
		);
		let mut output = Vec::new();
		serve(&site(), input.as_bytes(), &mut output).unwrap();

		let lines: Vec<Value> = String::from_utf8(output).unwrap().lines().map(|l| serde_json::from_str(l).unwrap()).collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0]["result"], json!({}));
		assert!(lines[1]["result"]["content"][0]["text"].as_str().unwrap().contains("1. index.html"));
	}
}
