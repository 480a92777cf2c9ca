//! Integration tests for `call`, `tools` and the stdio server.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::TempDir;

fn site_root() -> TempDir {
	let dir = TempDir::new().expect("temp dir should be created");
	std::fs::write(dir.path().join("index.html"), "<title>Home</title><p>Hello <b>World</b></p>").expect("fixture should be written");
	dir
}

fn sitepages(root: &TempDir) -> Command {
	let mut command = Command::new(env!("CARGO_BIN_EXE_sitepages"));
	command.env_remove("SITEPAGES_ROOT").env_remove("RUST_LOG").arg("--no-config").arg("--root").arg(root.path());
	command
}

#[test]
fn call_by_snake_case_name() {
	let root = site_root();
	let output = sitepages(&root)
		.args(["call", "extract_text", "--args", r#"{"filepath":"index.html"}"#])
		.output()
		.expect("Failed to execute sitepages");

	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello World\n");
}

#[test]
fn call_unknown_tool_fails_with_envelope() {
	let root = site_root();
	let output = sitepages(&root)
		.args(["-f", "json", "call", "deletePage"])
		.output()
		.expect("Failed to execute sitepages");

	assert!(!output.status.success());
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
	assert_eq!(json["ok"], Value::Bool(false));
	assert_eq!(json["command"], "call");
	assert_eq!(json["error"]["code"], "UNKNOWN_TOOL");
}

#[test]
fn call_missing_argument_fails() {
	let root = site_root();
	let output = sitepages(&root).args(["call", "readPage"]).output().expect("Failed to execute sitepages");

	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Error [INVALID_INPUT]: readPage requires the 'filepath' argument"), "stderr: {stderr}");
}

#[test]
fn tools_json_lists_catalog() {
	let root = site_root();
	let output = sitepages(&root).args(["-f", "ndjson", "tools"]).output().expect("Failed to execute sitepages");

	assert!(output.status.success());
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
	let names: Vec<&str> = json["data"].as_array().expect("data should be array").iter().filter_map(|t| t["name"].as_str()).collect();
	assert_eq!(names, vec!["listPages", "readPage", "extractText", "getMetadata", "searchContent", "getSitemap"]);
}

#[test]
fn serve_answers_over_stdio() {
	let root = site_root();
	let mut child = sitepages(&root)
		.arg("serve")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::null())
		.spawn()
		.expect("Failed to spawn sitepages serve");

	{
		let stdin = child.stdin.as_mut().expect("stdin should be piped");
		writeln!(stdin, r#"{{"jsonrpc":"2.0","id":1,"method":"initialize","params":{{}}}}"#).unwrap();
		writeln!(stdin, r#"{{"jsonrpc":"2.0","method":"notifications/initialized"}}"#).unwrap();
		writeln!(stdin, r#"{{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{{"name":"readPage","arguments":{{"filepath":"index.html"}}}}}}"#).unwrap();
		writeln!(stdin, "not json").unwrap();
	}
	drop(child.stdin.take());

	let output = child.wait_with_output().expect("server should exit");
	assert!(output.status.success());

	let responses: Vec<Value> = String::from_utf8_lossy(&output.stdout)
		.lines()
		.map(|line| serde_json::from_str(line).expect("each line should be JSON"))
		.collect();
	assert_eq!(responses.len(), 3);
	assert_eq!(responses[0]["result"]["serverInfo"]["name"], "sitepages");
	assert_eq!(responses[1]["id"], 2);
	assert_eq!(responses[1]["result"]["content"][0]["text"], "=== Content of index.html ===\n\nHello World");
	assert_eq!(responses[2]["error"]["code"], -32700);
	assert!(responses[2]["id"].is_null());
}
