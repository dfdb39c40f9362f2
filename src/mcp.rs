// AWS CLI Gateway - MCP Server (JSON-RPC 2.0 over stdio)
//
// All tool calls route through the dispatcher.
// Exposes: aws_cli, list_profiles, get_caller_identity

use crate::config::GatewayConfig;
use crate::dispatch;
use crate::exec::ProcessRunner;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "aws-cli-gateway";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log to stderr (stdout is JSON-RPC)
fn log(msg: &str) {
    eprintln!("[aws-cli-gateway] {}", msg);
}

/// Send JSON-RPC response
fn send_response(id: &Value, result: Value) {
    let response = json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    });
    let msg = serde_json::to_string(&response).unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = out.write_all(msg.as_bytes());
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}

/// Send JSON-RPC error response
fn send_error(id: &Value, code: i64, message: &str) {
    let response = json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    });
    let msg = serde_json::to_string(&response).unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = out.write_all(msg.as_bytes());
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}

/// MCP tool definition helper
fn tool_def(name: &str, description: &str, properties: Value, required: Vec<&str>) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required,
        }
    })
}

/// Return all tool definitions
fn tool_definitions() -> Vec<Value> {
    vec![
        tool_def(
            "aws_cli",
            "Execute AWS CLI commands. Dangerous operations like delete/terminate are blocked.",
            json!({
                "command": {"type": "string", "description": "AWS CLI command to execute (without 'aws' prefix). Example: 's3 ls'"},
                "region": {"type": "string", "description": "AWS region (optional, uses default if not specified)"},
                "profile": {"type": "string", "description": "AWS profile to use (optional, uses default if not specified)"}
            }),
            vec!["command"],
        ),
        tool_def(
            "list_profiles",
            "List available AWS profiles configured on the system",
            json!({}),
            vec![],
        ),
        tool_def(
            "get_caller_identity",
            "Get details about the current AWS credentials",
            json!({
                "profile": {"type": "string", "description": "AWS profile to use (optional)"}
            }),
            vec![],
        ),
    ]
}

/// Run the MCP server — reads JSON-RPC from stdin until EOF.
/// Each tools/call is dispatched independently; no state is shared
/// between calls beyond the read-only config.
pub fn run(config: GatewayConfig) {
    log(&format!("Starting {} v{}", SERVER_NAME, SERVER_VERSION));
    log(&format!("Binary: {} | Default output: {}", config.binary, config.default_output_format));

    let runner = ProcessRunner;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log(&format!("stdin read error: {}", e));
                continue;
            }
        };

        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        let msg: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                log(&format!("JSON parse error: {}", e));
                continue;
            }
        };

        let method = msg["method"].as_str().unwrap_or("");
        let id = &msg["id"];
        let params = &msg["params"];

        log(&format!("Received: {}", method));

        match method {
            "initialize" => {
                send_response(id, json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": SERVER_VERSION,
                    }
                }));
            }

            "notifications/initialized" => {
                // No response needed
            }

            "tools/list" => {
                send_response(id, json!({ "tools": tool_definitions() }));
            }

            "tools/call" => {
                let name = params["name"].as_str().unwrap_or("");
                let args = params.get("arguments").cloned().unwrap_or(json!({}));

                let text = dispatch::dispatch(name, &args, &config, &runner);

                send_response(id, json!({
                    "content": [{"type": "text", "text": text}]
                }));
            }

            "ping" => {
                send_response(id, json!({}));
            }

            _ => {
                if !id.is_null() {
                    send_error(id, -32601, &format!("Unknown method: {}", method));
                }
            }
        }
    }

    log("stdin closed, shutting down");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_tools_declared() {
        let tools = tool_definitions();
        assert_eq!(tools.len(), 3);
        let names: Vec<&str> = tools.iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["aws_cli", "list_profiles", "get_caller_identity"]);
    }

    #[test]
    fn aws_cli_requires_command_only() {
        let tools = tool_definitions();
        let aws_cli = &tools[0];
        assert_eq!(aws_cli["inputSchema"]["required"], json!(["command"]));
        let props = aws_cli["inputSchema"]["properties"].as_object().unwrap();
        assert!(props.contains_key("region"));
        assert!(props.contains_key("profile"));
    }

    #[test]
    fn list_profiles_takes_no_arguments() {
        let tools = tool_definitions();
        let schema = &tools[1]["inputSchema"];
        assert!(schema["properties"].as_object().unwrap().is_empty());
        assert!(schema["required"].as_array().unwrap().is_empty());
    }
}
