// AWS CLI Gateway - Request Dispatcher
//
// Maps an inbound tool call (name + argument bag) to one of the fixed
// operations and normalizes every outcome to a single text payload.
// Pipeline for passthrough: classify -> assemble -> run. A blocked
// command never reaches the runner. Stateless across calls.

use crate::config::GatewayConfig;
use crate::exec::{CommandRunner, ExecError, ExecResult};
use crate::policy::{self, Classification};
use crate::request::{self, CommandRequest};
use serde_json::Value;

/// Dispatch one tool call. Every error kind is recovered here and
/// returned as text; nothing propagates to the transport loop.
pub fn dispatch(
    name: &str,
    args: &Value,
    config: &GatewayConfig,
    runner: &dyn CommandRunner,
) -> String {
    match name {
        "aws_cli" => {
            let command = args.get("command").and_then(|v| v.as_str()).unwrap_or("");
            if command.is_empty() {
                return "Error: 'command' is required".to_string();
            }

            let request = CommandRequest {
                command: command.to_string(),
                region: args.get("region").and_then(|v| v.as_str()).map(String::from),
                profile: args.get("profile").and_then(|v| v.as_str()).map(String::from),
            };

            run_gated(&request, config, runner)
        }

        "list_profiles" => {
            let argv = vec![
                config.binary.clone(),
                "configure".to_string(),
                "list-profiles".to_string(),
            ];

            match runner.run(&argv) {
                Ok(result) if !result.success() => {
                    format!("Error listing profiles: {}", result.stderr.trim())
                }
                Ok(result) => {
                    let profiles = result.stdout.trim();
                    if profiles.is_empty() {
                        "No AWS profiles configured".to_string()
                    } else {
                        format!("Available AWS profiles:\n{}", profiles)
                    }
                }
                Err(e) => format!("Error: {}", e),
            }
        }

        "get_caller_identity" => {
            // Fixed read-only command; only the profile is caller-supplied.
            // Routed through the same gated pipeline — the fixed text never
            // matches the denylist, so one code path covers both tools.
            let request = CommandRequest {
                command: "sts get-caller-identity".to_string(),
                region: None,
                profile: args.get("profile").and_then(|v| v.as_str()).map(String::from),
            };

            run_gated(&request, config, runner)
        }

        _ => format!("Unknown tool: {}", name),
    }
}

/// Classify, then assemble and execute if allowed
fn run_gated(request: &CommandRequest, config: &GatewayConfig, runner: &dyn CommandRunner) -> String {
    match policy::classify(&request.command, &config.denylist) {
        Classification::Block { matched } => {
            log::info!("blocked command (matched '{}'): {}", matched, request.command);
            format!(
                "Dangerous command blocked: contains '{}'. \
                 Commands with delete/terminate/destroy operations are not allowed for safety.",
                matched
            )
        }
        Classification::Allow => {
            let argv = request::assemble(&config.binary, request, &config.default_output_format);
            format_outcome(runner.run(&argv))
        }
    }
}

/// Map a runner outcome to the textual response contract
fn format_outcome(outcome: Result<ExecResult, ExecError>) -> String {
    match outcome {
        Ok(result) if result.success() => result.stdout.trim().to_string(),
        Ok(result) => format!("Error: {}", result.stderr.trim()),
        Err(e) => format!("Error executing command: {}", e),
    }
}

// ============================================================================
// TESTS
// ============================================================================
