// AWS CLI Gateway - Argument Assembler
//
// Turns a logical command request into the literal argv handed to the
// external binary. Splitting is plain whitespace — no shell-quoting
// awareness, so an embedded-space token will be split. The --output
// default is a textual check on the raw command, not a flag parse.
// Both are documented constraints carried over from the source behavior.

use serde::{Deserialize, Serialize};

/// One inbound passthrough request: the CLI subcommand text (without
/// the binary name) plus optional region/profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// Build the argv for one request. Order matters for the external
/// binary's own parsing: binary, command tokens, --region, --profile,
/// then --output if the command text does not already mention it.
pub fn assemble(binary: &str, request: &CommandRequest, default_output: &str) -> Vec<String> {
    let mut argv = vec![binary.to_string()];
    argv.extend(request.command.split_whitespace().map(String::from));

    if let Some(ref region) = request.region {
        argv.push("--region".to_string());
        argv.push(region.clone());
    }

    if let Some(ref profile) = request.profile {
        argv.push("--profile".to_string());
        argv.push(profile.clone());
    }

    if !request.command.contains("--output") {
        argv.push("--output".to_string());
        argv.push(default_output.to_string());
    }

    argv
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn request(command: &str, region: Option<&str>, profile: Option<&str>) -> CommandRequest {
        CommandRequest {
            command: command.to_string(),
            region: region.map(String::from),
            profile: profile.map(String::from),
        }
    }

    #[test]
    fn bare_command_gets_output_default() {
        let argv = assemble("aws", &request("s3api list-buckets", None, None), "json");
        assert_eq!(argv, ["aws", "s3api", "list-buckets", "--output", "json"]);
    }

    #[test]
    fn region_precedes_profile() {
        let argv = assemble(
            "aws",
            &request("ec2 describe-instances", Some("eu-west-1"), Some("dev")),
            "json",
        );
        assert_eq!(
            argv,
            [
                "aws", "ec2", "describe-instances",
                "--region", "eu-west-1",
                "--profile", "dev",
                "--output", "json",
            ]
        );
    }

    #[test]
    fn profile_without_region() {
        let argv = assemble("aws", &request("sts get-caller-identity", None, Some("prod")), "json");
        assert_eq!(
            argv,
            ["aws", "sts", "get-caller-identity", "--profile", "prod", "--output", "json"]
        );
    }

    #[test]
    fn explicit_output_suppresses_default() {
        let argv = assemble("aws", &request("ec2 describe-vpcs --output table", None, None), "json");
        assert_eq!(argv, ["aws", "ec2", "describe-vpcs", "--output", "table"]);
    }

    #[test]
    fn output_substring_anywhere_suppresses_default() {
        // Textual check, not a flag parse: "--output" inside an unrelated
        // argument value also suppresses injection. Documented limitation.
        let argv = assemble("aws", &request("s3 cp s3://bucket/--output-dir .", None, None), "json");
        assert!(!argv.contains(&"json".to_string()));
    }

    #[test]
    fn whitespace_runs_collapse() {
        let argv = assemble("aws", &request("s3api   list-buckets", None, None), "json");
        assert_eq!(argv, ["aws", "s3api", "list-buckets", "--output", "json"]);
    }

    #[test]
    fn binary_is_always_first() {
        let argv = assemble("aws", &request("lambda list-functions", Some("us-east-1"), None), "json");
        assert_eq!(argv[0], "aws");
    }
}
