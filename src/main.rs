// AWS CLI Gateway - Main Entry Point
//
// CLI and MCP stdio server. All tool calls route through the gateway.
// Usage:
//   aws-cli-gateway serve                         # Run MCP server (stdio)
//   aws-cli-gateway check <command>               # One-shot classification
//   aws-cli-gateway run <command> [opts]          # One-shot gated execution
//   aws-cli-gateway examples                      # Print example commands

use anyhow::Result;
use aws_cli_gateway::{config::GatewayConfig, dispatch, exec::ProcessRunner, mcp, policy};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aws-cli-gateway")]
#[command(version)]
#[command(about = "Guarded AWS CLI command gateway — destructive operations blocked by denylist")]
struct Cli {
    /// Optional config file (JSON); defaults used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run MCP server (stdio JSON-RPC)
    Serve,

    /// One-shot classification — prints the verdict, exits 1 on block
    Check {
        /// AWS CLI command text (without the 'aws' prefix)
        command: String,
    },

    /// One-shot gated execution through the full pipeline
    Run {
        /// AWS CLI command text (without the 'aws' prefix)
        command: String,

        /// AWS region
        #[arg(short, long)]
        region: Option<String>,

        /// AWS profile
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Print example safe and blocked commands
    Examples,
}

fn main() -> Result<()> {
    // Initialize logging (safe if already init)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GatewayConfig::load(path)?,
        None => GatewayConfig::default(),
    };

    match &cli.command {
        Commands::Serve => {
            // Blocks until stdin closes
            mcp::run(config);
        }

        Commands::Check { command } => {
            let verdict = policy::classify(command, &config.denylist);
            println!("{}", serde_json::to_string_pretty(&verdict)?);

            if !verdict.is_allowed() {
                std::process::exit(1);
            }
        }

        Commands::Run { command, region, profile } => {
            let args = json!({
                "command": command,
                "region": region,
                "profile": profile,
            });
            let text = dispatch::dispatch("aws_cli", &args, &config, &ProcessRunner);
            println!("{}", text);

            if text.starts_with("Error") || text.starts_with("Dangerous command blocked") {
                std::process::exit(1);
            }
        }

        Commands::Examples => {
            print_examples(&config);
        }
    }

    Ok(())
}

/// Example catalog — safe commands that pass the gate and destructive
/// ones the denylist refuses
fn print_examples(config: &GatewayConfig) {
    let safe = [
        ("List S3 buckets", "s3api list-buckets"),
        ("List EC2 instances", "ec2 describe-instances"),
        ("Get account info", "sts get-caller-identity"),
        ("List IAM users", "iam list-users"),
        ("List Lambda functions", "lambda list-functions"),
        ("List RDS instances", "rds describe-db-instances"),
        ("List VPCs", "ec2 describe-vpcs"),
    ];
    let blocked = [
        ("Delete S3 bucket", "s3api delete-bucket --bucket my-bucket"),
        ("Terminate EC2 instance", "ec2 terminate-instances --instance-ids i-123"),
        ("Delete IAM user", "iam delete-user --user-name my-user"),
    ];

    println!("AWS CLI Gateway - Example Commands");
    println!();
    println!("SAFE (these will execute):");
    for (name, command) in safe {
        println!("  {:<25} {} {}", name, config.binary, command);
    }
    println!();
    println!("BLOCKED (denylist match, refused before execution):");
    for (name, command) in blocked {
        println!("  {:<25} {} {}", name, config.binary, command);
    }
    println!();
    println!("Notes:");
    println!("  - --output {} is appended when the command names no output format", config.default_output_format);
    println!("  - Denylist tokens: {}", config.denylist.join(", "));
    println!("  - Credentials come from the AWS CLI's own config/environment");
}
