//! API Gateway swagger export CLI
//!
//! Command-line interface for downloading the deployed swagger export of an
//! API Gateway stage and stamping the configured version into it.

use anyhow::{Context, Result};
use apigw_swagger_export_common::ProjectConfig;
use apigw_swagger_export_download::{resolve_api_id, DocumentationDownloader, DownloadOptions};
use apigw_swagger_export_provider::AwsCliClient;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "apigw-swagger-export")]
#[command(version, about = "Download the deployed swagger export of an API Gateway stage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the swagger export and write it to a file
    #[command(after_help = "EXAMPLES:\n  \
        # Download the export as JSON\n  \
        apigw-swagger-export download --output api.json\n\n  \
        # Download as YAML and stamp the configured version\n  \
        apigw-swagger-export download --output api.yaml --fix-version\n\n  \
        # Include postman extensions for a specific stage\n  \
        apigw-swagger-export download \\\n    \
        --output api.json \\\n    \
        --extensions postman \\\n    \
        --stage prod")]
    Download {
        /// Path to the project configuration file
        #[arg(short, long, default_value = "serverless.yml")]
        config: PathBuf,

        /// Path the export is written to; the extension selects JSON or YAML
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite info.version with the configured documentation version
        #[arg(long)]
        fix_version: bool,

        /// Export extensions variant (integrations, apigateway, authorizers, postman)
        #[arg(long)]
        extensions: Option<String>,

        /// Override the deployment stage from the config file
        #[arg(long)]
        stage: Option<String>,

        /// Override the region from the config file
        #[arg(long)]
        region: Option<String>,

        /// Named profile forwarded to the aws CLI
        #[arg(long)]
        profile: Option<String>,
    },

    /// Resolve and print the documentation API id of the deployed stack
    #[command(after_help = "EXAMPLES:\n  \
        # Print the API id for the configured stage\n  \
        apigw-swagger-export api-id\n\n  \
        # Print the API id for another stage\n  \
        apigw-swagger-export api-id --stage prod")]
    ApiId {
        /// Path to the project configuration file
        #[arg(short, long, default_value = "serverless.yml")]
        config: PathBuf,

        /// Override the deployment stage from the config file
        #[arg(long)]
        stage: Option<String>,

        /// Override the region from the config file
        #[arg(long)]
        region: Option<String>,

        /// Named profile forwarded to the aws CLI
        #[arg(long)]
        profile: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Download {
            config,
            output,
            fix_version,
            extensions,
            stage,
            region,
            profile,
        } => {
            download_command(DownloadArgs {
                config_path: &config,
                output,
                fix_version,
                extensions,
                stage,
                region,
                profile,
                verbose: cli.verbose,
            })
            .await?;
        }
        Commands::ApiId {
            config,
            stage,
            region,
            profile,
        } => {
            api_id_command(&config, stage, region, profile, cli.verbose).await?;
        }
    }

    Ok(())
}

fn load_project(
    config_path: &Path,
    stage: Option<String>,
    region: Option<String>,
) -> Result<ProjectConfig> {
    let mut project = ProjectConfig::load(config_path)
        .with_context(|| format!("Failed to load project config {}", config_path.display()))?;

    if let Some(stage) = stage {
        project.provider.stage = stage;
    }
    if let Some(region) = region {
        project.provider.region = region;
    }

    Ok(project)
}

fn provider_client(project: &ProjectConfig, profile: Option<String>) -> AwsCliClient {
    let client = AwsCliClient::new(project.provider.region.clone());
    match profile {
        Some(profile) => client.with_profile(profile),
        None => client,
    }
}

/// Arguments for the download command
struct DownloadArgs<'a> {
    config_path: &'a Path,
    output: PathBuf,
    fix_version: bool,
    extensions: Option<String>,
    stage: Option<String>,
    region: Option<String>,
    profile: Option<String>,
    verbose: bool,
}

async fn download_command(args: DownloadArgs<'_>) -> Result<()> {
    println!(
        "{} Loading project config: {}",
        "→".cyan(),
        args.config_path.display()
    );
    let project = load_project(args.config_path, args.stage, args.region)?;

    if args.verbose {
        println!("  Service: {}", project.service);
        println!("  Stage: {}", project.provider.stage);
        println!("  Region: {}", project.provider.region);
        println!("  Stack: {}", project.stack_name());
    }

    let client = provider_client(&project, args.profile);
    let downloader = DocumentationDownloader::new(&client, &client);
    let options = DownloadOptions {
        output_file: args.output,
        fix_version: args.fix_version,
        extensions: args.extensions,
    };

    println!(
        "{} Downloading swagger export for stage {}",
        "→".cyan(),
        project.provider.stage.yellow()
    );

    match downloader.run(&project, &options).await {
        Ok(report) => {
            println!("\n{}", "✓ Download complete!".green().bold());
            println!("  API id: {}", report.rest_api_id.yellow());
            println!("  Content type: {}", report.content_type);
            println!("  Extensions: {}", report.extensions);
            if report.patched {
                println!("  Version: {}", "stamped from project config".yellow());
            }
            println!(
                "  Wrote {} bytes to {}",
                report.bytes_written,
                options.output_file.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} download-documentation - {}", "✗".red(), e);
            std::process::exit(1);
        }
    }
}

async fn api_id_command(
    config_path: &Path,
    stage: Option<String>,
    region: Option<String>,
    profile: Option<String>,
    verbose: bool,
) -> Result<()> {
    let project = load_project(config_path, stage, region)?;
    let stack_name = project.stack_name();

    if verbose {
        println!("  Stack: {}", stack_name);
        println!("  Region: {}", project.provider.region);
    }

    let client = provider_client(&project, profile);
    match resolve_api_id(&client, &stack_name).await {
        Ok(Some(api_id)) => {
            println!("{}", api_id);
            Ok(())
        }
        Ok(None) => {
            eprintln!(
                "{} no AwsDocApiId output found on stack {}",
                "✗".red(),
                stack_name
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} api-id - {}", "✗".red(), e);
            std::process::exit(1);
        }
    }
}
