//! env-drift binary
//!
//! Compares an env file between two references of a GitHub repository and
//! reports added, removed, and modified variables as markdown. Runs either
//! as a plain CLI or as a GitHub Actions step; under Actions the inputs
//! come from `INPUT_*` variables and results are also written as step
//! outputs.

use anyhow::Context;
use clap::Parser;
use env_drift_config as config;
use env_drift_github::OctocrabRepoClient;
use env_drift_report::render_markdown;
use log::info;

mod args;
mod compare;
mod outputs;

use args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let in_actions = config::is_github_actions();
    let (request, header, quiet_when_clean) = if in_actions {
        (config::request_from_actions()?, None, false)
    } else {
        let args = Args::parse();
        let request = args.to_request()?;
        (request, args.header, args.quiet_when_clean)
    };

    info!("Repository: {}", request.slug);
    info!("Compare file: {}", request.file_path);
    info!("Comparing {}...{}", request.base_ref, request.head_ref);

    let token = if in_actions { config::token_input() } else { None };
    let token = match token {
        Some(token) => token,
        None => config::resolve_token().await?,
    };
    let client = OctocrabRepoClient::from_token(token)?;

    let changes = compare::compare(&client, &request).await?;
    let report = render_markdown(&changes, header.as_deref(), quiet_when_clean);

    if !report.is_empty() {
        print!("{}", report);
    }

    if in_actions {
        outputs::write_step_outputs(changes.has_changes(), &report)
            .context("failed to write step outputs")?;
    }

    Ok(())
}
