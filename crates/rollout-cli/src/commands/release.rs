use rollout_core::{ReleaseSettings, ReleaseTag, SystemClock};
use rollout_release::{ReleaseOrchestrator, Stage};
use rollout_tools::{Tool, ToolchainClient};
use std::path::Path;

use super::ConfigOverrides;

/// Execute the full release: resolve → tag → build → push → patch.
pub async fn release(
    config_path: &Path,
    overrides: ConfigOverrides,
    dry_run: bool,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path, overrides)?;
    let settings = config.resolve()?;

    if dry_run {
        return print_plan(&settings);
    }

    let orchestrator = ReleaseOrchestrator::new(settings, ToolchainClient::new());
    let settings = orchestrator.settings();

    let report = orchestrator
        .run(|stage| match stage {
            Stage::ResolvingContainer => println!(
                "Resolving container of deployment/{}...",
                settings.deployment_name
            ),
            Stage::Building => println!("Building image for {}...", settings.build.platform),
            Stage::Pushing => println!("Pushing image to {}...", settings.registry),
            Stage::Patching => println!("Updating deployment/{}...", settings.deployment_name),
            Stage::Done | Stage::Failed => {}
        })
        .await?;

    println!();
    println!("{report}");

    Ok(())
}

fn print_plan(settings: &ReleaseSettings) -> anyhow::Result<()> {
    let tag = ReleaseTag::generate(&SystemClock);
    let reference = settings.image_reference(tag.clone());
    let deployment = settings.deployment_name.as_str();

    let build = rollout_tools::build_args(&settings.build, &reference)?;
    let commands = [
        rollout_tools::render_command(Tool::Kubectl, &rollout_tools::get_deployment_args(deployment)),
        rollout_tools::render_command(Tool::Docker, &build),
        rollout_tools::render_command(Tool::Docker, &rollout_tools::push_args(&reference)),
        rollout_tools::render_command(
            Tool::Kubectl,
            &rollout_tools::patch_args(deployment, "<container>", &reference),
        ),
    ];

    println!("Release plan (dry run, nothing executed)");
    println!("  tag:        {tag}");
    println!("  image:      {reference}");
    println!("  platform:   {}", settings.build.platform);
    println!("  deployment: {deployment}");
    println!();
    for (i, cmd) in commands.iter().enumerate() {
        println!("  {}. {cmd}", i + 1);
    }

    Ok(())
}
