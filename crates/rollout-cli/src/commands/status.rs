use rollout_tools::ToolchainClient;
use std::path::Path;

use super::ConfigOverrides;

/// Show the deployment's containers and the images they currently run.
pub async fn status(config_path: &Path, deployment: Option<String>) -> anyhow::Result<()> {
    let config = super::load_config(
        config_path,
        ConfigOverrides {
            deployment,
            ..Default::default()
        },
    )?;
    let name = config.deployment_name()?;

    let client = ToolchainClient::new();
    let manifest = client.get_deployment(name).await?;

    let namespace = manifest.metadata.namespace.as_deref().unwrap_or("default");
    let status = &manifest.status;
    let desired = manifest.spec.replicas.unwrap_or(status.replicas);

    println!("deployment/{} (namespace {namespace})", manifest.metadata.name);
    println!(
        "  replicas: {ready}/{desired} ready, {updated} updated, {available} available",
        ready = status.ready_replicas,
        updated = status.updated_replicas,
        available = status.available_replicas,
    );
    println!("  containers:");
    for container in manifest.containers() {
        println!(
            "    {name:<24} {image}",
            name = container.name,
            image = container.image.as_deref().unwrap_or("(no image)"),
        );
    }

    Ok(())
}
