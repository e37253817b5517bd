use rollout_tools::{CheckResult, ToolchainClient};
use std::path::Path;

use super::ConfigOverrides;

pub async fn doctor(config_path: &Path, deployment: Option<String>) -> anyhow::Result<()> {
    let config = super::load_config(
        config_path,
        ConfigOverrides {
            deployment,
            ..Default::default()
        },
    );
    let deployment = match &config {
        Ok(c) => c.deployment.name.as_deref(),
        Err(e) => {
            tracing::warn!(error = %e, "config not usable, checking tools only");
            None
        }
    };

    let client = ToolchainClient::new();
    let mut report = client.doctor(deployment).await;

    // Config file check
    report.config_file = match (&config, config_path.exists()) {
        (Ok(_), true) => CheckResult::ok(&format!("Found {}", config_path.display())),
        (Ok(_), false) => CheckResult::fail(&format!("{} not found", config_path.display())),
        (Err(e), _) => CheckResult::fail(&format!("{e:#}")),
    };

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}
