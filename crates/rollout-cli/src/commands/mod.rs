mod doctor;
mod init;
mod release;
mod status;
mod tag;

use rollout_core::RolloutConfig;
use std::path::{Path, PathBuf};

pub use doctor::doctor;
pub use init::init;
pub use release::release;
pub use status::status;
pub use tag::tag;

/// Command-line values that take precedence over rollout.toml.
#[derive(Debug, Default, clap::Args)]
pub struct ConfigOverrides {
    /// Registry host (overrides image.registry)
    #[arg(long)]
    pub registry: Option<String>,
    /// Registry project (overrides image.project)
    #[arg(long)]
    pub project: Option<String>,
    /// Image name (overrides image.name)
    #[arg(long)]
    pub image: Option<String>,
    /// Deployment name (overrides deployment.name)
    #[arg(long)]
    pub deployment: Option<String>,
    /// Target platform, e.g. linux/amd64 (overrides build.platform)
    #[arg(long)]
    pub platform: Option<String>,
    /// Build context directory (overrides build.context)
    #[arg(long)]
    pub context: Option<PathBuf>,
    /// Dockerfile path (overrides build.dockerfile)
    #[arg(long)]
    pub dockerfile: Option<PathBuf>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut RolloutConfig) {
        if let Some(registry) = self.registry {
            config.image.registry = registry;
        }
        if self.project.is_some() {
            config.image.project = self.project;
        }
        if self.image.is_some() {
            config.image.name = self.image;
        }
        if self.deployment.is_some() {
            config.deployment.name = self.deployment;
        }
        if let Some(platform) = self.platform {
            config.build.platform = platform;
        }
        if let Some(context) = self.context {
            config.build.context = context;
        }
        if self.dockerfile.is_some() {
            config.build.dockerfile = self.dockerfile;
        }
    }
}

/// Load the config file and layer command-line overrides on top.
pub(crate) fn load_config(
    config_path: &Path,
    overrides: ConfigOverrides,
) -> anyhow::Result<RolloutConfig> {
    let mut config = RolloutConfig::load(config_path)?;
    overrides.apply(&mut config);
    Ok(config)
}
