use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::image::ImageReference;
use crate::tag::ReleaseTag;
use crate::validate;
use crate::{Error, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "rollout.toml";

/// rollout.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolloutConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub deployment: DeploymentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Registry host (defaults to gcr.io)
    #[serde(default = "default_registry")]
    pub registry: String,
    /// Project / namespace inside the registry
    pub project: Option<String>,
    /// Image name
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Build context directory
    #[serde(default = "default_context")]
    pub context: PathBuf,
    /// Dockerfile path; the build engine's default when unset
    #[serde(default)]
    pub dockerfile: Option<PathBuf>,
    /// Target platform the image is built for, independent of the host
    #[serde(default = "default_platform")]
    pub platform: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Deployment whose container image is replaced
    pub name: Option<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            project: None,
            name: None,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            context: default_context(),
            dockerfile: None,
            platform: default_platform(),
        }
    }
}

impl RolloutConfig {
    /// Load from the given file, or return defaults if it does not exist.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path).map_err(|e| Error::ConfigLoad {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    /// The validated deployment name, for commands that only read the cluster.
    pub fn deployment_name(&self) -> Result<&str> {
        let deployment = require(
            &self.deployment.name,
            "deployment name",
            "deployment.name",
            "deployment",
        )?;
        check(
            "deployment name",
            deployment,
            validate::is_dns_subdomain(deployment),
            "expected a lowercase RFC 1123 name of at most 253 characters",
        )?;
        Ok(deployment)
    }

    /// Validate every field and produce the settings a release runs with.
    pub fn resolve(&self) -> Result<ReleaseSettings> {
        let registry = self.image.registry.trim();
        check(
            "registry",
            registry,
            validate::is_registry(registry),
            "expected a lowercase host[:port][/path]",
        )?;

        let project = require(&self.image.project, "project", "image.project", "project")?;
        check(
            "project",
            project,
            validate::is_path_component(project),
            "expected lowercase letters, digits, and single . _ - separators",
        )?;

        let image = require(&self.image.name, "image name", "image.name", "image")?;
        check(
            "image name",
            image,
            validate::is_repository_path(image),
            "expected lowercase path components separated by /",
        )?;

        let deployment = self.deployment_name()?;

        let platform = self.build.platform.trim();
        check(
            "platform",
            platform,
            validate::is_platform(platform),
            "expected os/arch[/variant], e.g. linux/amd64",
        )?;

        if self.build.context.as_os_str().is_empty() {
            return Err(Error::InvalidField {
                field: "build context",
                value: String::new(),
                reason: "must not be empty",
            });
        }

        Ok(ReleaseSettings {
            registry: registry.to_owned(),
            project: project.to_owned(),
            image: image.to_owned(),
            deployment_name: deployment.to_owned(),
            build: BuildPlan {
                context: self.build.context.clone(),
                dockerfile: self.build.dockerfile.clone(),
                platform: platform.to_owned(),
            },
        })
    }
}

/// Validated release configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSettings {
    pub registry: String,
    pub project: String,
    pub image: String,
    pub deployment_name: String,
    pub build: BuildPlan,
}

impl ReleaseSettings {
    pub fn image_reference(&self, tag: ReleaseTag) -> ImageReference {
        ImageReference::new(&self.registry, &self.project, &self.image, tag)
    }
}

/// What the build engine is asked to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub context: PathBuf,
    pub dockerfile: Option<PathBuf>,
    pub platform: String,
}

fn require<'a>(
    value: &'a Option<String>,
    field: &'static str,
    key: &'static str,
    flag: &'static str,
) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingField { field, key, flag }),
    }
}

fn check(field: &'static str, value: &str, valid: bool, reason: &'static str) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidField {
            field,
            value: value.to_owned(),
            reason,
        })
    }
}

fn default_registry() -> String {
    "gcr.io".to_owned()
}

fn default_context() -> PathBuf {
    PathBuf::from(".")
}

fn default_platform() -> String {
    "linux/amd64".to_owned()
}
