use crate::doctor::{CheckResult, DoctorReport};
use crate::executor::{CommandExecutor, RealExecutor};
use crate::kube::Deployment;
use crate::tool::{Tool, ToolError};
use rollout_core::{BuildPlan, ImageReference};
use std::path::PathBuf;

/// docker / kubectl operations client, parameterized over the executor for testability.
pub struct ToolchainClient<E: CommandExecutor = RealExecutor> {
    executor: E,
}

impl ToolchainClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for ToolchainClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> ToolchainClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Cluster reads ──

    pub async fn get_deployment(&self, deployment: &str) -> Result<Deployment, ResolutionError> {
        let output = self
            .executor
            .exec(Tool::Kubectl, &get_deployment_args(deployment))
            .await
            .map_err(|e| ResolutionError::Lookup {
                deployment: deployment.to_owned(),
                source: e,
            })?;

        serde_json::from_str(&output).map_err(|e| ResolutionError::Decode {
            deployment: deployment.to_owned(),
            source: e,
        })
    }

    /// Name of the first container in the deployment's pod template.
    pub async fn resolve_container_name(&self, deployment: &str) -> Result<String, ResolutionError> {
        let manifest = self.get_deployment(deployment).await?;

        if manifest.containers().is_empty() {
            return Err(ResolutionError::NoContainers {
                deployment: deployment.to_owned(),
            });
        }

        let name = manifest
            .first_container_name()
            .ok_or_else(|| ResolutionError::UnnamedContainer {
                deployment: deployment.to_owned(),
            })?;

        tracing::debug!(deployment, container = name, "resolved container");
        Ok(name.to_owned())
    }

    pub async fn current_context(&self) -> Result<String, ToolError> {
        let output = self
            .executor
            .exec(Tool::Kubectl, &args(["config", "current-context"]))
            .await?;
        Ok(output.trim().to_owned())
    }

    // ── Image ──

    pub async fn build(&self, plan: &BuildPlan, reference: &ImageReference) -> Result<(), BuildError> {
        let cmd = build_args(plan, reference)?;

        self.executor
            .exec_streaming(Tool::Docker, &cmd)
            .await
            .map_err(|e| BuildError::Build {
                reference: reference.to_string(),
                source: e,
            })
    }

    pub async fn push(&self, reference: &ImageReference) -> Result<(), PushError> {
        self.executor
            .exec_streaming(Tool::Docker, &push_args(reference))
            .await
            .map_err(|e| PushError::Push {
                reference: reference.to_string(),
                source: e,
            })
    }

    // ── Rollout ──

    pub async fn patch_image(
        &self,
        deployment: &str,
        container: &str,
        reference: &ImageReference,
    ) -> Result<(), PatchError> {
        let output = self
            .executor
            .exec(Tool::Kubectl, &patch_args(deployment, container, reference))
            .await
            .map_err(|e| PatchError::Patch {
                deployment: deployment.to_owned(),
                container: container.to_owned(),
                source: e,
            })?;

        tracing::debug!(output = output.trim(), "kubectl set image");
        Ok(())
    }

    // ── Doctor ──

    /// Run all diagnostic checks without early return.
    /// Returns a report with pass/fail for each check item.
    pub async fn doctor(&self, deployment: Option<&str>) -> DoctorReport {
        let mut report = DoctorReport::default();

        // 1. docker CLI
        report.docker = match self
            .executor
            .exec(
                Tool::Docker,
                &args(["version", "--format", "{{.Client.Version}}"]),
            )
            .await
        {
            Ok(v) if !v.trim().is_empty() => CheckResult::ok(v.trim()),
            Ok(_) => CheckResult::fail("docker reported no client version"),
            Err(e) => CheckResult::fail(&e.to_string()),
        };

        // 2. kubectl CLI
        report.kubectl = match self
            .executor
            .exec(Tool::Kubectl, &args(["version", "--client", "-o", "json"]))
            .await
        {
            Ok(out) => kubectl_version_check(&out),
            Err(e) => CheckResult::fail(&e.to_string()),
        };

        // 3. Current cluster context
        report.context = match self.current_context().await {
            Ok(ctx) if !ctx.is_empty() => CheckResult::ok(&ctx),
            Ok(_) => CheckResult::fail("no current kubectl context"),
            Err(e) => CheckResult::fail(&e.to_string()),
        };

        // 4. Target deployment
        report.deployment = match deployment {
            None => CheckResult::fail("deployment.name not set in rollout.toml"),
            Some(name) => match self.resolve_container_name(name).await {
                Ok(container) => CheckResult::ok(&format!("{name} (container {container})")),
                Err(e) => CheckResult::fail(&error_chain(&e)),
            },
        };

        for (label, check) in report.checks() {
            if !check.passed {
                tracing::warn!(check = label, detail = %check.detail, "doctor check failed");
            }
        }

        report
    }
}

// ── Command lines ──

pub fn get_deployment_args(deployment: &str) -> Vec<String> {
    args(["get", "deployment", deployment, "-o", "json"])
}

pub fn build_args(plan: &BuildPlan, reference: &ImageReference) -> Result<Vec<String>, BuildError> {
    let context = plan
        .context
        .to_str()
        .ok_or_else(|| BuildError::InvalidPath(plan.context.clone()))?;
    let image = reference.to_string();

    let mut cmd = args(["build", "--platform", &plan.platform, "--tag", &image]);

    if let Some(dockerfile) = &plan.dockerfile {
        let dockerfile = dockerfile
            .to_str()
            .ok_or_else(|| BuildError::InvalidPath(dockerfile.clone()))?;
        cmd.push("--file".to_owned());
        cmd.push(dockerfile.to_owned());
    }

    cmd.push(context.to_owned());
    Ok(cmd)
}

pub fn push_args(reference: &ImageReference) -> Vec<String> {
    vec!["push".to_owned(), reference.to_string()]
}

pub fn patch_args(deployment: &str, container: &str, reference: &ImageReference) -> Vec<String> {
    vec![
        "set".to_owned(),
        "image".to_owned(),
        format!("deployment/{deployment}"),
        format!("{container}={reference}"),
    ]
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

fn kubectl_version_check(json: &str) -> CheckResult {
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(value) => match value
            .pointer("/clientVersion/gitVersion")
            .and_then(serde_json::Value::as_str)
        {
            Some(version) => CheckResult::ok(version),
            None => CheckResult::fail("kubectl reported no client version"),
        },
        Err(e) => CheckResult::fail(&format!("unreadable kubectl version output: {e}")),
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("failed to read deployment '{deployment}'")]
    Lookup {
        deployment: String,
        source: ToolError,
    },

    #[error("deployment '{deployment}' returned unreadable JSON")]
    Decode {
        deployment: String,
        source: serde_json::Error,
    },

    #[error("deployment '{deployment}' has no containers in its pod template")]
    NoContainers { deployment: String },

    #[error("first container of deployment '{deployment}' has no name")]
    UnnamedContainer { deployment: String },
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("build path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),

    #[error("docker build of {reference} failed")]
    Build { reference: String, source: ToolError },
}

#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("docker push of {reference} failed")]
    Push { reference: String, source: ToolError },
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("setting image of container '{container}' in deployment '{deployment}' failed")]
    Patch {
        deployment: String,
        container: String,
        source: ToolError,
    },
}
