use crate::client::{BuildError, PatchError, PushError, ResolutionError, ToolchainClient};
use crate::executor::CommandExecutor;
use rollout_core::{BuildPlan, ImageReference};

/// The four external capabilities a release needs.
///
/// [`ToolchainClient`] implements this by shelling out to `docker` and
/// `kubectl`; release tests substitute a mock.
#[allow(async_fn_in_trait)]
pub trait ReleaseBackend: Send + Sync {
    async fn resolve_container_name(&self, deployment: &str) -> Result<String, ResolutionError>;

    async fn build(&self, plan: &BuildPlan, reference: &ImageReference) -> Result<(), BuildError>;

    async fn push(&self, reference: &ImageReference) -> Result<(), PushError>;

    async fn patch_image(
        &self,
        deployment: &str,
        container: &str,
        reference: &ImageReference,
    ) -> Result<(), PatchError>;
}

impl<E: CommandExecutor> ReleaseBackend for ToolchainClient<E> {
    async fn resolve_container_name(&self, deployment: &str) -> Result<String, ResolutionError> {
        ToolchainClient::resolve_container_name(self, deployment).await
    }

    async fn build(&self, plan: &BuildPlan, reference: &ImageReference) -> Result<(), BuildError> {
        ToolchainClient::build(self, plan, reference).await
    }

    async fn push(&self, reference: &ImageReference) -> Result<(), PushError> {
        ToolchainClient::push(self, reference).await
    }

    async fn patch_image(
        &self,
        deployment: &str,
        container: &str,
        reference: &ImageReference,
    ) -> Result<(), PatchError> {
        ToolchainClient::patch_image(self, deployment, container, reference).await
    }
}
