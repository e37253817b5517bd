use std::fmt;

use rollout_core::{Clock, ImageReference, ReleaseSettings, ReleaseTag, SystemClock};
use rollout_tools::ReleaseBackend;

use crate::error::ReleaseError;
use crate::stage::{Stage, StageTracker};

/// Runs one release: resolve container → tag → build → push → patch.
///
/// Every step waits for the previous one and the first failure ends the
/// run. The container name is read once, before the build, and is not
/// re-checked before the patch.
pub struct ReleaseOrchestrator<B: ReleaseBackend, C: Clock = SystemClock> {
    settings: ReleaseSettings,
    backend: B,
    clock: C,
}

impl<B: ReleaseBackend> ReleaseOrchestrator<B> {
    pub fn new(settings: ReleaseSettings, backend: B) -> Self {
        Self::with_clock(settings, backend, SystemClock)
    }
}

impl<B: ReleaseBackend, C: Clock> ReleaseOrchestrator<B, C> {
    pub fn with_clock(settings: ReleaseSettings, backend: B, clock: C) -> Self {
        Self {
            settings,
            backend,
            clock,
        }
    }

    pub fn settings(&self) -> &ReleaseSettings {
        &self.settings
    }

    /// Execute the release, calling `progress` with every stage entered,
    /// including the final `Done` or `Failed`.
    pub async fn run<F>(&self, progress: F) -> Result<ReleaseReport, ReleaseError>
    where
        F: FnMut(Stage),
    {
        // stamped with the start instant, used once the container is known
        let tag = ReleaseTag::generate(&self.clock);
        let mut tracker = StageTracker::start(progress);

        let outcome = self.execute(tag, &mut tracker).await;
        match &outcome {
            Ok(report) => tracing::debug!(tag = %report.tag, "release complete"),
            Err(err) => {
                tracing::debug!(stage = %tracker.current(), error = %err, "release failed");
                tracker.fail();
            }
        }
        outcome
    }

    async fn execute<F: FnMut(Stage)>(
        &self,
        tag: ReleaseTag,
        tracker: &mut StageTracker<F>,
    ) -> Result<ReleaseReport, ReleaseError> {
        let deployment = self.settings.deployment_name.as_str();

        // 1. Resolve the live container name before spending time on a build
        let container = self
            .backend
            .resolve_container_name(deployment)
            .await
            .map_err(|e| ReleaseError::Resolution {
                deployment: deployment.to_owned(),
                source: e,
            })?;

        // 2-3. Compose the reference for this run's tag
        let reference = self.settings.image_reference(tag.clone());

        // 4. Build
        tracker.advance();
        self.backend
            .build(&self.settings.build, &reference)
            .await
            .map_err(|e| ReleaseError::Build {
                tag: tag.clone(),
                source: e,
            })?;

        // 5. Push
        tracker.advance();
        self.backend
            .push(&reference)
            .await
            .map_err(|e| ReleaseError::Push {
                tag: tag.clone(),
                source: e,
            })?;

        // 6. Patch
        tracker.advance();
        self.backend
            .patch_image(deployment, &container, &reference)
            .await
            .map_err(|e| ReleaseError::Patch {
                tag: tag.clone(),
                reference: reference.to_string(),
                source: e,
            })?;

        tracker.advance();
        Ok(ReleaseReport {
            tag,
            reference,
            deployment: deployment.to_owned(),
            container,
        })
    }
}

/// Outcome of a successful release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub tag: ReleaseTag,
    pub reference: ImageReference,
    pub deployment: String,
    pub container: String,
}

impl fmt::Display for ReleaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Released {tag}: deployment/{deployment} container '{container}' now uses {reference}",
            tag = self.tag,
            deployment = self.deployment,
            container = self.container,
            reference = self.reference,
        )
    }
}
