use rollout_core::ReleaseTag;
use rollout_tools::{BuildError, PatchError, PushError, ResolutionError};

use crate::stage::Stage;

/// First failure of a release run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("could not resolve the container of deployment '{deployment}'; nothing was built")]
    Resolution {
        deployment: String,
        source: ResolutionError,
    },

    #[error("release {tag} failed while building; nothing was pushed")]
    Build { tag: ReleaseTag, source: BuildError },

    #[error("release {tag} failed while pushing; the deployment was not changed")]
    Push { tag: ReleaseTag, source: PushError },

    #[error("release {tag} failed while patching; {reference} is pushed but not deployed")]
    Patch {
        tag: ReleaseTag,
        reference: String,
        source: PatchError,
    },
}

impl ReleaseError {
    /// The stage the run was in when it failed.
    pub fn stage(&self) -> Stage {
        match self {
            ReleaseError::Resolution { .. } => Stage::ResolvingContainer,
            ReleaseError::Build { .. } => Stage::Building,
            ReleaseError::Push { .. } => Stage::Pushing,
            ReleaseError::Patch { .. } => Stage::Patching,
        }
    }

    /// Tag of the failed run; resolution fails before a tag exists.
    pub fn tag(&self) -> Option<&ReleaseTag> {
        match self {
            ReleaseError::Resolution { .. } => None,
            ReleaseError::Build { tag, .. }
            | ReleaseError::Push { tag, .. }
            | ReleaseError::Patch { tag, .. } => Some(tag),
        }
    }
}
