//! Release sequencing for rollout.
//!
//! ```text
//! rollout release
//!   1. Resolve    ── kubectl get deployment <name> -o json (first container)
//!   2. Tag        ── v<YYYYMMDD>-<HHMMSS> from the run's start time
//!   3. Reference  ── <registry>/<project>/<image>:<tag>
//!   4. Build      ── docker build --platform <platform> --tag <reference>
//!   5. Push       ── docker push <reference>
//!   6. Patch      ── kubectl set image deployment/<name> <container>=<reference>
//! ```
//!
//! The first failing step ends the run. There is no retry and no cleanup:
//! an image that was pushed but never patched in stays in the registry.

pub mod error;
pub mod orchestrator;
pub mod stage;

pub use error::ReleaseError;
pub use orchestrator::{ReleaseOrchestrator, ReleaseReport};
pub use stage::Stage;
