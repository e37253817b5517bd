pub mod backend;
pub mod client;
pub mod doctor;
pub mod executor;
pub mod kube;
pub mod tool;

pub use backend::ReleaseBackend;
pub use client::{
    BuildError, PatchError, PushError, ResolutionError, ToolchainClient, build_args,
    get_deployment_args, patch_args, push_args,
};
pub use doctor::{CheckResult, DoctorReport};
pub use executor::{CommandExecutor, RealExecutor};
pub use kube::Deployment;
pub use tool::{Tool, ToolError, render_command};
