//! Core types and configuration for rollout.
//!
//! This crate defines the `rollout.toml` schema ([`RolloutConfig`]), the
//! validated settings a release runs with ([`ReleaseSettings`]), release
//! tagging ([`ReleaseTag`]), and shared error types.

pub mod clock;
pub mod config;
pub mod error;
pub mod image;
pub mod tag;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    BuildConfig, BuildPlan, CONFIG_FILE, DeploymentConfig, ImageConfig, ReleaseSettings,
    RolloutConfig,
};
pub use error::{Error, Result};
pub use image::ImageReference;
pub use tag::ReleaseTag;
