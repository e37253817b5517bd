use rollout_core::{ReleaseTag, SystemClock};

pub fn tag() -> anyhow::Result<()> {
    println!("{}", ReleaseTag::generate(&SystemClock));
    Ok(())
}
