use std::path::Path;

const TEMPLATE: &str = r#"[image]
# registry = "gcr.io"
project = "your-project-id"
name = "your-image"

[build]
# context = "."
# dockerfile = "Dockerfile"
# platform = "linux/amd64"

[deployment]
name = "your-deployment"
"#;

/// Write a commented rollout.toml template.
pub fn init(config_path: &Path) -> anyhow::Result<()> {
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists — edit it directly or delete it to re-initialize",
            config_path.display()
        );
    }

    std::fs::write(config_path, TEMPLATE)?;

    println!("Created {}", config_path.display());
    println!();
    println!("Next steps:");
    println!();
    println!("  1. Set image.project, image.name and deployment.name");
    println!("  2. Check your tools and cluster:");
    println!("     rollout doctor");
    println!("  3. Release:");
    println!("     rollout release");

    Ok(())
}
