use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn rollout() -> assert_cmd::Command {
    cargo_bin_cmd!("rollout")
}

const CONFIG: &str = r#"
[image]
project = "demo"
name = "hello-world-app"

[deployment]
name = "hello-world-deployment"
"#;

fn project_with_config(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("rollout.toml"), content).unwrap();
    tmp
}

// ── Help / Version ──

#[test]
fn shows_help() {
    rollout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Build, push, and roll out a container image",
        ));
}

#[test]
fn shows_version() {
    rollout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rollout"));
}

// ── Tag Command ──

#[test]
fn tag_prints_timestamp_tag() {
    rollout()
        .arg("tag")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^v\d{8}-\d{6}\n$").unwrap());
}

// ── Init Command ──

#[test]
fn init_writes_config_template() {
    let tmp = TempDir::new().unwrap();

    rollout()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created rollout.toml"));

    let content = std::fs::read_to_string(tmp.path().join("rollout.toml")).unwrap();
    assert!(content.contains("[deployment]"));
    assert!(content.contains("linux/amd64"));
}

#[test]
fn init_fails_if_config_exists() {
    let tmp = project_with_config(CONFIG);

    rollout()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(tmp.path().join("rollout.toml")).unwrap();
    assert_eq!(content, CONFIG);
}

// ── Release Command ──

#[test]
fn dry_run_prints_plan_without_running_tools() {
    let tmp = project_with_config(CONFIG);

    rollout()
        .current_dir(tmp.path())
        .env("PATH", "")
        .args(["release", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"gcr\.io/demo/hello-world-app:v\d{8}-\d{6}").unwrap())
        .stdout(predicate::str::contains(
            "docker build --platform linux/amd64 --tag gcr.io/demo/hello-world-app:v",
        ))
        .stdout(predicate::str::contains(
            "kubectl get deployment hello-world-deployment -o json",
        ))
        .stdout(predicate::str::contains(
            "kubectl set image deployment/hello-world-deployment <container>=gcr.io/demo/hello-world-app:v",
        ));
}

#[test]
fn dry_run_applies_flag_overrides() {
    let tmp = project_with_config(CONFIG);

    rollout()
        .current_dir(tmp.path())
        .args([
            "release",
            "--dry-run",
            "--registry",
            "registry.example.com:5000",
            "--platform",
            "linux/arm64",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "registry.example.com:5000/demo/hello-world-app:v",
        ))
        .stdout(predicate::str::contains("--platform linux/arm64"));
}

#[test]
fn dry_run_reads_config_from_flag() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("deploy.toml");
    std::fs::write(&path, CONFIG).unwrap();

    rollout()
        .args(["release", "--dry-run", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello-world-deployment"));
}

#[test]
fn release_without_project_fails_before_running_tools() {
    let tmp = project_with_config(
        r#"
[image]
name = "hello-world-app"

[deployment]
name = "hello-world-deployment"
"#,
    );

    rollout()
        .current_dir(tmp.path())
        .env("PATH", "")
        .arg("release")
        .assert()
        .failure()
        .stderr(predicate::str::contains("image.project"));
}

#[test]
fn release_without_config_file_names_missing_fields() {
    let tmp = TempDir::new().unwrap();

    rollout()
        .current_dir(tmp.path())
        .args(["release", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn release_rejects_uppercase_image_name() {
    let tmp = project_with_config(CONFIG);

    rollout()
        .current_dir(tmp.path())
        .args(["release", "--dry-run", "--image", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image name"));
}

#[test]
fn release_rejects_invalid_config_file() {
    let tmp = project_with_config("[image\nproject = ");

    rollout()
        .current_dir(tmp.path())
        .args(["release", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rollout.toml"));
}

#[test]
fn release_without_docker_reports_resolution_failure() {
    let tmp = project_with_config(CONFIG);

    rollout()
        .current_dir(tmp.path())
        .env("PATH", "")
        .arg("release")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Resolving container of deployment/hello-world-deployment",
        ))
        .stdout(predicate::str::contains("Building").not())
        .stderr(predicate::str::contains("kubectl CLI not found"));
}

// ── Status Command ──

#[test]
fn status_requires_deployment_name() {
    let tmp = TempDir::new().unwrap();

    rollout()
        .current_dir(tmp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("deployment.name"));
}
