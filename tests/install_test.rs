#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_dir, write_file, write_sample_bundle};
use promptpack::{
    check_install, install_bundle, load_bundle, read_manifest, CheckError, InstallError,
    InstallState,
};
use tokio::fs;

#[tokio::test]
async fn test_install_then_check_is_clean() {
    let source = create_test_dir();
    let target = create_test_dir();
    write_sample_bundle(source.path()).await;

    let result = install_bundle(source.path(), target.path())
        .await
        .expect("Should install");
    assert_eq!(result.installed.len(), 5);

    let status = check_install(target.path()).await.expect("Should check");
    assert!(status.is_clean());
}

#[tokio::test]
async fn test_installed_bundle_loads_back() {
    let source = create_test_dir();
    let target = create_test_dir();
    write_sample_bundle(source.path()).await;

    install_bundle(source.path(), target.path())
        .await
        .expect("Should install");

    let load = load_bundle(target.path()).await.expect("Should load");
    assert!(load.is_clean());
    assert_eq!(load.bundle.artifact_count(), 5);
}

#[tokio::test]
async fn test_install_writes_manifest_with_digests() {
    let source = create_test_dir();
    let target = create_test_dir();
    write_sample_bundle(source.path()).await;

    install_bundle(source.path(), target.path())
        .await
        .expect("Should install");

    let manifest = read_manifest(target.path())
        .await
        .expect("Should read")
        .expect("Manifest should exist");
    assert_eq!(manifest.schema_version, 1);
    assert_eq!(manifest.files.len(), 5);
    for digest in manifest.files.values() {
        assert_eq!(digest.len(), 64, "digests should be SHA-256 hex");
    }
}

#[tokio::test]
async fn test_install_refuses_bundle_with_diagnostics() {
    let source = create_test_dir();
    let target = create_test_dir();
    write_sample_bundle(source.path()).await;
    write_file(
        &source.path().join("ISSUE_TEMPLATE/broken.yml"),
        "name: Broken\ndescription: Markdown with validations\nbody:\n  - type: markdown\n    attributes:\n      value: Hello\n    validations:\n      required: true\n",
    )
    .await;

    let result = install_bundle(source.path(), target.path()).await;
    assert!(matches!(result, Err(InstallError::InvalidBundle(1))));

    // Nothing was copied
    assert!(read_manifest(target.path()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_check_reports_downstream_edits() {
    let source = create_test_dir();
    let target = create_test_dir();
    write_sample_bundle(source.path()).await;
    install_bundle(source.path(), target.path())
        .await
        .expect("Should install");

    fs::write(
        target.path().join("instructions/rust.instructions.md"),
        "---\ndescription: Edited\n---\n\nLocal change.",
    )
    .await
    .unwrap();
    fs::remove_file(target.path().join("prompts/review.prompt.md"))
        .await
        .unwrap();

    let status = check_install(target.path()).await.expect("Should check");
    assert!(!status.is_clean());

    let modified: Vec<&str> = status
        .checks
        .iter()
        .filter(|check| check.state == InstallState::Modified)
        .map(|check| check.path.as_str())
        .collect();
    assert_eq!(modified, ["instructions/rust.instructions.md"]);

    let missing: Vec<&str> = status
        .checks
        .iter()
        .filter(|check| check.state == InstallState::Missing)
        .map(|check| check.path.as_str())
        .collect();
    assert_eq!(missing, ["prompts/review.prompt.md"]);
}

#[tokio::test]
async fn test_check_without_install_errors() {
    let target = create_test_dir();

    let result = check_install(target.path()).await;
    assert!(matches!(result, Err(CheckError::NotInstalled(_))));
}
