//! Common test utilities

use std::path::Path;
use tempfile::TempDir;

/// The feature-request template exercised by the validator tests
#[allow(dead_code)] // Not every test binary exercises the fixture directly
pub const FEATURE_REQUEST_YML: &str = r#"name: Feature Request
description: Suggest an idea for this project
title: "[Feature]: "
labels:
  - enhancement
  - triage
body:
  - type: markdown
    attributes:
      value: Thanks for taking the time to suggest a feature!
  - type: textarea
    id: feature-description
    attributes:
      label: Feature Description
      description: A clear and concise description of the feature.
    validations:
      required: true
  - type: textarea
    id: problem-statement
    attributes:
      label: Problem Statement
      description: What problem does this feature solve?
    validations:
      required: true
  - type: textarea
    id: proposed-solution
    attributes:
      label: Proposed Solution
  - type: textarea
    id: alternatives
    attributes:
      label: Alternatives Considered
  - type: dropdown
    id: priority
    attributes:
      label: Priority
      options:
        - Low
        - Medium
        - High
  - type: dropdown
    id: component
    attributes:
      label: Component
      options:
        - API
        - UI
        - Documentation
        - Build
  - type: textarea
    id: additional-context
    attributes:
      label: Additional Context
  - type: checkboxes
    id: terms
    attributes:
      label: Code of Conduct
      options:
        - label: I agree to follow this project's Code of Conduct
          required: true
"#;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a file, creating parent directories as needed
#[allow(dead_code)] // Test utility for integration tests
pub async fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .expect("Failed to create parent directory");
    }
    tokio::fs::write(path, content)
        .await
        .expect("Failed to write test file");
}

/// Populate a bundle root with one valid artifact of every kind
#[allow(dead_code)] // Test utility for integration tests
pub async fn write_sample_bundle(root: &Path) {
    write_file(
        &root.join("instructions/rust.instructions.md"),
        "---\ndescription: Rust coding conventions\napplyTo: '**/*.rs, **/*.toml'\n---\n\nPrefer explicit error types over panics.",
    )
    .await;
    write_file(
        &root.join("chatmodes/architect.chatmode.md"),
        "---\ndescription: Plan before writing code\n---\n\nYou are a pragmatic software architect.",
    )
    .await;
    write_file(
        &root.join("prompts/review.prompt.md"),
        "---\ndescription: Review the current changes\n---\n\nReview this diff for correctness.",
    )
    .await;
    write_file(&root.join("ISSUE_TEMPLATE/feature_request.yml"), FEATURE_REQUEST_YML).await;
    write_file(
        &root.join("ISSUE_TEMPLATE/config.yml"),
        "blank_issues_enabled: false\ncontact_links:\n  - name: Community Support\n    url: https://example.com/discussions\n    about: Please ask and answer questions here.\n",
    )
    .await;
}
