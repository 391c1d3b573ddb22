use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use super::parse::{parse_form, FormError};
use super::types::IssueForm;

/// File name of the template-chooser configuration, which shares the
/// `ISSUE_TEMPLATE/` directory with form documents but has its own schema
pub const CHOOSER_CONFIG_FILE: &str = "config.yml";

/// An issue-form template loaded from disk
#[derive(Debug, Clone)]
pub struct FormFile {
    /// Template name derived from the file stem (e.g. `feature_request`)
    pub name: String,
    pub path: PathBuf,
    pub form: IssueForm,
}

/// Whether a path looks like an issue-form document
#[must_use]
pub fn is_form_file(path: &Path) -> bool {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

    is_yaml && path.file_name().and_then(|name| name.to_str()) != Some(CHOOSER_CONFIG_FILE)
}

/// Load and validate a single issue-form document
pub async fn load_form(path: &Path) -> Result<FormFile, FormError> {
    if !path.exists() {
        return Err(FormError::NotFound(path.display().to_string()));
    }

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| FormError::InvalidFileName(path.display().to_string()))?;

    let content = fs::read_to_string(path).await?;
    let form = parse_form(&content)?;
    debug!(template = %name, fields = form.body.len(), "loaded issue form");

    Ok(FormFile {
        name,
        path: path.to_path_buf(),
        form,
    })
}

/// List all issue-form documents in a directory, ordered by file name.
///
/// A missing directory yields an empty list. Documents that fail to parse or
/// validate are skipped here; [`crate::bundle::load_bundle`] reports them.
pub async fn list_forms(dir: &Path) -> Result<Vec<FormFile>, FormError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut forms = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        let path = entry.path();
        if !is_form_file(&path) {
            continue;
        }

        match load_form(&path).await {
            Ok(form) => forms.push(form),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping invalid issue form");
            }
        }
    }

    forms.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(forms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const VALID_FORM: &str = r"
name: Bug Report
description: File a bug
body:
  - type: input
    id: contact
    attributes:
      label: Contact
";

    #[test]
    fn test_is_form_file() {
        assert!(is_form_file(Path::new("bug_report.yml")));
        assert!(is_form_file(Path::new("bug_report.yaml")));
        assert!(is_form_file(Path::new("BUG.YML")));
        assert!(!is_form_file(Path::new("config.yml")));
        assert!(!is_form_file(Path::new("notes.md")));
        assert!(!is_form_file(Path::new("no_extension")));
    }

    #[tokio::test]
    async fn test_load_form_not_found() {
        let result = load_form(Path::new("/nonexistent/bug.yml")).await;
        assert!(matches!(result, Err(FormError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_load_form_reads_name_from_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feature_request.yml");
        fs::write(&path, VALID_FORM).await.unwrap();

        let loaded = load_form(&path).await.unwrap();
        assert_eq!(loaded.name, "feature_request");
        assert_eq!(loaded.form.name, "Bug Report");
    }

    #[tokio::test]
    async fn test_list_forms_missing_dir_is_empty() {
        let forms = list_forms(Path::new("/nonexistent/ISSUE_TEMPLATE"))
            .await
            .unwrap();
        assert!(forms.is_empty());
    }

    #[tokio::test]
    async fn test_list_forms_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zz_last.yml"), VALID_FORM)
            .await
            .unwrap();
        fs::write(dir.path().join("aa_first.yaml"), VALID_FORM)
            .await
            .unwrap();
        fs::write(dir.path().join("config.yml"), "blank_issues_enabled: false")
            .await
            .unwrap();
        fs::write(dir.path().join("README.md"), "# docs")
            .await
            .unwrap();

        let forms = list_forms(dir.path()).await.unwrap();
        let names: Vec<&str> = forms.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["aa_first", "zz_last"]);
    }

    #[tokio::test]
    async fn test_list_forms_skips_invalid_documents() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.yml"), VALID_FORM).await.unwrap();
        fs::write(dir.path().join("bad.yml"), "name: [unclosed")
            .await
            .unwrap();

        let forms = list_forms(dir.path()).await.unwrap();
        assert_eq!(forms.len(), 1);
    }
}
