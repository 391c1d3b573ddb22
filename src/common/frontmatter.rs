use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Invalid front-matter format: {0}")]
    InvalidFormat(String),
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Check whether content opens with a front-matter block.
#[must_use]
pub fn has_front_matter(content: &str) -> bool {
    content.lines().next() == Some("---")
}

/// Split markdown content into its raw front-matter YAML and the body text.
///
/// The body is everything after the closing `---`, with leading blank lines
/// stripped and trailing whitespace trimmed. The body is opaque to this crate;
/// the external assistant integration consumes it verbatim.
///
/// # Format
/// ```markdown
/// ---
/// key: value
/// ---
/// Body content...
/// ```
pub fn split_front_matter(content: &str) -> Result<(String, String), FrontmatterError> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.first() != Some(&"---") {
        return Err(FrontmatterError::InvalidFormat(
            "Content must start with '---'".to_string(),
        ));
    }

    // Find closing ---
    let end_idx = lines
        .iter()
        .skip(1)
        .position(|&line| line == "---")
        .ok_or_else(|| {
            FrontmatterError::InvalidFormat("Missing closing '---' for front-matter".to_string())
        })?;

    let yaml = lines.get(1..=end_idx).unwrap_or(&[]).join("\n");

    let body_start = end_idx.saturating_add(2); // Skip the closing ---
    let body = lines
        .get(body_start..)
        .unwrap_or(&[])
        .iter()
        .skip_while(|line| line.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string();

    Ok((yaml, body))
}

/// Parse markdown content with YAML front-matter.
///
/// Returns the deserialized front-matter metadata and the opaque body text.
pub fn parse_front_matter<T: DeserializeOwned>(
    content: &str,
) -> Result<(T, String), FrontmatterError> {
    let (yaml, body) = split_front_matter(content)?;
    let metadata: T = serde_yaml::from_str(&yaml)?;
    Ok((metadata, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "camelCase")]
    struct TestMetadata {
        description: Option<String>,
        apply_to: Option<String>,
    }

    #[test]
    fn test_parse_front_matter_basic() {
        let content = r"---
description: Rust coding conventions
applyTo: '**/*.rs'
---

Always propagate errors with the question-mark operator.";

        let (metadata, body): (TestMetadata, String) = parse_front_matter(content).unwrap();

        assert_eq!(
            metadata.description.as_deref(),
            Some("Rust coding conventions")
        );
        assert_eq!(metadata.apply_to.as_deref(), Some("**/*.rs"));
        assert_eq!(
            body,
            "Always propagate errors with the question-mark operator."
        );
    }

    #[test]
    fn test_parse_front_matter_empty_body() {
        let content = "---\ndescription: Terse mode\n---\n";

        let (metadata, body): (TestMetadata, String) = parse_front_matter(content).unwrap();

        assert_eq!(metadata.description.as_deref(), Some("Terse mode"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_parse_front_matter_multiline_body() {
        let content = r"---
description: Review guide
---

Line 1.

Line 2.

Line 3.";

        let (_, body): (TestMetadata, String) = parse_front_matter(content).unwrap();

        assert_eq!(body, "Line 1.\n\nLine 2.\n\nLine 3.");
    }

    #[test]
    fn test_parse_front_matter_missing_opening() {
        let content = "# No Frontmatter\n\nJust content.";
        let result: Result<(TestMetadata, String), _> = parse_front_matter(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_front_matter_missing_closing() {
        let content = "---\ndescription: broken\nBody without closing fence";
        let result: Result<(TestMetadata, String), _> = parse_front_matter(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_front_matter_invalid_yaml() {
        let content = "---\ndescription: [unclosed\n---\n\nBody";
        let result: Result<(TestMetadata, String), _> = parse_front_matter(content);
        assert!(matches!(result, Err(FrontmatterError::YamlError(_))));
    }

    #[test]
    fn test_has_front_matter() {
        assert!(has_front_matter("---\ndescription: x\n---\n"));
        assert!(!has_front_matter("# Plain markdown"));
        assert!(!has_front_matter(""));
    }

    #[test]
    fn test_split_front_matter_preserves_body_markdown() {
        let content = "---\ndescription: x\n---\n\n# Heading stays in body\n\nText.";
        let (yaml, body) = split_front_matter(content).unwrap();

        assert_eq!(yaml, "description: x");
        assert_eq!(body, "# Heading stays in body\n\nText.");
    }
}
