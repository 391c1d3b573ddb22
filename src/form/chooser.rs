use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChooserError {
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("contact link {index} is missing a name")]
    EmptyLinkName { index: usize },

    #[error("contact link {index} is missing an about text")]
    EmptyLinkAbout { index: usize },

    #[error("contact link {index} has invalid url '{url}'")]
    InvalidLinkUrl { index: usize, url: String },
}

fn default_blank_issues_enabled() -> bool {
    true
}

/// Template-chooser configuration (`ISSUE_TEMPLATE/config.yml`).
///
/// Controls whether blank issues are allowed and which external contact links
/// appear alongside the templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateChooserConfig {
    #[serde(default = "default_blank_issues_enabled")]
    pub blank_issues_enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_links: Vec<ContactLink>,
}

impl Default for TemplateChooserConfig {
    fn default() -> Self {
        Self {
            blank_issues_enabled: default_blank_issues_enabled(),
            contact_links: Vec::new(),
        }
    }
}

/// One external link shown in the template chooser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactLink {
    pub name: String,
    pub url: String,
    pub about: String,
}

/// Parse and validate a template-chooser configuration document
pub fn parse_chooser_config(source: &str) -> Result<TemplateChooserConfig, ChooserError> {
    let config: TemplateChooserConfig = serde_yaml::from_str(source)?;

    for (index, link) in config.contact_links.iter().enumerate() {
        let position = index.saturating_add(1);
        if link.name.trim().is_empty() {
            return Err(ChooserError::EmptyLinkName { index: position });
        }
        if link.about.trim().is_empty() {
            return Err(ChooserError::EmptyLinkAbout { index: position });
        }
        if !link.url.starts_with("http://") && !link.url.starts_with("https://") {
            return Err(ChooserError::InvalidLinkUrl {
                index: position,
                url: link.url.clone(),
            });
        }
    }

    Ok(config)
}
