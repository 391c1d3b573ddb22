use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Manifest written at the root of an installed bundle.
///
/// `files` maps each installed file's bundle-relative path (forward-slash
/// separated) to the SHA-256 digest of its contents at install time, so
/// later checks can tell whether the read-only contract was broken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackManifest {
    pub schema_version: u32,
    pub pack_version: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}
