use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Front-matter keys recognized on an instruction file.
///
/// Both values are opaque strings interpreted by the external assistant
/// integration; `applyTo` is additionally checked for glob-list syntax when
/// the file is loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstructionFrontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<String>,
}

/// An instruction file loaded from disk.
///
/// The editor matches `apply_to` globs against open files and injects `body`
/// verbatim into the assistant's context; nothing here interprets the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionFile {
    /// Name derived from the file stem (e.g. `rust` for
    /// `rust.instructions.md`)
    pub name: String,
    pub path: PathBuf,
    pub description: Option<String>,
    /// Parsed `applyTo` glob patterns; empty when the key is absent
    pub apply_to: Vec<String>,
    /// Opaque guidance text after the front-matter
    pub body: String,
}
