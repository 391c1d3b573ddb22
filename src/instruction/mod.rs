mod crud;
mod globs;
mod types;

pub use crud::{list_instructions, load_instruction, InstructionError, INSTRUCTION_SUFFIX};
pub use globs::{parse_apply_to, validate_glob, GlobListError};
pub use types::{InstructionFile, InstructionFrontmatter};
