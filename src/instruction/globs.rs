use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GlobListError {
    #[error("applyTo declares no patterns")]
    EmptyList,

    #[error("applyTo pattern {index} is empty")]
    EmptyPattern { index: usize },

    #[error("glob pattern '{pattern}' has an unclosed '['")]
    UnclosedBracket { pattern: String },

    #[error("glob pattern '{pattern}' has unbalanced braces")]
    UnbalancedBraces { pattern: String },
}

/// Split on commas that sit outside `{...}` groups and `[...]` classes, so a
/// pattern like `**/*.{yml,yaml}` stays in one piece.
fn split_segments(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut brace_depth: usize = 0;
    let mut in_class = false;

    for ch in raw.chars() {
        match ch {
            '[' if !in_class => {
                in_class = true;
                current.push(ch);
            }
            ']' if in_class => {
                in_class = false;
                current.push(ch);
            }
            '{' if !in_class => {
                brace_depth = brace_depth.saturating_add(1);
                current.push(ch);
            }
            '}' if !in_class => {
                brace_depth = brace_depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if brace_depth == 0 && !in_class => {
                segments.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    segments.push(current);
    segments
}

/// Parse an `applyTo` front-matter value into its glob patterns.
///
/// The value is a comma-separated sequence of glob patterns (e.g.
/// `"**/*.ts, **/*.tsx"`); commas inside alternation groups do not separate
/// patterns. Each segment is trimmed and checked for glob syntax; matching
/// against file paths is the external editor's job and is not performed here.
pub fn parse_apply_to(raw: &str) -> Result<Vec<String>, GlobListError> {
    if raw.trim().is_empty() {
        return Err(GlobListError::EmptyList);
    }

    let mut patterns = Vec::new();
    for (index, segment) in split_segments(raw).iter().enumerate() {
        let position = index.saturating_add(1);
        let pattern = segment.trim();
        if pattern.is_empty() {
            return Err(GlobListError::EmptyPattern { index: position });
        }
        validate_glob(pattern)?;
        patterns.push(pattern.to_string());
    }

    Ok(patterns)
}

/// Check a single glob pattern for well-formed syntax.
///
/// Only structure is verified: `[...]` character classes must be closed and
/// `{...}` alternation groups must balance. Everything else is legal glob
/// text as far as this crate is concerned.
pub fn validate_glob(pattern: &str) -> Result<(), GlobListError> {
    let mut in_class = false;
    let mut brace_depth: usize = 0;

    for ch in pattern.chars() {
        match ch {
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' if !in_class => {
                brace_depth = brace_depth.saturating_add(1);
            }
            '}' if !in_class => {
                brace_depth =
                    brace_depth
                        .checked_sub(1)
                        .ok_or_else(|| GlobListError::UnbalancedBraces {
                            pattern: pattern.to_string(),
                        })?;
            }
            _ => {}
        }
    }

    if in_class {
        return Err(GlobListError::UnclosedBracket {
            pattern: pattern.to_string(),
        });
    }
    if brace_depth != 0 {
        return Err(GlobListError::UnbalancedBraces {
            pattern: pattern.to_string(),
        });
    }
    Ok(())
}
