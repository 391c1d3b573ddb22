pub mod frontmatter;

pub use frontmatter::{has_front_matter, parse_front_matter, split_front_matter, FrontmatterError};
