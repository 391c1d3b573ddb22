mod layout;
mod load;

pub use layout::{
    chatmodes_path, group_dirs, instructions_path, issue_template_path, prompts_path,
    CHATMODES_DIR, INSTRUCTIONS_DIR, ISSUE_TEMPLATE_DIR, PROMPTS_DIR,
};
pub use load::{load_bundle, Bundle, BundleError, BundleLoad, ChooserFile, Diagnostic};
