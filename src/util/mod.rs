//! Browser helpers: file validation and previews, dark mode, formatting.

pub mod dark_mode;
pub mod files;
pub mod format;
