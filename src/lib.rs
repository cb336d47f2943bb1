mod error;
mod logging;
mod manifest;
mod naming;
mod progress_bar;
mod scan;
mod toml_utils;

pub use error::{AppError, Result};
pub use logging::init_logger;
pub use naming::{LabelStyle, NamingConfigs, base_name, category_label, normalize_label, singularize};
pub use progress_bar::progress_bar_style;
pub use scan::{CategoryDir, collect_files_from_dir, list_category_dirs, matches_extension};
pub use toml_utils::parse_toml;

// Core generation function
pub use manifest::{GenerateArgs, TOKEN_KEY_PREFIX, TokenEntry, generate_lines, generate_manifest};
