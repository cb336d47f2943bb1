// -- imports
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumString, VariantNames};

// -- enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Deserialize, VariantNames)]
#[serde(untagged)]
/// How derived category labels are rendered into token keys
pub enum LabelStyle {
    /// Use the singularized directory name as-is
    #[strum(serialize = "Raw")]
    Raw,

    /// Lowercase, with spaces and hyphens replaced by underscores
    #[strum(serialize = "Normalized")]
    Normalized,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle::Raw
    }
}

/// Custom deserializer with helpful error message
pub fn deserialize_label_style<'de, D>(deserializer: D) -> Result<LabelStyle, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    LabelStyle::from_str(&value).map_err(|_| {
        let variants = LabelStyle::VARIANTS;
        serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&value),
            &format!("one of {}", variants.join(", ")).as_str(),
        )
    })
}

// -- structs

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfigs {
    /// How labels are rendered
    #[serde(deserialize_with = "deserialize_label_style")]
    pub style: LabelStyle,

    /// Whether to strip one trailing `s` from category directory names
    pub strip_plural: bool,
}

impl Default for NamingConfigs {
    fn default() -> Self {
        Self {
            style: LabelStyle::Raw,
            strip_plural: true,
        }
    }
}

// -- public API

/// Remove exactly one trailing `s` from a category directory name.
///
/// This is a textual heuristic, not a linguistic one: "Bus" becomes "Bu"
/// just like "Cars" becomes "Car". Irregular plurals are not handled.
pub fn singularize(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

/// Lowercase a label and replace spaces and hyphens with underscores.
pub fn normalize_label(name: &str) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect();
    normalized.trim_matches('_').to_string()
}

/// Derive the token label for a category directory name.
pub fn category_label(dir_name: &str, configs: &NamingConfigs) -> String {
    let singular = if configs.strip_plural {
        singularize(dir_name)
    } else {
        dir_name
    };
    match configs.style {
        LabelStyle::Raw => singular.to_string(),
        LabelStyle::Normalized => normalize_label(singular),
    }
}

/// File name with its final extension removed.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

// -- tests
