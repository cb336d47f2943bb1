// -- imports
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::naming::{NamingConfigs, base_name, category_label};
use crate::scan::{collect_files_from_dir, list_category_dirs, matches_extension};

/// Properties key prefix shared with the token image consumer
pub const TOKEN_KEY_PREFIX: &str = "image.token";

// -- structs

/// One generated manifest entry for a (category, file) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// Label derived from the category directory name
    pub label: String,

    /// File name with its final extension removed
    pub base_name: String,

    /// Full path of the file, root joined with category and file name
    pub path: PathBuf,
}

impl TokenEntry {
    /// Properties key for this entry: `image.token.<label>.<base_name>`
    pub fn key(&self) -> String {
        format!("{}.{}.{}", TOKEN_KEY_PREFIX, self.label, self.base_name)
    }
}

impl fmt::Display for TokenEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key(), self.path.display())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerateArgs {
    /// Root directory holding one subdirectory per token category
    pub root: PathBuf,

    /// Sort categories and files by name for deterministic output
    pub sort: bool,

    /// Only include files with these extensions (all files when unset)
    pub extensions: Option<Vec<String>>,

    /// Write the rendered manifest to this file instead of stdout
    pub out_file: Option<PathBuf>,

    /// Naming configurations
    pub naming_cfg: NamingConfigs,

    /// Show verbose output
    pub verbose: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            sort: false,
            extensions: None,
            out_file: None,
            naming_cfg: Default::default(),
            verbose: false,
        }
    }
}

// -- public API

/// Core manifest generation
///
/// Walks the immediate subdirectories of `args.root` and emits one
/// `TokenEntry` per regular file found directly inside each of them.
/// Categories whose listing fails are skipped with a warning; only an
/// invalid root aborts the whole generation.
pub fn generate_manifest(args: &GenerateArgs) -> Result<Vec<TokenEntry>> {
    let start_time = Instant::now();

    let mut categories = list_category_dirs(&args.root)?;
    if args.sort {
        categories.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let mut entries = Vec::new();
    for category in &categories {
        let label = category_label(&category.name, &args.naming_cfg);

        let mut files = match collect_files_from_dir(&category.path) {
            Ok(files) => files,
            Err(AppError::Io(e)) => {
                tracing::warn!("Skipping unreadable category {:?}: {}", category.path, e);
                continue;
            }
            Err(e) => return Err(e),
        };
        if args.sort {
            files.sort();
        }

        for path in files {
            if let Some(ref extensions) = args.extensions {
                if !matches_extension(&path, extensions) {
                    continue;
                }
            }
            let base_name = base_name(&path);
            if args.verbose {
                tracing::debug!("{} -> {:?}", label, path);
            }
            entries.push(TokenEntry {
                label: label.clone(),
                base_name,
                path,
            });
        }
    }

    let duration = start_time.elapsed();
    tracing::info!("Generated {} token entries in {:.3?}", entries.len(), duration);

    Ok(entries)
}

/// Generate rendered manifest lines for a root directory with default args.
pub fn generate_lines(root: impl AsRef<Path>) -> Result<Vec<String>> {
    let args = GenerateArgs {
        root: root.as_ref().to_path_buf(),
        ..Default::default()
    };
    let entries = generate_manifest(&args)?;
    Ok(entries.iter().map(ToString::to_string).collect())
}

// -- tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::LabelStyle;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_root() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let animals = temp_dir.path().join("Animales Salvajes");
        let cars = temp_dir.path().join("Coches_deportivos");
        fs::create_dir(&animals).unwrap();
        fs::create_dir(&cars).unwrap();
        fs::write(animals.join("Leon Africano.jpg"), "").unwrap();
        fs::write(animals.join("Elefante-asiatico.png"), "").unwrap();
        fs::write(cars.join("Ferrari-F40.bmp"), "").unwrap();
        temp_dir
    }

    #[test]
    fn test_entry_count_equals_file_count() {
        let temp_dir = fixture_root();
        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let entries = generate_manifest(&args).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_rendered_line_format() {
        let temp_dir = fixture_root();
        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let entries = generate_manifest(&args).unwrap();
        let line = entries
            .iter()
            .find(|e| e.base_name == "Ferrari-F40")
            .unwrap()
            .to_string();

        let expected_path = temp_dir
            .path()
            .join("Coches_deportivos")
            .join("Ferrari-F40.bmp");
        assert_eq!(
            line,
            format!(
                "image.token.Coches_deportivo.Ferrari-F40 = {}",
                expected_path.display()
            )
        );
    }

    #[test]
    fn test_entry_key() {
        let entry = TokenEntry {
            label: "Door".to_string(),
            base_name: "Blue".to_string(),
            path: PathBuf::from("tokens/Doors/Blue.png"),
        };
        assert_eq!(entry.key(), "image.token.Door.Blue");
    }

    #[test]
    fn test_empty_root_yields_empty_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(generate_manifest(&args).unwrap().is_empty());
    }

    #[test]
    fn test_empty_category_yields_no_entries() {
        let temp_dir = fixture_root();
        fs::create_dir(temp_dir.path().join("Exits")).unwrap();

        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        let entries = generate_manifest(&args).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(!entries.iter().any(|e| e.label == "Exit"));
    }

    #[test]
    fn test_root_files_and_nested_dirs_are_ignored() {
        let temp_dir = fixture_root();
        fs::write(temp_dir.path().join("stray.txt"), "").unwrap();
        let nested = temp_dir.path().join("Coches_deportivos").join("old");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("Countach.png"), "").unwrap();

        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        let entries = generate_manifest(&args).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(!entries.iter().any(|e| e.base_name == "Countach"));
        assert!(!entries.iter().any(|e| e.base_name == "stray"));
    }

    #[test]
    fn test_invalid_root_is_fatal() {
        let args = GenerateArgs {
            root: PathBuf::from("/nonexistent/token/root"),
            ..Default::default()
        };
        assert!(matches!(
            generate_manifest(&args),
            Err(AppError::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_consecutive_runs_are_set_equal() {
        let temp_dir = fixture_root();
        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let first: HashSet<String> = generate_manifest(&args)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        let second: HashSet<String> = generate_manifest(&args)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_runs_are_list_equal() {
        let temp_dir = fixture_root();
        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            sort: true,
            ..Default::default()
        };

        let first = generate_manifest(&args).unwrap();
        let second = generate_manifest(&args).unwrap();
        assert_eq!(first, second);

        let labels: Vec<&str> = first.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Animales Salvaje", "Animales Salvaje", "Coches_deportivo"]
        );
        // Files within a category are sorted by name too
        assert_eq!(first[0].base_name, "Elefante-asiatico");
        assert_eq!(first[1].base_name, "Leon Africano");
    }

    #[test]
    fn test_extension_filter() {
        let temp_dir = fixture_root();
        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            extensions: Some(vec!["jpg".to_string(), "png".to_string()]),
            ..Default::default()
        };

        let entries = generate_manifest(&args).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(!entries.iter().any(|e| e.base_name == "Ferrari-F40"));
    }

    #[test]
    fn test_normalized_label_style() {
        let temp_dir = fixture_root();
        let args = GenerateArgs {
            root: temp_dir.path().to_path_buf(),
            sort: true,
            naming_cfg: NamingConfigs {
                style: LabelStyle::Normalized,
                ..Default::default()
            },
            ..Default::default()
        };

        let entries = generate_manifest(&args).unwrap();
        assert_eq!(entries[0].key(), "image.token.animales_salvaje.Elefante-asiatico");
        assert_eq!(entries[2].label, "coches_deportivo");
    }

    #[test]
    fn test_generate_lines_contract() {
        let temp_dir = fixture_root();
        let lines = generate_lines(temp_dir.path()).unwrap();

        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.starts_with("image.token."));
            assert!(line.contains(" = "));
        }
    }
}
