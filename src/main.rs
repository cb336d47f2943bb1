use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressIterator};

use token_manifest::{GenerateArgs, generate_manifest, init_logger, parse_toml, progress_bar_style};

fn main() -> Result<()> {
    init_logger();

    let Some(arg) = std::env::args().nth(1) else {
        bail!("usage: manifest_main <root-dir | config.toml>");
    };

    let input = PathBuf::from(arg);
    let args = if input.extension().is_some_and(|ext| ext == "toml") {
        let project_root = std::env::current_dir()?;
        parse_toml(&input, &project_root).context("Failed to parse TOML config")?
    } else {
        GenerateArgs {
            root: input,
            ..Default::default()
        }
    };

    let entries = generate_manifest(&args)
        .with_context(|| format!("Failed to generate token manifest for {:?}", args.root))?;

    match &args.out_file {
        Some(out_file) => {
            let pb = ProgressBar::new(entries.len() as u64)
                .with_style(progress_bar_style())
                .with_message("Writing manifest");
            let mut rendered = String::new();
            for entry in entries.iter().progress_with(pb) {
                rendered.push_str(&entry.to_string());
                rendered.push('\n');
            }
            if let Some(parent) = out_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out_file, rendered)
                .with_context(|| format!("Failed to write manifest to {:?}", out_file))?;
            tracing::info!("Wrote {} entries to {:?}", entries.len(), out_file);
        }
        None => {
            for entry in &entries {
                println!("{entry}");
            }
        }
    }

    Ok(())
}
