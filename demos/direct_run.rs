/// An example of directly generating a token manifest without using config files.
use std::path::PathBuf;

use anyhow::{Context, Result};
use token_manifest::{GenerateArgs, LabelStyle, NamingConfigs, generate_manifest, init_logger};

#[allow(dead_code)]
enum Fixture {
    SampleTokens,
    CurrentDir,
}

fn main() -> Result<()> {
    init_logger();

    let project_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let fixture = Fixture::SampleTokens;
    let root = match fixture {
        Fixture::SampleTokens => project_root.join("assets/tokens"),
        Fixture::CurrentDir => PathBuf::from("."),
    };

    let naming_cfg = NamingConfigs {
        style: LabelStyle::Raw,
        ..Default::default()
    };

    let args = GenerateArgs {
        root,
        sort: true,
        naming_cfg,
        ..Default::default()
    };

    let entries =
        generate_manifest(&args).with_context(|| "Failed to generate manifest".to_string())?;

    for entry in &entries {
        println!("{entry}");
    }
    tracing::info!("Total token entries: {}", entries.len());

    Ok(())
}
