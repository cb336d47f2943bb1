/// An example of running manifest generation from a TOML config file.
use std::path::PathBuf;

use token_manifest::{generate_manifest, init_logger, parse_toml};

#[allow(dead_code)]
enum Scenario {
    SampleTokens,
    SortedProperties,
}

fn main() {
    init_logger();

    let project_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config_dir = project_root.join("assets/configs/");

    let scenario = Scenario::SampleTokens;
    let config_toml = match scenario {
        Scenario::SampleTokens => config_dir.join("tokens.toml"),
        Scenario::SortedProperties => config_dir.join("sorted-properties.toml"),
    };

    let args = parse_toml(&config_toml, &project_root).expect("Failed to parse TOML config");

    dbg!(&args);

    let entries = generate_manifest(&args).expect("Failed to generate manifest");
    for entry in &entries {
        println!("{entry}");
    }
    tracing::info!("Total token entries: {}", entries.len());
}
