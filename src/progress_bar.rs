use indicatif::ProgressStyle;

/// Get a standardized progress bar style
pub fn progress_bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg}: {wide_bar:.green/white} {pos}/{len} [{elapsed_precise}]")
        .unwrap()
}
