use anyhow::{Context, Result};
use std::path::PathBuf;

use mzcompare::settings::MethodSettings;

/// Print the differences between two method files
pub fn run(manual: PathBuf, automated: PathBuf) -> Result<()> {
    let manual_method = MethodSettings::from_file(&manual)
        .with_context(|| format!("Failed to load method file: {}", manual.display()))?;
    let automated_method = MethodSettings::from_file(&automated)
        .with_context(|| format!("Failed to load method file: {}", automated.display()))?;

    let diff = manual_method.diff(&automated_method);
    print!("{}", diff);

    if !diff.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
