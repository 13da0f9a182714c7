use std::path::Path;

use anyhow::{Context, Result};
use branchit_application::load_profile;

/// Validates a profile document and reports how complete it is.
pub fn run(path: &Path, json: bool) -> Result<()> {
    let profile = load_profile(path)
        .with_context(|| format!("Failed to load profile from {}", path.display()))?;
    let strength = profile.strength();

    if json {
        let report = serde_json::json!({
            "uid": profile.uid,
            "displayName": profile.display_name,
            "strength": strength,
            "percent": strength.percent(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} ({})", profile.display_name, profile.uid);
        println!(
            "Profile Strength: {}% ({}/{})",
            strength.percent(),
            strength.score,
            strength.total
        );
    }
    Ok(())
}
