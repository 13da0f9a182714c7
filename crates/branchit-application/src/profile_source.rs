//! Sources of profiles to sign in with.
//!
//! Authentication is a placeholder: the login button signs in the demo
//! profile, and hosts may load a profile document from disk instead.

use std::fs;
use std::path::Path;

use branchit_core::{Result, UserProfile};

/// The profile the login button signs in with.
pub fn demo_profile() -> UserProfile {
    UserProfile {
        uid: "demoUid".to_string(),
        username: "ggvstudent".to_string(),
        display_name: "GGV Student".to_string(),
        ggv_info: "B.Tech CSE 2025".to_string(),
        email: "student@ggv.edu.in".to_string(),
        ..Default::default()
    }
}

/// Loads and validates a profile from a JSON document.
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    profile.validate()?;
    tracing::debug!(
        "[ProfileSource] Loaded profile uid={} from {:?}",
        profile.uid,
        path
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_demo_profile_is_valid() {
        let profile = demo_profile();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.uid, "demoUid");
        assert!(!profile.is_verified);
    }

    #[test]
    fn test_load_profile_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        fs::write(
            &path,
            r#"{
                "uid": "u42",
                "username": "meera",
                "displayName": "Meera",
                "skills": ["Rust", "Kotlin"],
                "projects": [{"title": "BranchIT", "description": "Campus app"}]
            }"#,
        )
        .unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.display_name, "Meera");
        assert_eq!(profile.skills, vec!["Rust", "Kotlin"]);
        assert_eq!(profile.projects[0].link, "");
    }

    #[test]
    fn test_load_profile_rejects_invalid_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        fs::write(&path, r#"{"displayName": "No Id"}"#).unwrap();

        assert!(load_profile(&path).unwrap_err().is_validation());
    }

    #[test]
    fn test_load_profile_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_profile(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_io());
    }
}
