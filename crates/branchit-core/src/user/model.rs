//! UserProfile domain model.
//!
//! Represents a campus member's profile: identity, content, social links and
//! the showcase collections displayed on the profile screen.

use serde::{Deserialize, Serialize};

use crate::error::{BranchitError, Result};

/// Maximum number of projects a profile showcases.
pub const MAX_PROJECTS: usize = 3;

/// A showcased project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

/// User profile domain model.
///
/// A profile is a value: it is never edited in place by the session store,
/// only replaced wholesale. Keys serialize in camelCase and missing keys take
/// their defaults, so partially filled documents load cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable unique identifier
    pub uid: String,
    pub username: String,
    pub display_name: String,
    /// Programme and batch, e.g. "B.Tech CSE 2025"
    pub ggv_info: String,
    pub background_url: String,
    pub about: String,
    pub linked_in: String,
    pub github: String,
    pub instagram: String,
    pub email: String,
    /// Skills in display order
    pub skills: Vec<String>,
    pub resume_url: String,
    /// At most [`MAX_PROJECTS`] entries, in display order
    pub projects: Vec<Project>,
    pub achievements: Vec<String>,
    /// Set by an external verification process, never by this crate
    pub is_verified: bool,
}

impl UserProfile {
    /// Creates a profile with only its identity filled in.
    pub fn new(uid: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    /// Checks the structural rules a stored profile must satisfy.
    ///
    /// The session store accepts any profile; hosts loading profiles from
    /// outside call this before logging them in.
    pub fn validate(&self) -> Result<()> {
        if self.uid.trim().is_empty() {
            return Err(BranchitError::validation("profile uid must not be empty"));
        }
        if self.projects.len() > MAX_PROJECTS {
            return Err(BranchitError::validation(format!(
                "profile lists {} projects, at most {} are allowed",
                self.projects.len(),
                MAX_PROJECTS
            )));
        }
        Ok(())
    }

    /// Returns true if any social link or the email is filled in.
    pub fn has_contact(&self) -> bool {
        [&self.email, &self.linked_in, &self.github, &self.instagram]
            .iter()
            .any(|field| !field.trim().is_empty())
    }

    /// Avatar placeholder: first character of the display name.
    pub fn initial(&self) -> Option<char> {
        self.display_name.chars().next()
    }

    /// The "@username • programme" line shown under the display name.
    pub fn handle_line(&self) -> String {
        format!("@{} • {}", self.username, self.ggv_info)
    }

    /// Scores how complete the profile is.
    pub fn strength(&self) -> ProfileStrength {
        let filled = |s: &str| !s.trim().is_empty();
        let criteria = [
            filled(&self.display_name),
            filled(&self.username),
            filled(&self.about),
            !self.skills.is_empty(),
            !self.projects.is_empty(),
            !self.achievements.is_empty(),
            self.has_contact(),
            filled(&self.resume_url),
        ];

        ProfileStrength {
            score: criteria.iter().filter(|met| **met).count() as u32,
            total: criteria.len() as u32,
        }
    }
}

/// Completeness score of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileStrength {
    pub score: u32,
    pub total: u32,
}

impl ProfileStrength {
    /// Whole percentage, truncated.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        self.score * 100 / self.total
    }
}
