//! Plain-text renderer: draws each screen as a block of terminal text.

use branchit_core::layout::{Chrome, ChromeLayout};
use branchit_core::render::{NavActions, ScreenRenderer};
use branchit_core::user::UserProfile;

const RULE: &str = "----------------------------------------";

#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn nav_line(chrome: &Chrome) -> String {
        chrome
            .nav_items
            .iter()
            .map(|item| {
                if item.selected {
                    format!("[{} {}]", item.icon, item.label)
                } else {
                    format!(" {} {} ", item.icon, item.label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn profile_card(profile: &UserProfile) -> Vec<String> {
        let mut lines = Vec::new();

        let initial = profile.initial().unwrap_or('?');
        let badge = if profile.is_verified { "  ✔ Verified" } else { "" };
        lines.push(format!("({initial}) {}{badge}", profile.display_name));
        lines.push(profile.handle_line());
        lines.push(format!(
            "Profile Strength: {}%",
            profile.strength().percent()
        ));
        if !profile.about.trim().is_empty() {
            lines.push(profile.about.clone());
        }
        if !profile.skills.is_empty() {
            lines.push(format!("Skills: {}", profile.skills.join(", ")));
        }
        if !profile.projects.is_empty() {
            lines.push("Projects".to_string());
            for (idx, project) in profile.projects.iter().enumerate() {
                lines.push(format!("  {}. {} - {}", idx + 1, project.title, project.description));
            }
        }
        if !profile.achievements.is_empty() {
            lines.push("Achievements".to_string());
            for achievement in &profile.achievements {
                lines.push(format!("  • {achievement}"));
            }
        }

        let links = [
            ("Email", &profile.email),
            ("LinkedIn", &profile.linked_in),
            ("GitHub", &profile.github),
            ("Instagram", &profile.instagram),
        ];
        lines.push("Social Links".to_string());
        for (label, value) in links {
            if !value.trim().is_empty() {
                lines.push(format!("  {label}: {value}"));
            }
        }
        if !profile.resume_url.trim().is_empty() {
            lines.push("Resume Uploaded".to_string());
        }
        lines.push("[Edit Profile]".to_string());
        lines
    }
}

impl ScreenRenderer for TextRenderer {
    type View = String;

    fn login(&self, _actions: &dyn NavActions) -> String {
        [
            "Unlock Your Community",
            "Explore, Connect, Grow.",
            "[Login with Google]",
            "This app is not officially affiliated with GGV.",
        ]
        .join("\n")
    }

    fn home(&self) -> String {
        "Feed: All | Connections | Branch\n[Refresh]".to_string()
    }

    fn connect(&self) -> String {
        "Search by name, username, or skill\nRecommended for you\nConnection Requests".to_string()
    }

    fn post(&self) -> String {
        "Share updates, achievements, and opportunities.\n[Create Post]".to_string()
    }

    fn chat(&self) -> String {
        "Chat with your connections.\n[New Chat]".to_string()
    }

    fn profile(&self, profile: Option<&UserProfile>, _actions: &dyn NavActions) -> String {
        match profile {
            Some(profile) => Self::profile_card(profile).join("\n"),
            None => "Loading profile...".to_string(),
        }
    }

    fn settings(&self) -> String {
        "Settings".to_string()
    }

    fn updates(&self) -> String {
        "Updates\nNo new notifications.".to_string()
    }

    fn chrome(&self, chrome: &Chrome, content: String, _actions: &dyn NavActions) -> String {
        let mut out = Vec::new();
        if let Some(top_bar) = &chrome.top_bar {
            out.push(format!("{}  [🔔]", top_bar.title));
            out.push(RULE.to_string());
        }
        match chrome.layout {
            ChromeLayout::Rail => {
                let rail = Self::nav_line(chrome);
                out.push(format!("rail: {rail}"));
                out.push(RULE.to_string());
                out.push(content);
            }
            ChromeLayout::BottomBar => {
                out.push(content);
                out.push(RULE.to_string());
                out.push(Self::nav_line(chrome));
            }
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchit_application::NavigationController;
    use branchit_core::config::LayoutConfig;
    use branchit_core::{Screen, SessionStore};
    use std::sync::Arc;

    fn signed_in(large: bool) -> NavigationController {
        let store = SessionStore::new();
        let controller =
            NavigationController::new(store, Arc::new(move || large), LayoutConfig::default());
        controller.sign_in(branchit_application::demo_profile());
        controller
    }

    #[test]
    fn test_bottom_bar_marks_selected_screen() {
        let controller = signed_in(false);
        controller.select(Screen::Chat);
        let text = controller.render(&TextRenderer);

        assert!(text.starts_with("BranchIT"));
        assert!(text.contains("Chat with your connections."));
        assert!(text.contains("[💬 Chat]"));
        assert!(text.trim_end().ends_with("👤 Profile"));
    }

    #[test]
    fn test_rail_layout_on_large_screen() {
        let controller = signed_in(true);
        let text = controller.render(&TextRenderer);
        assert!(text.contains("rail: [🏠 Home]"));
    }

    #[test]
    fn test_profile_card() {
        let controller = signed_in(false);
        controller.select(Screen::Profile);
        let text = controller.render(&TextRenderer);

        assert!(text.contains("(G) GGV Student"));
        assert!(text.contains("@ggvstudent • B.Tech CSE 2025"));
        assert!(text.contains("Email: student@ggv.edu.in"));
        assert!(text.contains("[Edit Profile]"));
    }

    #[test]
    fn test_updates_has_no_top_bar() {
        let controller = signed_in(false);
        controller.open_updates();
        let text = controller.render(&TextRenderer);
        assert!(text.starts_with("Updates"));
        assert!(!text.contains("[🔔]"));
    }
}
