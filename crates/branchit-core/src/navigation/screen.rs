//! Top-level screens of the app.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The closed set of top-level screens.
///
/// `Updates` and `Settings` are hidden: they never appear in the navigation
/// list and are reached only through dedicated affordances (the top-bar bell
/// and the profile's edit button respectively).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Screen {
    #[default]
    Home,
    Connect,
    Post,
    Chat,
    Profile,
    Updates,
    Settings,
}

impl Screen {
    /// Screens listed in the rail or bottom bar, in display order.
    pub const PRIMARY: [Screen; 5] = [
        Screen::Home,
        Screen::Connect,
        Screen::Post,
        Screen::Chat,
        Screen::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Connect => "Connect",
            Screen::Post => "Post",
            Screen::Chat => "Chat",
            Screen::Profile => "Profile",
            Screen::Updates => "Updates",
            Screen::Settings => "Settings",
        }
    }

    /// Navigation glyph; hidden screens have none.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Screen::Home => Some("🏠"),
            Screen::Connect => Some("👥"),
            Screen::Post => Some("✏️"),
            Screen::Chat => Some("💬"),
            Screen::Profile => Some("👤"),
            Screen::Updates | Screen::Settings => None,
        }
    }

    pub fn is_primary(&self) -> bool {
        Self::PRIMARY.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_primary_screens_exclude_hidden_ones() {
        assert!(!Screen::Updates.is_primary());
        assert!(!Screen::Settings.is_primary());
        assert_eq!(Screen::iter().filter(Screen::is_primary).count(), 5);
    }

    #[test]
    fn test_only_primary_screens_have_icons() {
        for screen in Screen::iter() {
            assert_eq!(screen.icon().is_some(), screen.is_primary(), "{screen}");
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("profile".parse::<Screen>().unwrap(), Screen::Profile);
        assert_eq!("UPDATES".parse::<Screen>().unwrap(), Screen::Updates);
        assert!("feed".parse::<Screen>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        for screen in Screen::iter() {
            assert_eq!(screen.to_string(), screen.label());
        }
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }
}
