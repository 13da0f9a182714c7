//! Navigation state machine.

use serde::{Deserialize, Serialize};

use super::screen::Screen;

/// What the app shows at the top level.
///
/// Transitions are pure: each method returns the next state.
///
/// ```text
/// Unauthenticated --session present--> Authenticated(Home)
/// Authenticated(s) --select(t)-------> Authenticated(t)
/// Authenticated(s) --session present--> Authenticated(s)
/// Authenticated(s) --session absent---> Unauthenticated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NavState {
    #[default]
    Unauthenticated,
    Authenticated { screen: Screen },
}

impl NavState {
    /// The screen shown right after login.
    pub const LANDING: Screen = Screen::Home;

    /// Derives the initial state from whether a session already exists.
    pub fn for_session(present: bool) -> Self {
        Self::Unauthenticated.on_session(present)
    }

    /// Follows a change of the session store.
    pub fn on_session(self, present: bool) -> Self {
        match (self, present) {
            (Self::Unauthenticated, true) => Self::Authenticated {
                screen: Self::LANDING,
            },
            (Self::Authenticated { .. }, true) => self,
            (_, false) => Self::Unauthenticated,
        }
    }

    /// Selects a screen. Ignored while unauthenticated.
    pub fn select(self, screen: Screen) -> Self {
        match self {
            Self::Unauthenticated => self,
            Self::Authenticated { .. } => Self::Authenticated { screen },
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated { screen } => Some(*screen),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}
