//! Chrome layout decision.
//!
//! Everything here is a pure function of the device-size classification and
//! the current screen. The classification comes from a [`ScreenProbe`]
//! supplied by the host and is asked for again on every decision.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::navigation::Screen;

/// Host capability answering "is this a large-screen device?".
///
/// Implementations must be cheap: the controller calls this on every layout
/// decision, since the answer may change with resize or rotation.
pub trait ScreenProbe: Send + Sync {
    fn is_large_screen(&self) -> bool;
}

impl<F> ScreenProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_large_screen(&self) -> bool {
        self()
    }
}

/// Classifies by window width: large when `width >= min_width` (dp).
#[derive(Debug)]
pub struct WidthProbe {
    width: AtomicU32,
    min_width: u32,
}

impl WidthProbe {
    pub fn new(width: u32, min_width: u32) -> Self {
        Self {
            width: AtomicU32::new(width),
            min_width,
        }
    }

    pub fn from_config(width: u32, config: &LayoutConfig) -> Self {
        Self::new(width, config.large_screen_min_width)
    }

    /// Records a new window width, e.g. after rotation.
    pub fn set_width(&self, width: u32) {
        self.width.store(width, Ordering::Relaxed);
    }

    pub fn width(&self) -> u32 {
        self.width.load(Ordering::Relaxed)
    }
}

impl ScreenProbe for WidthProbe {
    fn is_large_screen(&self) -> bool {
        self.width() >= self.min_width
    }
}

/// How the primary navigation is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeLayout {
    /// Persistent side rail (large screens)
    Rail,
    /// Bottom navigation bar (phones)
    BottomBar,
}

impl ChromeLayout {
    pub fn for_screen_size(is_large_screen: bool) -> Self {
        if is_large_screen {
            Self::Rail
        } else {
            Self::BottomBar
        }
    }
}

/// One entry of the rail or bottom bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// The top app bar with its single "updates" affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopBar {
    pub title: String,
    /// Screen opened by the bar's action button
    pub action: Screen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chrome {
    pub layout: ChromeLayout,
    pub nav_items: Vec<NavItem>,
    /// `None` while the updates screen is shown
    pub top_bar: Option<TopBar>,
}

/// What fills the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "screen", rename_all = "snake_case")]
pub enum Content {
    /// The updates view, shown exclusively
    Updates,
    Screen(Screen),
}

/// Maps the current screen to the content to render.
pub fn dispatch(screen: Screen) -> Content {
    match screen {
        Screen::Updates => Content::Updates,
        other => Content::Screen(other),
    }
}

/// The chrome and content of the signed-in app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainFrame {
    pub chrome: Chrome,
    pub content: Content,
}

/// Top-level decision: login view or main app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Frame {
    Login,
    Main(MainFrame),
}

impl Frame {
    pub fn main(&self) -> Option<&MainFrame> {
        match self {
            Frame::Login => None,
            Frame::Main(frame) => Some(frame),
        }
    }
}

/// Builds the main frame for `current` on a screen of the given class.
pub fn decide(is_large_screen: bool, current: Screen, config: &LayoutConfig) -> MainFrame {
    let nav_items = Screen::PRIMARY
        .iter()
        .map(|screen| NavItem {
            screen: *screen,
            label: screen.label(),
            icon: screen.icon().unwrap_or_default(),
            selected: *screen == current,
        })
        .collect();

    let top_bar = (current != Screen::Updates).then(|| TopBar {
        title: config.app_title.clone(),
        action: Screen::Updates,
    });

    MainFrame {
        chrome: Chrome {
            layout: ChromeLayout::for_screen_size(is_large_screen),
            nav_items,
            top_bar,
        },
        content: dispatch(current),
    }
}
