//! Renderer seam.
//!
//! Views are produced by the host; the core only decides which renderer
//! method to call and never looks inside the returned view.

use crate::layout::Chrome;
use crate::navigation::Screen;
use crate::user::UserProfile;

/// Actions a rendered view may trigger (button callbacks).
pub trait NavActions {
    /// Login button.
    fn sign_in(&self, profile: UserProfile);

    /// Rail or bottom-bar entry.
    fn select(&self, screen: Screen);

    /// Top-bar bell.
    fn open_updates(&self);

    /// Profile's "Edit Profile" button; the only way into settings.
    fn edit_profile(&self);
}

/// Produces host views for each top-level screen.
pub trait ScreenRenderer {
    type View;

    fn login(&self, actions: &dyn NavActions) -> Self::View;

    fn home(&self) -> Self::View;

    fn connect(&self) -> Self::View;

    fn post(&self) -> Self::View;

    fn chat(&self) -> Self::View;

    /// `profile` is `None` only if the session ended between the layout
    /// decision and rendering.
    fn profile(&self, profile: Option<&UserProfile>, actions: &dyn NavActions) -> Self::View;

    fn settings(&self) -> Self::View;

    fn updates(&self) -> Self::View;

    /// Wraps already rendered content in the navigation chrome.
    fn chrome(&self, chrome: &Chrome, content: Self::View, actions: &dyn NavActions) -> Self::View;
}
