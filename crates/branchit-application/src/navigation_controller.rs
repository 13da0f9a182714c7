//! Navigation/layout controller.
//!
//! Ties the session store, the host's screen probe and the renderers
//! together: it follows the session, owns the current screen selection and
//! decides what to render.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use branchit_core::config::LayoutConfig;
use branchit_core::layout::{self, Content, Frame, ScreenProbe};
use branchit_core::render::{NavActions, ScreenRenderer};
use branchit_core::{NavState, Screen, SessionStore, Subscription, UserProfile};

/// Decides what the app shows.
///
/// The controller subscribes to the store on construction, so logging in
/// anywhere lands on Home and logging out anywhere returns to the login view.
/// Dropping the controller removes its subscription.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use branchit_application::NavigationController;
/// use branchit_core::config::LayoutConfig;
/// use branchit_core::layout::Frame;
/// use branchit_core::{NavState, Screen, SessionStore, UserProfile};
///
/// let store = SessionStore::new();
/// let controller =
///     NavigationController::new(store.clone(), Arc::new(|| false), LayoutConfig::default());
/// assert_eq!(controller.frame(), Frame::Login);
///
/// store.login(UserProfile::new("u1", "Asha"));
/// assert_eq!(controller.state(), NavState::Authenticated { screen: Screen::Home });
/// ```
pub struct NavigationController {
    store: SessionStore,
    probe: Arc<dyn ScreenProbe>,
    config: LayoutConfig,
    state: Arc<RwLock<NavState>>,
    _subscription: Subscription,
}

impl NavigationController {
    pub fn new(store: SessionStore, probe: Arc<dyn ScreenProbe>, config: LayoutConfig) -> Self {
        let state = Arc::new(RwLock::new(NavState::Unauthenticated));

        // The store would keep a strong reference alive forever, so the
        // observer only holds a weak one.
        let observed = Arc::downgrade(&state);
        let subscription = store.subscribe(move |profile| {
            let Some(state) = observed.upgrade() else {
                return;
            };
            let mut state = state.write().unwrap_or_else(PoisonError::into_inner);
            let next = state.on_session(profile.is_some());
            if next != *state {
                tracing::info!("[NavigationController] {:?} -> {:?}", *state, next);
            }
            *state = next;
        });

        // Sync with a session that existed before we subscribed. Holding the
        // state lock here orders us against a concurrent notification.
        {
            let mut current = state.write().unwrap_or_else(PoisonError::into_inner);
            *current = current.on_session(store.is_logged_in());
        }

        Self {
            store,
            probe,
            config,
            state,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> NavState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current_screen(&self) -> Option<Screen> {
        self.state().screen()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Makes `screen` current. Ignored while nobody is logged in.
    pub fn select(&self, screen: Screen) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if !state.is_authenticated() {
            tracing::debug!(
                "[NavigationController] select({}) ignored: not authenticated",
                screen
            );
            return;
        }
        tracing::debug!("[NavigationController] select: {}", screen);
        *state = state.select(screen);
    }

    /// Top-bar affordance.
    pub fn open_updates(&self) {
        self.select(Screen::Updates);
    }

    /// Profile edit affordance.
    pub fn open_settings(&self) {
        self.select(Screen::Settings);
    }

    /// Login affordance; the state follows through the store subscription.
    pub fn sign_in(&self, profile: UserProfile) {
        self.store.login(profile);
    }

    pub fn sign_out(&self) {
        self.store.logout();
    }

    /// Decides the frame for the current state.
    ///
    /// The screen probe is asked on every call.
    pub fn frame(&self) -> Frame {
        match self.state() {
            NavState::Unauthenticated => Frame::Login,
            NavState::Authenticated { screen } => {
                let is_large = self.probe.is_large_screen();
                Frame::Main(layout::decide(is_large, screen, &self.config))
            }
        }
    }

    /// Renders the current frame with the host's renderer.
    ///
    /// No lock is held while the renderer runs, so views may trigger
    /// affordances directly.
    pub fn render<R: ScreenRenderer>(&self, renderer: &R) -> R::View {
        match self.frame() {
            Frame::Login => renderer.login(self),
            Frame::Main(frame) => {
                let content = match frame.content {
                    Content::Updates => renderer.updates(),
                    Content::Screen(screen) => self.render_screen(renderer, screen),
                };
                renderer.chrome(&frame.chrome, content, self)
            }
        }
    }

    fn render_screen<R: ScreenRenderer>(&self, renderer: &R, screen: Screen) -> R::View {
        match screen {
            Screen::Home => renderer.home(),
            Screen::Connect => renderer.connect(),
            Screen::Post => renderer.post(),
            Screen::Chat => renderer.chat(),
            Screen::Profile => {
                let profile = self.store.current();
                renderer.profile(profile.as_ref(), self)
            }
            Screen::Settings => renderer.settings(),
            Screen::Updates => renderer.updates(),
        }
    }
}

impl NavActions for NavigationController {
    fn sign_in(&self, profile: UserProfile) {
        NavigationController::sign_in(self, profile);
    }

    fn select(&self, screen: Screen) {
        NavigationController::select(self, screen);
    }

    fn open_updates(&self) {
        NavigationController::open_updates(self);
    }

    fn edit_profile(&self) {
        self.open_settings();
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
