use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use branchit_application::{NavigationController, demo_profile};
use branchit_core::config::LayoutConfig;
use branchit_core::layout::{Chrome, ChromeLayout, Content, Frame, WidthProbe};
use branchit_core::render::{NavActions, ScreenRenderer};
use branchit_core::{NavState, Screen, SessionStore, UserProfile};

/// Renders views as short strings; optionally presses buttons while rendering.
#[derive(Default)]
struct StubRenderer {
    press_login: bool,
    press_edit: bool,
    login_calls: Cell<u32>,
}

impl ScreenRenderer for StubRenderer {
    type View = String;

    fn login(&self, actions: &dyn NavActions) -> String {
        self.login_calls.set(self.login_calls.get() + 1);
        if self.press_login {
            actions.sign_in(demo_profile());
        }
        "login".to_string()
    }

    fn home(&self) -> String {
        "home".to_string()
    }

    fn connect(&self) -> String {
        "connect".to_string()
    }

    fn post(&self) -> String {
        "post".to_string()
    }

    fn chat(&self) -> String {
        "chat".to_string()
    }

    fn profile(&self, profile: Option<&UserProfile>, actions: &dyn NavActions) -> String {
        if self.press_edit {
            actions.edit_profile();
        }
        match profile {
            Some(p) => format!("profile:{}", p.uid),
            None => "profile:loading".to_string(),
        }
    }

    fn settings(&self) -> String {
        "settings".to_string()
    }

    fn updates(&self) -> String {
        "updates".to_string()
    }

    fn chrome(&self, chrome: &Chrome, content: String, _actions: &dyn NavActions) -> String {
        let layout = match chrome.layout {
            ChromeLayout::Rail => "rail",
            ChromeLayout::BottomBar => "bottom",
        };
        let top = if chrome.top_bar.is_some() { "+top" } else { "" };
        format!("{layout}{top}[{content}]")
    }
}

fn setup(large: bool) -> (SessionStore, Arc<AtomicBool>, NavigationController) {
    let store = SessionStore::new();
    let large_flag = Arc::new(AtomicBool::new(large));
    let probe_flag = Arc::clone(&large_flag);
    let controller = NavigationController::new(
        store.clone(),
        Arc::new(move || probe_flag.load(Ordering::SeqCst)),
        LayoutConfig::default(),
    );
    (store, large_flag, controller)
}

#[test]
fn test_unauthenticated_renders_only_login() {
    let (_store, _flag, controller) = setup(false);
    let renderer = StubRenderer::default();

    assert_eq!(controller.render(&renderer), "login");
    assert_eq!(renderer.login_calls.get(), 1);
}

#[test]
fn test_login_lands_on_home_content() {
    let (store, _flag, controller) = setup(false);
    store.login(UserProfile::new("u1", "A"));

    assert_eq!(
        controller.state(),
        NavState::Authenticated { screen: Screen::Home }
    );
    assert_eq!(
        controller.render(&StubRenderer::default()),
        "bottom+top[home]"
    );
}

#[test]
fn test_login_button_signs_in_demo_profile() {
    let (store, _flag, controller) = setup(false);
    let renderer = StubRenderer {
        press_login: true,
        ..Default::default()
    };

    assert_eq!(controller.render(&renderer), "login");
    assert_eq!(store.current().unwrap().uid, "demoUid");
    assert_eq!(controller.render(&renderer), "bottom+top[home]");
}

#[test]
fn test_probe_flip_changes_chrome_without_transition() {
    let (store, flag, controller) = setup(true);
    store.login(UserProfile::new("u1", "A"));
    controller.select(Screen::Chat);
    let before = controller.state();

    assert_eq!(controller.render(&StubRenderer::default()), "rail+top[chat]");
    flag.store(false, Ordering::SeqCst);
    assert_eq!(
        controller.render(&StubRenderer::default()),
        "bottom+top[chat]"
    );
    assert_eq!(controller.state(), before);
}

#[test]
fn test_width_probe_resize() {
    let store = SessionStore::new();
    let probe = Arc::new(WidthProbe::new(411, 600));
    let controller =
        NavigationController::new(store.clone(), probe.clone(), LayoutConfig::default());
    store.login(UserProfile::new("u1", "A"));

    let layout = |c: &NavigationController| c.frame().main().unwrap().chrome.layout;
    assert_eq!(layout(&controller), ChromeLayout::BottomBar);
    probe.set_width(840);
    assert_eq!(layout(&controller), ChromeLayout::Rail);
}

#[test]
fn test_updates_hides_top_bar_until_primary_screen_selected() {
    let (store, _flag, controller) = setup(false);
    store.login(UserProfile::new("u1", "A"));

    controller.open_updates();
    let frame = controller.frame();
    let main = frame.main().unwrap();
    assert!(main.chrome.top_bar.is_none());
    assert_eq!(main.content, Content::Updates);
    assert_eq!(
        controller.render(&StubRenderer::default()),
        "bottom[updates]"
    );

    controller.select(Screen::Connect);
    assert!(controller.frame().main().unwrap().chrome.top_bar.is_some());
}

#[test]
fn test_edit_profile_opens_settings() {
    let (store, _flag, controller) = setup(true);
    store.login(UserProfile::new("u1", "A"));
    controller.select(Screen::Profile);

    let renderer = StubRenderer {
        press_edit: true,
        ..Default::default()
    };
    assert_eq!(controller.render(&renderer), "rail+top[profile:u1]");
    assert_eq!(controller.current_screen(), Some(Screen::Settings));
    assert_eq!(
        controller.render(&StubRenderer::default()),
        "rail+top[settings]"
    );
}

#[test]
fn test_profile_select_then_logout_scenario() {
    let (store, _flag, controller) = setup(false);
    controller.sign_in(UserProfile::new("u1", "A"));
    assert_eq!(store.current().unwrap().uid, "u1");

    controller.select(Screen::Profile);
    assert_eq!(
        controller.state(),
        NavState::Authenticated {
            screen: Screen::Profile
        }
    );

    controller.sign_out();
    assert_eq!(controller.state(), NavState::Unauthenticated);
    assert!(store.current().is_none());
    assert_eq!(controller.frame(), Frame::Login);
}

#[test]
fn test_two_controllers_follow_one_store() {
    let store = SessionStore::new();
    let first = NavigationController::new(store.clone(), Arc::new(|| true), LayoutConfig::default());
    let second =
        NavigationController::new(store.clone(), Arc::new(|| false), LayoutConfig::default());

    store.login(UserProfile::new("u1", "A"));
    first.select(Screen::Post);

    assert_eq!(first.current_screen(), Some(Screen::Post));
    assert_eq!(second.current_screen(), Some(Screen::Home));

    store.logout();
    assert!(!first.state().is_authenticated());
    assert!(!second.state().is_authenticated());
}
