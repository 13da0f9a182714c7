use std::sync::Arc;

use anyhow::Result;
use branchit_application::{NavigationController, demo_profile};
use branchit_core::config::RootConfig;
use branchit_core::layout::WidthProbe;
use branchit_core::render::NavActions;
use branchit_core::{Screen, SessionStore};

use crate::text_renderer::TextRenderer;

/// Width used for the simulated rotation step when starting on a phone.
const ROTATED_TABLET_WIDTH: u32 = 840;
/// Width used for the simulated rotation step when starting on a tablet.
const ROTATED_PHONE_WIDTH: u32 = 411;

/// Walks through a full session, printing the frame after each step.
pub fn run(config: &RootConfig, width: u32) -> Result<()> {
    let store = SessionStore::new();
    let probe = Arc::new(WidthProbe::from_config(width, &config.layout));
    let controller = NavigationController::new(store.clone(), probe.clone(), config.layout.clone());

    let show = |step: &str| {
        println!("== {step} ({:?}) ==", controller.state());
        println!("{}\n", controller.render(&TextRenderer));
    };

    show("start");

    controller.sign_in(demo_profile());
    show("login with Google");

    controller.select(Screen::Profile);
    show("open profile");

    controller.edit_profile();
    show("edit profile");

    let mut edited = store.current().unwrap_or_else(demo_profile);
    edited.about = "Building BranchIT for the campus.".to_string();
    edited.skills = vec!["Kotlin".to_string(), "Rust".to_string()];
    store.update(edited)?;
    controller.select(Screen::Profile);
    show("profile after update");

    controller.open_updates();
    show("open updates");

    controller.select(Screen::Home);
    show("back to home");

    let rotated = if probe.width() >= config.layout.large_screen_min_width {
        ROTATED_PHONE_WIDTH
    } else {
        ROTATED_TABLET_WIDTH
    };
    probe.set_width(rotated);
    show(&format!("rotate to {rotated}dp"));

    controller.sign_out();
    show("logout");

    Ok(())
}
