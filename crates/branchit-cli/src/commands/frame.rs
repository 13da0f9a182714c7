use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use branchit_application::{NavigationController, demo_profile, load_profile};
use branchit_core::config::RootConfig;
use branchit_core::layout::WidthProbe;
use branchit_core::{Screen, SessionStore};

use crate::text_renderer::TextRenderer;

pub struct FrameArgs {
    pub width: u32,
    pub screen: Option<Screen>,
    pub logged_out: bool,
    pub profile: Option<PathBuf>,
    pub json: bool,
}

/// Prints the frame decided for one window width and screen.
pub fn run(config: &RootConfig, args: FrameArgs) -> Result<()> {
    let store = SessionStore::new();
    let probe = Arc::new(WidthProbe::from_config(args.width, &config.layout));
    let controller = NavigationController::new(store, probe, config.layout.clone());

    if !args.logged_out {
        let profile = match &args.profile {
            Some(path) => load_profile(path)
                .with_context(|| format!("Failed to load profile from {}", path.display()))?,
            None => demo_profile(),
        };
        controller.sign_in(profile);
    }
    if let Some(screen) = args.screen {
        controller.select(screen);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&controller.frame())
            .context("Failed to serialize frame")?;
        println!("{json}");
    } else {
        println!("{}", controller.render(&TextRenderer));
    }
    Ok(())
}
