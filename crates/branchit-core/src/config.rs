//! Configuration model.
//!
//! ```toml
//! [layout]
//! app_title = "BranchIT"
//! large_screen_min_width = 600
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BranchitError, Result};

/// Width in density-independent pixels from which a screen counts as large
/// (tablets, unfolded foldables).
pub const DEFAULT_LARGE_SCREEN_MIN_WIDTH: u32 = 600;

pub const DEFAULT_APP_TITLE: &str = "BranchIT";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl RootConfig {
    /// Parses a TOML document; absent sections and keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RootConfig = toml::from_str(content)?;
        config.layout.validate()?;
        Ok(config)
    }
}

/// Settings for the chrome layout decision.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Title shown in the top bar
    #[serde(default = "default_app_title")]
    pub app_title: String,
    /// Breakpoint between bottom-bar and rail chrome, in dp
    #[serde(default = "default_large_screen_min_width")]
    pub large_screen_min_width: u32,
}

impl LayoutConfig {
    fn validate(&self) -> Result<()> {
        if self.large_screen_min_width == 0 {
            return Err(BranchitError::config(
                "layout.large_screen_min_width must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            app_title: default_app_title(),
            large_screen_min_width: default_large_screen_min_width(),
        }
    }
}

fn default_app_title() -> String {
    DEFAULT_APP_TITLE.to_string()
}

fn default_large_screen_min_width() -> u32 {
    DEFAULT_LARGE_SCREEN_MIN_WIDTH
}
