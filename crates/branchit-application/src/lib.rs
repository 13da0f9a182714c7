//! Application layer for BranchIT.
//!
//! Wires the domain pieces of `branchit-core` into the controller a host
//! drives, and provides the configuration and profile sources.

pub mod config_service;
pub mod navigation_controller;
pub mod profile_source;

pub use config_service::ConfigService;
pub use navigation_controller::NavigationController;
pub use profile_source::{demo_profile, load_profile};
