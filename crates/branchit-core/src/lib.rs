//! Domain layer for BranchIT.
//!
//! Holds the user profile model, the reactive session store, the navigation
//! state machine and the pure layout decision. Nothing in this crate performs
//! I/O beyond parsing configuration text.

pub mod config;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod session;
pub mod user;

// Re-export common types
pub use error::{BranchitError, Result};
pub use navigation::{NavState, Screen};
pub use session::{SessionStore, Subscription};
pub use user::{Project, UserProfile};
