//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User profile domain model
//!
//! # Usage
//!
//! ```ignore
//! use branchit_core::user::{Project, UserProfile};
//! ```

mod model;

// Re-export public API
pub use model::{MAX_PROJECTS, ProfileStrength, Project, UserProfile};
