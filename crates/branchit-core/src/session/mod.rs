//! Session domain module.
//!
//! The session is the process's notion of the currently authenticated user:
//! either absent or exactly one [`UserProfile`](crate::user::UserProfile).
//!
//! # Usage
//!
//! ```ignore
//! use branchit_core::session::{SessionStore, Subscription};
//! ```

mod store;

// Re-export public API
pub use store::{Observer, SessionStore, Subscription};
