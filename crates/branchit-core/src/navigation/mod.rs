//! Navigation domain module.
//!
//! # Module Structure
//!
//! - `screen`: The closed set of top-level screens (`Screen`)
//! - `state`: The navigation state machine (`NavState`)

mod screen;
mod state;

// Re-export public API
pub use screen::Screen;
pub use state::NavState;
