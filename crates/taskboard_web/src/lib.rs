//! HTTP surface for Taskboard.
//!
//! # Responsibility
//! - Map browser routes onto tracker use-cases.
//! - Render HTML views and redirect after every mutation.
//!
//! # Invariants
//! - Handlers never keep records between requests.
//! - A missing record redirects to a fallback view; it is never an error.

pub mod error;
pub mod handlers;
pub mod paths;
pub mod router;
pub mod state;
pub mod views;

pub use error::AppError;
pub use router::{build_router, shutdown_signal};
pub use state::AppState;
