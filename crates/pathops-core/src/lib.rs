//! Path-operation facade for pathops
//!
//! Maps a small enumerated set of filesystem actions to a uniform
//! success/failure-with-diagnostic contract. No operation ever panics or
//! returns `Err` across the facade boundary: OS failures are diagnostics,
//! not control flow.

pub mod content_root;
pub mod encoding;
pub mod error;
pub mod facade;
pub mod launcher;
pub mod outcome;

pub use content_root::{ContentRoot, RootConfig, StaticRoot};
pub use error::{Error, Result};
pub use facade::PathOps;
pub use launcher::{STATUS_OK_THRESHOLD, describe_status};
pub use outcome::Outcome;
