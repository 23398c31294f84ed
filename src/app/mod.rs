//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - The feed store (src/feed/)
//! - Logic (pure business logic in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod compose;
pub(crate) mod navigation;
pub(crate) mod preview;
