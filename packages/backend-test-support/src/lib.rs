//! Backend test support utilities
//!
//! This crate provides utilities for backend testing: unified logging
//! initialization and unique test-data helpers.

pub mod logging;
pub mod unique_helpers;
