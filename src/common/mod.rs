//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration defaults and [`SimulationConfig`]
//! - Error types
//! - The [`PageId`] token and reference-string input

pub mod config;
pub mod error;
pub mod page_id;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use page_id::{load_reference_file, parse_reference_string, PageId};
