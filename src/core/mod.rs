//! Core data types and structures
//!
//! This module contains the description and validation data types used
//! throughout graphviz-dot, separated from their implementation logic.

pub mod types;

pub use types::*;
