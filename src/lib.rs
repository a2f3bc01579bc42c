//! # Umbra
//!
//! A dark pattern detection and transparency scoring library for Rust.
//!
//! ## Features
//!
//! - Two-stage text classification (presence, then category)
//! - TF-IDF feature extraction with pluggable vectorizers
//! - Prototype-based classifiers with a pluggable classifier trait
//! - Deterministic aggregation into counts, a transparency score, and a risk level
//! - Optional parallel fragment classification

pub mod analysis;
pub mod cli;
pub mod detect;
pub mod error;
pub mod ml;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
