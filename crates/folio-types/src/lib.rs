//! Foundation types for folio.
//!
//! This crate contains the types shared by every folio crate: the error
//! enum with its `Result` alias and the TOML-backed runtime configuration.

pub mod config;
pub mod error;
