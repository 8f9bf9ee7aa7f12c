//! Botshop Core - Shared domain types.
//!
//! This crate provides the common types used across Botshop components:
//! - `admin` - Web admin panel for the Telegram commerce bot
//!
//! # Architecture
//!
//! The core crate contains only types and plain data - no I/O, no HTTP,
//! no storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, entity records, and the dashboard aggregate
//! - [`seed`] - The fixed demo data the store is initialized with

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod seed;
pub mod types;

pub use types::*;
