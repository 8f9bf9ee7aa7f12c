//! Botshop Admin library.
//!
//! This crate provides the admin panel as a library, allowing the router to
//! be driven in-process by tests and reused by the binary.
//!
//! # Architecture
//!
//! - Axum web framework
//! - A single in-memory store seeded at startup (no database; all
//!   non-upload state resets on restart)
//! - One served HTML document embedding the reactive admin client
//! - REST API for the product catalog and broadcast log
//!
//! # Security
//!
//! The admin "login" is compared in the browser against literal constants
//! and is a cosmetic gate only, not a security boundary. Deploy behind
//! network-level protection if exposure matters.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
