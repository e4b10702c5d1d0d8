//! Chatters client - session, routing and authenticated HTTP for the chatters backend.
//!
//! This crate keeps a signed-in user and bearer token across runs, attaches the
//! token to backend requests, and gates client-side routes on login state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the session store, router and guards.
pub mod application;
/// Domain layer containing entities, errors, routes and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the command-line front-end.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "chatters";
