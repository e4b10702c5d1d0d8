//! Presentation layer: command-line front-end.

mod app;

pub use app::{App, open_storage};
