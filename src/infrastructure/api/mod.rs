//! Chatters backend client.

mod auth_client;
mod client;
pub mod dto;

pub use auth_client::ChattersAuthClient;
pub use client::ApiClient;
