//! Notion search API: wire types, title extraction and the HTTP client.

pub mod client;
pub mod models;
pub mod title;

pub use client::{SearchApi, SearchClient};
pub use models::{SearchRequest, SearchResult};
