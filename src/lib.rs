//! Keyword search over a Notion workspace.
//!
//! The binary reads `NOTION_API_KEY`, searches for a keyword (falling back
//! to a title match over the whole workspace when the API finds nothing)
//! and prints the most recently edited pages and data sources.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod notion;
pub mod search;
