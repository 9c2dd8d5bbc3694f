//! News Digest - a top-headlines RSS reporter
//!
//! This crate fetches a configured list of RSS/Atom feeds, keeps the
//! entries from the recent past, and prints the most recent headlines as
//! a plain-text report.

pub mod aggregate;
pub mod config;
pub mod fetcher;
pub mod report;
