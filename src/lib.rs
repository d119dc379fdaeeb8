//! Browser comic viewer.
//!
//! Loads one comic at a time from a JSON endpoint and lets the reader step
//! backwards and forwards, jump to a random strip, or search by number.
//! Everything that does not touch the DOM (fetch state tracking, navigation
//! rules, configuration) is plain Rust and tested natively.

pub mod app;
pub mod comic;
pub mod components;
pub mod config;
pub mod fetch;
pub mod random;
pub mod request;
pub mod view;

#[cfg(test)]
mod testing;
