//! API Client
//!
//! Typed HTTP access to the presence analyzer REST API.

pub mod client;

pub use client::*;
