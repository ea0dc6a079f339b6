//! Terminal client for a remote movie listing.
//!
//! Fetches movies from a JSON endpoint, retries a failed fetch on a fixed
//! period until it succeeds or the user cancels, and lets the user add and
//! delete movies either locally or through the endpoint.

pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod movies;
pub mod ui;
