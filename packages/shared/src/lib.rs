//! Shared utilities for the DrawTogether server and client.

pub mod logger;
pub mod time;
