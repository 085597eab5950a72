//! Debate Platform Core - Shared types library.
//!
//! This crate provides the types shared by the client library and the CLI:
//! - typed IDs for users, topics, debates and rounds
//! - the status vocabulary with display labels and color classes
//! - request and response shapes for every backend endpoint
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//!
//! # Modules
//!
//! - [`types`] - IDs, statuses and payload shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
