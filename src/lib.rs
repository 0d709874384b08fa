//! This project is split in 2 main modules:
//!
//! - [api] (inbound relay surface)
//! - [gateway] (Flutterwave API client)
#![doc = include_str!("../README.md")]

/// Inbound HTTP surface
///
/// This module defines the relay's own routes, request validation, and the
/// mapping of failures onto HTTP responses.
pub mod api;
pub mod config;
/// Flutterwave integration
///
/// This module defines the types and methods to communicate with the
/// Flutterwave bill-payment API.
pub mod gateway;
pub mod state;
