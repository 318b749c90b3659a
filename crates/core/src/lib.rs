//! Printforge Core - Shared types library.
//!
//! This crate provides common types used across all Printforge components:
//! - `storefront` - Public print-on-demand storefront service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, order
//!   statuses, payment methods, and design-position descriptors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
