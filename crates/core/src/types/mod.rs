//! Core types for Printforge.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod position;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{CurrencyCode, Price};
pub use position::{
    clamp_offset, DesignPosition, MAX_OFFSET_PCT, MAX_SCALE_PCT, MIN_OFFSET_PCT, MIN_SCALE_PCT,
};
pub use status::{OrderStatus, PaymentMethod, PROGRESS_STEPS};
