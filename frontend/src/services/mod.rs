//! Backend communication services.
//!
//! This module provides one function per backend endpoint:
//!
//! # Services
//!
//! - [`warehouse`] - File upload and server-side processing
//! - [`eligibility`] - Insurance eligibility lookup

pub mod eligibility;
pub mod warehouse;

pub use eligibility::*;
pub use warehouse::*;
