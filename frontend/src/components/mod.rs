//! UI Components for the data warehouse frontend.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Static page header
//!
//! # Feature Components
//! - [`UploadSection`] - Data file upload and processing trigger
//! - [`EligibilitySection`] - Insurance eligibility lookup

mod eligibility;
mod header;
mod upload;

pub use eligibility::*;
pub use header::*;
pub use upload::*;
