//! Application configuration.
//!
//! Centralized configuration for the data warehouse frontend.
//! In development these are hardcoded. In production they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The warehouse backend serving the upload, process and eligibility
/// endpoints.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Application title shown in the page header.
pub const APP_NAME: &str = "Airline Data Warehouse System";
