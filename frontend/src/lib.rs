//! Airline Data Warehouse - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the airline data warehouse demo: upload data
//! files into warehouse tables, trigger server-side processing, and check
//! passengers' insurance eligibility.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (static title)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadSection (file upload + processing trigger)       │
//! │  └── EligibilitySection (insurance eligibility lookup)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two sections are fully independent; no data flows between them.
//!
//! # Modules
//!
//! - [`types`] - Common types (TableName, EligibilityRecord, etc.)
//! - [`components`] - UI components (Header, Upload, Eligibility)
//! - [`services`] - Backend communication (warehouse, eligibility)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Warehouse
    TableName, UploadResponse, ProcessResponse,
    // Eligibility
    SearchQuery, EligibilityRecord,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Airline Data Warehouse - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <UploadSection/>
            <EligibilitySection/>
        </div>
    }
}
