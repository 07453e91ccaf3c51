//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Warehouse Types** - Target tables and upload/process responses
//! - **Eligibility Types** - Search query and eligibility records
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Warehouse Types
// =============================================================================

/// Target table for a data file upload.
///
/// The warehouse exposes a fixed, closed set of tables; the upload form
/// only ever sends one of these identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableName {
    #[default]
    Airlines,
    Airports,
    Flights,
    Passengers,
    Sales,
}

impl TableName {
    /// All selectable tables, in the order the form lists them.
    pub const ALL: [TableName; 5] = [
        TableName::Airlines,
        TableName::Airports,
        TableName::Flights,
        TableName::Passengers,
        TableName::Sales,
    ];

    /// Wire identifier sent as the `tableName` multipart field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Airlines => "airlines",
            TableName::Airports => "airports",
            TableName::Flights => "flights",
            TableName::Passengers => "passengers",
            TableName::Sales => "sales",
        }
    }

    /// Human-readable label for the `<select>` option.
    pub fn label(&self) -> &'static str {
        match self {
            TableName::Airlines => "Airlines",
            TableName::Airports => "Airports",
            TableName::Flights => "Flights",
            TableName::Passengers => "Passengers",
            TableName::Sales => "Sales",
        }
    }
}

impl FromStr for TableName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown table: {}", s)))
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that a file has been picked before an upload is attempted.
///
/// Returns the file when present, or a validation error for the caller to
/// surface; no request is issued on the error path.
pub fn require_selected_file<F>(file: Option<F>) -> AppResult<F> {
    file.ok_or_else(|| AppError::Validation("Please select a file first".to_string()))
}

/// Response from the backend upload endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Number of records the server processed from the uploaded file.
    pub processed: u64,
}

impl UploadResponse {
    /// Status line shown after a successful upload.
    pub fn status_line(&self) -> String {
        format!("Upload successful! Processed {} records", self.processed)
    }
}

/// Response from the backend process endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Free-form server message describing what was processed.
    pub message: String,
}

impl ProcessResponse {
    /// Status line shown after processing completes.
    pub fn status_line(&self) -> String {
        format!("Processing completed! {}", self.message)
    }
}

// =============================================================================
// Eligibility Types
// =============================================================================

/// Search criteria for the eligibility lookup.
///
/// All fields are optional on the wire, but at least one of name and
/// flight id must be non-empty before a request is sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub name: String,
    pub flight_id: String,
    pub baggage: String,
    pub date: String,
}

impl SearchQuery {
    /// Checks the minimal required input before any request is issued.
    ///
    /// Returns a validation error when both name and flight id are empty;
    /// presentation of the error is left to the caller.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() && self.flight_id.is_empty() {
            return Err(AppError::Validation(
                "Please enter either name or flight ID".to_string(),
            ));
        }
        Ok(())
    }

    /// Wire query parameters, empty fields included.
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("flightID", self.flight_id.as_str()),
            ("baggage", self.baggage.as_str()),
            ("date", self.date.as_str()),
        ]
    }
}

/// One eligibility record as returned by the backend.
///
/// The server uses PascalCase keys except for `message`; unknown extra
/// fields are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRecord {
    #[serde(rename = "IsEligible")]
    pub is_eligible: bool,
    #[serde(rename = "FlightKey", default, skip_serializing_if = "Option::is_none")]
    pub flight_key: Option<String>,
    #[serde(rename = "PassengerKey", default, skip_serializing_if = "Option::is_none")]
    pub passenger_key: Option<String>,
    /// Server-supplied reason. Synthesized locally for the empty-result and
    /// request-failure cases; intentionally not rendered in the verdict
    /// branches, matching the original UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EligibilityRecord {
    /// Synthesized record shown when the server returns an empty collection.
    pub fn no_records() -> Self {
        EligibilityRecord {
            is_eligible: false,
            flight_key: None,
            passenger_key: None,
            message: Some("No records found".to_string()),
        }
    }

    /// Synthesized record shown when the search request itself fails.
    pub fn search_error() -> Self {
        EligibilityRecord {
            is_eligible: false,
            flight_key: None,
            passenger_key: None,
            message: Some("Error searching records".to_string()),
        }
    }

    /// Collapses a server result collection into the displayed record:
    /// the first element verbatim, or the synthesized no-records verdict.
    pub fn from_results(results: Vec<EligibilityRecord>) -> Self {
        results
            .into_iter()
            .next()
            .unwrap_or_else(EligibilityRecord::no_records)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Missing or malformed user input, caught before any request.
    Validation(String),
    /// Network/HTTP failure reaching the backend.
    Network(String),
    /// Backend replied with a non-success status.
    Api(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Api(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_roundtrips_through_wire_identifier() {
        for table in TableName::ALL {
            assert_eq!(table.as_str().parse::<TableName>(), Ok(table));
        }
        assert!("bookings".parse::<TableName>().is_err());
    }

    #[test]
    fn table_name_defaults_to_airlines() {
        assert_eq!(TableName::default(), TableName::Airlines);
    }

    #[test]
    fn upload_requires_a_selected_file() {
        let err = require_selected_file(None::<&str>).unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("Please select a file first".to_string())
        );
        assert_eq!(require_selected_file(Some("flights.csv")), Ok("flights.csv"));
    }

    #[test]
    fn upload_status_line_embeds_processed_count() {
        let response = UploadResponse { processed: 42 };
        assert_eq!(
            response.status_line(),
            "Upload successful! Processed 42 records"
        );
    }

    #[test]
    fn process_status_line_embeds_server_message() {
        let response = ProcessResponse {
            message: "Star schema refreshed for 5 tables".to_string(),
        };
        assert_eq!(
            response.status_line(),
            "Processing completed! Star schema refreshed for 5 tables"
        );
    }

    #[test]
    fn search_query_requires_name_or_flight_id() {
        let empty = SearchQuery::default();
        assert!(empty.validate().is_err());

        let by_name = SearchQuery {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        assert!(by_name.validate().is_ok());

        let by_flight = SearchQuery {
            flight_id: "AA100".to_string(),
            ..Default::default()
        };
        assert!(by_flight.validate().is_ok());
    }

    #[test]
    fn query_pairs_include_empty_fields() {
        let query = SearchQuery {
            flight_id: "AA100".to_string(),
            ..Default::default()
        };
        assert_eq!(
            query.query_pairs(),
            [
                ("name", ""),
                ("flightID", "AA100"),
                ("baggage", ""),
                ("date", ""),
            ]
        );
    }

    #[test]
    fn eligibility_record_uses_server_field_names() {
        let json = r#"{
            "IsEligible": true,
            "FlightKey": "AA100",
            "PassengerKey": "P123"
        }"#;
        let record: EligibilityRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_eligible);
        assert_eq!(record.flight_key.as_deref(), Some("AA100"));
        assert_eq!(record.passenger_key.as_deref(), Some("P123"));
        assert_eq!(record.message, None);
    }

    #[test]
    fn eligibility_record_tolerates_extra_fields() {
        let json = r#"{
            "IsEligible": false,
            "message": "Policy expired",
            "BaggageStatus": "checked",
            "RowVersion": 7
        }"#;
        let record: EligibilityRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_eligible);
        assert_eq!(record.message.as_deref(), Some("Policy expired"));
        assert_eq!(record.flight_key, None);
    }

    #[test]
    fn from_results_takes_first_element_verbatim() {
        let first = EligibilityRecord {
            is_eligible: true,
            flight_key: Some("AA100".to_string()),
            passenger_key: Some("P123".to_string()),
            message: None,
        };
        let second = EligibilityRecord::no_records();
        let shown = EligibilityRecord::from_results(vec![first.clone(), second]);
        assert_eq!(shown, first);
    }

    #[test]
    fn from_results_synthesizes_no_records_verdict() {
        let shown = EligibilityRecord::from_results(vec![]);
        assert_eq!(
            shown,
            EligibilityRecord {
                is_eligible: false,
                flight_key: None,
                passenger_key: None,
                message: Some("No records found".to_string()),
            }
        );
    }

    #[test]
    fn search_error_verdict_is_exact() {
        let shown = EligibilityRecord::search_error();
        assert!(!shown.is_eligible);
        assert_eq!(shown.message.as_deref(), Some("Error searching records"));
    }
}
