//! HTTP service for the insurance eligibility lookup.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, EligibilityRecord, SearchQuery};

/// Looks up insurance eligibility records matching the query.
///
/// All four criteria are sent as query parameters, empty ones included;
/// the backend returns a JSON array of matching records (possibly empty).
pub async fn check_eligibility(
    query: &SearchQuery,
    backend_url: &str,
) -> AppResult<Vec<EligibilityRecord>> {
    let url = format!("{}/check-eligibility", backend_url);
    let response = Request::get(&url)
        .query(query.query_pairs())
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Api(format!(
            "{}: {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<Vec<EligibilityRecord>>()
        .await
        .map_err(|e| AppError::Api(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::EligibilityRecord;

    #[test]
    fn result_collection_deserialization() {
        let json = r#"[
            {
                "IsEligible": true,
                "FlightKey": "AA100",
                "PassengerKey": "P123"
            },
            {
                "IsEligible": false,
                "message": "Claim already filed"
            }
        ]"#;

        let records: Vec<EligibilityRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_eligible);
        assert_eq!(records[0].flight_key.as_deref(), Some("AA100"));
        assert!(!records[1].is_eligible);
    }

    #[test]
    fn empty_collection_deserialization() {
        let records: Vec<EligibilityRecord> = serde_json::from_str("[]").unwrap();
        assert!(records.is_empty());
    }
}
