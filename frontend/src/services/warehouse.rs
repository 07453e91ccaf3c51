//! HTTP service for the warehouse ingest endpoints.
//!
//! Covers the two upload-widget operations: pushing a data file into a
//! target table and triggering server-side processing of previously
//! uploaded data.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, ProcessResponse, TableName, UploadResponse};

/// Uploads a data file to the backend for the given target table.
///
/// Sends a single multipart request with the file bytes under `file` and
/// the table identifier under `tableName`.
pub async fn upload_file(
    file: File,
    table: TableName,
    backend_url: &str,
) -> AppResult<UploadResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", &file)
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
    form_data
        .append_with_str("tableName", table.as_str())
        .map_err(|e| AppError::Network(format!("Failed to append table name: {:?}", e)))?;

    let url = format!("{}/upload", backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
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
        .json::<UploadResponse>()
        .await
        .map_err(|e| AppError::Api(format!("Failed to parse response: {}", e)))
}

/// Triggers server-side processing of previously uploaded data.
///
/// No parameters are sent; the server knows what to process.
pub async fn process_data(backend_url: &str) -> AppResult<ProcessResponse> {
    let url = format!("{}/process", backend_url);
    let response = Request::post(&url)
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
        .json::<ProcessResponse>()
        .await
        .map_err(|e| AppError::Api(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::{ProcessResponse, UploadResponse};

    #[test]
    fn upload_response_deserialization() {
        let json = r#"{ "processed": 42 }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.processed, 42);
    }

    #[test]
    fn process_response_deserialization() {
        let json = r#"{ "message": "Star schema refreshed for 5 tables" }"#;

        let response: ProcessResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Star schema refreshed for 5 tables");
    }
}
