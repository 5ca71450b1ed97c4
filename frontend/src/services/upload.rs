//! HTTP upload service: the default transfer behind the dropzone.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::{api_url, AppError, AppResult, MAX_FILE_SIZE, UPLOAD_PATH};

/// Backend response for a stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Identifier of the stored file, absent when the server kept nothing
    pub id: Option<String>,
    pub name: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
}

/// Reject files the server would refuse anyway.
pub fn check_file_size(size: f64) -> AppResult<()> {
    if size > MAX_FILE_SIZE as f64 {
        return Err(AppError::Validation(format!(
            "File is too large ({:.1} MB, max {} MB)",
            size / (1024.0 * 1024.0),
            MAX_FILE_SIZE / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Upload a file to the server, returning its identifier.
pub async fn upload_file(file: File, server_url: Option<String>) -> AppResult<Option<String>> {
    check_file_size(file.size())?;

    log::info!("📤 Uploading {} ({})", file.name(), file.type_());

    // Build the multipart body
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    let url = api_url(server_url.as_deref(), UPLOAD_PATH);
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
        return Err(AppError::Upload(format!(
            "Server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    let body = response
        .json::<UploadResponse>()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to parse response: {}", e)))?;

    Ok(body.id)
}
