use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    delete_output_path, ActionResponse, ProcessRequest, ProcessResponse, ProgressStatus,
    SaveOutputRequest, SaveOutputResponse, SavedNoteSummary, SavedNotesResponse,
    CLEAR_SAVED_PATH, PROCESS_PATH, PROGRESS_PATH, SAVED_OUTPUTS_PATH, SAVE_OUTPUT_PATH,
};
use thiserror::Error;

use crate::config::api_base;

/// Failures talking to the research backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[source] gloo_net::Error),

    #[error("failed to serialize request: {0}")]
    Encode(#[source] gloo_net::Error),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse JSON: {0}")]
    Decode(#[source] gloo_net::Error),

    #[error("API error: {0}")]
    Rejected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response.json().await.map_err(ApiError::Decode)
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Rejected(error.unwrap_or_else(|| "API returned success=false".to_string()))
}

// ============================================================================
// Research run
// ============================================================================

pub async fn process_requirements(requirements: &[String]) -> ApiResult<ProcessResponse> {
    let request = ProcessRequest {
        requirements: requirements.to_vec(),
    };

    let response = Request::post(&endpoint(PROCESS_PATH))
        .json(&request)
        .map_err(ApiError::Encode)?
        .send()
        .await
        .map_err(ApiError::Request)?;

    read_json(response).await
}

pub async fn fetch_progress() -> ApiResult<ProgressStatus> {
    let response = Request::get(&endpoint(PROGRESS_PATH))
        .send()
        .await
        .map_err(ApiError::Request)?;

    read_json(response).await
}

// ============================================================================
// Saved notes
// ============================================================================

/// Returns the id of the new saved note, when the backend reports one.
pub async fn save_output(request: &SaveOutputRequest) -> ApiResult<Option<String>> {
    let response = Request::post(&endpoint(SAVE_OUTPUT_PATH))
        .json(request)
        .map_err(ApiError::Encode)?
        .send()
        .await
        .map_err(ApiError::Request)?;

    let data: SaveOutputResponse = read_json(response).await?;
    if !data.success {
        return Err(rejected(data.error));
    }

    Ok(data.id)
}

pub async fn fetch_saved_notes() -> ApiResult<Vec<SavedNoteSummary>> {
    let response = Request::get(&endpoint(SAVED_OUTPUTS_PATH))
        .send()
        .await
        .map_err(ApiError::Request)?;

    let data: SavedNotesResponse = read_json(response).await?;
    if !data.success {
        return Err(rejected(None));
    }

    Ok(data.outputs)
}

pub async fn delete_saved_note(id: &str) -> ApiResult<()> {
    let response = Request::delete(&endpoint(&delete_output_path(id)))
        .send()
        .await
        .map_err(ApiError::Request)?;

    let data: ActionResponse = read_json(response).await?;
    if !data.success {
        return Err(rejected(data.error));
    }

    Ok(())
}

pub async fn clear_saved_notes() -> ApiResult<()> {
    let response = Request::delete(&endpoint(CLEAR_SAVED_PATH))
        .send()
        .await
        .map_err(ApiError::Request)?;

    let data: ActionResponse = read_json(response).await?;
    if !data.success {
        return Err(rejected(data.error));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_without_message_uses_generic_text() {
        assert_eq!(
            rejected(None).to_string(),
            "API error: API returned success=false"
        );
        assert_eq!(
            rejected(Some("disk full".to_string())).to_string(),
            "API error: disk full"
        );
    }

    #[test]
    fn status_errors_name_the_code() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error: 500");
    }
}
