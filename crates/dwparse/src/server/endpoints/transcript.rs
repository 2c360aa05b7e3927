//! API endpoints for transcript parsing.
//!
//! These endpoints accept an uploaded DegreeWorks-style report (or its
//! already-flattened text) and return the structured academic record.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::server::types::ApiErrorType;
use crate::transcript::{self, cache::DocumentKey, TranscriptError, TranscriptRecord};
use crate::types::AppState;

/// Response body for a successful parse.
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    #[serde(flatten)]
    pub record: TranscriptRecord,

    #[serde(rename = "parsedAt")]
    pub parsed_at: DateTime<Utc>,

    /// True when the record was served from the parse cache
    pub cached: bool,
}

/// Converts TranscriptError to API response.
fn transcript_error_to_response(error: TranscriptError) -> Response {
    let (status, message) = match &error {
        TranscriptError::EmptyDocument => (StatusCode::BAD_REQUEST, "Request body is empty"),
        TranscriptError::NoDataExtracted => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "No recognizable transcript data in document",
        ),
        TranscriptError::ExtractionFailed { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Could not decode the uploaded PDF",
        ),
    };

    ApiErrorType::from((status, message, Some(error.to_string()))).into_response()
}

/// POST /transcript
///
/// Body is the raw PDF byte stream. Decodes the document, parses the
/// flattened text, and returns the structured record. Results are cached
/// by document digest so re-uploads of the same file skip the decode.
pub async fn post_parse_pdf(State(s): State<Arc<AppState>>, body: Bytes) -> Response {
    info!("POST /transcript - Parsing uploaded PDF ({} bytes)", body.len());

    if body.is_empty() {
        return transcript_error_to_response(TranscriptError::EmptyDocument);
    }

    let key = DocumentKey::from_bytes(&body);
    if let Some(record) = s.parse_cache.get(&key) {
        info!("Cache hit for document {key}");
        return (
            StatusCode::OK,
            Json(TranscriptResponse {
                record,
                parsed_at: Utc::now(),
                cached: true,
            }),
        )
            .into_response();
    }

    // PDF decoding is CPU-bound, keep it off the async workers
    let parse_result = tokio::task::spawn_blocking(move || transcript::parse_pdf(&body)).await;

    match parse_result {
        Ok(Ok(record)) => {
            s.parse_cache.insert(key, record.clone());
            (
                StatusCode::OK,
                Json(TranscriptResponse {
                    record,
                    parsed_at: Utc::now(),
                    cached: false,
                }),
            )
                .into_response()
        }
        Ok(Err(e)) => {
            warn!("Failed to parse uploaded document {key}: {e}");
            transcript_error_to_response(e)
        }
        Err(e) => {
            error!("Parse task failed: {e}");
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error while parsing document",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}

/// POST /transcript/text
///
/// Body is already-flattened report text. Skips the PDF decode; mainly a
/// debugging and integration path.
pub async fn post_parse_text(body: String) -> Response {
    info!(
        "POST /transcript/text - Parsing flattened text ({} chars)",
        body.len()
    );

    match transcript::parse_transcript_text(&body) {
        Ok(record) => (
            StatusCode::OK,
            Json(TranscriptResponse {
                record,
                parsed_at: Utc::now(),
                cached: false,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to parse submitted text: {e}");
            transcript_error_to_response(e)
        }
    }
}

/// GET /transcript/cache_stats
///
/// Returns cache statistics for monitoring.
pub async fn get_cache_stats(State(s): State<Arc<AppState>>) -> Response {
    let stats = s.parse_cache.stats();
    (
        StatusCode::OK,
        Json(json!({
            "total_entries": stats.total_entries,
            "active_entries": stats.active_entries,
            "expired_entries": stats.expired_entries,
        })),
    )
        .into_response()
}

/// POST /transcript/invalidate_cache
///
/// Invalidates the parse cache.
pub async fn invalidate_cache(State(s): State<Arc<AppState>>) -> Response {
    info!("POST /transcript/invalidate_cache");

    s.parse_cache.clear();

    (StatusCode::OK, Json(json!({ "message": "Cache invalidated" }))).into_response()
}
