//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use imply_core::{
    AnalysisSession, Classification, ComparisonReport, Dataset, DatasetError, ImplyError,
    NumericTest,
};
use imply_io::{CsvReader, TableReader};

use crate::AppState;

/// Number of preview rows returned after upload
const PREVIEW_ROWS: usize = 5;

/// Query parameters for dataset upload
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Display name for the uploaded dataset
    pub name: Option<String>,
}

/// Per-column schema entry with its classification
#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub classification: Classification,
}

/// Response after a successful upload
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub dataset_name: String,
    pub created_at: String,
    pub num_records: usize,
    pub columns: Vec<ColumnInfo>,
    /// First few rows as display strings
    pub preview: Vec<Vec<String>>,
}

fn session_response(session: &AnalysisSession) -> SessionResponse {
    let dataset = session.dataset();
    let columns = dataset
        .columns()
        .iter()
        .map(|c| ColumnInfo {
            name: c.name.clone(),
            dtype: format!("{:?}", c.data.dtype()),
            classification: Classification::of_column(&c.data),
        })
        .collect();

    SessionResponse {
        session_id: session.id.clone(),
        dataset_name: dataset.name.clone(),
        created_at: session.created_at.clone(),
        num_records: dataset.num_rows(),
        columns,
        preview: dataset.head(PREVIEW_ROWS),
    }
}

/// Upload a CSV body and open a session around it
///
/// The body is the raw CSV text; the optional `name` query parameter
/// labels the dataset.
pub async fn upload_dataset(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UploadQuery>,
    body: String,
) -> Result<Json<SessionResponse>, (StatusCode, String)> {
    let reader =
        CsvReader::parse_str(body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let name = query.name.unwrap_or_else(|| "upload.csv".to_string());
    let dataset =
        Dataset::from_reader(name, &reader as &dyn TableReader).map_err(error_response)?;

    let session = AnalysisSession::new(dataset);
    let response = session_response(&session);

    tracing::info!(
        session_id = %session.id,
        records = response.num_records,
        columns = response.columns.len(),
        "Dataset uploaded"
    );

    let mut sessions = state.sessions.write().await;
    sessions.insert(session.id.clone(), session);

    Ok(Json(response))
}

/// Get a session's schema and classifications
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    sessions
        .get(&id)
        .map(|s| Json(session_response(s)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Delete a session
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    sessions
        .remove(&id)
        .map(|_| {
            Json(serde_json::json!({
                "success": true,
                "session_id": id
            }))
        })
        .ok_or(StatusCode::NOT_FOUND)
}

/// Request to compare two columns
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub first: String,
    pub second: String,
    /// Required when both columns are numeric: "t-test" or "mann-whitney"
    pub numeric_test: Option<String>,
}

fn parse_numeric_test(s: &str) -> Option<NumericTest> {
    match s.to_lowercase().as_str() {
        "t-test" | "ttest" | "t_test" => Some(NumericTest::TTest),
        "mann-whitney" | "mannwhitney" | "mann_whitney" | "u-test" | "utest" => {
            Some(NumericTest::MannWhitney)
        }
        _ => None,
    }
}

/// Run a comparison within a session
///
/// Any failure aborts only this comparison; the session stays usable
/// for a new selection.
pub async fn compare_columns(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ComparisonReport>, (StatusCode, String)> {
    let choice = match request.numeric_test.as_deref() {
        Some(s) => Some(parse_numeric_test(s).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unknown numeric test: {}", s),
            )
        })?),
        None => None,
    };

    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Session not found: {}", id)))?;

    let report = session
        .compare(&request.first, &request.second, choice)
        .map_err(error_response)?;

    tracing::debug!(
        session_id = %id,
        first = %request.first,
        second = %request.second,
        test = %report.test.kind,
        p_value = report.test.p_value,
        "Comparison complete"
    );

    Ok(Json(report))
}

/// Get system status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let sessions = state.sessions.read().await;
    Json(serde_json::json!({
        "sessions": sessions.len()
    }))
}

/// Map core errors onto HTTP statuses, keeping the underlying cause
fn error_response(error: ImplyError) -> (StatusCode, String) {
    let status = match &error {
        ImplyError::Io(_) => StatusCode::BAD_REQUEST,
        ImplyError::Dataset(DatasetError::ColumnNotFound { .. }) => StatusCode::NOT_FOUND,
        ImplyError::Dataset(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ImplyError::Selection(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ImplyError::Computation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ImplyError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
    };
    (status, error.to_string())
}
