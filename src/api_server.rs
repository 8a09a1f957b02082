// Axum API server module
//
// HTTP delivery layer around the analysis core: serves the upload form,
// accepts multipart image uploads, validates the crop type, persists the
// upload, and runs the CPU-bound pipeline on the blocking thread pool.

use std::path::Path;

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::analyzer::{analyze_crop_image, CropAnalysis};
use crate::crop::CropType;
use crate::error::AnalysisError;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Directory where uploads are stored before analysis
    pub upload_dir: String,
}

impl AppState {
    /// Create the state and ensure the upload directory exists.
    pub fn new(upload_dir: &str) -> anyhow::Result<Self> {
        std::fs::create_dir_all(upload_dir)?;
        Ok(Self {
            upload_dir: upload_dir.to_string(),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Upload form
        .route("/", get(index))
        // Health check
        .route("/health", get(health_check))
        // Analysis endpoint (multipart: file + crop_type)
        .route("/analyze", post(analyze_crop))
        // Stored uploads
        .nest_service("/static/uploads", ServeDir::new(&state.upload_dir))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    crops: Vec<&'static str>,
}

async fn index() -> IndexTemplate {
    IndexTemplate {
        crops: CropType::sorted_names(),
    }
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn analyze_crop(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut crop_field: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<axum::body::Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed upload: {e}")))?
    {
        let part = field.name().map(ToString::to_string);
        match part.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(ToString::to_string);
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?,
                );
            }
            Some("crop_type") => {
                crop_field = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read crop type: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let bytes = file_bytes.ok_or_else(|| AppError::BadRequest("No file part".to_string()))?;
    let file_name = file_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest("No selected file".to_string()))?;
    let crop: CropType = crop_field
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|_| AppError::BadRequest("Please select a valid crop type".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::BadRequest("No selected file".to_string()));
    }

    // Keep only the final path component of the client-supplied name
    let safe_name = Path::new(&file_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or(file_name);

    let dest = Path::new(&state.upload_dir).join(&safe_name);
    tokio::fs::write(&dest, &bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store upload: {e}")))?;

    tracing::info!(
        "Analyzing {} upload '{}' ({} bytes)",
        crop,
        safe_name,
        bytes.len()
    );

    // CPU-bound work: decode and analyze on the blocking thread pool
    let analysis = tokio::task::spawn_blocking(move || -> Result<CropAnalysis, AnalysisError> {
        let img = image::load_from_memory(&bytes)?.to_rgb8();
        analyze_crop_image(&img, crop)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {e}")))?
    .map_err(AppError::Analysis)?;

    Ok(Json(serde_json::json!({
        "filename": safe_name,
        "crop_type": analysis.crop.as_str(),
        "health_status": analysis.health.status.as_str(),
        "health_score": analysis.health.score,
        "green_percentage": analysis.health.green_percentage,
        "yellow_percentage": analysis.health.yellow_percentage,
        "texture_complexity": analysis.health.texture_complexity,
        "recommendations": analysis.recommendations,
    })))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request (missing file, unknown crop type)
    BadRequest(String),
    /// The analysis core rejected the input
    Analysis(AnalysisError),
    /// Unexpected server-side failure
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Analysis(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.user_message()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
