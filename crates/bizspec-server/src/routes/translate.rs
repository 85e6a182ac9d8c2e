use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bizspec_core::{BizspecError, TranslateRequest, Translation};
use bizspec_llm::LlmError;
use bizspec_service::TranslateError;
use serde_json::{json, Value};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/translate", post(translate))
}

async fn translate(
    State(state): State<AppState>,
    body: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<Translation>, (StatusCode, Json<Value>)> {
    let request_id = Uuid::new_v4();
    let Json(input) = body.map_err(|e| {
        warn!(%request_id, "translate: unreadable body: {e}");
        error_body(StatusCode::UNPROCESSABLE_ENTITY, e.body_text())
    })?;
    let chars = input.business_requirement.chars().count();
    info!(%request_id, chars, "translate: request received");

    input.validate().map_err(|e| {
        warn!(%request_id, "translate: rejected: {e}");
        invalid_input(e)
    })?;

    let translator = state.translator.as_ref().ok_or_else(|| {
        error!(%request_id, "translate: no API key configured");
        to_error(TranslateError::Configuration(LlmError::MissingApiKey.to_string()))
    })?;

    match translator.translate(&input.business_requirement).await {
        Ok(result) => {
            info!(%request_id, "translate: completed");
            Ok(Json(result))
        }
        Err(e) => {
            error!(%request_id, "translate: failed: {e}");
            Err(to_error(e))
        }
    }
}

/// Error response carrying the message under both `detail` (read by the
/// web frontend) and `error`.
fn error_body(status: StatusCode, msg: String) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": msg, "error": msg })))
}

fn invalid_input(e: BizspecError) -> (StatusCode, Json<Value>) {
    error_body(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
}

fn to_error(e: TranslateError) -> (StatusCode, Json<Value>) {
    let msg = match &e {
        TranslateError::Configuration(_) => e.to_string(),
        TranslateError::Upstream(_) => format!("translation failed: {e}"),
    };
    error_body(StatusCode::INTERNAL_SERVER_ERROR, msg)
}
