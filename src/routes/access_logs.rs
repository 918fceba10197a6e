use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};

use crate::{
    dto::access_logs::{AccessLogList, AccessLogStats},
    error::AppResult,
    models::AccessLog,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_access))
        .route("/", get(list_access_logs))
        .route("/stats", get(access_log_stats))
}

// First hop of X-Forwarded-For when present; the service has no direct
// view of the peer address behind a proxy.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[utoipa::path(
    post,
    path = "/api/logs",
    responses(
        (status = 201, description = "Record an access log entry", body = ApiResponse<AccessLog>),
    ),
    tag = "Access Logs"
)]
pub async fn record_access(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<(StatusCode, Json<ApiResponse<AccessLog>>)> {
    let ip = client_ip(&headers);
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    let log = state.access_logs.record(ip, user_agent).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Access recorded",
            log,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Recent access log entries", body = ApiResponse<AccessLogList>),
    ),
    tag = "Access Logs"
)]
pub async fn list_access_logs(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AccessLogList>>> {
    let (items, total) = state.access_logs.list_recent().await?;
    Ok(Json(ApiResponse::success(
        "Access logs",
        AccessLogList { items },
        Some(Meta::total(total)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/logs/stats",
    responses(
        (status = 200, description = "Hit count grouped by ip", body = ApiResponse<AccessLogStats>),
    ),
    tag = "Access Logs"
)]
pub async fn access_log_stats(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AccessLogStats>>> {
    let items = state.access_logs.stats().await?;
    Ok(Json(ApiResponse::success(
        "Access log stats",
        AccessLogStats { items },
        Some(Meta::empty()),
    )))
}
