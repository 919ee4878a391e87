use crate::{
    inference::APPLICATION_JSON,
    relay::{PredictionRelay, ProxyEvent, ProxyResponse},
};
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<PredictionRelay>,
}

/// Treats the raw request body as the event body and answers with the
/// relay's status code and body.
pub async fn predict(State(state): State<AppState>, body: String) -> Response {
    let request_id = Uuid::new_v4().to_string();
    info!("[{}] Received prediction request", request_id);

    let ProxyResponse { status_code, body } =
        state.relay.handle(ProxyEvent::new(body), &request_id).await;
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, [(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response()
}

/// Accepts a whole proxy event and returns the proxy response, the same
/// exchange the Lambda runtime performs.
pub async fn invoke(
    State(state): State<AppState>,
    Json(event): Json<ProxyEvent>,
) -> Json<ProxyResponse> {
    let request_id = Uuid::new_v4().to_string();
    info!("[{}] Received proxy event", request_id);

    Json(state.relay.handle(event, &request_id).await)
}
