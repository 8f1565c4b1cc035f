//! Connectivity check.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

/// Body returned by [`ping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    /// Always `"pong"`.
    pub message: String,
}

/// Answer `{"message": "pong"}`.
#[utoipa::path(
    get,
    path = "/ping",
    tags = ["health"],
    responses((status = 200, description = "Server answered", body = crate::inbound::http::schemas::PingSchema))
)]
#[get("/ping")]
pub async fn ping() -> web::Json<PingResponse> {
    web::Json(PingResponse {
        message: "pong".to_owned(),
    })
}
