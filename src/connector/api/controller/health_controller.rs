use axum::Json;

use super::super::response::Envelope;

pub const HEALTHY_MESSAGE: &str = "User registry API is running";

pub async fn health_check() -> Json<Envelope> {
    Json(Envelope::healthy(HEALTHY_MESSAGE))
}
