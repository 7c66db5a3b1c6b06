//! Health route

use movies_infrastructure::AppContext;
use movies_infrastructure::health::HealthReport;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};

/// Backend status; 503 when the search backend is down
#[get("/health")]
pub async fn health(context: &State<AppContext>) -> (Status, Json<HealthReport>) {
    let report = context.health().await;
    let status = if report.status.is_operational() {
        Status::Ok
    } else {
        Status::ServiceUnavailable
    };
    (status, Json(report))
}
