use axum::Json;
use contracts::domain::a003_area::aggregate::Area;

use crate::domain::a003_area;
use crate::shared::warehouse::client::get_client;

/// GET /api/area
pub async fn list_all() -> Result<Json<Vec<Area>>, axum::http::StatusCode> {
    match a003_area::service::list_all(get_client()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to resolve areas: {}", e);
            Err(axum::http::StatusCode::BAD_GATEWAY)
        }
    }
}
