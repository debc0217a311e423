use axum::Json;
use contracts::domain::a002_brand::aggregate::Brand;

use crate::domain::a002_brand;
use crate::shared::warehouse::client::get_client;

/// GET /api/brand
pub async fn list_all() -> Result<Json<Vec<Brand>>, axum::http::StatusCode> {
    match a002_brand::service::list_all(get_client()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to resolve brands: {}", e);
            Err(axum::http::StatusCode::BAD_GATEWAY)
        }
    }
}
