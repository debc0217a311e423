use axum::Json;
use contracts::domain::a001_company::aggregate::Company;

use crate::domain::a001_company;
use crate::shared::warehouse::client::get_client;

/// GET /api/company
pub async fn list_all() -> Result<Json<Vec<Company>>, axum::http::StatusCode> {
    match a001_company::service::list_all(get_client()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to resolve companies: {}", e);
            Err(axum::http::StatusCode::BAD_GATEWAY)
        }
    }
}
