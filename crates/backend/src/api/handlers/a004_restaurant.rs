use axum::extract::Query;
use axum::Json;
use contracts::domain::a004_restaurant::aggregate::Restaurant;
use serde::Deserialize;

use crate::domain::a004_restaurant::{self, service::RestaurantFilter};
use crate::shared::warehouse::client::get_client;

/// Параметры списка ресторанов; id перечисляются через запятую
#[derive(Debug, Deserialize)]
pub struct RestaurantListParams {
    pub company_id: Option<String>,
    pub brand_id: Option<String>,
}

/// Пустой параметр (`?company_id=`) - явный фильтр без значений,
/// отсутствующий параметр - отсутствие ограничения
fn split_ids(raw: Option<&String>) -> Option<Vec<String>> {
    raw.map(|s| {
        s.split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    })
}

/// GET /api/restaurant?company_id=…&brand_id=…
pub async fn list_all(
    Query(params): Query<RestaurantListParams>,
) -> Result<Json<Vec<Restaurant>>, axum::http::StatusCode> {
    let filter = RestaurantFilter {
        company_ids: split_ids(params.company_id.as_ref()),
        brand_ids: split_ids(params.brand_id.as_ref()),
    };

    match a004_restaurant::service::list_filtered(get_client(), filter).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to resolve restaurants: {}", e);
            Err(axum::http::StatusCode::BAD_GATEWAY)
        }
    }
}
