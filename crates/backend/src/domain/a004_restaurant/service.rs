use super::mapper;
use crate::domain::a002_brand;
use crate::shared::resolution::address::normalize_address;
use crate::shared::resolution::filter::IdFilter;
use crate::shared::resolution::grouping::group_by_key;
use crate::shared::resolution::snapshot::resolve_current;
use crate::shared::warehouse::rows::RestaurantRow;
use crate::shared::warehouse::{DimensionSource, WarehouseError};
use contracts::domain::a004_restaurant::aggregate::Restaurant;
use contracts::enums::delivery_channel::DeliveryChannel;
use std::collections::HashSet;

/// Фильтры списка ресторанов
///
/// `None` - без ограничения; пустой список - явный фильтр, которому
/// ничего не соответствует.
#[derive(Debug, Clone, Default)]
pub struct RestaurantFilter {
    /// Ограничение по id компаний-владельцев
    pub company_ids: Option<Vec<String>>,
    /// Ограничение по брендам; принимает любой id из allIds бренда
    pub brand_ids: Option<Vec<String>>,
}

impl RestaurantFilter {
    pub fn is_empty(&self) -> bool {
        self.company_ids.is_none() && self.brand_ids.is_none()
    }
}

/// Разрешённый список ресторанов без ограничений
pub async fn list_all(source: &dyn DimensionSource) -> Result<Vec<Restaurant>, WarehouseError> {
    list_filtered(source, RestaurantFilter::default()).await
}

/// Разрешённый список ресторанов с фильтрами по компании и бренду
///
/// Строки адресов несут пер-портальный brand fk, поэтому оба фильтра
/// сводятся к эффективному набору сырых id брендов: бренды разрешаются
/// параллельно с загрузкой адресов, и в набор попадают `all_ids` брендов,
/// прошедших оба ограничения. Пустой эффективный набор означает "ничего
/// не совпало" и даёт пустой список, а не ошибку.
pub async fn list_filtered(
    source: &dyn DimensionSource,
    filter: RestaurantFilter,
) -> Result<Vec<Restaurant>, WarehouseError> {
    let (rows, brand_filter) = if filter.is_empty() {
        (source.restaurant_rows().await?, IdFilter::Unrestricted)
    } else {
        let (rows, brands) = tokio::join!(
            source.restaurant_rows(),
            a002_brand::service::list_all(source)
        );
        let rows = rows?;
        let brands = brands?;

        let company_filter = IdFilter::from_params(filter.company_ids);
        let requested_brands = IdFilter::from_params(filter.brand_ids);

        let mut effective: HashSet<String> = HashSet::new();
        for brand in &brands {
            let company_ok = match brand.company.id() {
                Some(id) => company_filter.allows(id),
                None => company_filter.is_unrestricted(),
            };
            let brand_ok =
                requested_brands.allows_any(brand.all_ids.iter().map(String::as_str));
            if company_ok && brand_ok {
                effective.extend(brand.all_ids.iter().cloned());
            }
        }

        (rows, IdFilter::Only(effective))
    };

    let fetched = rows.len();
    let current: Vec<RestaurantRow> = resolve_current(rows)
        .into_values()
        .filter(|row| {
            if brand_filter.is_unrestricted() {
                return true;
            }
            match row.brand_id {
                Some(id) => brand_filter.allows(&id.to_string()),
                // строка без бренда не может пройти активный фильтр
                None => false,
            }
        })
        .collect();

    let channels: HashSet<DeliveryChannel> = current
        .iter()
        .filter_map(|row| row.channel.as_deref().and_then(DeliveryChannel::from_code))
        .collect();

    let groups = group_by_key(current, |row| normalize_address(&row.street_address));

    let mut restaurants: Vec<Restaurant> = groups
        .into_iter()
        .map(|group| mapper::map_restaurant(group.primary, group.all_ids))
        .collect();
    restaurants.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    tracing::debug!(
        "Resolved {} restaurants from {} snapshot rows across {} delivery channels",
        restaurants.len(),
        fetched,
        channels.len()
    );
    Ok(restaurants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::warehouse::rows::{AreaRow, BrandRow, CompanyRow};

    #[derive(Default)]
    struct StubSource {
        brands: Vec<BrandRow>,
        restaurants: Vec<RestaurantRow>,
    }

    #[async_trait::async_trait]
    impl DimensionSource for StubSource {
        async fn company_rows(&self) -> Result<Vec<CompanyRow>, WarehouseError> {
            Ok(vec![])
        }

        async fn brand_rows(&self) -> Result<Vec<BrandRow>, WarehouseError> {
            Ok(self.brands.clone())
        }

        async fn area_rows(&self) -> Result<Vec<AreaRow>, WarehouseError> {
            Ok(vec![])
        }

        async fn restaurant_rows(&self) -> Result<Vec<RestaurantRow>, WarehouseError> {
            Ok(self.restaurants.clone())
        }
    }

    fn brand(id: i64, name: &str, channel: &str, company_id: Option<i64>) -> BrandRow {
        BrandRow {
            brand_id: id,
            brand_name: name.to_string(),
            company_id,
            channel: Some(channel.to_string()),
            status: None,
            deleted: false,
            snapshot_month: "2026-01-01".to_string(),
        }
    }

    fn restaurant(
        id: i64,
        address: &str,
        brand_id: Option<i64>,
        coords: Option<(f64, f64)>,
    ) -> RestaurantRow {
        RestaurantRow {
            address_id: id,
            street_address: address.to_string(),
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            brand_id,
            company_id: None,
            area_id: None,
            channel: None,
            deleted: false,
            snapshot_month: "2026-01-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_portal_spellings_of_one_address_fold_together() {
        let source = StubSource {
            restaurants: vec![
                restaurant(1, "C/ de Sancho de Ávila, 175", Some(100), None),
                restaurant(2, "Calle de Sancho de Ávila 175", Some(200), Some((41.4, 2.19))),
                restaurant(3, "Calle de Mozart 5, 28008 Madrid", Some(100), None),
            ],
            ..Default::default()
        };

        let restaurants = list_all(&source).await.unwrap();
        assert_eq!(restaurants.len(), 2);

        let sancho = restaurants
            .iter()
            .find(|r| r.contains_id("1"))
            .expect("sancho group");
        assert!(sancho.contains_id("2"));
        // основная строка без координат наследует их от соседа по группе
        assert!(sancho.coordinates.is_some());
    }

    #[tokio::test]
    async fn test_company_filter_expands_through_brands() {
        let source = StubSource {
            brands: vec![
                brand(100, "Goiko Grill", "glovo", Some(7)),
                brand(200, "GOIKO GRILL", "ubereats", None),
                brand(300, "Vicio", "glovo", Some(8)),
            ],
            restaurants: vec![
                restaurant(1, "Calle Mayor 10", Some(100), None),
                restaurant(2, "Gran Via 4", Some(200), None),
                restaurant(3, "Calle Alcala 90", Some(300), None),
                restaurant(4, "Calle Toledo 2", None, None),
            ],
        };

        let filter = RestaurantFilter {
            company_ids: Some(vec!["7".to_string()]),
            brand_ids: None,
        };
        let restaurants = list_filtered(&source, filter).await.unwrap();

        // портальный дубль бренда (200) проходит через allIds группы
        let ids: Vec<&str> = restaurants.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"1"));
        assert!(ids.contains(&"2"));
    }

    #[tokio::test]
    async fn test_filter_with_no_matches_yields_empty_list_not_error() {
        let source = StubSource {
            brands: vec![brand(100, "Goiko Grill", "glovo", Some(7))],
            restaurants: vec![restaurant(1, "Calle Mayor 10", Some(100), None)],
        };

        let filter = RestaurantFilter {
            company_ids: Some(vec!["999".to_string()]),
            brand_ids: None,
        };
        let restaurants = list_filtered(&source, filter).await.unwrap();
        assert!(restaurants.is_empty());
    }

    #[tokio::test]
    async fn test_brand_filter_accepts_any_portal_id_of_the_brand() {
        let source = StubSource {
            brands: vec![
                brand(100, "Goiko Grill", "glovo", Some(7)),
                brand(200, "GOIKO GRILL", "ubereats", None),
            ],
            restaurants: vec![
                restaurant(1, "Calle Mayor 10", Some(100), None),
                restaurant(2, "Gran Via 4", Some(200), None),
            ],
        };

        // фильтр по id регистрации на Uber Eats находит и строку Glovo
        let filter = RestaurantFilter {
            company_ids: None,
            brand_ids: Some(vec!["200".to_string()]),
        };
        let restaurants = list_filtered(&source, filter).await.unwrap();
        assert_eq!(restaurants.len(), 2);
    }
}
