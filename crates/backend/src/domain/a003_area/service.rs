use super::mapper;
use crate::shared::resolution::name_key::dedupe_by_name;
use crate::shared::resolution::snapshot::resolve_current;
use crate::shared::warehouse::{DimensionSource, WarehouseError};
use contracts::domain::a003_area::aggregate::Area;

/// Разрешённый список зон доставки
///
/// Зоны ведутся в одном справочнике на все порталы, без дупликации id;
/// конвейер совпадает с компаниями.
pub async fn list_all(source: &dyn DimensionSource) -> Result<Vec<Area>, WarehouseError> {
    let rows = source.area_rows().await?;
    let fetched = rows.len();

    let current = resolve_current(rows);
    let deduped = dedupe_by_name(
        current.into_values(),
        |row| row.area_name.as_str(),
        |row| row.snapshot_month.as_str(),
    );

    let mut areas: Vec<Area> = deduped
        .into_iter()
        .map(|row| {
            let id = row.area_id.to_string();
            mapper::map_area(row, vec![id])
        })
        .collect();
    areas.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    tracing::debug!("Resolved {} areas from {} snapshot rows", areas.len(), fetched);
    Ok(areas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::warehouse::rows::{AreaRow, BrandRow, CompanyRow, RestaurantRow};

    #[derive(Default)]
    struct StubSource {
        areas: Vec<AreaRow>,
    }

    #[async_trait::async_trait]
    impl DimensionSource for StubSource {
        async fn company_rows(&self) -> Result<Vec<CompanyRow>, WarehouseError> {
            Ok(vec![])
        }

        async fn brand_rows(&self) -> Result<Vec<BrandRow>, WarehouseError> {
            Ok(vec![])
        }

        async fn area_rows(&self) -> Result<Vec<AreaRow>, WarehouseError> {
            Ok(self.areas.clone())
        }

        async fn restaurant_rows(&self) -> Result<Vec<RestaurantRow>, WarehouseError> {
            Ok(vec![])
        }
    }

    fn row(id: i64, name: &str, month: &str) -> AreaRow {
        AreaRow {
            area_id: id,
            area_name: name.to_string(),
            deleted: false,
            snapshot_month: month.to_string(),
        }
    }

    #[tokio::test]
    async fn test_areas_sorted_and_deduped_by_name() {
        let source = StubSource {
            areas: vec![
                row(3, "Chamberí", "2025-12-01"),
                row(4, "CHAMBERÍ", "2026-01-01"),
                row(1, "Arganzuela", "2026-01-01"),
            ],
        };

        let areas = list_all(&source).await.unwrap();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].name, "Arganzuela");
        assert_eq!(areas[1].id, "4");
    }
}
